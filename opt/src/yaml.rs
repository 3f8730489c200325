//! YAML entry points for [`Opt`].
//!
//! Encoding works on [`serde_yaml::Value`] nodes: `None` becomes
//! [`Value::Null`] and `Some(v)` the node encoding of `v`. Rendered as
//! text, a `None` field reads `val: null`.
//!
//! Decoding a null node yields `None`, matching the JSON adapter. Every
//! other node is decoded as `T` and errors are passed through unchanged.

use crate::option::Opt;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_yaml::Value;

impl<T: Serialize> Opt<T> {
    /// Encode as a YAML node.
    ///
    /// ```
    /// use opt::Opt;
    /// use serde_yaml::Value;
    ///
    /// assert_eq!(Opt::some(123).marshal_yaml().unwrap(), Value::from(123));
    /// assert_eq!(Opt::<i32>::none().marshal_yaml().unwrap(), Value::Null);
    /// ```
    pub fn marshal_yaml(&self) -> Result<Value, serde_yaml::Error> {
        match self.as_option() {
            Some(value) => serde_yaml::to_value(value),
            None => Ok(Value::Null),
        }
    }
}

impl<T: DeserializeOwned> Opt<T> {
    /// Decode `node` into `self`, replacing whatever it held.
    ///
    /// On error `self` is left as `None`.
    pub fn unmarshal_yaml(&mut self, node: Value) -> Result<(), serde_yaml::Error> {
        if node.is_null() {
            tracing::trace!("yaml null node decoded as none");
            *self = Opt::none();
            return Ok(());
        }
        match serde_yaml::from_value::<T>(node) {
            Ok(value) => {
                *self = Opt::some(value);
                Ok(())
            }
            Err(err) => {
                tracing::debug!(error = %err, "yaml payload decode failed");
                *self = Opt::none();
                Err(err)
            }
        }
    }
}
