//! JSON entry points for [`Opt`].
//!
//! `None` encodes as the `null` literal and `Some(v)` as the plain JSON
//! encoding of `v`. On decode, `null` and zero-length input both yield
//! `None`. Errors are `serde_json`'s own and are never wrapped.
//!
//! Struct fields of type `Opt<T>` need nothing beyond the serde derive:
//!
//! ```
//! use opt::Opt;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Record {
//!     val: Opt<i32>,
//! }
//!
//! let json = serde_json::to_string(&Record { val: Opt::some(123) }).unwrap();
//! assert_eq!(json, r#"{"val":123}"#);
//!
//! let back: Record = serde_json::from_str("{}").unwrap();
//! assert_eq!(back, Record { val: Opt::none() });
//! ```

use crate::option::Opt;
use serde::Serialize;
use serde::de::DeserializeOwned;

const NULL: &[u8] = b"null";

impl<T: Serialize> Opt<T> {
    /// Encode as JSON bytes.
    pub fn marshal_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        match self.as_option() {
            Some(value) => serde_json::to_vec(value),
            None => Ok(NULL.to_vec()),
        }
    }
}

impl<T: DeserializeOwned> Opt<T> {
    /// Decode `data` into `self`, replacing whatever it held.
    ///
    /// On error `self` is left as `None`.
    ///
    /// ```
    /// use opt::Opt;
    ///
    /// let mut slot = Opt::some(1);
    /// slot.unmarshal_json(b"42").unwrap();
    /// assert_eq!(slot, Opt::some(42));
    ///
    /// slot.unmarshal_json(b"").unwrap();
    /// assert!(slot.is_none());
    /// ```
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<(), serde_json::Error> {
        if data.is_empty() || data == NULL {
            tracing::trace!(len = data.len(), "json input decoded as none");
            *self = Opt::none();
            return Ok(());
        }
        match serde_json::from_slice::<Opt<T>>(data) {
            Ok(decoded) => {
                *self = decoded;
                Ok(())
            }
            Err(err) => {
                tracing::debug!(error = %err, "json payload decode failed");
                *self = Opt::none();
                Err(err)
            }
        }
    }
}
