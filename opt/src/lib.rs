//! # opt — explicit optional values
//!
//! [`Opt<T>`] makes "this value may be missing" part of a type signature
//! instead of a null pointer or a zero value that callers have to know
//! about. Every way of reading the payload states what happens when it
//! is absent:
//!
//! | Operation | When absent |
//! |-----------|-------------|
//! | [`Opt::unwrap`] | `T::default()` |
//! | [`Opt::unwrap_as_ref`] | `None` |
//! | [`Opt::take`] | [`OptError::NoneValueTaken`] |
//! | [`Opt::take_or`] / [`Opt::take_or_else`] | the fallback |
//! | [`Opt::or`] / [`Opt::or_else`] | the fallback `Opt` |
//!
//! ## Serialization
//!
//! `Opt<T>` implements serde's `Serialize` and `Deserialize`, so it can be
//! used as a field of any derived struct. `None` is written as the
//! format's null and read back from either a null or a missing field.
//! The `json` and `yaml` features (both on by default) add byte- and
//! node-level entry points on top of `serde_json` and `serde_yaml`.

#![deny(missing_docs)]

mod codec;
pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod option;
#[cfg(feature = "yaml")]
pub mod yaml;

pub use error::OptError;
pub use option::{Opt, none, some};
