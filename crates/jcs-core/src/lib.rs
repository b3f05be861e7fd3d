//! # jcs-core
//!
//! Encoder for the **JSON Canonicalization Scheme** (JCS, [RFC 8785]): a
//! deterministic, byte-exact serialization of JSON values. Semantically equal
//! documents always canonicalize to identical bytes, which makes the output
//! safe to hash, sign, or diff.
//!
//! The work happens in three places: ECMAScript number formatting (shortest
//! round-trip digits, laid out by the ECMA-262 `Number::toString` rules),
//! minimal string escaping with raw UTF-8 pass-through, and object member
//! ordering by UTF-16 code units. Everything else is plumbing.
//!
//! [RFC 8785]: https://www.rfc-editor.org/rfc/rfc8785
//!
//! ## Quick start
//!
//! ```rust
//! use jcs_core::{to_vec, Value};
//!
//! let doc = Value::Object(vec![
//!     ("b".to_string(), Value::Integer(2)),
//!     ("a".to_string(), Value::Integer(1)),
//! ]);
//! assert_eq!(to_vec(&doc).unwrap(), br#"{"a":1,"b":2}"#);
//! ```
//!
//! Existing `serde_json` trees convert across the boundary with `TryFrom`:
//!
//! ```rust
//! use jcs_core::{to_vec, Value};
//!
//! let json: serde_json::Value = serde_json::from_str(r#"{"y":0.1, "x":[true, null]}"#).unwrap();
//! let value = Value::try_from(&json).unwrap();
//! assert_eq!(to_vec(&value).unwrap(), br#"{"x":[true,null],"y":0.1}"#);
//! ```
//!
//! ## Modules
//!
//! - [`encoder`] — recursive dispatch, `to_vec` / `to_writer` entry points
//! - [`number`] — canonical integer and double formatting
//! - [`escape`] — JSON string escaping
//! - [`order`] — UTF-16 key comparator for object members
//! - [`types`] — the `Value` tree and the `serde_json` conversion boundary
//! - [`error`] — error types

pub mod encoder;
pub mod error;
pub mod escape;
pub mod number;
pub mod order;
pub mod types;

pub use encoder::{to_vec, to_writer};
pub use error::{CanonicalizationError, Result};
pub use types::Value;
