//! objutils core - path-based access and key projection over dynamic values
//!
//! This crate provides four operations over JSON-shaped data
//! (`serde_json::Value` and `serde_json::Map`):
//! - `get`: read a nested value by dotted path or segment list
//! - `set`: write a nested value, creating missing mapping levels
//! - `filter`: keep only the listed top-level keys
//! - `omit`: drop the listed top-level keys
//!
//! The free functions in [`ops`] are the core; [`ObjectUtils`] wraps them
//! with lifecycle logging.
//!
//! # Example
//!
//! ```
//! use objutils_core::ObjectUtils;
//! use serde_json::json;
//!
//! let mut config = json!({"server": {"port": 8080}});
//! assert_eq!(ObjectUtils::get(&config, "server.port"), Some(&json!(8080)));
//!
//! ObjectUtils::set(&mut config, "server.tls.enabled", json!(false)).unwrap();
//! assert_eq!(ObjectUtils::get(&config, "server.tls.enabled"), Some(&json!(false)));
//! ```

pub mod access;
pub mod errors;
pub mod logging_facility;
pub mod object_utils;
pub mod ops;
pub mod path;

pub use objutils_core_types::schema;

// Re-export commonly used types
pub use access::{Indexable, IndexableMut};
pub use errors::{ExError, ExErrorKind, ObjError, Result};
pub use object_utils::ObjectUtils;
pub use ops::Projection;
pub use path::Path;
