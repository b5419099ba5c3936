//! # Semver Core
//!
//! Semantic Versioning 2.0.0 values for the semver-rs workspace.
//!
//! This crate provides:
//! - `Version`: immutable `major.minor.patch[-pre_release][+build]` value
//! - Parser: text to `Version`, bit-exact with the semver.org grammar
//! - Validator: structural checks for directly constructed values
//! - Comparator: the semver.org precedence order (build metadata ignored)
//!
//! ## Design Principles
//!
//! - **Failure-transparent**: every fallible operation returns `SemVerResult`;
//!   the panicking helpers (`Version::parse_must`, `less_than`, `equal_to`,
//!   `more_than`) are for call sites where invalid input is a bug
//! - **One grammar**: parser and validator share the identifier rules
//! - **Pure**: no I/O, no shared state; values are `Send + Sync`
//!
//! ## Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use semver_core::Version;
//!
//! let rc = Version::parse("1.0.0-rc.1").unwrap();
//! let release = Version::parse("1.0.0+build.7").unwrap();
//! assert_eq!(rc.compare(&release).unwrap(), Ordering::Less);
//! assert_eq!(release.to_string(), "1.0.0+build.7");
//! ```

pub mod comparator;
pub mod error;
mod identifier;
pub mod parser;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod validator;
pub mod version;

#[cfg(test)]
mod tests;

// Re-exports
pub use comparator::{compare, compare_optional, equal_to, less_than, max_of, more_than, sort};
pub use error::{Malformation, SemVerError, SemVerResult};
pub use parser::parse;
pub use validator::{is_valid, validate, validate_optional};
pub use version::Version;
