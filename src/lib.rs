//! # semver-rs: Semantic Versioning 2.0.0 for Rust
//!
//! Parse, validate, render and order version identifiers as defined by
//! [semver.org](https://semver.org).
//!
//! ## Quick Start
//!
//! ```rust
//! use semver_rs::prelude::*;
//!
//! let mut releases: Vec<Version> = ["1.0.0", "1.0.0-beta.11", "1.0.0-beta.2"]
//!     .iter()
//!     .map(|s| s.parse())
//!     .collect::<SemVerResult<_>>()
//!     .unwrap();
//!
//! sort(&mut releases).unwrap();
//! assert_eq!(releases[0].to_string(), "1.0.0-beta.2");
//! assert!(less_than(&releases[1], &releases[2]));
//! ```
//!
//! ## Architecture
//!
//! The workspace is organized as:
//!
//! - [`semver_core`] - `Version`, parser, validator and comparator
//!
//! ## Features
//!
//! - `serde` (default): `Version` (de)serializes as its canonical string so
//!   it can live in TOML or JSON configuration.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use semver_core;

pub use semver_core::{
    compare, compare_optional, equal_to, is_valid, less_than, max_of, more_than, parse, sort,
    validate, validate_optional, Malformation, SemVerError, SemVerResult, Version,
};

/// Common imports for working with versions
pub mod prelude {
    pub use semver_core::{
        compare, equal_to, less_than, more_than, parse, sort, Malformation, SemVerError,
        SemVerResult, Version,
    };
}
