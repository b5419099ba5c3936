//! Error types for semantic version parsing, validation and comparison.

use thiserror::Error;

/// The grammar rule a malformed version string or value broke.
///
/// This is diagnostic detail only: every variant surfaces through the single
/// [`SemVerError::MalformedVersion`] kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Malformation {
    #[error("expected major.minor.patch")]
    TooFewComponents,
    #[error("empty numeric component")]
    EmptyNumber,
    #[error("numeric component contains a non-digit")]
    NonNumeric,
    #[error("numeric component has a leading zero")]
    LeadingZero,
    #[error("numeric component exceeds u64")]
    NumberOverflow,
    #[error("patch component is empty")]
    EmptyPatch,
    #[error("pre-release is empty after '-'")]
    EmptyPreRelease,
    #[error("build metadata is empty after '+'")]
    EmptyBuild,
    #[error("empty identifier")]
    EmptyIdentifier,
    #[error("invalid character {0:?} in identifier")]
    InvalidCharacter(char),
    #[error("numeric pre-release identifier has a leading zero")]
    LeadingZeroIdentifier,
}

/// Errors returned by the semver crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum SemVerError {
    /// The input violates the Semantic Versioning 2.0.0 grammar.
    #[error("malformed semver: {0}")]
    MalformedVersion(#[from] Malformation),
    /// No version was supplied where one was required.
    #[error("absent semver")]
    AbsentVersion,
}

impl SemVerError {
    /// Returns `true` for [`SemVerError::MalformedVersion`].
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedVersion(_))
    }

    /// Returns `true` for [`SemVerError::AbsentVersion`].
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::AbsentVersion)
    }

    /// The violated rule, if this is a malformed-version error.
    #[must_use]
    pub const fn malformation(&self) -> Option<Malformation> {
        match self {
            Self::MalformedVersion(reason) => Some(*reason),
            Self::AbsentVersion => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type SemVerResult<T> = Result<T, SemVerError>;
