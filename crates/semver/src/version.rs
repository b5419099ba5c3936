//! Implementation of `Version`, a Semantic Versioning 2.0.0 value.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::comparator;
use crate::error::{SemVerError, SemVerResult};
use crate::parser;
use crate::validator;

/// A semantic version: `major.minor.patch[-pre_release][+build]`.
///
/// Values are immutable. Suffixes are kept as the raw strings they were
/// parsed from, so rendering reproduces the input exactly; an empty suffix
/// string means the suffix is absent.
///
/// `PartialEq`, `Eq` and `Hash` are structural and include build metadata.
/// Precedence ignores build metadata and is only defined for valid values,
/// which is why `Version` has no `Ord` impl; use [`Version::compare`] or
/// [`crate::sort`] instead.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Version {
    pub(crate) major: u64,
    pub(crate) minor: u64,
    pub(crate) patch: u64,
    pub(crate) pre_release: String,
    pub(crate) build: String,
}

impl Version {
    /// Creates a release version with no pre-release or build suffix.
    #[inline]
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: String::new(),
            build: String::new(),
        }
    }

    /// Creates a version from explicit fields without checking them.
    ///
    /// Empty `pre_release`/`build` strings mean the suffix is absent. The
    /// caller is responsible for validity; see [`Version::validate`].
    #[must_use]
    pub fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: impl Into<String>,
        build: impl Into<String>,
    ) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: pre_release.into(),
            build: build.into(),
        }
    }

    /// Returns a copy of this version carrying `pre_release` instead.
    #[must_use]
    pub fn with_pre_release(self, pre_release: impl Into<String>) -> Self {
        Self {
            pre_release: pre_release.into(),
            ..self
        }
    }

    /// Returns a copy of this version carrying `build` metadata instead.
    #[must_use]
    pub fn with_build(self, build: impl Into<String>) -> Self {
        Self {
            build: build.into(),
            ..self
        }
    }

    /// Parses a version string.
    ///
    /// # Errors
    ///
    /// Returns `SemVerError::MalformedVersion` if `s` is not a valid
    /// Semantic Versioning 2.0.0 string.
    ///
    /// # Example
    /// ```
    /// use semver_core::Version;
    /// let v = Version::parse("1.0.0-rc.1+build.5").unwrap();
    /// assert_eq!(v.pre_release(), Some("rc.1"));
    /// assert_eq!(v.build(), Some("build.5"));
    /// ```
    #[inline]
    pub fn parse(s: &str) -> SemVerResult<Self> {
        parser::parse(s)
    }

    /// Parses a version string known to be valid, such as a literal.
    ///
    /// # Panics
    ///
    /// Panics if `s` is malformed.
    #[must_use]
    pub fn parse_must(s: &str) -> Self {
        match parser::parse(s) {
            Ok(version) => version,
            Err(err) => panic!("invalid semver literal {s:?}: {err}"),
        }
    }

    /// The major version number.
    #[inline]
    #[must_use]
    pub const fn major(&self) -> u64 {
        self.major
    }

    /// The minor version number.
    #[inline]
    #[must_use]
    pub const fn minor(&self) -> u64 {
        self.minor
    }

    /// The patch version number.
    #[inline]
    #[must_use]
    pub const fn patch(&self) -> u64 {
        self.patch
    }

    /// The raw pre-release suffix without the leading `-`.
    #[inline]
    #[must_use]
    pub fn pre_release(&self) -> Option<&str> {
        non_empty(&self.pre_release)
    }

    /// The raw build metadata without the leading `+`.
    #[inline]
    #[must_use]
    pub fn build(&self) -> Option<&str> {
        non_empty(&self.build)
    }

    /// Returns `true` if this version carries a pre-release suffix.
    #[inline]
    #[must_use]
    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Iterates over the dot-separated pre-release identifiers.
    pub fn pre_release_identifiers(&self) -> impl Iterator<Item = &str> + '_ {
        identifiers(&self.pre_release)
    }

    /// Iterates over the dot-separated build identifiers.
    pub fn build_identifiers(&self) -> impl Iterator<Item = &str> + '_ {
        identifiers(&self.build)
    }

    /// Checks this version against the Semantic Versioning 2.0.0 rules.
    ///
    /// # Errors
    ///
    /// Returns `SemVerError::MalformedVersion` naming the first rule broken.
    #[inline]
    pub fn validate(&self) -> SemVerResult<()> {
        validator::validate(self)
    }

    /// Returns `true` if [`Version::validate`] succeeds.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        validator::is_valid(self)
    }

    /// Compares precedence with `other`; build metadata is ignored.
    ///
    /// # Errors
    ///
    /// Returns `SemVerError::MalformedVersion` if either version is invalid.
    #[inline]
    pub fn compare(&self, other: &Self) -> SemVerResult<Ordering> {
        comparator::compare(self, other)
    }
}

#[inline]
fn non_empty(raw: &str) -> Option<&str> {
    (!raw.is_empty()).then_some(raw)
}

fn identifiers(raw: &str) -> impl Iterator<Item = &str> + '_ {
    non_empty(raw).into_iter().flat_map(|s| s.split('.'))
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Version({self})")
    }
}

impl FromStr for Version {
    type Err = SemVerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = SemVerError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parser::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = SemVerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        parser::parse(&s)
    }
}
