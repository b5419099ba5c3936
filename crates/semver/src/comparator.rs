//! Precedence ordering between versions (semver.org, item 11).
//!
//! Major, minor and patch compare numerically. A release outranks any
//! pre-release of the same core; two pre-releases compare identifier by
//! identifier, numeric below alphanumeric, and a shorter run of equal
//! identifiers ranks lower. Build metadata never takes part.

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{SemVerError, SemVerResult};
use crate::identifier::Identifier;
use crate::validator::validate;
use crate::version::Version;

/// Compares the precedence of two versions.
///
/// # Errors
///
/// Returns `SemVerError::MalformedVersion` if either operand is invalid; no
/// partial comparison is attempted.
pub fn compare(a: &Version, b: &Version) -> SemVerResult<Ordering> {
    for version in [a, b] {
        if let Err(err) = validate(version) {
            debug!(%version, %err, "refusing to compare malformed semver");
            return Err(err);
        }
    }
    Ok(precedence(a, b))
}

/// Like [`compare`], but reports a missing operand as
/// `SemVerError::AbsentVersion`.
///
/// # Errors
///
/// `AbsentVersion` if either operand is `None`, otherwise as [`compare`].
pub fn compare_optional(a: Option<&Version>, b: Option<&Version>) -> SemVerResult<Ordering> {
    match (a, b) {
        (Some(a), Some(b)) => compare(a, b),
        _ => Err(SemVerError::AbsentVersion),
    }
}

/// Returns `true` if `a` has lower precedence than `b`.
///
/// # Panics
///
/// Panics if either version is invalid. Validate untrusted values first or
/// use [`compare`].
#[must_use]
pub fn less_than(a: &Version, b: &Version) -> bool {
    expect_ordering(a, b) == Ordering::Less
}

/// Returns `true` if `a` and `b` have equal precedence.
///
/// # Panics
///
/// Panics if either version is invalid.
#[must_use]
pub fn equal_to(a: &Version, b: &Version) -> bool {
    expect_ordering(a, b) == Ordering::Equal
}

/// Returns `true` if `a` has higher precedence than `b`.
///
/// # Panics
///
/// Panics if either version is invalid.
#[must_use]
pub fn more_than(a: &Version, b: &Version) -> bool {
    expect_ordering(a, b) == Ordering::Greater
}

fn expect_ordering(a: &Version, b: &Version) -> Ordering {
    match compare(a, b) {
        Ok(ordering) => ordering,
        Err(err) => panic!("cannot compare {a} with {b}: {err}"),
    }
}

/// Sorts `versions` by ascending precedence. The sort is stable, so versions
/// differing only in build metadata keep their relative order.
///
/// # Errors
///
/// Returns `SemVerError::MalformedVersion` if any element is invalid; the
/// slice is left untouched in that case.
pub fn sort(versions: &mut [Version]) -> SemVerResult<()> {
    versions.iter().try_for_each(validate)?;
    versions.sort_by(precedence);
    Ok(())
}

/// Returns the highest-precedence version, the first one on ties, or `None`
/// for an empty input.
///
/// # Errors
///
/// Returns `SemVerError::MalformedVersion` on the first invalid element.
pub fn max_of<'a, I>(versions: I) -> SemVerResult<Option<&'a Version>>
where
    I: IntoIterator<Item = &'a Version>,
{
    let mut highest: Option<&Version> = None;
    for version in versions {
        validate(version)?;
        if highest.map_or(true, |current| precedence(version, current) == Ordering::Greater) {
            highest = Some(version);
        }
    }
    Ok(highest)
}

/// Precedence of two already validated versions.
pub(crate) fn precedence(a: &Version, b: &Version) -> Ordering {
    a.major
        .cmp(&b.major)
        .then(a.minor.cmp(&b.minor))
        .then(a.patch.cmp(&b.patch))
        .then_with(|| compare_pre_release(&a.pre_release, &b.pre_release))
}

fn compare_pre_release(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a
            .split('.')
            .map(Identifier::classify)
            .cmp(b.split('.').map(Identifier::classify)),
    }
}
