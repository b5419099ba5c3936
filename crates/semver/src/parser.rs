//! Text to [`Version`] conversion.
//!
//! The input is split on the first two dots only. The third piece holds the
//! patch number followed by an optional suffix introduced by whichever of
//! `-` or `+` appears first; any later `-` or `+` belongs to the suffix.

use tracing::debug;

use crate::error::{Malformation, SemVerError, SemVerResult};
use crate::identifier::{parse_numeric_component, validate_suffix, Suffix};
use crate::version::Version;

/// Parses a Semantic Versioning 2.0.0 string.
///
/// # Errors
///
/// Returns `SemVerError::MalformedVersion` describing the first grammar rule
/// the input breaks. The empty string is malformed, not absent.
pub fn parse(input: &str) -> SemVerResult<Version> {
    parse_version(input).map_err(|reason| {
        debug!(input, %reason, "rejected malformed semver");
        SemVerError::MalformedVersion(reason)
    })
}

fn parse_version(input: &str) -> Result<Version, Malformation> {
    let mut pieces = input.splitn(3, '.');
    let (Some(major), Some(minor), Some(rest)) = (pieces.next(), pieces.next(), pieces.next())
    else {
        return Err(Malformation::TooFewComponents);
    };

    let major = parse_numeric_component(major)?;
    let minor = parse_numeric_component(minor)?;

    let (patch, pre_release, build) = split_suffixes(rest)?;
    let patch = parse_numeric_component(patch)?;

    validate_suffix(pre_release, Suffix::PreRelease)?;
    validate_suffix(build, Suffix::Build)?;

    Ok(Version::from_parts(major, minor, patch, pre_release, build))
}

/// Splits `patch[-pre_release][+build]` into its three raw parts.
fn split_suffixes(piece: &str) -> Result<(&str, &str, &str), Malformation> {
    let Some(boundary) = piece.find(|c| c == '-' || c == '+') else {
        return Ok((piece, "", ""));
    };
    if boundary == 0 {
        return Err(Malformation::EmptyPatch);
    }

    let patch = &piece[..boundary];
    let suffix = &piece[boundary + 1..];

    if piece.as_bytes()[boundary] == b'+' {
        if suffix.is_empty() {
            return Err(Malformation::EmptyBuild);
        }
        return Ok((patch, "", suffix));
    }

    let (pre_release, build) = match suffix.split_once('+') {
        Some((pre_release, build)) => (pre_release, Some(build)),
        None => (suffix, None),
    };
    if pre_release.is_empty() {
        return Err(Malformation::EmptyPreRelease);
    }
    match build {
        Some("") => Err(Malformation::EmptyBuild),
        Some(build) => Ok((patch, pre_release, build)),
        None => Ok((patch, pre_release, "")),
    }
}
