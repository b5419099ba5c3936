//! Structural checks for directly constructed [`Version`] values.

use crate::error::{SemVerError, SemVerResult};
use crate::identifier::{validate_suffix, Suffix};
use crate::version::Version;

/// Checks `version` against the Semantic Versioning 2.0.0 rules, stopping at
/// the first failure: pre-release identifiers, then build identifiers.
///
/// The numeric components are unsigned, so the non-negativity rule holds for
/// every value and needs no runtime check.
///
/// # Errors
///
/// Returns `SemVerError::MalformedVersion` naming the broken rule.
pub fn validate(version: &Version) -> SemVerResult<()> {
    validate_suffix(&version.pre_release, Suffix::PreRelease)?;
    validate_suffix(&version.build, Suffix::Build)?;
    Ok(())
}

/// Returns `true` if [`validate`] succeeds.
#[inline]
#[must_use]
pub fn is_valid(version: &Version) -> bool {
    validate(version).is_ok()
}

/// Validates an optional reference, reporting `None` as absent.
///
/// # Errors
///
/// Returns `SemVerError::AbsentVersion` for `None` and
/// `SemVerError::MalformedVersion` for an invalid value.
pub fn validate_optional(version: Option<&Version>) -> SemVerResult<&Version> {
    let version = version.ok_or(SemVerError::AbsentVersion)?;
    validate(version)?;
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Malformation;

    #[test]
    fn test_valid_values() {
        assert!(is_valid(&Version::default()));
        assert!(is_valid(&Version::new(u64::MAX, 0, 1)));
        assert!(is_valid(&Version::from_parts(1, 0, 0, "alpha.0.x-y", "007.sha")));
    }

    #[test]
    fn test_invalid_pre_release() {
        let cases = [
            ("01", Malformation::LeadingZeroIdentifier),
            ("alpha..1", Malformation::EmptyIdentifier),
            (".", Malformation::EmptyIdentifier),
            ("alpha+1", Malformation::InvalidCharacter('+')),
            ("ünï", Malformation::InvalidCharacter('ü')),
        ];
        for (pre_release, expected) in cases {
            let v = Version::from_parts(1, 0, 0, pre_release, "");
            assert_eq!(validate(&v), Err(SemVerError::MalformedVersion(expected)));
            assert!(!is_valid(&v));
        }
    }

    #[test]
    fn test_invalid_build() {
        let v = Version::from_parts(1, 0, 0, "", "build.");
        assert_eq!(
            validate(&v),
            Err(SemVerError::MalformedVersion(Malformation::EmptyIdentifier))
        );
        let v = Version::from_parts(1, 0, 0, "", "b/1");
        assert_eq!(
            validate(&v),
            Err(SemVerError::MalformedVersion(Malformation::InvalidCharacter('/')))
        );
    }

    #[test]
    fn test_pre_release_checked_before_build() {
        let v = Version::from_parts(1, 0, 0, "01", "_");
        assert_eq!(
            validate(&v),
            Err(SemVerError::MalformedVersion(
                Malformation::LeadingZeroIdentifier
            ))
        );
    }

    #[test]
    fn test_validate_optional() {
        let v = Version::new(1, 2, 3);
        assert_eq!(validate_optional(Some(&v)), Ok(&v));
        assert_eq!(validate_optional(None), Err(SemVerError::AbsentVersion));

        let bad = Version::from_parts(1, 2, 3, "", "..");
        assert!(validate_optional(Some(&bad)).unwrap_err().is_malformed());
    }
}
