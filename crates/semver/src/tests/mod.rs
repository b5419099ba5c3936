//! Property-based tests over generated valid versions.


use proptest::prelude::*;

use crate::Version;

/// A valid pre-release identifier: numeric without leading zeros, or
/// alphanumeric with at least one non-digit.
pub(crate) fn pre_release_identifier() -> impl Strategy<Value = String> {
    prop_oneof![
        "0|[1-9][0-9]{0,3}",
        "[0-9A-Za-z-]{0,3}[A-Za-z-][0-9A-Za-z-]{0,3}",
        Just("alpha".to_string()),
        Just("beta".to_string()),
        Just("rc".to_string()),
    ]
}

/// A valid build identifier; leading zeros allowed.
pub(crate) fn build_identifier() -> impl Strategy<Value = String> {
    "[0-9A-Za-z-]{1,6}"
}

fn dotted(ident: impl Strategy<Value = String>, max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(ident, 0..max).prop_map(|parts| parts.join("."))
}

/// Valid versions over a small numeric range so that equal cores, and so
/// pre-release ties, come up often.
pub(crate) fn valid_version() -> impl Strategy<Value = Version> {
    (
        0u64..3,
        0u64..3,
        0u64..3,
        dotted(pre_release_identifier(), 4),
        dotted(build_identifier(), 3),
    )
        .prop_map(|(major, minor, patch, pre_release, build)| {
            Version::from_parts(major, minor, patch, pre_release, build)
        })
}
