//! Grammar shared by the parser and the validator.
//!
//! Both numeric core components and suffix identifiers are checked here and
//! nowhere else, so parsing and validation cannot drift apart.

use std::cmp::Ordering;

use crate::error::Malformation;

/// The suffix an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Suffix {
    PreRelease,
    Build,
}

/// Returns `true` if `ident` is non-empty and made only of ASCII digits.
#[inline]
pub(crate) fn is_numeric(ident: &str) -> bool {
    !ident.is_empty() && ident.bytes().all(|b| b.is_ascii_digit())
}

#[inline]
fn has_leading_zero(digits: &str) -> bool {
    digits.len() > 1 && digits.starts_with('0')
}

/// Parses a major, minor or patch component.
///
/// Accepts `"0"` or a run of digits not starting with `'0'`. Signs,
/// whitespace and values above `u64::MAX` are rejected.
pub(crate) fn parse_numeric_component(s: &str) -> Result<u64, Malformation> {
    if s.is_empty() {
        return Err(Malformation::EmptyNumber);
    }
    if !is_numeric(s) {
        return Err(Malformation::NonNumeric);
    }
    if has_leading_zero(s) {
        return Err(Malformation::LeadingZero);
    }
    s.parse::<u64>().map_err(|_| Malformation::NumberOverflow)
}

/// Checks a single dot-separated identifier.
pub(crate) fn validate_identifier(ident: &str, suffix: Suffix) -> Result<(), Malformation> {
    if ident.is_empty() {
        return Err(Malformation::EmptyIdentifier);
    }
    if let Some(c) = ident
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-'))
    {
        return Err(Malformation::InvalidCharacter(c));
    }
    // Build metadata may carry leading zeros ("+007").
    if suffix == Suffix::PreRelease && is_numeric(ident) && has_leading_zero(ident) {
        return Err(Malformation::LeadingZeroIdentifier);
    }
    Ok(())
}

/// Checks every identifier of a raw suffix string. An empty string is an
/// absent suffix and always passes.
pub(crate) fn validate_suffix(raw: &str, suffix: Suffix) -> Result<(), Malformation> {
    if raw.is_empty() {
        return Ok(());
    }
    raw.split('.')
        .try_for_each(|ident| validate_identifier(ident, suffix))
}

/// A pre-release identifier classified for precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Identifier<'a> {
    Numeric(&'a str),
    Alphanumeric(&'a str),
}

impl<'a> Identifier<'a> {
    pub(crate) fn classify(ident: &'a str) -> Self {
        if is_numeric(ident) {
            Self::Numeric(ident)
        } else {
            Self::Alphanumeric(ident)
        }
    }
}

impl PartialOrd for Identifier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // No leading zeros, so digit count orders magnitude first.
            (Self::Numeric(a), Self::Numeric(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Self::Numeric(_), Self::Alphanumeric(_)) => Ordering::Less,
            (Self::Alphanumeric(_), Self::Numeric(_)) => Ordering::Greater,
            (Self::Alphanumeric(a), Self::Alphanumeric(b)) => a.as_bytes().cmp(b.as_bytes()),
        }
    }
}
