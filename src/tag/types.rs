//! Tag name validation and comparison policies.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// One or more characters; lowercase letters, digits, `_`, `:` and `-`;
/// starting and ending with a letter or digit.
#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static TAG_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A[a-z0-9](?:[a-z0-9_:-]*[a-z0-9])?\z")
        .expect("TAG_NAME_REGEX is a valid regex literal")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "{0:?} is not a valid tag name. Tag must be one or more characters; can include \
     lowercase letters, numbers, colons, hyphens, and underscores; and must begin and \
     end with a letter or number"
)]
pub struct TagNameError(pub String);

/// Validate a tag name before it is sent to the remote.
///
/// The remote accepts uppercase letters and silently lowercases them, which
/// would leave the declared name permanently different from the stored one.
pub fn validate_tag_name(name: &str) -> Result<(), TagNameError> {
    if TAG_NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(TagNameError(name.to_string()))
    }
}

/// How a wanted tag name is compared against names in a remote listing.
///
/// Managed resources match exactly; the read-only lookup matches
/// case-insensitively, mirroring the remote's own uniqueness rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    Exact,
    CaseInsensitive,
}

impl MatchPolicy {
    #[must_use]
    pub fn matches(self, candidate: &str, wanted: &str) -> bool {
        match self {
            Self::Exact => candidate == wanted,
            Self::CaseInsensitive => candidate.to_lowercase() == wanted.to_lowercase(),
        }
    }
}
