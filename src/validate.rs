//! Token and limit validation
//!
//! Pure functions run before any network or filesystem work.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::InputError;

/// Classic (`ghp_`) or fine-grained (`github_pat_`) personal access token
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:ghp_[A-Za-z0-9_]{36}|github_pat_[A-Za-z0-9_]{22}_[A-Za-z0-9]{59})$")
        .expect("token pattern is valid")
});

/// Optional sign and the run of digits a limit starts with
static LEADING_INTEGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?)([0-9]+)").expect("leading integer pattern is valid")
});

/// Check whether `token` has the shape of a GitHub personal access token.
///
/// No network call is made; this only guards against obvious typos.
pub fn is_valid_token(token: &str) -> bool {
    TOKEN_PATTERN.is_match(token)
}

/// A validated listing size: positive and never above the ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Limit(u32);

impl Limit {
    /// Clamp an already-positive request to `ceiling`.
    pub fn clamped(requested: u64, ceiling: u32) -> Self {
        let ceiling = ceiling.max(1);
        Self(requested.clamp(1, u64::from(ceiling)) as u32)
    }

    /// The number of repositories to request
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a requested limit from its leading base-10 integer.
///
/// Anything after the leading digits is ignored, so `"10abc"` is 10 and
/// `"1.5"` is 1. Input without leading digits, or whose value is not
/// positive, is rejected. Digit runs too large for `u64` saturate; the
/// ceiling clamps them anyway.
pub fn parse_limit(raw: &str) -> Result<u64, InputError> {
    let invalid = || InputError::InvalidLimit(raw.to_string());
    let captures = LEADING_INTEGER.captures(raw).ok_or_else(invalid)?;

    // Only digits were captured, so overflow is the sole parse failure
    let value = captures[2].parse::<u64>().unwrap_or(u64::MAX);
    if &captures[1] == "-" || value == 0 {
        return Err(invalid());
    }
    Ok(value)
}

/// Validate a requested limit and clamp it to `ceiling`.
pub fn validate_limit(raw: &str, ceiling: u32) -> Result<Limit, InputError> {
    parse_limit(raw).map(|requested| Limit::clamped(requested, ceiling))
}
