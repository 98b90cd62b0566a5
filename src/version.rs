//! # Version Module
//!
//! Validation for the release version argument. A release version must have
//! the exact shape `v<major>.<minor>.<patch>`, and validation happens before
//! any file is read or written so that a typo never leaves artifacts behind.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// Pattern a release version must match, anchored on both ends.
static VERSION_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^v\d+\.\d+\.\d+$").expect("version regex must compile"));

/// A validated release version string of the form `v<major>.<minor>.<patch>`.
///
/// Construction goes through [`FromStr`], which rejects anything that does
/// not match the pattern exactly. Once constructed, the inner string is
/// embedded verbatim in the banner metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version(String);

/// Error returned when a version argument does not match
/// `v<major>.<minor>.<patch>`.
#[derive(Debug, thiserror::Error)]
#[error("invalid version format: expected v<major>.<minor>.<patch>, got `{0}`")]
pub struct ParseVersionError(String);

impl FromStr for Version {
  type Err = ParseVersionError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if VERSION_REGEX.is_match(s) {
      Ok(Self(s.to_string()))
    } else {
      Err(ParseVersionError(s.to_string()))
    }
  }
}

impl Version {
  /// Returns the validated version string.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for Version {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
