//! # Strip Module
//!
//! Text transformations applied to each header before it is merged:
//! removing the file's own leading license comment and, optionally, excising
//! a self-referential include directive that only matters when the header is
//! compiled standalone.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Token that closes the leading license comment of every header.
pub const CLOSE_COMMENT: &str = "*/";

/// Error for a header whose leading license comment never closes.
///
/// A header without the delimiter would otherwise be merged whole, license
/// text included, so the run aborts instead.
#[derive(Debug, thiserror::Error)]
#[error("malformed header {}: no closing `*/` for the leading license comment", path.display())]
pub struct MalformedHeader {
  /// Path of the offending header file.
  pub path: PathBuf,
}

/// Drops a header's own leading license comment.
///
/// The split happens at the first `*/` in the file; everything up to and
/// including the delimiter is discarded.
///
/// # Errors
///
/// Returns [`MalformedHeader`] when the delimiter is absent.
pub fn strip_license_header<'a>(content: &'a str, path: &Path) -> Result<&'a str, MalformedHeader> {
  match content.split_once(CLOSE_COMMENT) {
    Some((_, rest)) => Ok(rest),
    None => Err(MalformedHeader {
      path: path.to_path_buf(),
    }),
  }
}

/// Builds the exact marker excised by [`excise_self_include`]: the include
/// directive for `file_name` followed by the blank line that separates it
/// from the rest of the header.
pub fn self_include_marker(file_name: &str) -> String {
  format!("#include \"{file_name}\"\n\n")
}

/// Removes the first occurrence of `marker` from a header body.
///
/// Headers include their shared definitions file so they compile standalone;
/// in the amalgamated output that directive would point at a file that no
/// longer exists, so the line and its trailing blank line are dropped.
/// Bodies without the marker pass through unchanged (and unallocated).
pub fn excise_self_include<'a>(body: &'a str, marker: &str) -> Cow<'a, str> {
  match body.split_once(marker) {
    Some((before, after)) => Cow::Owned(format!("{before}{after}")),
    None => Cow::Borrowed(body),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_strip_license_header_keeps_everything_after_delimiter() {
    let content = "/* license text */\nint x;\n";
    let body = strip_license_header(content, Path::new("a.h")).expect("well-formed header");
    assert_eq!(body, "\nint x;\n");
  }

  #[test]
  fn test_strip_license_header_splits_on_first_delimiter_only() {
    let content = "/* one */\n/* two */\nint x;\n";
    let body = strip_license_header(content, Path::new("a.h")).expect("well-formed header");
    assert_eq!(body, "\n/* two */\nint x;\n");
  }

  #[test]
  fn test_strip_license_header_rejects_missing_delimiter() {
    let err = strip_license_header("int x;\n", Path::new("src/include/a.h")).expect_err("malformed header");
    assert_eq!(err.path, Path::new("src/include/a.h"));
    assert!(err.to_string().contains("src/include/a.h"));
  }

  #[test]
  fn test_excise_self_include_removes_marker_and_blank_line() {
    let marker = self_include_marker("_defs.h");
    let body = "#include \"_defs.h\"\n\nint x;\n";

    assert_eq!(excise_self_include(body, &marker), "int x;\n");
  }

  #[test]
  fn test_excise_self_include_keeps_surrounding_content() {
    let marker = self_include_marker("_defs.h");
    let body = "#include <stdlib.h>\n#include \"_defs.h\"\n\nint x;\n";

    assert_eq!(excise_self_include(body, &marker), "#include <stdlib.h>\nint x;\n");
  }

  #[test]
  fn test_excise_self_include_without_marker_is_borrowed_passthrough() {
    let marker = self_include_marker("_defs.h");
    let body = "int x;\n";

    let result = excise_self_include(body, &marker);
    assert!(matches!(result, Cow::Borrowed(_)));
    assert_eq!(result, "int x;\n");
  }

  #[test]
  fn test_excise_self_include_requires_trailing_blank_line() {
    // The directive alone, without the blank line, is not the marker.
    let marker = self_include_marker("_defs.h");
    let body = "#include \"_defs.h\"\nint x;\n";

    assert_eq!(excise_self_include(body, &marker), body);
  }

  #[test]
  fn test_excise_self_include_removes_first_occurrence_only() {
    let marker = self_include_marker("_defs.h");
    let body = "#include \"_defs.h\"\n\n#include \"_defs.h\"\n\nint x;\n";

    assert_eq!(excise_self_include(body, &marker), "#include \"_defs.h\"\n\nint x;\n");
  }
}
