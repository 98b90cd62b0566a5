//! # Banner Module
//!
//! This module synthesizes the license/version banner that is prepended to
//! the amalgamated header and written on its own to the version-stamp file.
//!
//! The banner is two C block comments: the legal body of the project license,
//! then a short metadata block naming the hosting location, the author, and
//! the release version. Synthesis is a pure function of its inputs; reading
//! the license file is the caller's job.
//!
//! ## Example
//!
//! ```rust
//! use monoheader::banner::synthesize;
//! use monoheader::version::Version;
//!
//! # fn main() -> anyhow::Result<()> {
//! let license: Vec<String> = ["MIT License", "", "Copyright (c) 2024 Alice Bee"]
//!   .iter()
//!   .map(|line| line.to_string())
//!   .collect();
//!
//! let version: Version = "v1.2.3".parse()?;
//! let banner = synthesize(&license, &version, "github.com/alice/widgets")?;
//!
//! assert!(banner.starts_with("/*\n"));
//! assert!(banner.contains("v1.2.3"));
//! # Ok(())
//! # }
//! ```

use crate::version::Version;

/// Number of preamble lines discarded from the top of the license document
/// (the title line and the blank line that follows it).
pub const TEMPLATE_PREAMBLE_LINES: usize = 2;

/// Token index at which the author name starts on the first line of the
/// legal body (`Copyright (c) <years> <author...>`).
const AUTHOR_TOKEN_INDEX: usize = 3;

/// Error returned when the license document is too short to carry the
/// expected preamble plus at least one legal-body line.
#[derive(Debug, thiserror::Error)]
#[error("license document too short: need at least {min} lines, got {0}", min = TEMPLATE_PREAMBLE_LINES + 1)]
pub struct MalformedLicense(usize);

/// Extracts the author name from the first line of a license legal body.
///
/// This is a positional heuristic over one fixed license template, not
/// general license parsing: the line is split on single spaces and every
/// token from index 3 onward is appended with a trailing space. For the
/// template line `Copyright (c) <years> <author...>` that yields the author
/// tokens; a line with fewer than four tokens yields an empty string.
///
/// # Parameters
///
/// * `first_body_line` - The first line after the license preamble
///
/// # Returns
///
/// The author name, with a trailing space after each token, possibly empty.
pub fn extract_author(first_body_line: &str) -> String {
  let mut author = String::new();
  for token in first_body_line.split(' ').skip(AUTHOR_TOKEN_INDEX) {
    author.push_str(token);
    author.push(' ');
  }
  author
}

/// Wraps lines in a C block comment.
///
/// Each line is prefixed with ` * `; an empty line gets a bare ` *` so the
/// comment carries no trailing whitespace on blank lines.
pub fn format_block_comment(lines: &[String]) -> String {
  let mut result = String::from("/*\n");

  for line in lines {
    if line.is_empty() {
      result.push_str(" *");
    } else {
      result.push_str(" * ");
      result.push_str(line);
    }
    result.push('\n');
  }

  result.push_str(" */\n");
  result
}

/// Synthesizes the full banner from the license document, the release
/// version, and the project's hosting location.
///
/// The first [`TEMPLATE_PREAMBLE_LINES`] lines of the license are discarded;
/// the remainder is wrapped as a block comment, followed by a blank line and
/// a second block comment with the metadata.
///
/// # Errors
///
/// Returns [`MalformedLicense`] if the license document has no legal body
/// after the preamble.
pub fn synthesize(license_lines: &[String], version: &Version, project_url: &str) -> Result<String, MalformedLicense> {
  if license_lines.len() <= TEMPLATE_PREAMBLE_LINES {
    return Err(MalformedLicense(license_lines.len()));
  }
  let body = &license_lines[TEMPLATE_PREAMBLE_LINES..];

  let author = extract_author(&body[0]);

  let metadata = vec![
    format!("The library is hosted at: {project_url}"),
    format!("The author is: {author}"),
    format!("This local version is: {version}"),
  ];

  let mut banner = format_block_comment(body);
  banner.push('\n');
  banner.push_str(&format_block_comment(&metadata));
  Ok(banner)
}
