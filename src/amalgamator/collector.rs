//! # Collector Module
//!
//! Discovers the header files to merge. Discovery is a flat glob over the
//! headers directory; the result is sorted by path so the amalgamated output
//! never depends on filesystem enumeration order.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Collects the header files under `dir` carrying `extension`.
///
/// # Parameters
///
/// * `dir` - The headers directory (not traversed recursively)
/// * `extension` - File extension to match, without the leading dot
///
/// # Returns
///
/// The matching paths, sorted ascending by filename.
pub fn collect_headers(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
  let pattern_path = dir.join(format!("*.{extension}"));
  let pattern = pattern_path
    .to_str()
    .with_context(|| format!("Headers directory path is not valid UTF-8: {}", dir.display()))?;

  let mut headers = Vec::new();
  for entry in glob::glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))? {
    let path = entry.with_context(|| format!("Failed to list headers in {}", dir.display()))?;
    headers.push(path);
  }

  // Deterministic merge order regardless of how the OS enumerates the
  // directory.
  headers.sort();

  debug!("collected {} header file(s) from {}", headers.len(), dir.display());
  Ok(headers)
}
