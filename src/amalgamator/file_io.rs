//! # File I/O Module
//!
//! Thin read/write helpers that attach the offending path to every error.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Reads a file fully into a string.
pub fn read_text(path: &Path) -> Result<String> {
  fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Writes a string to a file, creating or truncating it.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
  fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Reads a file into a vector of lines, without line terminators.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
  let content = read_text(path)?;
  Ok(content.lines().map(|line| line.to_string()).collect())
}
