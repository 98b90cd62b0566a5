//! # Output Module
//!
//! This module centralizes all user-facing output for the monoheader tool.
//! It provides consistent formatting, colors, and symbols for terminal
//! output.
//!
//! ## Design Goals
//!
//! - **Informative**: Show what was merged and where it went
//! - **Progressive**: More detail with `-v`, silence with `-q`
//! - **Scriptable**: Keep stdout predictable for piping/automation

use std::path::Path;
use std::time::Duration;

use owo_colors::{OwoColorize, Stream};

use crate::logging::is_quiet;

/// Symbols used in output
pub mod symbols {
  /// Artifact written
  pub const SUCCESS: &str = "\u{2713}"; // ✓
}

/// Print the initial "Merging N headers..." message.
pub fn print_start_message(header_count: usize) {
  if is_quiet() {
    return;
  }

  let headers_word = if header_count == 1 { "header" } else { "headers" };
  println!("Merging {header_count} {headers_word}...");
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print one line per written artifact.
pub fn print_artifact_written(path: &Path) {
  if is_quiet() {
    return;
  }

  println!(
    "{} Wrote {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    path.display()
  );
}

/// Print the closing summary with elapsed time.
pub fn print_summary(header_count: usize, elapsed: Duration) {
  if is_quiet() {
    return;
  }

  let headers_word = if header_count == 1 { "header" } else { "headers" };
  let timing = format!("in {:.2?}", elapsed);
  println!(
    "Merged {header_count} {headers_word} {}",
    timing.if_supports_color(Stream::Stdout, |s| s.dimmed())
  );
}
