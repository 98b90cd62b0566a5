//! # monoheader
//!
//! A build-time amalgamator: it merges a directory of standalone header-only
//! library sources into one distributable single-file header, prepending a
//! synthesized license/version banner, and writes the banner alone to a
//! version-stamp file.
//!
//! `monoheader` deliberately does almost nothing else: no macro expansion, no
//! conditional compilation, no dependency-order resolution beyond sorting the
//! input filenames. The headers themselves are expected to be standalone, so
//! lexicographic order is a valid merge order.
//!
//! ## Features
//!
//! * Deterministic output: headers are merged in sorted filename order
//!   regardless of how the filesystem enumerates them
//! * Per-file license stripping: each header's own leading license comment is
//!   removed before merging
//! * Optional self-include excision: an internal include directive that only
//!   matters for standalone compilation is dropped from the merged output
//! * All-or-nothing emission: both output artifacts are assembled in memory
//!   and written only after every input has been read and processed
//!
//! ## Usage as a Library
//!
//! This crate can be used as a library in your Rust projects:
//!
//! ```rust,no_run
//! use std::path::{Path, PathBuf};
//!
//! use monoheader::amalgamator::{Amalgamator, file_io};
//! use monoheader::banner;
//! use monoheader::version::Version;
//!
//! fn main() -> anyhow::Result<()> {
//!     let version: Version = "v1.2.3".parse()?;
//!
//!     let license_lines = file_io::read_lines(Path::new("LICENSE"))?;
//!     let banner = banner::synthesize(&license_lines, &version, "github.com/alice/widgets")?;
//!
//!     let amalgamator = Amalgamator::new(
//!         PathBuf::from("src/include"),
//!         "h".to_string(),
//!         Some("_defs.h"), // self-include directive to drop
//!     );
//!
//!     let headers = amalgamator.collect()?;
//!     let artifacts = amalgamator.assemble(&banner, &headers)?;
//!     artifacts.write(Path::new("src/include/VERSION"), Path::new("single_header.h"))?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`amalgamator`] - Core functionality for collecting and merging headers
//! * [`banner`] - License/version banner synthesis
//! * [`version`] - Release version validation
//! * [`config`] - Config file support and settings resolution
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`amalgamator`]: crate::amalgamator
//! [`banner`]: crate::banner
//! [`version`]: crate::version
//! [`config`]: crate::config
//! [`logging`]: crate::logging

// Re-export modules for public API
pub mod amalgamator;
pub mod banner;
pub mod config;
pub mod logging;
pub mod version;
