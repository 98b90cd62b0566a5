//! # Amalgamate Command
//!
//! This module implements the single action of the tool: synthesize the
//! banner and merge the headers into the two output artifacts.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::amalgamator::{Amalgamator, file_io};
use crate::banner;
use crate::config::{Config, Settings, load_config};
use crate::info_log;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{print_artifact_written, print_blank_line, print_start_message, print_summary};
use crate::version::Version;

/// Arguments for the amalgamate command
#[derive(Args, Debug, Default)]
pub struct AmalgamateArgs {
  /// Release version stamped into the banner, in v<major>.<minor>.<patch>
  /// form
  #[arg(id = "release_version", required = false, value_name = "VERSION")]
  pub version: Option<String>,

  /// Path of the license document embedded in the banner
  #[arg(long, short = 'l', value_name = "FILE")]
  pub license_file: Option<PathBuf>,

  /// Directory containing the header files to merge
  #[arg(long, short = 'd', value_name = "DIR")]
  pub headers_dir: Option<PathBuf>,

  /// File extension of the headers to merge, without the leading dot
  #[arg(long, value_name = "EXT")]
  pub extension: Option<String>,

  /// Path of the combined single-file header to write
  #[arg(long, short = 'o', value_name = "FILE")]
  pub output: Option<PathBuf>,

  /// Path of the version-stamp file (default: VERSION inside the headers
  /// directory)
  #[arg(long, value_name = "FILE")]
  pub stamp_file: Option<PathBuf>,

  /// Canonical hosting location recorded in the banner metadata
  #[arg(long, value_name = "URL")]
  pub project_url: Option<String>,

  /// File name of a self-include directive to drop from merged headers
  #[arg(long, value_name = "NAME")]
  pub strip_include: Option<String>,

  /// Path to config file (default: .monoheader.toml in the working
  /// directory)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

impl AmalgamateArgs {
  /// Validate the arguments and return an error if invalid
  fn validate(&self) -> Result<(), String> {
    if self.version.is_none() {
      return Err("Missing required argument: <VERSION>".to_string());
    }
    Ok(())
  }

  /// Shape the CLI flags as a [`Config`] overlay for settings resolution.
  fn to_overrides(&self) -> Config {
    Config {
      license_file: self.license_file.clone(),
      headers_dir: self.headers_dir.clone(),
      extension: self.extension.clone(),
      output: self.output.clone(),
      stamp_file: self.stamp_file.clone(),
      project_url: self.project_url.clone(),
      strip_include: self.strip_include.clone(),
    }
  }
}

/// Run the amalgamate command with the given arguments
pub fn run_amalgamate(args: AmalgamateArgs) -> Result<()> {
  // Validate arguments
  if let Err(e) = args.validate() {
    eprintln!("ERROR: {e}");
    process::exit(1);
  }

  // Initialize tracing subscriber for structured diagnostics
  init_tracing(args.quiet, args.verbose);

  // Set verbose mode for output formatting and the info_log! macro
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  // Safe to unwrap because we validated above
  let raw_version = args.version.as_deref().expect("a version argument");

  // Validated before anything is read or written, so a bad version never
  // leaves artifacts behind.
  let version: Version = match raw_version.parse() {
    Ok(version) => version,
    Err(e) => {
      eprintln!("ERROR: {e}");
      process::exit(1);
    }
  };

  // Load configuration file if present
  let config = load_config(args.config.as_deref(), args.no_config)?;
  if config.is_some() {
    debug!("Using configuration file for run settings");
  }

  let settings = Settings::resolve(config, args.to_overrides());

  let Some(ref project_url) = settings.project_url else {
    eprintln!("ERROR: Missing project URL: pass --project-url or set the project-url config key");
    process::exit(1);
  };

  if let Some(ref name) = settings.strip_include {
    info_log!("Dropping #include \"{name}\" directives from merged headers");
  }

  let license_lines = file_io::read_lines(&settings.license_file)?;
  let banner_text = banner::synthesize(&license_lines, &version, project_url)
    .with_context(|| format!("Failed to synthesize banner from {}", settings.license_file.display()))?;

  let amalgamator = Amalgamator::new(
    settings.headers_dir.clone(),
    settings.extension.clone(),
    settings.strip_include.as_deref(),
  );

  let headers = amalgamator.collect()?;
  print_start_message(headers.len());

  let start_time = Instant::now();

  // Assemble fully in memory; only write once every input has been
  // processed.
  let artifacts = amalgamator.assemble(&banner_text, &headers)?;
  artifacts.write(&settings.stamp_file, &settings.output)?;

  let elapsed = start_time.elapsed();

  print_artifact_written(&settings.stamp_file);
  print_artifact_written(&settings.output);
  print_blank_line();
  print_summary(headers.len(), elapsed);

  Ok(())
}
