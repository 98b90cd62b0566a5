//! # monoheader
//!
//! A build-time amalgamator that merges header-only library sources into a
//! single distributable header.

mod amalgamator;
mod banner;
mod cli;
mod config;
mod logging;
mod output;
mod version;

use anyhow::Result;

use crate::cli::{Cli, run_amalgamate};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run_amalgamate(cli.amalgamate_args)
}
