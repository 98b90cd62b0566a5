//! Tests for the public library API: banner synthesis feeding the
//! amalgamator, end to end, without going through the CLI.

use std::fs;
use std::path::Path;

use anyhow::Result;
use monoheader::amalgamator::{Amalgamator, file_io};
use monoheader::banner;
use monoheader::version::Version;
use tempfile::TempDir;

const LICENSE_TEXT: &str = "MIT License\n\nCopyright (c) 2024 Alice Bee\nAll rights reserved.\n";

/// Creates a headers directory with three headers, the middle one carrying a
/// self-include directive.
fn setup_headers(dir: &Path) -> Result<()> {
  fs::write(dir.join("a.h"), "/* per-file license */\n#ifndef A_H\nint a(void);\n#endif\n")?;
  fs::write(
    dir.join("b.h"),
    "/* per-file license */\n#include \"_defs.h\"\n\n#ifndef B_H\nint b(void);\n#endif\n",
  )?;
  fs::write(dir.join("c.h"), "/* per-file license */\n#ifndef C_H\nint c(void);\n#endif\n")?;
  Ok(())
}

#[test]
fn test_full_pipeline() -> Result<()> {
  let temp_dir = TempDir::new()?;
  let license_path = temp_dir.path().join("LICENSE");
  fs::write(&license_path, LICENSE_TEXT)?;
  setup_headers(temp_dir.path())?;

  let version: Version = "v1.2.3".parse()?;
  let license_lines = file_io::read_lines(&license_path)?;
  let banner = banner::synthesize(&license_lines, &version, "github.com/alice/widgets")?;

  // The banner carries the version verbatim and the positional author.
  assert!(banner.contains("This local version is: v1.2.3"));
  assert!(banner.contains("The author is: Alice Bee "));
  // The license title was part of the discarded preamble.
  assert!(!banner.contains("MIT License"));

  let amalgamator = Amalgamator::new(temp_dir.path().to_path_buf(), "h".to_string(), Some("_defs.h"));
  let headers = amalgamator.collect()?;
  assert_eq!(headers.len(), 3);

  let artifacts = amalgamator.assemble(&banner, &headers)?;

  // The stamp is the banner, byte for byte.
  assert_eq!(artifacts.stamp, banner);

  // The combined header starts with the banner, then the bodies in
  // filename order with per-file licenses stripped.
  assert!(artifacts.combined.starts_with(&banner));
  let a_pos = artifacts.combined.find("int a(void);").expect("a.h body present");
  let b_pos = artifacts.combined.find("int b(void);").expect("b.h body present");
  let c_pos = artifacts.combined.find("int c(void);").expect("c.h body present");
  assert!(a_pos < b_pos && b_pos < c_pos);
  assert!(!artifacts.combined.contains("per-file license"));
  assert!(!artifacts.combined.contains("#include \"_defs.h\""));

  let stamp_file = temp_dir.path().join("VERSION");
  let output_file = temp_dir.path().join("combined.h");
  artifacts.write(&stamp_file, &output_file)?;

  assert_eq!(fs::read_to_string(&stamp_file)?, artifacts.stamp);
  assert_eq!(fs::read_to_string(&output_file)?, artifacts.combined);
  Ok(())
}

#[test]
fn test_pipeline_is_deterministic() -> Result<()> {
  let temp_dir = TempDir::new()?;
  let license_path = temp_dir.path().join("LICENSE");
  fs::write(&license_path, LICENSE_TEXT)?;
  setup_headers(temp_dir.path())?;

  let version: Version = "v1.2.3".parse()?;
  let license_lines = file_io::read_lines(&license_path)?;
  let banner = banner::synthesize(&license_lines, &version, "github.com/alice/widgets")?;

  let amalgamator = Amalgamator::new(temp_dir.path().to_path_buf(), "h".to_string(), Some("_defs.h"));

  let first = amalgamator.assemble(&banner, &amalgamator.collect()?)?;
  let second = amalgamator.assemble(&banner, &amalgamator.collect()?)?;

  assert_eq!(first.stamp, second.stamp);
  assert_eq!(first.combined, second.combined);
  Ok(())
}

#[test]
fn test_malformed_header_aborts_before_any_write() -> Result<()> {
  let temp_dir = TempDir::new()?;
  fs::write(temp_dir.path().join("a.h"), "/* fine */\nint a(void);\n")?;
  fs::write(temp_dir.path().join("z.h"), "int z_without_comment(void);\n")?;

  let amalgamator = Amalgamator::new(temp_dir.path().to_path_buf(), "h".to_string(), None);
  let headers = amalgamator.collect()?;

  let err = amalgamator.assemble("/* banner */\n", &headers).expect_err("malformed header");
  assert!(err.to_string().contains("z.h"));

  // Nothing was written: assembly failed, so write() was never reached.
  assert!(!temp_dir.path().join("VERSION").exists());
  Ok(())
}

#[test]
fn test_stamp_file_is_not_collected_as_input() -> Result<()> {
  let temp_dir = TempDir::new()?;
  fs::write(temp_dir.path().join("a.h"), "/* x */\nint a(void);\n")?;
  // A stamp from a previous run sits in the same directory.
  fs::write(temp_dir.path().join("VERSION"), "/* old banner */\n")?;

  let amalgamator = Amalgamator::new(temp_dir.path().to_path_buf(), "h".to_string(), None);
  let headers = amalgamator.collect()?;

  assert_eq!(headers.len(), 1);
  assert!(headers[0].ends_with("a.h"));
  Ok(())
}
