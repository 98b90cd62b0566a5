//! # Amalgamator Module
//!
//! Core functionality for merging a directory of standalone headers into one
//! distributable single-file header.
//!
//! The run is strictly sequential: collect the headers in sorted order, strip
//! each one's own license comment, optionally excise its self-include
//! directive, and append the remainder to the banner. Both output artifacts
//! are assembled fully in memory and only written once every input has been
//! read and processed, so a bad input never leaves a truncated header behind.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::{Path, PathBuf};
//!
//! use monoheader::amalgamator::Amalgamator;
//!
//! # fn main() -> anyhow::Result<()> {
//! let amalgamator = Amalgamator::new(PathBuf::from("src/include"), "h".to_string(), None);
//!
//! let headers = amalgamator.collect()?;
//! let artifacts = amalgamator.assemble("/* banner */\n", &headers)?;
//! artifacts.write(Path::new("src/include/VERSION"), Path::new("single_header.h"))?;
//! # Ok(())
//! # }
//! ```

pub mod collector;
pub mod file_io;
pub mod strip;

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use crate::verbose_log;

/// One amalgamation run over a fixed headers directory.
pub struct Amalgamator {
  /// Directory holding the headers to merge.
  headers_dir: PathBuf,
  /// Extension of the headers to merge, without the leading dot.
  extension: String,
  /// Exact marker excised from each header body, when configured.
  marker: Option<String>,
}

/// Both output artifacts, fully assembled in memory.
#[derive(Debug)]
pub struct Artifacts {
  /// The banner alone, written verbatim to the version-stamp file.
  pub stamp: String,
  /// The banner followed by every processed header body, in sorted order.
  pub combined: String,
}

impl Amalgamator {
  /// Creates an amalgamator for the given headers directory.
  ///
  /// # Parameters
  ///
  /// * `headers_dir` - Directory holding the headers to merge
  /// * `extension` - File extension of the headers, without the dot
  /// * `strip_include` - File name of a self-include directive to excise
  ///   from each header body, or `None` to merge bodies unchanged
  pub fn new(headers_dir: PathBuf, extension: String, strip_include: Option<&str>) -> Self {
    Self {
      headers_dir,
      extension,
      marker: strip_include.map(strip::self_include_marker),
    }
  }

  /// Collects the headers to merge, sorted ascending by filename.
  pub fn collect(&self) -> Result<Vec<PathBuf>> {
    collector::collect_headers(&self.headers_dir, &self.extension)
  }

  /// Assembles both output artifacts in memory.
  ///
  /// Every header is read and processed before this returns, so any
  /// unreadable or malformed input aborts the run with nothing written.
  ///
  /// # Parameters
  ///
  /// * `banner` - The synthesized license/version banner
  /// * `headers` - The headers to merge, already sorted by [`collect`](Self::collect)
  pub fn assemble(&self, banner: &str, headers: &[PathBuf]) -> Result<Artifacts> {
    let mut combined = String::from(banner);

    for path in headers {
      let content = file_io::read_text(path)?;
      let body = strip::strip_license_header(&content, path)?;
      let body = match &self.marker {
        Some(marker) => strip::excise_self_include(body, marker),
        None => Cow::Borrowed(body),
      };

      verbose_log!("Merging {}", path.display());
      combined.push_str(&body);
    }

    debug!("assembled {} byte(s) from {} header(s)", combined.len(), headers.len());

    Ok(Artifacts {
      stamp: banner.to_string(),
      combined,
    })
  }
}

impl Artifacts {
  /// Writes both artifacts, creating or truncating the targets.
  ///
  /// # Parameters
  ///
  /// * `stamp_file` - Target for the version stamp (the banner alone)
  /// * `output_file` - Target for the combined single-file header
  pub fn write(&self, stamp_file: &Path, output_file: &Path) -> Result<()> {
    file_io::write_text(stamp_file, &self.stamp)?;
    file_io::write_text(output_file, &self.combined)?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;

  #[test]
  fn test_assemble_orders_bodies_by_filename() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    // Created out of order on purpose.
    fs::write(temp_dir.path().join("b.h"), "/* x */\nsecond\n")?;
    fs::write(temp_dir.path().join("a.h"), "/* x */\nfirst\n")?;
    fs::write(temp_dir.path().join("c.h"), "/* x */\nthird\n")?;

    let amalgamator = Amalgamator::new(temp_dir.path().to_path_buf(), "h".to_string(), None);
    let headers = amalgamator.collect()?;
    let artifacts = amalgamator.assemble("/* banner */\n", &headers)?;

    assert_eq!(artifacts.combined, "/* banner */\n\nfirst\n\nsecond\n\nthird\n");
    Ok(())
  }

  #[test]
  fn test_assemble_excises_configured_self_include() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    fs::write(
      temp_dir.path().join("a.h"),
      "/* x */\n#include \"_defs.h\"\n\nint x;\n",
    )?;

    let amalgamator = Amalgamator::new(temp_dir.path().to_path_buf(), "h".to_string(), Some("_defs.h"));
    let headers = amalgamator.collect()?;
    let artifacts = amalgamator.assemble("", &headers)?;

    assert_eq!(artifacts.combined, "\nint x;\n");
    Ok(())
  }

  #[test]
  fn test_assemble_fails_on_header_without_delimiter() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    fs::write(temp_dir.path().join("a.h"), "/* ok */\nint x;\n")?;
    fs::write(temp_dir.path().join("b.h"), "int broken;\n")?;

    let amalgamator = Amalgamator::new(temp_dir.path().to_path_buf(), "h".to_string(), None);
    let headers = amalgamator.collect()?;

    let err = amalgamator.assemble("", &headers).expect_err("malformed header");
    assert!(err.to_string().contains("b.h"));
    Ok(())
  }

  #[test]
  fn test_stamp_is_the_banner_verbatim() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    fs::write(temp_dir.path().join("a.h"), "/* x */\nint x;\n")?;

    let amalgamator = Amalgamator::new(temp_dir.path().to_path_buf(), "h".to_string(), None);
    let headers = amalgamator.collect()?;
    let artifacts = amalgamator.assemble("/* banner */\n", &headers)?;

    assert_eq!(artifacts.stamp, "/* banner */\n");
    Ok(())
  }

  #[test]
  fn test_write_truncates_previous_artifacts() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let stamp_file = temp_dir.path().join("VERSION");
    let output_file = temp_dir.path().join("combined.h");
    fs::write(&stamp_file, "stale stamp content that is much longer")?;
    fs::write(&output_file, "stale combined content that is much longer")?;

    let artifacts = Artifacts {
      stamp: "new\n".to_string(),
      combined: "new combined\n".to_string(),
    };
    artifacts.write(&stamp_file, &output_file)?;

    assert_eq!(fs::read_to_string(&stamp_file)?, "new\n");
    assert_eq!(fs::read_to_string(&output_file)?, "new combined\n");
    Ok(())
  }
}
