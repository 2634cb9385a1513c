//! Homebrew formula for a released version, built from its manifest entry.

use anyhow::Result;
use std::fmt::Write;

use crate::config::FormulaConfig;
use crate::error::ReleaseError;
use crate::manifest::{ArtifactEntry, VersionEntry};

fn artifact<'a>(entry: &'a VersionEntry, version: &str, target: &str) -> Result<&'a ArtifactEntry> {
    entry.artifact(target).ok_or_else(|| {
        ReleaseError::MissingTarget {
            version: version.to_string(),
            target: target.to_string(),
        }
        .into()
    })
}

/// Render the `Zep` formula pointing at the macOS and Linux tarballs of `version`.
pub fn render_formula(entry: &VersionEntry, version: &str, cfg: &FormulaConfig) -> Result<String> {
    let macos = artifact(entry, version, &cfg.macos_target)?;
    let linux = artifact(entry, version, &cfg.linux_target)?;

    let mut out = String::new();
    writeln!(out, "class Zep < Formula")?;
    writeln!(out, "  desc \"{}\"", cfg.description)?;
    writeln!(out, "  homepage \"{}\"", cfg.homepage)?;
    writeln!(out, "  license \"{}\"", cfg.license)?;
    for (block, art) in [("on_macos", macos), ("on_linux", linux)] {
        writeln!(out)?;
        writeln!(out, "  {block} do")?;
        writeln!(out, "    url \"{}\"", art.tarball)?;
        writeln!(out, "    sha256 \"{}\"", art.sha256sum)?;
        writeln!(out, "  end")?;
    }
    writeln!(out)?;
    writeln!(out, "  def install")?;
    writeln!(out, "    bin.install \"zeP\" => \"zep\"")?;
    writeln!(out, "  end")?;
    writeln!(out)?;
    writeln!(out, "  def post_install")?;
    writeln!(out, "    ohai \"--- ZEP CONFIG REQUIRED ---\"")?;
    writeln!(out, "    puts \" ==> Run 'zeP setup' to configure zeP\"")?;
    writeln!(out, "    puts \" ==> Then run: zeP zep install {version}\"")?;
    writeln!(out, "  end")?;
    writeln!(out)?;
    writeln!(out, "  test do")?;
    writeln!(out, "    system \"#{{bin}}/zep\", \"--version\"")?;
    writeln!(out, "  end")?;
    writeln!(out, "end")?;
    Ok(out)
}
