//! CLI for the relman release manifest updater.

mod update;

use anyhow::Result;
use clap::Parser;
use relman_core::config;
use std::path::PathBuf;

use update::run_update;

/// Record a release's artifacts (SHA-256, size, URL) in the JSON download index.
#[derive(Debug, Parser)]
#[command(name = "relman")]
#[command(about = "relman: release manifest updater", long_about = None)]
pub struct Cli {
    /// Version to process, e.g. 0.7. Artifacts are read from `<release-root>/<version>`.
    #[arg(long, value_name = "VERSION")]
    pub version: String,

    /// Directory holding one folder per version (overrides config).
    #[arg(long, value_name = "DIR")]
    pub release_root: Option<PathBuf>,

    /// Download index to update (overrides config).
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Config file to use instead of `~/.config/relman/config.toml`.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also write a Homebrew formula for this version to FILE.
    #[arg(long, value_name = "FILE")]
    pub formula: Option<PathBuf>,

    /// Print the updated index to stdout instead of writing it.
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let mut cfg = config::load(self.config.as_deref())?;
        if let Some(root) = self.release_root {
            cfg.release_root = root;
        }
        if let Some(path) = self.manifest {
            cfg.manifest_path = path;
        }
        tracing::debug!("effective config: {:?}", cfg);

        run_update(&cfg, &self.version, self.formula.as_deref(), self.dry_run)
    }
}
