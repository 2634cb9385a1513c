use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Homebrew formula settings (optional `[formula]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormulaConfig {
    /// Target whose tarball backs the `on_macos` block.
    pub macos_target: String,
    /// Target whose tarball backs the `on_linux` block.
    pub linux_target: String,
    pub homepage: String,
    pub description: String,
    pub license: String,
}

impl Default for FormulaConfig {
    fn default() -> Self {
        Self {
            macos_target: "x86_64-macos".to_string(),
            linux_target: "x86_64-linux".to_string(),
            homepage: "https://github.com/XerWoho/zeP".to_string(),
            description: "Fast package manager for Zig".to_string(),
            license: "GPLv3".to_string(),
        }
    }
}

/// Release layout and URL scheme, loaded from `~/.config/relman/config.toml` when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// Directory holding one sub-directory per version.
    pub release_root: PathBuf,
    /// The JSON download index that gets rewritten.
    pub manifest_path: PathBuf,
    /// Public URL prefix; artifact URLs are `<base_url>/<version>/<file_name>`.
    pub base_url: String,
    /// Documentation link stored in new version metadata.
    pub docs_url: String,
    /// Only files whose name starts with this token are treated as artifacts.
    pub artifact_prefix: String,
    pub formula: FormulaConfig,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            release_root: PathBuf::from("zep.run/releases"),
            manifest_path: PathBuf::from("zep.run/download.json"),
            base_url: "https://zep.run/releases".to_string(),
            docs_url: "https://github.com/XerWoho/zeP/tree/main/docs".to_string(),
            artifact_prefix: "zep_".to_string(),
            formula: FormulaConfig::default(),
        }
    }
}

impl ReleaseConfig {
    /// Directory scanned for the artifacts of `version`.
    pub fn release_dir(&self, version: &str) -> PathBuf {
        self.release_root.join(version)
    }

    /// Download URL of an artifact file published under `version`.
    pub fn artifact_url(&self, version: &str, file_name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            version,
            file_name
        )
    }
}

/// Path of the user config file, if one exists under the XDG config dir.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("relman")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from `explicit` if given, else from the XDG config file,
/// else fall back to built-in defaults. Never creates a file.
pub fn load(explicit: Option<&Path>) -> Result<ReleaseConfig> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => config_path()?,
    };
    match path {
        Some(path) => load_from_path(&path),
        None => {
            tracing::debug!("no config file found, using defaults");
            Ok(ReleaseConfig::default())
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<ReleaseConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ReleaseConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
