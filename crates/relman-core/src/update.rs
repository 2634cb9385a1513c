//! Scan a version's release folder and merge its artifacts into the manifest.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::checksum;
use crate::config::ReleaseConfig;
use crate::error::ReleaseError;
use crate::manifest::{self, ArtifactEntry, Manifest, VersionEntry};
use crate::target::derive_target_name;
use crate::version::MASTER;

/// What an update recorded, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSummary {
    pub version: String,
    /// Targets written during this scan, in file-name order.
    pub targets: Vec<String>,
}

/// Today's local date as ISO-8601 (`YYYY-MM-DD`).
pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// `<release_root>/<version>`, or [`ReleaseError::ReleaseDirMissing`] if it is not a directory.
pub fn release_dir(cfg: &ReleaseConfig, version: &str) -> Result<PathBuf> {
    let dir = cfg.release_dir(version);
    if !dir.is_dir() {
        return Err(ReleaseError::ReleaseDirMissing { path: dir }.into());
    }
    Ok(dir)
}

/// Artifact files in `dir` (regular files starting with `prefix`), sorted by name.
fn list_artifacts(dir: &Path, prefix: &str) -> Result<Vec<(String, PathBuf)>> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("list {}", dir.display()))? {
        let entry = entry.with_context(|| format!("list {}", dir.display()))?;
        let path = entry.path();
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::warn!("skipping non-UTF-8 file name {}", path.display());
            continue;
        };
        if !name.starts_with(prefix) {
            continue;
        }
        if !path.is_file() {
            tracing::debug!("skipping {}: not a regular file", path.display());
            continue;
        }
        found.push((name, path));
    }
    found.sort();
    Ok(found)
}

/// Merge the artifacts of `version` into `manifest`.
///
/// `master` is reset, a version seen for the first time gets its `version`/`date`/`docs`
/// metadata (an existing entry is left as it is), every artifact overwrites its target's
/// key, and the resulting version entry is copied into `master`. Any unreadable file
/// aborts the whole update.
pub fn update_version(
    manifest: &mut Manifest,
    version: &str,
    cfg: &ReleaseConfig,
    date: &str,
) -> Result<UpdateSummary> {
    let dir = cfg.release_dir(version);
    let artifacts = list_artifacts(&dir, &cfg.artifact_prefix)?;

    // Reset before the lookup: `--version master` then counts as an existing entry.
    manifest.insert(MASTER, Default::default());
    if manifest.get(version).is_none() {
        manifest.insert(
            version,
            VersionEntry::with_metadata(version, date, &cfg.docs_url),
        );
    }
    let entry = manifest.entry_or_default(version);

    let mut targets = Vec::with_capacity(artifacts.len());
    for (file_name, path) in artifacts {
        let size = fs::metadata(&path)
            .with_context(|| format!("stat {}", path.display()))?
            .len();
        let digest = checksum::sha256_path(&path)?;
        let target = derive_target_name(&file_name, version, &cfg.artifact_prefix);
        tracing::debug!(%target, size, sha256 = %digest, "recorded {}", file_name);

        let url = cfg.artifact_url(version, &file_name);
        if entry
            .set_artifact(&target, ArtifactEntry::new(url, digest, size))
            .is_some()
        {
            tracing::debug!(%target, "replaced existing artifact entry");
        }
        targets.push(target);
    }

    let latest = entry.clone();
    manifest.insert(MASTER, latest);

    tracing::info!(version, artifacts = targets.len(), "updated version entry");
    Ok(UpdateSummary {
        version: version.to_string(),
        targets,
    })
}

/// Validate the release folder, load the manifest, merge `version` and sort.
/// Nothing is written; callers save the returned manifest.
pub fn build_manifest(
    cfg: &ReleaseConfig,
    version: &str,
    date: &str,
) -> Result<(Manifest, UpdateSummary)> {
    release_dir(cfg, version)?;
    let mut manifest = manifest::load_manifest(&cfg.manifest_path)?;
    let summary = update_version(&mut manifest, version, cfg, date)?;
    manifest.sort_versions();
    Ok((manifest, summary))
}
