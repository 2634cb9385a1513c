//! Load and save the manifest. Saving is a full rewrite via temp file + rename.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use super::types::Manifest;
use crate::error::ReleaseError;

/// Read the manifest at `path`. A missing file yields an empty manifest; a file
/// that exists but does not parse is a [`ReleaseError::ManifestParse`].
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("no manifest at {}, starting empty", path.display());
            return Ok(Manifest::new());
        }
        Err(e) => return Err(e).with_context(|| format!("read manifest: {}", path.display())),
    };
    let manifest: Manifest =
        serde_json::from_slice(&bytes).map_err(|source| ReleaseError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!("loaded {} version(s) from {}", manifest.len(), path.display());
    Ok(manifest)
}

/// Pretty JSON (2-space indent) with a trailing newline.
pub fn to_json_string(manifest: &Manifest) -> Result<String> {
    let mut json = serde_json::to_string_pretty(manifest).context("serialize manifest")?;
    json.push('\n');
    Ok(json)
}

/// Overwrite `path` with `manifest`. The JSON is written to a temp file in the same
/// directory and renamed into place, so readers never observe a partial file.
pub fn save_manifest(manifest: &Manifest, path: &Path) -> Result<()> {
    let json = to_json_string(manifest)?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).with_context(|| format!("create dir: {}", dir.display()))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    tmp.write_all(json.as_bytes())
        .with_context(|| format!("write temp file {}", tmp.path().display()))?;
    tmp.as_file()
        .sync_all()
        .context("sync manifest temp file")?;
    tmp.persist(path)
        .with_context(|| format!("replace manifest: {}", path.display()))?;
    tracing::debug!("wrote {} bytes to {}", json.len(), path.display());
    Ok(())
}
