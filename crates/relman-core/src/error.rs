//! Failures callers need to tell apart from generic I/O errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReleaseError {
    /// `<release_root>/<version>` is absent or not a directory.
    #[error("release folder '{}' does not exist", path.display())]
    ReleaseDirMissing { path: PathBuf },

    /// The existing manifest is not valid JSON for the download index schema.
    #[error("failed to parse manifest {}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A target referenced by the Homebrew formula has no artifact in the version entry.
    #[error("version {version} has no artifact for target '{target}'")]
    MissingTarget { version: String, target: String },
}
