//! The JSON download index: typed model, ordering and persistence.
//!
//! On disk the manifest is a single JSON object keyed by version label. Each
//! version object mixes metadata (`version`, `date`, `docs`) with one object per
//! target, e.g.
//!
//! ```json
//! {
//!   "master": { "version": "0.7", "x86_64-linux": { "tarball": "...", "sha256sum": "...", "size": "123" } },
//!   "0.7": { "version": "0.7", "x86_64-linux": { "tarball": "...", "sha256sum": "...", "size": "123" } }
//! }
//! ```

mod persist;
mod types;

pub use persist::{load_manifest, save_manifest, to_json_string};
pub use types::{ArtifactEntry, Manifest, TargetField, VersionEntry};
