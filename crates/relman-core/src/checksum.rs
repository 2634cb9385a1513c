//! SHA-256 digests of release artifacts.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

const CHUNK_SIZE: usize = 64 * 1024;

/// Lowercase hex SHA-256 of the file at `path`.
///
/// The file is streamed through the hasher in `CHUNK_SIZE` reads, so tarballs of any
/// size hash in constant memory.
pub fn sha256_path(path: &Path) -> Result<String> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut reader = BufReader::with_capacity(CHUNK_SIZE, file);
    let mut hasher = Sha256::new();
    io::copy(&mut reader, &mut hasher).with_context(|| format!("hash {}", path.display()))?;
    Ok(hex::encode(hasher.finalize()))
}
