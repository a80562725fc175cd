//! Checksum calculation for pipeline inputs.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Calculate SHA-256 checksum of raw input content.
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let result = hasher.finalize();
    hex::encode(result)
}

/// Calculate SHA-256 checksum of a file's bytes.
pub fn file_checksum(path: &Path) -> Result<String> {
    let content = std::fs::read(path)
        .with_context(|| format!("Failed to read file for checksum: {}", path.display()))?;
    Ok(calculate_checksum(&content))
}
