/// Image loading module
///
/// This module handles:
/// - Fetching image bytes from http(s) URLs or local paths
/// - Generating grid thumbnails
/// - Caching full-size images for the lightbox
/// - Tracking load state for the views (cache.rs)
///
/// Both caches key files by a SHA-256 of the source string, so the same URL
/// is only fetched once per cache directory.

pub mod cache;
pub mod preview;
pub mod thumbnail;

use sha2::{Digest, Sha256};
use std::path::PathBuf;

use crate::error::Result;

/// Whether `source` must be fetched over the network
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Filesystem path for a non-remote source (`file://` prefix allowed)
pub fn local_path(source: &str) -> PathBuf {
    PathBuf::from(source.strip_prefix("file://").unwrap_or(source))
}

/// Stable cache file stem for a source
pub fn cache_key(source: &str) -> String {
    format!("{:x}", Sha256::digest(source.as_bytes()))
}

/// Read the bytes behind `source`
pub async fn fetch_bytes(source: &str) -> Result<Vec<u8>> {
    if is_remote(source) {
        let response = reqwest::get(source).await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    } else {
        Ok(tokio::fs::read(local_path(source)).await?)
    }
}
