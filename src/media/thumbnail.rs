use image::imageops::FilterType;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::{cache_key, fetch_bytes};
use crate::error::Result;

/// Thumbnail cache directory under `cache_root`, one per edge length
pub fn thumbnail_cache_dir(cache_root: &Path, size: u32) -> PathBuf {
    cache_root.join("thumbnails").join(size.to_string())
}

/// Where the thumbnail for `source` lives (doesn't generate it)
pub fn thumbnail_path(cache_root: &Path, source: &str, size: u32) -> PathBuf {
    thumbnail_cache_dir(cache_root, size).join(format!("{}.jpg", cache_key(source)))
}

/// Produce a grid thumbnail for an image URL or path.
/// Returns the cached file, generating it first when missing.
pub async fn load_thumbnail(source: String, cache_root: PathBuf, size: u32) -> std::result::Result<PathBuf, String> {
    let path = thumbnail_path(&cache_root, &source, size);
    if path.exists() {
        return Ok(path);
    }

    let bytes = fetch_bytes(&source).await.map_err(|e| {
        warn!("⚠️  Could not fetch {}: {}", source, e);
        e.to_string()
    })?;

    // Decoding and resizing is CPU-bound
    tokio::task::spawn_blocking(move || save_thumbnail(&bytes, &path, size))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
        .map_err(|e| e.to_string())
}

/// Decode, shrink to fit `size`×`size`, and write as JPEG
fn save_thumbnail(bytes: &[u8], path: &Path, size: u32) -> Result<PathBuf> {
    let img = image::load_from_memory(bytes)?;
    let thumbnail = img.resize(size, size, FilterType::Lanczos3);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    // JPEG has no alpha channel
    thumbnail.to_rgb8().save(path)?;

    debug!("📸 Generated thumbnail: {}", path.display());
    Ok(path.to_path_buf())
}
