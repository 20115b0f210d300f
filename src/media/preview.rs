/// Full-size images for the lightbox
/// Remote images are downloaded once and kept without resizing
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::{cache_key, fetch_bytes, is_remote, local_path};

/// Get the cache directory for full-size downloads
pub fn preview_cache_dir(cache_root: &Path) -> PathBuf {
    cache_root.join("previews")
}

/// Resolve `source` to a local file the lightbox can display.
/// Local sources are used in place; remote ones are downloaded into the
/// preview cache.
pub async fn load_preview(source: String, cache_root: PathBuf) -> Result<PathBuf, String> {
    if !is_remote(&source) {
        let path = local_path(&source);
        return if path.exists() {
            Ok(path)
        } else {
            Err(format!("Image does not exist: {}", path.display()))
        };
    }

    let dir = preview_cache_dir(&cache_root);
    let stem = cache_key(&source);
    if let Some(cached) = find_cached(&dir, &stem).await {
        return Ok(cached);
    }

    let bytes = fetch_bytes(&source).await.map_err(|e| {
        warn!("⚠️  Could not fetch {}: {}", source, e);
        e.to_string()
    })?;

    // Keep the original encoding; the extension only helps humans browsing the cache
    let extension = image::guess_format(&bytes)
        .ok()
        .and_then(|format| format.extensions_str().first().copied())
        .unwrap_or("img");
    let path = dir.join(format!("{}.{}", stem, extension));

    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| format!("Failed to create preview cache directory: {}", e))?;
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| format!("Failed to write preview: {}", e))?;

    debug!("📸 Cached full-size image: {}", path.display());
    Ok(path)
}

async fn find_cached(dir: &Path, stem: &str) -> Option<PathBuf> {
    let mut entries = tokio::fs::read_dir(dir).await.ok()?;
    while let Ok(Some(entry)) = entries.next_entry().await {
        let path = entry.path();
        if path.file_stem().and_then(|s| s.to_str()) == Some(stem) {
            return Some(path);
        }
    }
    None
}
