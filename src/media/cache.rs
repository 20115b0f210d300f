use std::collections::HashMap;
use std::path::PathBuf;

/// Load state of one image source
#[derive(Debug, Clone, PartialEq)]
pub enum ImageState {
    Loading,
    Ready(PathBuf),
    /// Not retried for the rest of the session
    Failed,
}

/// Tracks which sources have been requested and where their files are.
/// The UI reads it; the update loop claims sources and resolves results.
#[derive(Debug, Default)]
pub struct ImageCache {
    entries: HashMap<String, ImageState>,
}

impl ImageCache {
    pub fn get(&self, source: &str) -> Option<&ImageState> {
        self.entries.get(source)
    }

    /// Mark every not-yet-seen source as loading and return those, in
    /// order and without duplicates. Callers start one load per returned
    /// source.
    pub fn claim(&mut self, sources: impl IntoIterator<Item = String>) -> Vec<String> {
        let mut claimed = Vec::new();
        for source in sources {
            if self.entries.contains_key(&source) {
                continue;
            }
            self.entries.insert(source.clone(), ImageState::Loading);
            claimed.push(source);
        }
        claimed
    }

    pub fn resolve(&mut self, source: String, result: Result<PathBuf, String>) {
        let state = match result {
            Ok(path) => ImageState::Ready(path),
            Err(_) => ImageState::Failed,
        };
        self.entries.insert(source, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_skips_known_and_duplicate_sources() {
        let mut cache = ImageCache::default();
        let first = cache.claim(vec!["a".to_string(), "b".to_string(), "a".to_string()]);
        assert_eq!(first, vec!["a", "b"]);

        let second = cache.claim(vec!["b".to_string(), "c".to_string()]);
        assert_eq!(second, vec!["c"]);
        assert_eq!(cache.get("c"), Some(&ImageState::Loading));
    }

    #[test]
    fn test_resolve_records_outcome() {
        let mut cache = ImageCache::default();
        cache.claim(vec!["a".to_string(), "b".to_string()]);

        cache.resolve("a".to_string(), Ok(PathBuf::from("/cache/a.jpg")));
        cache.resolve("b".to_string(), Err("404".to_string()));

        assert_eq!(cache.get("a"), Some(&ImageState::Ready(PathBuf::from("/cache/a.jpg"))));
        assert_eq!(cache.get("b"), Some(&ImageState::Failed));
        assert!(cache.claim(vec!["b".to_string()]).is_empty());
    }
}
