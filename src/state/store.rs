use rusqlite::{Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::data::{GalleryCoverOverride, PhotoRecord};
use crate::error::{Error, Result};

/// Key holding the flat list of photo records
pub const PHOTOS_KEY: &str = "galleryPhotos";
/// Key holding the sparse list of cover overrides
pub const COVERS_KEY: &str = "galleryCovers";

/// The Store is a local key-value store backed by SQLite.
/// Values are JSON text. The viewer only reads it; the admin tool writes
/// `galleryPhotos` and `galleryCovers`.
pub struct Store {
    conn: Connection,
    db_path: PathBuf,
}

impl Store {
    /// Open the store at `db_path`, creating the file and schema if needed.
    pub fn open(db_path: &Path) -> Result<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        info!("📁 Store opened at: {}", db_path.display());

        let store = Store {
            conn,
            db_path: db_path.to_path_buf(),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Open an in-memory store (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let store = Store {
            conn: Connection::open_in_memory()?,
            db_path: PathBuf::from(":memory:"),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Default location of the store file:
    /// - Linux: ~/.local/share/photo-portfolio/portfolio.db
    /// - macOS: ~/Library/Application Support/photo-portfolio/portfolio.db
    /// - Windows: %APPDATA%\photo-portfolio\portfolio.db
    pub fn default_path() -> Result<PathBuf> {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .ok_or(Error::NoDirectory("data"))?;

        path.push("photo-portfolio");
        path.push("portfolio.db");
        Ok(path)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key     TEXT PRIMARY KEY,
                value   TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Raw value for a key, `None` when the key is absent
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    /// Stored photo records.
    ///
    /// `None` means there is nothing usable under the key: absent, or not a
    /// JSON array. Callers substitute sample data. Individual records that
    /// fail to parse are skipped.
    pub fn read_photos(&self) -> Result<Option<Vec<PhotoRecord>>> {
        let Some(raw) = self.get_item(PHOTOS_KEY)? else {
            return Ok(None);
        };
        Ok(parse_array(PHOTOS_KEY, &raw))
    }

    /// Stored cover overrides; absent or malformed reads as empty
    pub fn read_covers(&self) -> Result<Vec<GalleryCoverOverride>> {
        let Some(raw) = self.get_item(COVERS_KEY)? else {
            return Ok(Vec::new());
        };
        let covers = parse_array(COVERS_KEY, &raw).unwrap_or_default();
        debug!("Found {} gallery covers", covers.len());
        Ok(covers)
    }
}

#[cfg(test)]
impl Store {
    /// Write a raw value, the way the admin tool does
    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }

    pub fn remove_item(&self, key: &str) -> Result<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }
}

/// Parse a JSON array element by element so one bad record does not hide
/// the rest.
fn parse_array<T: serde::de::DeserializeOwned>(key: &str, raw: &str) -> Option<Vec<T>> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            warn!("⚠️  Ignoring malformed value under '{}': {}", key, e);
            return None;
        }
    };

    let mut items = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value(value) {
            Ok(item) => items.push(item),
            Err(e) => warn!("⚠️  Skipping entry {} under '{}': {}", index, key, e),
        }
    }
    Some(items)
}

// Implement Debug for better error messages
impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("db_path", &self.db_path)
            .finish()
    }
}
