/// Error types for the portfolio viewer
///
/// Everything below the application shell returns `error::Result`.
/// Async image tasks convert to `String` before crossing into a `Message`,
/// because iced messages must be `Clone`.

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The local key-value store could not be opened or queried
    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// Filesystem error (store directory, image caches, config file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file exists but is not valid TOML for `Config`
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// A platform directory (data, cache, config) could not be determined
    #[error("Could not determine {0} directory")]
    NoDirectory(&'static str),

    /// Remote image fetch failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Image bytes could not be decoded or re-encoded
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
