/// State management module
///
/// This module handles all application state, including:
/// - The local key-value store (store.rs)
/// - Shared data structures (data.rs) and built-in samples (sample.rs)
/// - Gallery derivation (aggregate.rs) and filtering (filter.rs)
/// - The index page snapshot (portfolio.rs) and its change detection (sync.rs)
/// - Notifications (notice.rs) and the lightbox position (navigator.rs)

pub mod aggregate;
pub mod data;
pub mod filter;
pub mod navigator;
pub mod notice;
pub mod portfolio;
pub mod sample;
pub mod store;
pub mod sync;
