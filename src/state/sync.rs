/// Change detection for the index page
///
/// The admin tool writes the store behind our back and offers no push
/// notification, so the index page polls: re-read, re-aggregate, compare
/// with what is on screen, and swap on any structural difference.

use tracing::debug;

use super::aggregate::aggregate;
use super::portfolio::Portfolio;
use super::store::Store;
use crate::error::Result;

/// What caused a check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollTrigger {
    /// The fixed polling interval elapsed
    Interval,
    /// The window regained focus (the user switched back to it)
    Focus,
}

/// Result of one check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The store holds no photo records; nothing to compare
    NoStoredData,
    Unchanged,
    /// The displayed snapshot was replaced
    Changed { previous: usize, current: usize },
}

/// Re-read the store and replace `portfolio`'s snapshot if it differs.
///
/// On change the portfolio's filters reset to show everything. Callers
/// announce the change; this function only swaps state.
pub fn check_for_updates(
    store: &Store,
    portfolio: &mut Portfolio,
    trigger: PollTrigger,
) -> Result<SyncOutcome> {
    let Some(photos) = store.read_photos()? else {
        debug!("No stored photos to check ({:?})", trigger);
        return Ok(SyncOutcome::NoStoredData);
    };

    debug!("Checking for updates ({:?})...", trigger);
    let covers = store.read_covers()?;
    let fresh = aggregate(&photos, &covers);

    if fresh.as_slice() == portfolio.galleries() {
        debug!("No gallery changes detected");
        return Ok(SyncOutcome::Unchanged);
    }

    debug!("Detected new galleries, updating");
    let current = fresh.len();
    let previous = portfolio.replace(fresh);
    Ok(SyncOutcome::Changed { previous, current })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::aggregate::load_galleries;
    use crate::state::store::{COVERS_KEY, PHOTOS_KEY};

    const PHOTOS: &str = r#"[
        {"id": 1, "galleryId": 5, "galleryName": "Coast", "image": "a.jpg", "year": 2023},
        {"id": 2, "galleryId": 5, "image": "b.jpg"},
        {"id": 3, "galleryId": 7, "galleryName": "Peaks", "image": "c.jpg", "year": 2021}
    ]"#;

    /// Number of checks out of `times` that swapped the snapshot
    fn run_checks(store: &Store, portfolio: &mut Portfolio, times: usize) -> usize {
        (0..times)
            .map(|_| check_for_updates(store, portfolio, PollTrigger::Interval).unwrap())
            .filter(|outcome| matches!(outcome, SyncOutcome::Changed { .. }))
            .count()
    }

    #[test]
    fn test_identical_rereads_do_nothing() {
        let store = Store::open_in_memory().unwrap();
        store.set_item(PHOTOS_KEY, PHOTOS).unwrap();
        let mut portfolio = Portfolio::new(load_galleries(&store).unwrap());
        let before = portfolio.clone();

        let changes = run_checks(&store, &mut portfolio, 2);

        assert_eq!(changes, 0);
        assert_eq!(portfolio, before);
    }

    #[test]
    fn test_changed_store_triggers_one_update() {
        let store = Store::open_in_memory().unwrap();
        store.set_item(PHOTOS_KEY, PHOTOS).unwrap();
        let mut portfolio = Portfolio::new(load_galleries(&store).unwrap());
        portfolio.select_year(Some(2023));

        store
            .set_item(COVERS_KEY, r#"[{"galleryId": "5", "coverPhoto": {"image": "new.jpg"}}]"#)
            .unwrap();
        let changes = run_checks(&store, &mut portfolio, 3);

        assert_eq!(changes, 1);
        assert!(portfolio.selection().is_empty());
        assert_eq!(portfolio.visible().len(), 2);
        assert_eq!(portfolio.galleries()[0].cover_image.as_deref(), Some("new.jpg"));
    }

    #[test]
    fn test_counts_are_reported() {
        let store = Store::open_in_memory().unwrap();
        let mut portfolio = Portfolio::new(load_galleries(&store).unwrap());

        assert_eq!(
            check_for_updates(&store, &mut portfolio, PollTrigger::Focus).unwrap(),
            SyncOutcome::NoStoredData
        );

        store
            .set_item(PHOTOS_KEY, r#"[{"id": 1, "galleryId": 9}]"#)
            .unwrap();
        let outcome = check_for_updates(&store, &mut portfolio, PollTrigger::Focus).unwrap();

        assert_eq!(outcome, SyncOutcome::Changed { previous: 2, current: 1 });
        assert_eq!(portfolio.galleries()[0].name, "Uncategorized");
    }

    #[test]
    fn test_removed_store_keeps_last_snapshot() {
        let store = Store::open_in_memory().unwrap();
        store.set_item(PHOTOS_KEY, PHOTOS).unwrap();
        let mut portfolio = Portfolio::new(load_galleries(&store).unwrap());
        let before = portfolio.clone();

        store.remove_item(PHOTOS_KEY).unwrap();
        let outcome = check_for_updates(&store, &mut portfolio, PollTrigger::Interval).unwrap();

        assert_eq!(outcome, SyncOutcome::NoStoredData);
        assert_eq!(portfolio, before);
    }
}
