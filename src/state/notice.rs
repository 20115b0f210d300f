/// Transient notifications
///
/// One notice is shown at a time; posting replaces the current one. Each
/// notice carries an id so a delayed auto-dismiss for an older notice
/// cannot remove a newer one.

use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub posted_at: DateTime<Local>,
}

#[derive(Debug, Default)]
pub struct NoticeBoard {
    current: Option<Notice>,
    last_id: u64,
}

impl NoticeBoard {
    /// Show `message`, replacing any visible notice. Returns the new id.
    pub fn post(&mut self, message: impl Into<String>) -> u64 {
        self.last_id += 1;
        self.current = Some(Notice {
            id: self.last_id,
            message: message.into(),
            posted_at: Local::now(),
        });
        self.last_id
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Manual close
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Timed close; ignored unless `id` is still the visible notice
    pub fn expire(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_replaces_existing() {
        let mut board = NoticeBoard::default();
        let first = board.post("one");
        let second = board.post("two");

        assert_ne!(first, second);
        assert_eq!(board.current().unwrap().message, "two");
    }

    #[test]
    fn test_stale_expiry_is_ignored() {
        let mut board = NoticeBoard::default();
        let first = board.post("one");
        let second = board.post("two");

        assert!(!board.expire(first));
        assert!(board.current().is_some());

        assert!(board.expire(second));
        assert!(board.current().is_none());
    }

    #[test]
    fn test_dismiss() {
        let mut board = NoticeBoard::default();
        let id = board.post("one");
        board.dismiss();

        assert!(board.current().is_none());
        assert!(!board.expire(id));
    }
}
