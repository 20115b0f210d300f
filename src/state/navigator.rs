/// Lightbox position within one gallery's photo list

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Navigator {
    #[default]
    Closed,
    Open(usize),
}

impl Navigator {
    /// Open at `index`; ignored when there is no such photo
    pub fn open(&mut self, index: usize, len: usize) {
        if index < len {
            *self = Navigator::Open(index);
        }
    }

    pub fn close(&mut self) {
        *self = Navigator::Closed;
    }

    /// Step back; no-op at the first photo or when closed
    pub fn previous(&mut self) {
        if let Navigator::Open(i) = *self {
            if i > 0 {
                *self = Navigator::Open(i - 1);
            }
        }
    }

    /// Step forward; no-op at the last photo or when closed
    pub fn next(&mut self, len: usize) {
        if let Navigator::Open(i) = *self {
            if i + 1 < len {
                *self = Navigator::Open(i + 1);
            }
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Navigator::Closed => None,
            Navigator::Open(i) => Some(*i),
        }
    }

    /// While open, the grid behind the lightbox must not scroll
    pub fn is_open(&self) -> bool {
        matches!(self, Navigator::Open(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_at_start_is_noop() {
        let mut nav = Navigator::default();
        nav.open(0, 3);
        nav.previous();
        assert_eq!(nav, Navigator::Open(0));
    }

    #[test]
    fn test_next_at_end_is_noop() {
        let mut nav = Navigator::default();
        nav.open(2, 3);
        nav.next(3);
        assert_eq!(nav, Navigator::Open(2));
    }

    #[test]
    fn test_walks_forward_and_back() {
        let mut nav = Navigator::default();
        nav.open(0, 3);
        nav.next(3);
        nav.next(3);
        assert_eq!(nav.index(), Some(2));
        nav.previous();
        assert_eq!(nav.index(), Some(1));
    }

    #[test]
    fn test_close_from_any_index() {
        for i in 0..3 {
            let mut nav = Navigator::default();
            nav.open(i, 3);
            assert!(nav.is_open());
            nav.close();
            assert_eq!(nav, Navigator::Closed);
        }
    }

    #[test]
    fn test_closed_ignores_navigation_and_bad_open() {
        let mut nav = Navigator::default();
        nav.next(3);
        nav.previous();
        assert_eq!(nav, Navigator::Closed);

        nav.open(5, 3);
        assert_eq!(nav, Navigator::Closed);
        nav.open(0, 0);
        assert!(!nav.is_open());
    }
}
