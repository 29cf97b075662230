/// Cursor state over an entry's meanings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerState {
    NoData,
    Showing(usize),
}

/// Wrapping forward/back navigation over `len` meanings.
///
/// While `Showing(i)`, `i < len` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeaningPager {
    state: PagerState,
    len: usize,
}

impl MeaningPager {
    pub fn new() -> Self {
        Self {
            state: PagerState::NoData,
            len: 0,
        }
    }

    /// Start over on a new list of `len` meanings
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.state = if len > 0 {
            PagerState::Showing(0)
        } else {
            PagerState::NoData
        };
    }

    pub fn clear(&mut self) {
        self.reset(0);
    }

    pub fn next(&mut self) -> PagerState {
        if let PagerState::Showing(i) = self.state {
            self.state = PagerState::Showing(if i + 1 < self.len { i + 1 } else { 0 });
        }
        self.state
    }

    pub fn prev(&mut self) -> PagerState {
        if let PagerState::Showing(i) = self.state {
            self.state = PagerState::Showing(if i > 0 { i - 1 } else { self.len - 1 });
        }
        self.state
    }

    pub fn state(&self) -> PagerState {
        self.state
    }

    pub fn index(&self) -> Option<usize> {
        match self.state {
            PagerState::Showing(i) => Some(i),
            PagerState::NoData => None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Forward/back controls only make sense with more than one meaning
    pub fn has_navigation(&self) -> bool {
        self.len > 1
    }
}

impl Default for MeaningPager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev_wraps_backwards() {
        let mut pager = MeaningPager::new();
        pager.reset(3);

        let seen: Vec<_> = (0..3).map(|_| pager.prev()).collect();
        assert_eq!(
            seen,
            [
                PagerState::Showing(2),
                PagerState::Showing(1),
                PagerState::Showing(0)
            ]
        );
    }

    #[test]
    fn test_next_wraps_forwards() {
        let mut pager = MeaningPager::new();
        pager.reset(3);

        let seen: Vec<_> = (0..3).map(|_| pager.next()).collect();
        assert_eq!(
            seen,
            [
                PagerState::Showing(1),
                PagerState::Showing(2),
                PagerState::Showing(0)
            ]
        );
    }

    #[test]
    fn test_no_data_ignores_navigation() {
        let mut pager = MeaningPager::new();
        assert_eq!(pager.next(), PagerState::NoData);
        assert_eq!(pager.prev(), PagerState::NoData);

        pager.reset(0);
        assert_eq!(pager.prev(), PagerState::NoData);
        assert_eq!(pager.index(), None);
    }

    #[test]
    fn test_single_meaning_has_no_navigation() {
        let mut pager = MeaningPager::new();
        pager.reset(1);

        assert!(!pager.has_navigation());
        assert_eq!(pager.next(), PagerState::Showing(0));
        assert_eq!(pager.prev(), PagerState::Showing(0));
    }

    #[test]
    fn test_reset_returns_to_first() {
        let mut pager = MeaningPager::new();
        pager.reset(4);
        pager.next();
        pager.next();
        assert_eq!(pager.index(), Some(2));

        pager.reset(2);
        assert_eq!(pager.index(), Some(0));
        assert!(pager.has_navigation());
    }
}
