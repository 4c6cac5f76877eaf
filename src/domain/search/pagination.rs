use serde::Serialize;

/// Page bookkeeping of the repository view.
///
/// `total` and `total_pages` always come from the server. Every mutation keeps
/// `page <= max(total_pages, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    total: u64,
    page: u32,
    page_size: u32,
    total_pages: u32,
}

impl PaginationState {
    pub fn new(page_size: u32) -> Self {
        Self {
            total: 0,
            page: 1,
            page_size: page_size.max(1),
            total_pages: 0,
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Highest page that may be requested.
    pub fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }

    pub fn can_select(&self, page: u32) -> bool {
        (1..=self.last_page()).contains(&page)
    }

    /// Out-of-range pages are rejected rather than clamped, so a stale
    /// `total_pages` is never masked.
    pub fn set_page(&mut self, page: u32) -> bool {
        if !self.can_select(page) {
            return false;
        }
        self.page = page;
        true
    }

    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Replace every field from a server response. A page past the last one
    /// (a hand-edited link, or a result set that shrank) falls back to 1.
    pub fn replace(&mut self, total: u64, page: u32, page_size: u32, total_pages: u32) {
        if page_size > 0 {
            self.page_size = page_size;
        }
        self.total = total;
        self.total_pages = if total_pages == 0 && total > 0 {
            total.div_ceil(u64::from(self.page_size)) as u32
        } else {
            total_pages
        };
        self.page = page.max(1);
        if self.page > self.last_page() {
            self.page = 1;
        }
    }

    /// Failed searches zero the totals, which leaves only page 1 selectable.
    pub fn clear_totals(&mut self) {
        self.total = 0;
        self.total_pages = 0;
        self.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::PaginationState;

    #[test]
    fn fresh_state_only_allows_first_page() {
        let mut state = PaginationState::new(20);
        assert!(state.can_select(1));
        assert!(!state.set_page(2));
        assert!(!state.set_page(0));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn out_of_range_page_is_a_no_op() {
        let mut state = PaginationState::new(20);
        state.replace(95, 1, 20, 5);
        assert!(state.set_page(5));
        assert!(!state.set_page(6));
        assert_eq!(state.page(), 5);
        assert!(!state.has_next());
        assert!(state.has_previous());
    }

    #[test]
    fn replace_takes_server_values() {
        let mut state = PaginationState::new(20);
        state.replace(41, 3, 10, 5);
        assert_eq!(state.total(), 41);
        assert_eq!(state.page_size(), 10);
        assert_eq!(state.total_pages(), 5);
    }

    #[test]
    fn missing_total_pages_is_derived() {
        let mut state = PaginationState::new(20);
        state.replace(41, 1, 20, 0);
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn clear_totals_returns_to_first_page() {
        let mut state = PaginationState::new(20);
        state.replace(100, 4, 20, 5);
        state.clear_totals();
        assert_eq!(state.total(), 0);
        assert_eq!(state.total_pages(), 0);
        assert_eq!(state.page(), 1);
        assert!(state.page() <= state.last_page());
    }

    #[test]
    fn server_page_past_the_end_falls_back_to_first() {
        let mut state = PaginationState::new(20);
        state.replace(40, 9, 20, 2);
        assert_eq!(state.page(), 1);
        assert_eq!(state.total_pages(), 2);

        state.replace(0, 3, 20, 0);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn zero_page_size_is_coerced() {
        assert_eq!(PaginationState::new(0).page_size(), 1);
    }
}
