/// Current page and page size of a listing.
///
/// Both values are at least 1. Changing the page size invalidates the
/// current page offset, so it always moves back to the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page: u32,
    page_size: u32,
}

impl PaginationState {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn change_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn change_page_size(&mut self, page_size: u32) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_page_keeps_page_size() {
        let mut pagination = PaginationState::new(1, 12);
        pagination.change_page(4);
        assert_eq!(pagination.page(), 4);
        assert_eq!(pagination.page_size(), 12);
    }

    #[test]
    fn change_page_size_resets_page() {
        for start in [1, 2, 7, 300] {
            let mut pagination = PaginationState::new(start, 6);
            pagination.change_page_size(24);
            assert_eq!(pagination.page(), 1);
            assert_eq!(pagination.page_size(), 24);
        }
    }

    #[test]
    fn zero_values_are_clamped() {
        let pagination = PaginationState::new(0, 0);
        assert_eq!((pagination.page(), pagination.page_size()), (1, 1));
    }
}
