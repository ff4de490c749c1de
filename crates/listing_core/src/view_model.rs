use crate::{FilterOption, ListingRow, Msg, PageMeta};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingViewModel {
    pub title: String,
    /// What the address bar currently shows.
    pub location: String,
    /// What the address bar should show for the current filters.
    pub canonical_url: String,
    pub debounced_search: String,
    pub page: u32,
    pub page_size: u32,
    pub toolbar: ToolbarView,
    pub results: ResultsView,
    /// Present only when there is more than one page.
    pub pager: Option<PagerView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarView {
    pub search_text: String,
    pub filter: String,
    pub filter_label: String,
    pub filter_options: Vec<FilterOption>,
    pub chips: Vec<FilterChip>,
    pub show_clear_all: bool,
}

impl ToolbarView {
    pub fn clear_all(&self) -> Msg {
        Msg::FiltersCleared
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipKind {
    Search,
    Filter,
}

/// An active filter shown above the results, removable on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub kind: ChipKind,
    pub label: String,
}

impl FilterChip {
    pub(crate) fn search(trimmed: &str) -> Self {
        Self {
            kind: ChipKind::Search,
            label: format!("Search: {trimmed}"),
        }
    }

    pub(crate) fn filter(filter_label: &str, option_label: &str) -> Self {
        Self {
            kind: ChipKind::Filter,
            label: format!("{filter_label}: {option_label}"),
        }
    }

    pub fn remove(&self) -> Msg {
        match self.kind {
            ChipKind::Search => Msg::SearchCleared,
            ChipKind::Filter => Msg::FilterCleared,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    /// Nothing requested yet.
    Idle,
    /// One skeleton card per expected row.
    Loading { placeholders: u32 },
    Failed { message: String },
    Empty,
    Rows(Vec<ListingRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerView {
    pub page: u32,
    pub total_pages: u32,
    pub page_size: u32,
    pub page_size_options: Vec<u32>,
}

impl PagerView {
    pub(crate) fn for_meta(
        meta: &PageMeta,
        page: u32,
        page_size: u32,
        page_size_options: &[u32],
    ) -> Option<Self> {
        let total_pages = meta.total_pages();
        if total_pages <= 1 {
            return None;
        }
        Some(Self {
            page: if meta.page > 0 { meta.page } else { page },
            total_pages,
            page_size,
            page_size_options: page_size_options.to_vec(),
        })
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Message for a click on page `page`; `None` when out of range or
    /// already current.
    pub fn request_page(&self, page: u32) -> Option<Msg> {
        if page < 1 || page > self.total_pages || page == self.page {
            return None;
        }
        Some(Msg::PageChanged(page))
    }

    pub fn request_page_size(&self, page_size: u32) -> Option<Msg> {
        (page_size > 0 && page_size != self.page_size).then_some(Msg::PageSizeChanged(page_size))
    }
}
