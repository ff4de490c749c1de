use std::sync::Arc;

use catalog_logging::catalog_debug;

use crate::view_model::{FilterChip, ListingViewModel, PagerView, ResultsView, ToolbarView};
use crate::{
    humanize_enum, ConfigError, DebounceGeneration, Debouncer, Effect, ListQuery, ListRequest,
    ListingFilters, ListingPage, Location, NavigationMode, PaginationState, RequestId,
    ScreenConfig, UrlOverride, SEARCH_DEBOUNCE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Created,
    Mounted,
    Unmounted,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Failed {
        message: String,
    },
    Loaded(ListingPage),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct FetchState {
    next_id: RequestId,
    in_flight: Option<RequestId>,
    last_query: Option<ListQuery>,
    status: FetchStatus,
}

/// Transient filter, pagination and fetch state of one mounted listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    config: Arc<ScreenConfig>,
    location: Location,
    search_text: String,
    search: Debouncer<String>,
    /// Debounced search value seen by the last settle; the reactive URL
    /// replace only runs when a settle moves away from it.
    observed_search: String,
    filter: String,
    pagination: PaginationState,
    fetch: FetchState,
    lifecycle: Lifecycle,
    dirty: bool,
}

impl ListingState {
    /// Seeds a listing from the location it was opened at.
    pub fn new(config: Arc<ScreenConfig>, location: Location) -> Result<Self, ConfigError> {
        config.validate()?;
        let filters = ListingFilters::from_query(&location.query, &config);
        catalog_debug!(
            "listing `{}` seeded from {}: {:?}",
            config.name,
            location,
            filters
        );
        Ok(Self {
            location,
            search_text: filters.search.clone(),
            search: Debouncer::new(filters.search.clone(), SEARCH_DEBOUNCE),
            observed_search: filters.search,
            filter: filters.filter,
            pagination: PaginationState::new(filters.page, filters.page_size),
            fetch: FetchState::default(),
            lifecycle: Lifecycle::Created,
            dirty: true,
            config,
        })
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn debounced_search(&self) -> &str {
        self.search.settled()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn page(&self) -> u32 {
        self.pagination.page()
    }

    pub fn page_size(&self) -> u32 {
        self.pagination.page_size()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn fetch_status(&self) -> &FetchStatus {
        &self.fetch.status
    }

    /// URL-visible filters, using the debounced search.
    pub fn filters(&self) -> ListingFilters {
        ListingFilters {
            search: self.search.settled().clone(),
            filter: self.filter.clone(),
            page: self.pagination.page(),
            page_size: self.pagination.page_size(),
        }
    }

    /// Canonical URL for the current filters with `overrides` applied.
    pub fn build_url(&self, overrides: UrlOverride) -> String {
        overrides
            .apply(&self.filters())
            .to_url(&self.location.pathname, &self.config)
    }

    pub fn canonical_url(&self) -> String {
        self.build_url(UrlOverride::default())
    }

    pub fn list_query(&self) -> ListQuery {
        let search = self.search.settled().trim();
        ListQuery {
            page: self.pagination.page(),
            page_size: self.pagination.page_size(),
            search: (!search.is_empty()).then(|| search.to_string()),
            filter: (!self.config.is_all(&self.filter)).then(|| self.filter.clone()),
        }
    }

    /// Document title, e.g. `Artworks – Painting – Search: van gogh`.
    pub fn page_title(&self) -> String {
        let mut parts = vec![self.config.title.clone()];
        if !self.config.is_all(&self.filter) {
            parts.push(humanize_enum(&self.filter));
        }
        let search = self.search.settled();
        if !search.is_empty() {
            parts.push(format!("Search: {search}"));
        }
        parts.join(" – ")
    }

    pub fn view(&self) -> ListingViewModel {
        let trimmed_search = self.search_text.trim();
        let mut chips = Vec::new();
        if !trimmed_search.is_empty() {
            chips.push(FilterChip::search(trimmed_search));
        }
        if !self.config.is_all(&self.filter) {
            chips.push(FilterChip::filter(
                &self.config.filter_label,
                &self.config.filter_option_label(&self.filter),
            ));
        }

        let (results, pager) = match &self.fetch.status {
            FetchStatus::Idle => (ResultsView::Idle, None),
            FetchStatus::Loading => (
                ResultsView::Loading {
                    placeholders: self.pagination.page_size(),
                },
                None,
            ),
            FetchStatus::Failed { message } => (
                ResultsView::Failed {
                    message: message.clone(),
                },
                None,
            ),
            FetchStatus::Loaded(page) => {
                let results = if page.rows.is_empty() {
                    ResultsView::Empty
                } else {
                    ResultsView::Rows(page.rows.clone())
                };
                let pager = PagerView::for_meta(
                    &page.meta,
                    self.pagination.page(),
                    self.pagination.page_size(),
                    &self.config.page_size_options,
                );
                (results, pager)
            }
        };

        ListingViewModel {
            title: self.page_title(),
            location: self.location.to_url(),
            canonical_url: self.canonical_url(),
            debounced_search: self.search.settled().clone(),
            page: self.pagination.page(),
            page_size: self.pagination.page_size(),
            toolbar: ToolbarView {
                search_text: self.search_text.clone(),
                filter: self.filter.clone(),
                filter_label: self.config.filter_label.clone(),
                filter_options: self.config.filter_options.clone(),
                show_clear_all: !chips.is_empty(),
                chips,
            },
            results,
            pager,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn mount(&mut self) {
        if self.lifecycle == Lifecycle::Created {
            self.lifecycle = Lifecycle::Mounted;
            self.mark_dirty();
        }
    }

    pub(crate) fn unmount(&mut self) -> Effect {
        self.lifecycle = Lifecycle::Unmounted;
        self.search.cancel();
        self.fetch.in_flight = None;
        Effect::CancelDebounce
    }

    pub(crate) fn set_search_text(&mut self, text: String) -> Option<Effect> {
        if self.search_text != text {
            self.search_text = text.clone();
            self.mark_dirty();
        }
        self.search
            .input(text)
            .map(|generation| Effect::ScheduleDebounce {
                generation,
                delay: self.search.delay(),
            })
    }

    pub(crate) fn set_filter(&mut self, filter: String) {
        self.filter = filter;
        self.mark_dirty();
    }

    pub(crate) fn change_page(&mut self, page: u32) {
        self.pagination.change_page(page);
        self.mark_dirty();
    }

    pub(crate) fn change_page_size(&mut self, page_size: u32) {
        self.pagination.change_page_size(page_size);
        self.mark_dirty();
    }

    pub(crate) fn set_location(&mut self, location: Location) {
        if self.location != location {
            self.location = location;
            self.mark_dirty();
        }
    }

    pub(crate) fn navigate(&mut self, mode: NavigationMode, url: String) -> Effect {
        catalog_debug!("listing `{}` {:?} {}", self.config.name, mode, url);
        self.set_location(Location::parse(&url));
        Effect::Navigate { mode, url }
    }

    /// Settles the debounced search and, when it genuinely changed, resets
    /// the page and replaces the history entry if the URL differs.
    pub(crate) fn settle_search(&mut self, generation: DebounceGeneration) -> Option<Effect> {
        let Some(settled) = self.search.elapse(generation).cloned() else {
            catalog_debug!(
                "listing `{}` ignoring stale debounce tick {}",
                self.config.name,
                generation
            );
            return None;
        };

        if settled == self.observed_search {
            return None;
        }
        self.observed_search = settled.clone();
        self.mark_dirty();

        if self.pagination.page() != 1 {
            self.pagination.change_page(1);
        }

        let next = self.build_url(UrlOverride::default().search(settled).page(1));
        if next == self.location.to_url() {
            catalog_debug!(
                "listing `{}` already at {}, replace suppressed",
                self.config.name,
                next
            );
            return None;
        }
        Some(self.navigate(NavigationMode::Replace, next))
    }

    /// Issues a fetch when the backend query changed since the last request.
    pub(crate) fn sync_fetch(&mut self) -> Option<Effect> {
        if self.lifecycle != Lifecycle::Mounted {
            return None;
        }
        let query = self.list_query();
        if self.fetch.last_query.as_ref() == Some(&query) {
            return None;
        }
        Some(self.issue_fetch(query))
    }

    pub(crate) fn retry(&mut self) -> Option<Effect> {
        if self.lifecycle != Lifecycle::Mounted
            || !matches!(self.fetch.status, FetchStatus::Failed { .. })
        {
            return None;
        }
        let query = self.list_query();
        Some(self.issue_fetch(query))
    }

    fn issue_fetch(&mut self, query: ListQuery) -> Effect {
        self.fetch.next_id += 1;
        let id = self.fetch.next_id;
        self.fetch.in_flight = Some(id);
        self.fetch.last_query = Some(query.clone());
        self.fetch.status = FetchStatus::Loading;
        self.mark_dirty();
        Effect::Fetch(ListRequest { id, query })
    }

    pub(crate) fn apply_fetch_result(
        &mut self,
        request_id: RequestId,
        result: Result<ListingPage, String>,
    ) {
        if self.fetch.in_flight != Some(request_id) {
            catalog_debug!(
                "listing `{}` dropping stale response {}",
                self.config.name,
                request_id
            );
            return;
        }
        self.fetch.in_flight = None;
        self.fetch.status = match result {
            Ok(page) => FetchStatus::Loaded(page),
            Err(message) => FetchStatus::Failed { message },
        };
        self.mark_dirty();
    }
}
