//! Listing core: pure URL-state synchronizer for filterable, paginated
//! listing screens, plus the view-model helpers that render it.
mod config;
mod debounce;
mod effect;
mod listing;
mod msg;
mod pagination;
mod query;
mod state;
mod update;
mod view_model;

pub use config::{
    humanize_enum, ConfigError, FilterOption, ListingUrlMapping, ScreenConfig, ALL_VALUE,
};
pub use debounce::{DebounceGeneration, Debouncer, SEARCH_DEBOUNCE};
pub use effect::{Effect, NavigationMode};
pub use listing::{ListQuery, ListRequest, ListingPage, ListingRow, PageMeta, RequestId};
pub use msg::Msg;
pub use pagination::PaginationState;
pub use query::{ListingFilters, Location, UrlOverride};
pub use state::{FetchStatus, Lifecycle, ListingState};
pub use update::update;
pub use view_model::{ChipKind, FilterChip, ListingViewModel, PagerView, ResultsView, ToolbarView};
