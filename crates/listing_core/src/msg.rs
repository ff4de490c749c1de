use crate::{DebounceGeneration, ListingPage, Location, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The listing page was mounted; issues the first fetch.
    Mounted,
    /// User edited the search box (raw, not yet debounced).
    SearchTyped(String),
    /// The debounce timer armed for `generation` fired.
    DebounceElapsed { generation: DebounceGeneration },
    /// User picked a category/status.
    FilterChanged(String),
    /// User removed the category/status chip.
    FilterCleared,
    /// User removed the search chip.
    SearchCleared,
    /// User clicked "Clear all".
    FiltersCleared,
    /// User picked a page in the pager.
    PageChanged(u32),
    /// User picked a page size.
    PageSizeChanged(u32),
    /// The address bar changed outside the synchronizer (back/forward).
    LocationChanged(Location),
    /// Backend answered a list request.
    FetchSucceeded {
        request_id: RequestId,
        page: ListingPage,
    },
    /// A list request failed.
    FetchFailed {
        request_id: RequestId,
        message: String,
    },
    /// User asked to retry after a failed load.
    RetryClicked,
    /// The listing page is going away.
    Unmounted,
}
