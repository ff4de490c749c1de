use catalog_logging::{catalog_debug, catalog_warn};

use crate::{Effect, Lifecycle, ListingState, Msg, NavigationMode, UrlOverride};

/// Pure update function: applies a message to state and returns any effects.
///
/// User actions update local state first and then push a history entry. A
/// settled search replaces the current entry instead, and only when the
/// resulting URL differs from the address bar.
pub fn update(mut state: ListingState, msg: Msg) -> (ListingState, Vec<Effect>) {
    if state.lifecycle() == Lifecycle::Unmounted {
        return (state, Vec::new());
    }

    let mut effects = Vec::new();
    match msg {
        Msg::Mounted => state.mount(),
        Msg::SearchTyped(text) => effects.extend(state.set_search_text(text)),
        Msg::DebounceElapsed { generation } => effects.extend(state.settle_search(generation)),
        Msg::FilterChanged(value) => {
            let value = if value.is_empty() {
                state.config().all_value.clone()
            } else {
                value
            };
            if state.config().accepts_filter(&value) {
                state.set_filter(value.clone());
                state.change_page(1);
                let url = state.build_url(UrlOverride::default().filter(value).page(1));
                effects.push(state.navigate(NavigationMode::Push, url));
            } else {
                catalog_warn!(
                    "listing `{}` rejected unknown {} value {:?}",
                    state.config().name,
                    state.config().filter_label,
                    value
                );
            }
        }
        Msg::FilterCleared => {
            let all = state.config().all_value.clone();
            state.set_filter(all.clone());
            state.change_page(1);
            let url = state.build_url(UrlOverride::default().filter(all).page(1));
            effects.push(state.navigate(NavigationMode::Push, url));
        }
        Msg::SearchCleared => {
            let schedule = state.set_search_text(String::new());
            state.change_page(1);
            let url = state.build_url(UrlOverride::default().search("").page(1));
            effects.push(state.navigate(NavigationMode::Push, url));
            effects.extend(schedule);
        }
        Msg::FiltersCleared => {
            let schedule = state.set_search_text(String::new());
            let all = state.config().all_value.clone();
            let default_page_size = state.config().default_page_size;
            state.set_filter(all);
            state.change_page_size(default_page_size);
            // Straight to the bare pathname; no query can survive a reset.
            let pathname = state.location().pathname.clone();
            effects.push(state.navigate(NavigationMode::Push, pathname));
            effects.extend(schedule);
        }
        Msg::PageChanged(page) => {
            if page == 0 {
                catalog_debug!("listing `{}` ignoring page 0", state.config().name);
            } else {
                state.change_page(page);
                let url = state.build_url(UrlOverride::default().page(page));
                effects.push(state.navigate(NavigationMode::Push, url));
            }
        }
        Msg::PageSizeChanged(page_size) => {
            if page_size == 0 {
                catalog_debug!("listing `{}` ignoring page size 0", state.config().name);
            } else {
                state.change_page_size(page_size);
                let url = state.build_url(UrlOverride::default().page_size(page_size).page(1));
                effects.push(state.navigate(NavigationMode::Push, url));
            }
        }
        Msg::LocationChanged(location) => state.set_location(location),
        Msg::FetchSucceeded { request_id, page } => state.apply_fetch_result(request_id, Ok(page)),
        Msg::FetchFailed {
            request_id,
            message,
        } => state.apply_fetch_result(request_id, Err(message)),
        Msg::RetryClicked => effects.extend(state.retry()),
        Msg::Unmounted => {
            effects.push(state.unmount());
            return (state, effects);
        }
    }

    effects.extend(state.sync_fetch());
    (state, effects)
}
