use std::time::Duration;

use crate::{DebounceGeneration, ListRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Move the address bar to `url`.
    Navigate { mode: NavigationMode, url: String },
    /// Arm the search debounce timer; when it fires, send
    /// `Msg::DebounceElapsed { generation }` back.
    ScheduleDebounce {
        generation: DebounceGeneration,
        delay: Duration,
    },
    /// Release any armed debounce timer.
    CancelDebounce,
    /// Load a page of results from the backend.
    Fetch(ListRequest),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Add a history entry (deliberate user action).
    Push,
    /// Overwrite the current history entry (settled search input).
    Replace,
}
