//! Listing runtime: executes the synchronizer's effects against a history
//! stack, a debounce timer and the REST backend.
mod fetch;
mod navigator;
mod session;
mod timer;
mod types;

pub use fetch::{FetchSettings, ListingFetcher, ReqwestListingFetcher};
pub use navigator::{MemoryHistory, Navigator};
pub use session::ListingSession;
pub use timer::DebounceTimer;
pub use types::{FailureKind, FetchError};
