use std::sync::Arc;

use catalog_logging::{catalog_debug, catalog_info, catalog_warn};
use listing_core::{
    update, ConfigError, Effect, FetchStatus, ListRequest, ListingState, ListingViewModel, Msg,
    NavigationMode, ScreenConfig,
};
use tokio::sync::mpsc;

use crate::{DebounceTimer, ListingFetcher, Navigator};

/// One mounted listing page: owns the synchronizer state and executes its
/// effects against a navigator, the debounce timer and the backend.
///
/// Timer and fetch completions come back as messages on an internal
/// channel; [`ListingSession::pump`] or [`ListingSession::drain`] feed them
/// back into the state machine.
pub struct ListingSession<N: Navigator> {
    config: Arc<ScreenConfig>,
    state: ListingState,
    navigator: N,
    timer: DebounceTimer,
    fetcher: Arc<dyn ListingFetcher>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
}

impl<N: Navigator> ListingSession<N> {
    /// Seeds the listing from the navigator's current location. Must be
    /// created inside a tokio runtime.
    pub fn new(
        config: ScreenConfig,
        navigator: N,
        fetcher: Arc<dyn ListingFetcher>,
    ) -> Result<Self, ConfigError> {
        let config = Arc::new(config);
        let state = ListingState::new(config.clone(), navigator.current())?;
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        Ok(Self {
            config,
            state,
            navigator,
            timer: DebounceTimer::new(msg_tx.clone()),
            fetcher,
            msg_tx,
            msg_rx,
        })
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    pub fn is_debounce_armed(&self) -> bool {
        self.timer.is_armed()
    }

    /// True while a search is waiting to settle, a page is loading, or a
    /// timer or fetch message is queued but not yet dispatched.
    pub fn is_busy(&self) -> bool {
        self.timer.is_armed()
            || !self.msg_rx.is_empty()
            || matches!(self.state.fetch_status(), FetchStatus::Loading)
    }

    /// Fresh view model when the state changed since the last call.
    pub fn take_view(&mut self) -> Option<ListingViewModel> {
        self.state.consume_dirty().then(|| self.state.view())
    }

    /// Applies `msg` and executes the resulting effects.
    pub fn dispatch(&mut self, msg: Msg) {
        let (state, effects) = update(self.state.clone(), msg);
        self.state = state;
        for effect in effects {
            self.run_effect(effect);
        }
    }

    /// Waits for the next timer or fetch message and dispatches it.
    pub async fn pump(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.dispatch(msg);
                true
            }
            None => false,
        }
    }

    /// Dispatches every message already queued, returning how many there were.
    pub fn drain(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(msg);
            count += 1;
        }
        count
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Navigate { mode, url } => match mode {
                NavigationMode::Push => self.navigator.push(&url),
                NavigationMode::Replace => self.navigator.replace(&url),
            },
            Effect::ScheduleDebounce { generation, delay } => {
                catalog_debug!("arming debounce timer {} for {:?}", generation, delay);
                self.timer.schedule(generation, delay);
            }
            Effect::CancelDebounce => self.timer.cancel(),
            Effect::Fetch(request) => self.spawn_fetch(request),
        }
    }

    fn spawn_fetch(&self, request: ListRequest) {
        let ListRequest { id, query } = request;
        catalog_info!("fetch {} for `{}`: {:?}", id, self.config.name, query);
        let fetcher = self.fetcher.clone();
        let config = self.config.clone();
        let msg_tx = self.msg_tx.clone();
        tokio::spawn(async move {
            let msg = match fetcher.fetch(&config, &query).await {
                Ok(page) => Msg::FetchSucceeded {
                    request_id: id,
                    page,
                },
                Err(err) => {
                    catalog_warn!(
                        "fetch {} for `{}` failed: {} ({})",
                        id,
                        config.name,
                        err,
                        err.kind
                    );
                    Msg::FetchFailed {
                        request_id: id,
                        message: err.message,
                    }
                }
            };
            let _ = msg_tx.send(msg);
        });
    }
}

impl<N: Navigator> Drop for ListingSession<N> {
    fn drop(&mut self) {
        self.dispatch(Msg::Unmounted);
    }
}
