use std::time::Duration;

use listing_core::{DebounceGeneration, Msg};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Single-slot timer backing the search debounce.
///
/// Arming it aborts whatever was armed before, and dropping it releases the
/// pending task, so at most one `DebounceElapsed` is ever in flight.
pub struct DebounceTimer {
    msg_tx: mpsc::UnboundedSender<Msg>,
    armed: Option<JoinHandle<()>>,
}

impl DebounceTimer {
    pub fn new(msg_tx: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            msg_tx,
            armed: None,
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, generation: DebounceGeneration, delay: Duration) {
        self.cancel();
        let msg_tx = self.msg_tx.clone();
        self.armed = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = msg_tx.send(Msg::DebounceElapsed { generation });
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.armed.take() {
            handle.abort();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
