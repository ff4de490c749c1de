use std::time::Duration;

/// Delay applied to search input before it reaches the URL and the backend.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);

/// Token handed to the timer that will settle a pending value. Only the
/// token of the most recent input settles anything; older ones are stale.
pub type DebounceGeneration = u64;

/// Trailing-edge debounce without a clock.
///
/// Every accepted input bumps the generation and asks the caller to arm a
/// timer for it. When a timer fires, [`Debouncer::elapse`] settles the
/// pending value only if the timer's generation is still current, so a
/// superseded timer can never publish a stale value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer<T> {
    settled: T,
    pending: Option<T>,
    generation: DebounceGeneration,
    delay: Duration,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            settled: initial,
            pending: None,
            generation: 0,
            delay,
        }
    }

    pub fn settled(&self) -> &T {
        &self.settled
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Records a new input value.
    ///
    /// Returns the generation a timer must be armed for, or `None` when the
    /// value is what the debouncer already holds and no timer is needed.
    pub fn input(&mut self, value: T) -> Option<DebounceGeneration> {
        let unchanged = match &self.pending {
            Some(pending) => *pending == value,
            None => self.settled == value,
        };
        if unchanged {
            return None;
        }
        self.generation += 1;
        self.pending = Some(value);
        Some(self.generation)
    }

    /// Timer for `generation` fired. Returns the settled value, or `None`
    /// when the timer was superseded or cancelled.
    pub fn elapse(&mut self, generation: DebounceGeneration) -> Option<&T> {
        if generation != self.generation {
            return None;
        }
        let value = self.pending.take()?;
        self.settled = value;
        Some(&self.settled)
    }

    /// Drops any pending value; an in-flight timer becomes stale.
    pub fn cancel(&mut self) -> bool {
        self.generation += 1;
        self.pending.take().is_some()
    }
}
