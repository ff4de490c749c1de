use listing_core::{Location, NavigationMode};

/// Imperative handle on the address bar and its history stack.
pub trait Navigator {
    fn current(&self) -> Location;
    fn push(&mut self, url: &str);
    fn replace(&mut self, url: &str);
}

/// Browser-like history kept in memory, recording every navigation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
    calls: Vec<(NavigationMode, String)>,
}

impl MemoryHistory {
    pub fn new(initial_url: impl Into<String>) -> Self {
        Self {
            entries: vec![initial_url.into()],
            index: 0,
            calls: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Every push/replace issued so far, in order.
    pub fn calls(&self) -> &[(NavigationMode, String)] {
        &self.calls
    }

    pub fn count(&self, mode: NavigationMode) -> usize {
        self.calls.iter().filter(|(m, _)| *m == mode).count()
    }

    /// Steps back one entry; `None` at the start of history.
    pub fn back(&mut self) -> Option<Location> {
        self.index = self.index.checked_sub(1)?;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<Location> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }
}

impl Navigator for MemoryHistory {
    fn current(&self) -> Location {
        self.entries
            .get(self.index)
            .map(|url| Location::parse(url))
            .unwrap_or_default()
    }

    fn push(&mut self, url: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(url.to_string());
        self.index = self.entries.len() - 1;
        self.calls.push((NavigationMode::Push, url.to_string()));
    }

    fn replace(&mut self, url: &str) {
        match self.entries.get_mut(self.index) {
            Some(entry) => *entry = url.to_string(),
            None => self.entries.push(url.to_string()),
        }
        self.calls.push((NavigationMode::Replace, url.to_string()));
    }
}
