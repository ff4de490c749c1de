use anyhow::{anyhow, bail, Context};
use listing_core::{ListingViewModel, Msg};

/// One line of a listing script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the search box contents; the URL follows once typing settles.
    Type(String),
    Filter(String),
    ClearFilter,
    ClearSearch,
    ClearAll,
    Page(u32),
    PageSize(u32),
    Retry,
    Back,
    Forward,
    /// Let pending debounce timers and fetches finish.
    Settle,
    Show,
    Quit,
}

impl Command {
    /// Parses a script line; blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> anyhow::Result<Option<Self>> {
        let line = line.trim_start();
        if line.trim().is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (word, rest) = line.split_once(' ').unwrap_or((line.trim_end(), ""));
        let command = match word {
            // The search text is taken verbatim so trailing spaces survive.
            "type" => Command::Type(rest.to_string()),
            "filter" => Command::Filter(required(word, rest)?.to_string()),
            "clear-filter" => Command::ClearFilter,
            "clear-search" => Command::ClearSearch,
            "clear" => Command::ClearAll,
            "page" => Command::Page(number(word, rest)?),
            "size" => Command::PageSize(number(word, rest)?),
            "retry" => Command::Retry,
            "back" => Command::Back,
            "forward" => Command::Forward,
            "settle" => Command::Settle,
            "show" => Command::Show,
            "quit" | "exit" => Command::Quit,
            other => bail!("unknown command `{other}`"),
        };
        Ok(Some(command))
    }

    /// Message for commands that map straight onto a user interaction.
    ///
    /// Page and page-size requests go through the pager when one is shown,
    /// so out-of-range or no-op requests are dropped the way the pager
    /// drops them.
    pub fn to_msg(&self, view: &ListingViewModel) -> Option<Msg> {
        match self {
            Command::Type(text) => Some(Msg::SearchTyped(text.clone())),
            Command::Filter(value) => Some(Msg::FilterChanged(value.clone())),
            Command::ClearFilter => Some(Msg::FilterCleared),
            Command::ClearSearch => Some(Msg::SearchCleared),
            Command::ClearAll => Some(view.toolbar.clear_all()),
            Command::Page(page) => match &view.pager {
                Some(pager) => pager.request_page(*page),
                None => Some(Msg::PageChanged(*page)),
            },
            Command::PageSize(size) => match &view.pager {
                Some(pager) => pager.request_page_size(*size),
                None => Some(Msg::PageSizeChanged(*size)),
            },
            Command::Retry => Some(Msg::RetryClicked),
            Command::Back
            | Command::Forward
            | Command::Settle
            | Command::Show
            | Command::Quit => None,
        }
    }
}

fn required<'a>(word: &str, rest: &'a str) -> anyhow::Result<&'a str> {
    let value = rest.trim();
    if value.is_empty() {
        return Err(anyhow!("`{word}` needs an argument"));
    }
    Ok(value)
}

fn number(word: &str, rest: &str) -> anyhow::Result<u32> {
    let value = required(word, rest)?;
    value
        .parse()
        .with_context(|| format!("`{word}` expects a number, got `{value}`"))
}
