//! Canonical query-string codec for listing screens.
//!
//! A listing URL carries at most four fields (search, filter, page, page
//! size). When every field is at its default the URL is the bare pathname;
//! otherwise page and page size are always written, while search and filter
//! are written only when they differ from their defaults.

use std::fmt;

use url::form_urlencoded;

use crate::ScreenConfig;

/// Address-bar location as seen by a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub pathname: String,
    /// Query string without the leading `?`.
    pub query: String,
}

impl Location {
    pub fn new(pathname: impl Into<String>, query: impl Into<String>) -> Self {
        let query = query.into();
        Self {
            pathname: pathname.into(),
            query: query.strip_prefix('?').unwrap_or(&query).to_string(),
        }
    }

    /// Splits `pathname?query` at the first `?`.
    pub fn parse(url: &str) -> Self {
        match url.split_once('?') {
            Some((pathname, query)) => Self::new(pathname, query),
            None => Self::new(url, ""),
        }
    }

    pub fn to_url(&self) -> String {
        if self.query.is_empty() {
            self.pathname.clone()
        } else {
            format!("{}?{}", self.pathname, self.query)
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}

/// The URL-visible part of a listing's filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFilters {
    pub search: String,
    pub filter: String,
    pub page: u32,
    pub page_size: u32,
}

impl ListingFilters {
    pub fn defaults(config: &ScreenConfig) -> Self {
        Self {
            search: String::new(),
            filter: config.all_value.clone(),
            page: 1,
            page_size: config.default_page_size,
        }
    }

    /// Reads initial filters from an incoming query string, falling back to
    /// the screen defaults for anything missing or malformed.
    pub fn from_query(query: &str, config: &ScreenConfig) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut search = None;
        let mut filter = None;
        let mut page = None;
        let mut page_size = None;

        let mapping = &config.mapping;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = if key == mapping.search_key.as_str() {
                &mut search
            } else if key == mapping.filter_key.as_str() {
                &mut filter
            } else if key == mapping.page_key.as_str() {
                &mut page
            } else if key == mapping.page_size_key.as_str() {
                &mut page_size
            } else {
                continue;
            };
            // First occurrence wins.
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        let filter = filter
            .filter(|value| config.accepts_filter(value))
            .unwrap_or_else(|| config.all_value.clone());

        Self {
            search: search.unwrap_or_default(),
            filter,
            page: to_positive_int(page.as_deref(), 1),
            page_size: to_positive_int(page_size.as_deref(), config.default_page_size),
        }
    }

    pub fn is_default(&self, config: &ScreenConfig) -> bool {
        self.search.trim().is_empty()
            && config.is_all(&self.filter)
            && self.page == 1
            && self.page_size == config.default_page_size
    }

    /// Serializes these filters into the canonical URL for `pathname`.
    pub fn to_url(&self, pathname: &str, config: &ScreenConfig) -> String {
        if self.is_default(config) {
            return pathname.to_string();
        }

        let mapping = &config.mapping;
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        let search = self.search.trim();
        if !search.is_empty() {
            serializer.append_pair(&mapping.search_key, search);
        }
        if !self.filter.is_empty() && !config.is_all(&self.filter) {
            serializer.append_pair(&mapping.filter_key, &self.filter);
        }
        serializer.append_pair(&mapping.page_key, &self.page.to_string());
        serializer.append_pair(&mapping.page_size_key, &self.page_size.to_string());

        // A literal '+' is already escaped as %2B, so every remaining '+' is a space.
        let query = serializer.finish().replace('+', "%20");
        format!("{pathname}?{query}")
    }
}

/// Partial replacement for the current filters when building a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlOverride {
    pub search: Option<String>,
    pub filter: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl UrlOverride {
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn apply(self, current: &ListingFilters) -> ListingFilters {
        ListingFilters {
            search: self.search.unwrap_or_else(|| current.search.clone()),
            filter: self.filter.unwrap_or_else(|| current.filter.clone()),
            page: self.page.unwrap_or(current.page),
            page_size: self.page_size.unwrap_or(current.page_size),
        }
    }
}

fn to_positive_int(raw: Option<&str>, fallback: u32) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|&value| value > 0)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_positive_int_falls_back_on_garbage() {
        assert_eq!(to_positive_int(Some("3"), 1), 3);
        assert_eq!(to_positive_int(Some(" 12 "), 1), 12);
        assert_eq!(to_positive_int(Some("0"), 6), 6);
        assert_eq!(to_positive_int(Some("-2"), 6), 6);
        assert_eq!(to_positive_int(Some("abc"), 6), 6);
        assert_eq!(to_positive_int(None, 6), 6);
    }

    #[test]
    fn location_parse_splits_on_first_question_mark() {
        let location = Location::parse("/artworks?search=a?b&page=1");
        assert_eq!(location.pathname, "/artworks");
        assert_eq!(location.query, "search=a?b&page=1");
        assert_eq!(location.to_url(), "/artworks?search=a?b&page=1");
        assert_eq!(Location::parse("/artworks").to_url(), "/artworks");
        assert_eq!(Location::new("/artworks", "?page=2").query, "page=2");
    }
}
