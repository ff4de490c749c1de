use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

/// Value that stands for "no filter applied" on the category/status dimension.
pub const ALL_VALUE: &str = "ALL";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("screen `{screen}`: {field} must not be empty")]
    EmptyField { screen: String, field: &'static str },
    #[error("screen `{screen}`: query key `{key}` is mapped more than once")]
    DuplicateKey { screen: String, key: String },
    #[error("screen `{screen}`: default page size must be at least 1")]
    ZeroPageSize { screen: String },
    #[error("screen `{screen}`: pathname `{pathname}` must start with '/'")]
    RelativePathname { screen: String, pathname: String },
    #[error("screen `{screen}`: page size option {size} is not a positive integer")]
    InvalidPageSizeOption { screen: String, size: u32 },
    #[error("screen `{screen}`: restricted filter options must include the sentinel `{value}`")]
    SentinelNotAllowed { screen: String, value: String },
}

/// Query-string keys used by one listing screen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingUrlMapping {
    #[serde(default = "default_search_key")]
    pub search_key: String,
    pub filter_key: String,
    #[serde(default = "default_page_key")]
    pub page_key: String,
    #[serde(default = "default_page_size_key")]
    pub page_size_key: String,
}

fn default_search_key() -> String {
    "search".to_string()
}

fn default_page_key() -> String {
    "page".to_string()
}

fn default_page_size_key() -> String {
    "pageSize".to_string()
}

impl ListingUrlMapping {
    /// Mapping with the conventional `search`/`page`/`pageSize` keys.
    pub fn new(filter_key: impl Into<String>) -> Self {
        Self {
            search_key: default_search_key(),
            filter_key: filter_key.into(),
            page_key: default_page_key(),
            page_size_key: default_page_size_key(),
        }
    }

    fn keys(&self) -> [(&'static str, &str); 4] {
        [
            ("search key", self.search_key.as_str()),
            ("filter key", self.filter_key.as_str()),
            ("page key", self.page_key.as_str()),
            ("page size key", self.page_size_key.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Static description of a filterable, paginated listing screen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScreenConfig {
    pub name: String,
    /// Heading shown on the page and used as the first part of the page title.
    pub title: String,
    pub pathname: String,
    /// REST list endpoint, relative to the API base URL.
    pub resource: String,
    pub mapping: ListingUrlMapping,
    pub default_page_size: u32,
    #[serde(default)]
    pub page_size_options: Vec<u32>,
    #[serde(default = "default_all_value")]
    pub all_value: String,
    #[serde(default = "default_filter_label")]
    pub filter_label: String,
    #[serde(default)]
    pub filter_options: Vec<FilterOption>,
    /// When set, filter values outside `filter_options` are treated as the
    /// sentinel instead of being passed through.
    #[serde(default)]
    pub restrict_filter_values: bool,
    /// JSON field of a listed item used as its display label.
    #[serde(default = "default_label_field")]
    pub label_field: String,
}

fn default_all_value() -> String {
    ALL_VALUE.to_string()
}

fn default_filter_label() -> String {
    "Category".to_string()
}

fn default_label_field() -> String {
    "name".to_string()
}

impl ScreenConfig {
    /// Public artist gallery, filtered by primary category.
    pub fn artists() -> Self {
        Self {
            name: "artists".to_string(),
            title: "Artists".to_string(),
            pathname: "/artists".to_string(),
            resource: "/api/artists".to_string(),
            mapping: ListingUrlMapping::new("primaryCategory"),
            default_page_size: 6,
            page_size_options: vec![6, 12, 24, 48, 96],
            all_value: default_all_value(),
            filter_label: default_filter_label(),
            filter_options: artwork_category_options(),
            restrict_filter_values: false,
            label_field: "name".to_string(),
        }
    }

    /// Public artwork gallery, filtered by category.
    pub fn artworks() -> Self {
        Self {
            name: "artworks".to_string(),
            title: "Artworks".to_string(),
            pathname: "/artworks".to_string(),
            resource: "/api/artworks".to_string(),
            mapping: ListingUrlMapping::new("category"),
            default_page_size: 6,
            page_size_options: vec![6, 12, 24, 48],
            label_field: "title".to_string(),
            ..Self::artists()
        }
    }

    pub fn admin_artists() -> Self {
        Self {
            name: "admin_artists".to_string(),
            title: "Admin – Artists".to_string(),
            pathname: "/admin/artists".to_string(),
            default_page_size: 10,
            page_size_options: vec![5, 10, 20, 50],
            ..Self::artists()
        }
    }

    pub fn admin_artworks() -> Self {
        Self {
            name: "admin_artworks".to_string(),
            title: "Admin – Artworks".to_string(),
            pathname: "/admin/artworks".to_string(),
            default_page_size: 10,
            page_size_options: vec![5, 10, 20, 50],
            ..Self::artworks()
        }
    }

    /// Admin inquiry inbox, filtered by status tab.
    pub fn inquiries() -> Self {
        Self {
            name: "inquiries".to_string(),
            title: "Admin – Inquiries".to_string(),
            pathname: "/admin/inquiries".to_string(),
            resource: "/api/inquiries".to_string(),
            mapping: ListingUrlMapping::new("status"),
            default_page_size: 20,
            page_size_options: vec![10, 20, 50],
            all_value: default_all_value(),
            filter_label: "Status".to_string(),
            filter_options: vec![
                FilterOption::new(ALL_VALUE, "All"),
                FilterOption::new("NEW", "New"),
                FilterOption::new("READ", "Read"),
                FilterOption::new("ARCHIVED", "Archived"),
            ],
            restrict_filter_values: true,
            label_field: "name".to_string(),
        }
    }

    /// All built-in screens.
    pub fn presets() -> Vec<Self> {
        vec![
            Self::artists(),
            Self::artworks(),
            Self::admin_artists(),
            Self::admin_artworks(),
            Self::inquiries(),
        ]
    }

    pub fn preset(name: &str) -> Option<Self> {
        Self::presets().into_iter().find(|config| config.name == name)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let screen = || self.name.clone();
        let non_empty = [
            ("name", self.name.as_str()),
            ("pathname", self.pathname.as_str()),
            ("resource", self.resource.as_str()),
            ("all value", self.all_value.as_str()),
            ("label field", self.label_field.as_str()),
        ];
        for (field, value) in non_empty.into_iter().chain(self.mapping.keys()) {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField {
                    screen: screen(),
                    field,
                });
            }
        }

        if !self.pathname.starts_with('/') {
            return Err(ConfigError::RelativePathname {
                screen: screen(),
                pathname: self.pathname.clone(),
            });
        }

        let mut seen = HashSet::new();
        for (_, key) in self.mapping.keys() {
            if !seen.insert(key) {
                return Err(ConfigError::DuplicateKey {
                    screen: screen(),
                    key: key.to_string(),
                });
            }
        }

        if self.default_page_size == 0 {
            return Err(ConfigError::ZeroPageSize { screen: screen() });
        }
        if let Some(&size) = self.page_size_options.iter().find(|&&size| size == 0) {
            return Err(ConfigError::InvalidPageSizeOption {
                screen: screen(),
                size,
            });
        }
        if self.restrict_filter_values
            && !self
                .filter_options
                .iter()
                .any(|option| self.is_all(&option.value))
        {
            return Err(ConfigError::SentinelNotAllowed {
                screen: screen(),
                value: self.all_value.clone(),
            });
        }
        Ok(())
    }

    pub fn is_all(&self, value: &str) -> bool {
        value == self.all_value
    }

    /// Whether a filter value read from a URL may be used as-is.
    pub fn accepts_filter(&self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        !self.restrict_filter_values
            || self.is_all(value)
            || self.filter_options.iter().any(|option| option.value == value)
    }

    pub fn filter_option_label(&self, value: &str) -> String {
        self.filter_options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.clone())
            .unwrap_or_else(|| humanize_enum(value))
    }
}

fn artwork_category_options() -> Vec<FilterOption> {
    let mut categories = vec![
        FilterOption::new("PAINTING", "Painting"),
        FilterOption::new("SCULPTURE", "Sculpture"),
        FilterOption::new("DIGITAL", "Digital"),
        FilterOption::new("PHOTOGRAPHY", "Photography"),
        FilterOption::new("OTHER", "Other"),
    ];
    categories.sort_by(|a, b| a.label.cmp(&b.label));

    let mut options = Vec::with_capacity(categories.len() + 1);
    options.push(FilterOption::new(ALL_VALUE, "All categories"));
    options.extend(categories);
    options
}

/// Converts `ENUM_VALUE` to `"Enum Value"`.
pub fn humanize_enum(value: &str) -> String {
    value
        .to_lowercase()
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
