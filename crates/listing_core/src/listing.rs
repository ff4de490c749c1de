use serde::Deserialize;

pub type RequestId = u64;

/// Backend list query derived from the debounced filter state.
///
/// The sentinel filter value is never part of a query, and the search term
/// is only present when it is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub page_size: u32,
    pub search: Option<String>,
    pub filter: Option<String>,
}

impl ListQuery {
    /// Query parameters for the REST list endpoint, in request order.
    pub fn to_pairs(&self, filter_param: &str) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("pageSize".to_string(), self.page_size.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        if let Some(filter) = &self.filter {
            pairs.push((filter_param.to_string(), filter.clone()));
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub id: RequestId,
    pub query: ListQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl PageMeta {
    pub fn total_pages(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        let pages = self.total.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub id: Option<i64>,
    pub label: String,
}

/// One page of results as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingPage {
    pub rows: Vec<ListingRow>,
    pub meta: PageMeta,
}
