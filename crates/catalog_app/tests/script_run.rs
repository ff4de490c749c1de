use std::sync::Arc;

use catalog_app::run::run_script;
use listing_core::{ListQuery, ListingPage, ListingRow, NavigationMode, PageMeta, ScreenConfig};
use listing_runtime::{FetchError, ListingFetcher, ListingSession, MemoryHistory};
use pretty_assertions::assert_eq;

/// Serves 20 numbered items regardless of filters.
struct CatalogStub;

#[async_trait::async_trait]
impl ListingFetcher for CatalogStub {
    async fn fetch(
        &self,
        _config: &ScreenConfig,
        query: &ListQuery,
    ) -> Result<ListingPage, FetchError> {
        let first = (query.page - 1) * query.page_size;
        let last = (first + query.page_size).min(20);
        Ok(ListingPage {
            rows: (first..last)
                .map(|i| ListingRow {
                    id: Some(i64::from(i) + 1),
                    label: format!("Artwork {}", i + 1),
                })
                .collect(),
            meta: PageMeta {
                page: query.page,
                page_size: query.page_size,
                total: 20,
            },
        })
    }
}

async fn run(url: &str, script: &str) -> (ListingSession<MemoryHistory>, String) {
    catalog_logging::initialize_for_tests();
    let mut session = ListingSession::new(
        ScreenConfig::artworks(),
        MemoryHistory::new(url),
        Arc::new(CatalogStub),
    )
    .unwrap();
    let mut out = Vec::new();
    run_script(&mut session, script.as_bytes(), &mut out)
        .await
        .unwrap();
    (session, String::from_utf8(out).unwrap())
}

#[tokio::test(start_paused = true)]
async fn typed_search_replaces_once_after_settling() {
    let (session, out) = run("/artworks", "type v\ntype van\ntype van gogh\nsettle\n").await;

    assert_eq!(
        session.navigator().calls(),
        [(
            NavigationMode::Replace,
            "/artworks?search=van%20gogh&page=1&pageSize=6".to_string()
        )]
    );
    assert_eq!(out.matches("replace ").count(), 1);
    assert!(out.contains("[Search: van gogh x] [Clear all]"));
}

#[tokio::test(start_paused = true)]
async fn paging_and_clearing_push_history_entries() {
    let script = "settle\npage 2\nfilter SCULPTURE\nclear\nsettle\n";
    let (session, out) = run("/artworks", script).await;

    assert_eq!(
        session.navigator().calls(),
        [
            (NavigationMode::Push, "/artworks?page=2&pageSize=6".to_string()),
            (
                NavigationMode::Push,
                "/artworks?category=SCULPTURE&page=1&pageSize=6".to_string()
            ),
            (NavigationMode::Push, "/artworks".to_string()),
        ]
    );
    assert!(out.contains("page 1 of 4"));
}

#[tokio::test(start_paused = true)]
async fn out_of_range_page_is_ignored_by_the_pager() {
    let (session, out) = run("/artworks", "settle\npage 9\n").await;
    assert!(session.navigator().calls().is_empty());
    assert!(out.contains("ignored: Page(9)"));
}

#[tokio::test(start_paused = true)]
async fn back_moves_the_tracked_location() {
    let (session, out) = run("/artworks", "settle\npage 3\nback\nback\n").await;
    assert_eq!(session.state().location().to_url(), "/artworks");
    assert!(out.contains("already at the oldest entry"));
}

#[tokio::test(start_paused = true)]
async fn bad_lines_are_reported_and_skipped() {
    let (_session, out) = run("/artworks", "jump 3\nquit\npage 2\n").await;
    assert!(out.contains("error: unknown command `jump`"));
    assert!(!out.contains("push "));
}
