use std::fs;

use catalog_app::config::{load_screens, resolve_screen};
use listing_core::ScreenConfig;
use pretty_assertions::assert_eq;

const PRINTS: &str = r#"(
    screens: [
        (
            name: "prints",
            title: "Prints",
            pathname: "/prints",
            resource: "/api/artworks",
            mapping: (filter_key: "category"),
            default_page_size: 12,
            page_size_options: [12, 24],
            filter_options: [
                (value: "ALL", label: "All categories"),
                (value: "PRINT", label: "Print"),
            ],
            label_field: "title",
        ),
    ],
)"#;

#[test]
fn screens_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("screens.ron");
    fs::write(&path, PRINTS).unwrap();

    let screens = load_screens(&path).unwrap();
    assert_eq!(screens.len(), 1);
    let prints = &screens[0];
    assert_eq!(prints.mapping.search_key, "search");
    assert_eq!(prints.mapping.page_key, "page");
    assert_eq!(prints.mapping.page_size_key, "pageSize");
    assert_eq!(prints.all_value, "ALL");
    assert_eq!(prints.filter_label, "Category");
    assert!(!prints.restrict_filter_values);
}

#[test]
fn invalid_screen_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("screens.ron");
    fs::write(&path, PRINTS.replace("default_page_size: 12", "default_page_size: 0")).unwrap();

    let err = load_screens(&path).unwrap_err();
    assert!(format!("{err:#}").contains("invalid screen"));
}

#[test]
fn missing_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.ron");
    let err = load_screens(&path).unwrap_err();
    assert!(err.to_string().contains("absent.ron"));
}

#[test]
fn loaded_screens_shadow_presets() {
    let mut custom = ScreenConfig::artworks();
    custom.default_page_size = 24;

    let resolved = resolve_screen("artworks", &[custom]).unwrap();
    assert_eq!(resolved.default_page_size, 24);
    assert_eq!(
        resolve_screen("inquiries", &[]).unwrap(),
        ScreenConfig::inquiries()
    );

    let err = resolve_screen("sculptures", &[]).unwrap_err();
    assert!(err.to_string().contains("unknown screen `sculptures`"));
}

#[test]
fn unknown_screen_lists_each_known_name_once() {
    let mut custom = ScreenConfig::artworks();
    custom.default_page_size = 24;

    let err = resolve_screen("sculptures", &[custom]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown screen `sculptures` (known: admin_artists, admin_artworks, artists, artworks, inquiries)"
    );
}
