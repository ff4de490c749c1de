use listing_core::{ConfigError, FilterOption, ListingFilters, ListingUrlMapping, ScreenConfig};
use pretty_assertions::assert_eq;

fn init_logging() {
    catalog_logging::initialize_for_tests();
}

#[test]
fn all_defaults_produce_bare_pathname_on_every_screen() {
    init_logging();
    for config in ScreenConfig::presets() {
        let filters = ListingFilters::defaults(&config);
        assert_eq!(filters.to_url(&config.pathname, &config), config.pathname);
    }
}

#[test]
fn non_default_filters_round_trip_through_the_query() {
    init_logging();
    let cases = [
        (ScreenConfig::artists(), "van gogh", "PAINTING", 3, 12),
        (ScreenConfig::artworks(), "", "SCULPTURE", 1, 6),
        (ScreenConfig::admin_artists(), "monet", "ALL", 2, 10),
        (ScreenConfig::admin_artworks(), "a+b & c", "DIGITAL", 1, 50),
        (ScreenConfig::inquiries(), "", "ALL", 4, 20),
        (ScreenConfig::inquiries(), "refund", "ARCHIVED", 1, 50),
    ];

    for (config, search, filter, page, page_size) in cases {
        let filters = ListingFilters {
            search: search.to_string(),
            filter: filter.to_string(),
            page,
            page_size,
        };
        assert!(!filters.is_default(&config));
        let url = filters.to_url(&config.pathname, &config);
        let (pathname, query) = url.split_once('?').expect("non-default url has a query");
        assert_eq!(pathname, config.pathname);
        assert_eq!(ListingFilters::from_query(query, &config), filters);
    }
}

#[test]
fn page_and_page_size_are_always_written_once_non_default() {
    let config = ScreenConfig::artworks();
    let category_only = ListingFilters {
        filter: "PAINTING".to_string(),
        ..ListingFilters::defaults(&config)
    };
    assert_eq!(
        category_only.to_url("/artworks", &config),
        "/artworks?category=PAINTING&page=1&pageSize=6"
    );

    let page_only = ListingFilters {
        page: 2,
        ..ListingFilters::defaults(&config)
    };
    assert_eq!(
        page_only.to_url("/artworks", &config),
        "/artworks?page=2&pageSize=6"
    );
}

#[test]
fn search_is_trimmed_and_spaces_are_percent_encoded() {
    let config = ScreenConfig::artworks();
    let filters = ListingFilters {
        search: "  van gogh ".to_string(),
        ..ListingFilters::defaults(&config)
    };
    assert_eq!(
        filters.to_url("/artworks", &config),
        "/artworks?search=van%20gogh&page=1&pageSize=6"
    );

    let whitespace_only = ListingFilters {
        search: "   ".to_string(),
        ..ListingFilters::defaults(&config)
    };
    assert_eq!(whitespace_only.to_url("/artworks", &config), "/artworks");
}

#[test]
fn plus_signs_survive_encoding() {
    let config = ScreenConfig::artworks();
    let filters = ListingFilters {
        search: "c++ art".to_string(),
        ..ListingFilters::defaults(&config)
    };
    let url = filters.to_url("/artworks", &config);
    assert_eq!(url, "/artworks?search=c%2B%2B%20art&page=1&pageSize=6");
    let parsed = ListingFilters::from_query(url.split_once('?').unwrap().1, &config);
    assert_eq!(parsed.search, "c++ art");
}

#[test]
fn screen_specific_filter_keys_are_used() {
    let artists = ScreenConfig::artists();
    let filters = ListingFilters {
        filter: "PAINTING".to_string(),
        ..ListingFilters::defaults(&artists)
    };
    assert_eq!(
        filters.to_url("/artists", &artists),
        "/artists?primaryCategory=PAINTING&page=1&pageSize=6"
    );

    let inquiries = ScreenConfig::inquiries();
    let filters = ListingFilters {
        filter: "NEW".to_string(),
        ..ListingFilters::defaults(&inquiries)
    };
    assert_eq!(
        filters.to_url("/admin/inquiries", &inquiries),
        "/admin/inquiries?status=NEW&page=1&pageSize=20"
    );
}

#[test]
fn initial_extraction_falls_back_to_defaults() {
    let config = ScreenConfig::artworks();
    assert_eq!(
        ListingFilters::from_query("", &config),
        ListingFilters::defaults(&config)
    );
    assert_eq!(
        ListingFilters::from_query("?page=abc&pageSize=0&category=&utm_source=x", &config),
        ListingFilters::defaults(&config)
    );

    let parsed = ListingFilters::from_query("page=3&page=9&search=a+b", &config);
    assert_eq!(parsed.page, 3);
    assert_eq!(parsed.search, "a b");
}

#[test]
fn unknown_inquiry_status_maps_to_all() {
    let config = ScreenConfig::inquiries();
    let parsed = ListingFilters::from_query("status=SPAM&page=2&pageSize=10", &config);
    assert_eq!(parsed.filter, "ALL");
    assert_eq!(parsed.page, 2);
    assert_eq!(parsed.page_size, 10);

    let parsed = ListingFilters::from_query("status=READ", &config);
    assert_eq!(parsed.filter, "READ");
}

#[test]
fn unrestricted_screens_pass_unknown_categories_through() {
    let config = ScreenConfig::artworks();
    let parsed = ListingFilters::from_query("category=CERAMICS", &config);
    assert_eq!(parsed.filter, "CERAMICS");
}

#[test]
fn presets_are_valid() {
    for config in ScreenConfig::presets() {
        assert_eq!(config.validate(), Ok(()), "{}", config.name);
    }
    assert!(ScreenConfig::preset("inquiries").is_some());
    assert!(ScreenConfig::preset("dashboard").is_none());
}

#[test]
fn misconfigured_mappings_are_rejected() {
    let mut config = ScreenConfig::artworks();
    config.mapping = ListingUrlMapping {
        filter_key: "page".to_string(),
        ..ListingUrlMapping::new("category")
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::DuplicateKey {
            screen: "artworks".to_string(),
            key: "page".to_string(),
        })
    );

    let mut config = ScreenConfig::artworks();
    config.mapping.filter_key = " ".to_string();
    assert_eq!(
        config.validate(),
        Err(ConfigError::EmptyField {
            screen: "artworks".to_string(),
            field: "filter key",
        })
    );

    let mut config = ScreenConfig::artworks();
    config.default_page_size = 0;
    assert_eq!(
        config.validate(),
        Err(ConfigError::ZeroPageSize {
            screen: "artworks".to_string(),
        })
    );

    let mut config = ScreenConfig::artworks();
    config.pathname = "artworks".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::RelativePathname { .. })
    ));

    let mut config = ScreenConfig::artworks();
    config.all_value = String::new();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::EmptyField {
            field: "all value",
            ..
        })
    ));

    let mut config = ScreenConfig::inquiries();
    config.all_value = "EVERYTHING".to_string();
    config.filter_options = vec![FilterOption::new("NEW", "New")];
    assert_eq!(
        config.validate(),
        Err(ConfigError::SentinelNotAllowed {
            screen: "inquiries".to_string(),
            value: "EVERYTHING".to_string(),
        })
    );

    // Unrestricted screens may list options without the sentinel.
    let mut config = ScreenConfig::artworks();
    config.filter_options.retain(|option| option.value != "ALL");
    assert_eq!(config.validate(), Ok(()));
}
