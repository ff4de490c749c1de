use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context};
use catalog_logging::catalog_info;
use listing_core::ScreenConfig;
use serde::Deserialize;

/// Top-level shape of a screens file:
///
/// ```ron
/// (
///     screens: [
///         (
///             name: "prints",
///             title: "Prints",
///             pathname: "/prints",
///             resource: "/api/artworks",
///             mapping: (filter_key: "category"),
///             default_page_size: 12,
///         ),
///     ],
/// )
/// ```
#[derive(Debug, Deserialize)]
struct ScreensFile {
    screens: Vec<ScreenConfig>,
}

/// Reads and validates every screen in a RON screens file.
pub fn load_screens(path: &Path) -> anyhow::Result<Vec<ScreenConfig>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read screens file {}", path.display()))?;
    let file: ScreensFile = ron::from_str(&content)
        .with_context(|| format!("failed to parse screens file {}", path.display()))?;
    for screen in &file.screens {
        screen
            .validate()
            .with_context(|| format!("invalid screen in {}", path.display()))?;
    }
    catalog_info!(
        "Loaded {} screen(s) from {:?}",
        file.screens.len(),
        path
    );
    Ok(file.screens)
}

/// Picks `name` from the loaded screens, falling back to the built-in presets.
pub fn resolve_screen(name: &str, loaded: &[ScreenConfig]) -> anyhow::Result<ScreenConfig> {
    loaded
        .iter()
        .find(|screen| screen.name == name)
        .cloned()
        .or_else(|| ScreenConfig::preset(name))
        .ok_or_else(|| {
            let known: BTreeSet<String> = ScreenConfig::presets()
                .into_iter()
                .map(|screen| screen.name)
                .chain(loaded.iter().map(|screen| screen.name.clone()))
                .collect();
            let known: Vec<_> = known.into_iter().collect();
            anyhow!("unknown screen `{name}` (known: {})", known.join(", "))
        })
}
