use std::sync::Arc;

use anyhow::Context;
use catalog_app::cli::Cli;
use catalog_app::config::{load_screens, resolve_screen};
use catalog_app::run::run_script;
use clap::Parser;
use listing_runtime::{ListingSession, MemoryHistory, ReqwestListingFetcher};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if !catalog_logging::initialize(cli.log_destination(), cli.log_level.into()) {
        eprintln!("Warning: logging could not be initialized");
    }

    let loaded = match &cli.config {
        Some(path) => load_screens(path)?,
        None => Vec::new(),
    };
    let screen = resolve_screen(&cli.screen, &loaded)?;
    let url = cli.url.clone().unwrap_or_else(|| screen.pathname.clone());

    let fetcher = ReqwestListingFetcher::new(cli.fetch_settings())
        .context("failed to build the HTTP client")?;
    let mut session = ListingSession::new(screen, MemoryHistory::new(url), Arc::new(fetcher))
        .context("screen configuration rejected")?;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout().lock();
    run_script(&mut session, stdin, &mut stdout).await
}
