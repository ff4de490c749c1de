use std::path::PathBuf;
use std::time::Duration;

use catalog_logging::{LevelFilter, LogDestination};
use clap::{Parser, ValueEnum};
use listing_runtime::FetchSettings;

#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(about = "Drive an art catalog listing from a line-based script", long_about = None)]
pub struct Cli {
    /// Listing screen to open (artists, artworks, admin_artists, admin_artworks, inquiries)
    #[arg(short, long, default_value = "artworks")]
    pub screen: String,

    /// RON file with additional or overriding screen definitions
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address the listing is opened at; defaults to the screen's pathname
    #[arg(short, long)]
    pub url: Option<String>,

    /// Base URL of the catalog REST API
    #[arg(long, default_value = "http://localhost:5000")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Largest response body accepted from the API, in bytes
    #[arg(long)]
    pub max_bytes: Option<u64>,

    /// Write logs to this file instead of the terminal
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log to the terminal as well when --log-file is set
    #[arg(long)]
    pub log_both: bool,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    pub fn log_destination(&self) -> LogDestination {
        match (&self.log_file, self.log_both) {
            (Some(path), true) => LogDestination::Both(path.clone()),
            (Some(path), false) => LogDestination::File(path.clone()),
            (None, _) => LogDestination::Terminal,
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        let defaults = FetchSettings::default();
        FetchSettings {
            base_url: self.base_url.clone(),
            request_timeout: Duration::from_secs(self.timeout_secs.max(1)),
            max_bytes: self.max_bytes.unwrap_or(defaults.max_bytes),
            ..defaults
        }
    }
}
