//! Command-line driver for the catalog listing screens.
pub mod cli;
pub mod config;
pub mod render;
pub mod run;
pub mod script;
