//! livedit - edit an HTML page in the browser, save it back to disk.

mod actor;
mod cli;
mod config;
mod core;
mod dom;
mod embed;
mod freshness;
mod logger;
mod reload;
mod style;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::{LiveConfig, init_config};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = init_config(LiveConfig::load(&cli)?);

    if !config.files.document.is_file() {
        log!(
            "warning";
            "document {} not found, pages will fail until it exists",
            config.root_relative(&config.files.document).display()
        );
    }

    style::compile_and_report(&config);

    cli::serve::bind_server()?.run()
}
