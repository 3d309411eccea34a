//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::{net::IpAddr, path::PathBuf};

/// Live-edit an HTML page in the browser and save it back to disk
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Working directory holding the document and stylesheets (default: cwd)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Config file path, relative to the root (default: livedit.toml)
    #[arg(short = 'C', long, default_value = "livedit.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Canonical document to edit (default: index.html)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub document: Option<PathBuf>,

    /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
    #[arg(short, long)]
    pub interface: Option<IpAddr>,

    /// Port number to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Port for the live reload WebSocket
    #[arg(short, long)]
    pub ws_port: Option<u16>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["livedit"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("livedit.toml"));
        assert!(cli.root.is_none());
        assert!(cli.port.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "livedit", "-r", "site", "-p", "9000", "-w", "9001", "-d", "page.html", "-v",
        ])
        .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("site")));
        assert_eq!(cli.port, Some(9000));
        assert_eq!(cli.ws_port, Some(9001));
        assert_eq!(cli.document, Some(PathBuf::from("page.html")));
        assert!(cli.verbose);
    }
}
