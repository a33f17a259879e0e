//! Configuration management for the preview host.
//!
//! Handles:
//! - Command-line argument parsing
//! - Renderer mode selection

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which side renders the document body to HTML.
///
/// With the script renderer, the render surface converts markdown itself and
/// the bridge's HTML state stays empty. With the native renderer, native code
/// produces the HTML and pushes it through the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RendererMode {
    /// Markdown is converted by the script environment in the web view
    WebJs,
    /// Markdown is converted natively and pushed as HTML
    Native,
}

/// Command-line arguments for the preview host
#[derive(Debug, Parser)]
#[command(name = "mdview-host")]
#[command(about = "Stdio host for the markdown preview bridge")]
#[command(version)]
pub struct Args {
    /// Note to preview. With the web-js renderer this is markdown the
    /// surface converts; with the native renderer it is pre-rendered HTML.
    #[arg(help = "Note file to preview")]
    pub file: Option<PathBuf>,

    /// Renderer mode for document HTML
    #[arg(
        long,
        value_enum,
        default_value = "web-js",
        help = "Which side renders document HTML (web-js, native)"
    )]
    pub renderer: RendererMode,

    /// Log level for the host
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Note to preview, if one was given on the command line
    pub file: Option<PathBuf>,
    /// Renderer mode selected on the command line
    pub renderer: RendererMode,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        Ok(Config {
            file: args.file,
            renderer: args.renderer,
            log_level: args.log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file: None,
            renderer: RendererMode::WebJs,
            log_level: "info".to_string(),
        }
    }
}
