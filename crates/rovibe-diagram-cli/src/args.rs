//! Command-line argument definitions for the rovibe diagram generator.
//!
//! Font and output paths given here take precedence over the configuration
//! file.

use clap::Parser;

/// Generate the rovibe workflow SVG with embedded fonts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the regular-weight font (e.g. JetBrainsMono-Regular.ttf)
    #[arg(long)]
    pub regular: Option<String>,

    /// Path to the bold-weight font (e.g. JetBrainsMono-Bold.ttf)
    #[arg(long)]
    pub bold: Option<String>,

    /// Output SVG path [default: rovibe-diagram.svg]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Template to render
    #[arg(short, long)]
    pub template: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
