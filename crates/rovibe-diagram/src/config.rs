//! Configuration types for diagram generation.
//!
//! All types implement [`serde::Deserialize`] so a front end can load them
//! from a file. Every field is optional; command-line values take precedence
//! over configured ones.
//!
//! # Example
//!
//! ```
//! # use rovibe_diagram::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.fonts().regular().is_none());
//! assert_eq!(config.output().path(), std::path::Path::new("rovibe-diagram.svg"));
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Output path used when neither the command line nor the config names one.
pub const DEFAULT_OUTPUT: &str = "rovibe-diagram.svg";

/// Top-level configuration combining font and output settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Font file section.
    #[serde(default)]
    fonts: FontConfig,

    /// Output section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    pub fn new(fonts: FontConfig, output: OutputConfig) -> Self {
        Self { fonts, output }
    }

    pub fn fonts(&self) -> &FontConfig {
        &self.fonts
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Paths of the font files to embed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontConfig {
    #[serde(default)]
    regular: Option<PathBuf>,

    #[serde(default)]
    bold: Option<PathBuf>,
}

impl FontConfig {
    pub fn new(regular: Option<PathBuf>, bold: Option<PathBuf>) -> Self {
        Self { regular, bold }
    }

    /// Path of the regular-weight font, if configured.
    pub fn regular(&self) -> Option<&Path> {
        self.regular.as_deref()
    }

    /// Path of the bold-weight font, if configured.
    pub fn bold(&self) -> Option<&Path> {
        self.bold.as_deref()
    }
}

/// Where and how the document is written.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    path: Option<PathBuf>,

    /// Name of the template to render, see [`crate::Template::by_name`].
    #[serde(default)]
    template: Option<String>,
}

impl OutputConfig {
    pub fn new(path: Option<PathBuf>, template: Option<String>) -> Self {
        Self { path, template }
    }

    /// The configured output path, or [`DEFAULT_OUTPUT`].
    pub fn path(&self) -> &Path {
        self.path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT))
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }
}
