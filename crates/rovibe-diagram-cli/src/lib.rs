//! CLI logic for the rovibe diagram generator.
//!
//! Resolves font and output paths from the command line and the
//! configuration file, then hands them to [`rovibe_diagram::DiagramEmitter`].

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::path::PathBuf;

use log::{debug, info};

use rovibe_diagram::{
    DiagramEmitter, DiagramError, EmitReport, FontWeight, Template, config::AppConfig,
};

/// Paths and template for a single emit run, after merging the command line
/// with the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub regular: PathBuf,
    pub bold: PathBuf,
    pub output: PathBuf,
    pub template: Template,
}

/// Merge command-line arguments with configuration values.
///
/// Command-line values win. The output falls back to the configured path
/// and then to `rovibe-diagram.svg`.
///
/// # Errors
///
/// Returns [`DiagramError::MissingFont`] when a font path is given in
/// neither place and [`DiagramError::UnknownTemplate`] for an unknown
/// template name.
pub fn resolve(args: &Args, config: &AppConfig) -> Result<Resolved, DiagramError> {
    let regular = args
        .regular
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| config.fonts().regular().map(PathBuf::from))
        .ok_or(DiagramError::MissingFont(FontWeight::Regular))?;

    let bold = args
        .bold
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| config.fonts().bold().map(PathBuf::from))
        .ok_or(DiagramError::MissingFont(FontWeight::Bold))?;

    let output = args
        .output
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| config.output().path().to_path_buf());

    let template = match args.template.as_deref().or(config.output().template()) {
        Some(name) => {
            Template::by_name(name).ok_or_else(|| DiagramError::UnknownTemplate(name.to_string()))?
        }
        None => Template::default(),
    };

    Ok(Resolved {
        regular,
        bold,
        output,
        template,
    })
}

/// Run the rovibe diagram CLI
///
/// Loads the configuration, resolves the paths and writes the diagram.
///
/// # Errors
///
/// Returns `DiagramError` for:
/// - Configuration loading errors
/// - Missing font paths or an unknown template
/// - Font read errors
/// - Output write errors
pub fn run(args: &Args) -> Result<EmitReport, DiagramError> {
    let app_config = config::load_config(args.config.as_ref())?;

    let resolved = resolve(args, &app_config)?;
    debug!(resolved:?; "Resolved paths");

    let report = DiagramEmitter::new(resolved.template).emit(
        &resolved.regular,
        &resolved.bold,
        &resolved.output,
    )?;

    info!(output_file = report.output().display().to_string(); "SVG exported successfully");

    Ok(report)
}
