//! Error adapter for converting DiagramError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::{fmt, path::Path};

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler};

use rovibe_diagram::{DiagramError, Template};

/// Adapter giving a [`DiagramError`] a diagnostic code and a help line.
pub struct ErrorAdapter<'a>(pub &'a DiagramError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            DiagramError::ReadFont { .. } => "rovibe::read_font",
            DiagramError::WriteDiagram { .. } => "rovibe::write_diagram",
            DiagramError::Decode(_) => "rovibe::decode",
            DiagramError::MissingFont(_) => "rovibe::missing_font",
            DiagramError::UnknownTemplate(_) => "rovibe::unknown_template",
            DiagramError::Config(_) => "rovibe::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help: String = match (&self.0, self.0.path()) {
            (DiagramError::ReadFont { .. }, Some(path)) => {
                format!("check that {} exists and is readable", path.display())
            }
            (DiagramError::WriteDiagram { .. }, Some(path)) => {
                let dir = path
                    .parent()
                    .filter(|dir| !dir.as_os_str().is_empty())
                    .unwrap_or(Path::new("."));
                format!("check that {} exists and is writable", dir.display())
            }
            (DiagramError::MissingFont(weight), _) => {
                format!("pass --{weight} <path> or set fonts.{weight} in the config file")
            }
            (DiagramError::UnknownTemplate(_), _) => {
                let names: Vec<_> = Template::variants().iter().map(Template::name).collect();
                format!("available templates: {}", names.join(", "))
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// Render an error as a graphical miette report.
pub fn render_report(err: &DiagramError) -> String {
    render_report_with(&GraphicalReportHandler::new(), err)
}

fn render_report_with(reporter: &GraphicalReportHandler, err: &DiagramError) -> String {
    let mut writer = String::new();
    if reporter
        .render_report(&mut writer, &ErrorAdapter(err))
        .is_err()
    {
        // Fall back to the plain message rather than losing the error.
        return err.to_string();
    }
    writer
}
