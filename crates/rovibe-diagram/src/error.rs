//! Error types for diagram generation.
//!
//! This module provides [`DiagramError`], which covers the ways a single
//! emit run can fail. None of them are recovered: every error ends the run.

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::font::FontWeight;

/// The main error type for diagram generation.
///
/// The two access variants carry the offending path in their message and
/// expose the underlying [`io::Error`] as the error source.
#[derive(Debug, Error)]
pub enum DiagramError {
    #[error("Failed to read font file {}", .path.display())]
    ReadFont {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write diagram to {}", .path.display())]
    WriteDiagram {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid base64 font payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("No {0} font path given")]
    MissingFont(FontWeight),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DiagramError {
    /// The filesystem path involved in the failure, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::ReadFont { path, .. } | Self::WriteDiagram { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }
}
