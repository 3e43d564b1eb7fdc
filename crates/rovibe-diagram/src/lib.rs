//! rovibe-diagram - the rovibe workflow diagram as a self-contained SVG.
//!
//! Two font files are read, base64-encoded and embedded as `@font-face`
//! data URIs into a fixed SVG layout. The output depends only on the two
//! font byte sequences, so identical inputs always give an identical file.
//!
//! The pipeline is linear: [`encode`] each font, [`render`] the template,
//! then write the document. [`emit`] runs all three.

pub mod config;

mod error;
mod font;
mod template;

pub use error::DiagramError;
pub use font::{EncodedFont, FontAsset, FontWeight, encode};
pub use template::{Template, render};

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use log::{debug, info};

/// Generates diagram documents from a chosen [`Template`].
///
/// # Examples
///
/// ```rust,no_run
/// use rovibe_diagram::{DiagramEmitter, Template};
///
/// let emitter = DiagramEmitter::new(Template::OVERVIEW);
/// let report = emitter
///     .emit("JetBrainsMono-Regular.ttf", "JetBrainsMono-Bold.ttf", "rovibe-diagram.svg")
///     .expect("Failed to emit diagram");
///
/// println!("{report}");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagramEmitter {
    template: Template,
}

impl DiagramEmitter {
    pub fn new(template: Template) -> Self {
        Self { template }
    }

    pub fn template(&self) -> Template {
        self.template
    }

    /// Reads both fonts and renders the document in memory.
    ///
    /// The regular font is read first. If either read fails, no document is
    /// produced.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::ReadFont`] for a missing or unreadable font.
    pub fn render_files(
        &self,
        regular_path: impl AsRef<Path>,
        bold_path: impl AsRef<Path>,
    ) -> Result<String, DiagramError> {
        let regular = encode(regular_path)?;
        let bold = encode(bold_path)?;

        debug!(
            regular_len = regular.len(),
            bold_len = bold.len();
            "Fonts encoded"
        );

        Ok(self.template.render(regular.as_str(), bold.as_str()))
    }

    /// Reads both fonts, renders the document and writes it to
    /// `output_path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::ReadFont`] if a font cannot be read, in which
    /// case nothing is written, and [`DiagramError::WriteDiagram`] if the
    /// output file cannot be created or written.
    pub fn emit(
        &self,
        regular_path: impl AsRef<Path>,
        bold_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
    ) -> Result<EmitReport, DiagramError> {
        let output_path = output_path.as_ref();
        info!(
            regular = regular_path.as_ref().display().to_string(),
            bold = bold_path.as_ref().display().to_string(),
            template = self.template.name();
            "Generating diagram"
        );

        let document = self.render_files(regular_path, bold_path)?;

        fs::write(output_path, &document).map_err(|source| DiagramError::WriteDiagram {
            path: output_path.to_path_buf(),
            source,
        })?;

        info!(
            output = output_path.display().to_string(),
            bytes = document.len();
            "Diagram written"
        );

        Ok(EmitReport {
            output: output_path.to_path_buf(),
            bytes: document.len(),
        })
    }
}

/// Emits the [`Template::OVERVIEW`] diagram.
///
/// # Errors
///
/// See [`DiagramEmitter::emit`].
pub fn emit(
    regular_path: impl AsRef<Path>,
    bold_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<EmitReport, DiagramError> {
    DiagramEmitter::default().emit(regular_path, bold_path, output_path)
}

/// Outcome of a successful [`emit`].
///
/// Its [`Display`](fmt::Display) form is the confirmation line shown to the
/// user, e.g. `Written: rovibe-diagram.svg  (412,881 bytes)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitReport {
    output: PathBuf,
    bytes: usize,
}

impl EmitReport {
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Size of the written document in bytes.
    pub fn bytes(&self) -> usize {
        self.bytes
    }
}

impl fmt::Display for EmitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Written: {}  ({} bytes)",
            self.output.display(),
            group_thousands(self.bytes)
        )
    }
}

/// Formats `n` with a comma between every group of three digits.
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
