//! Font assets and their base64 encoding.
//!
//! Font files are treated as opaque byte streams: nothing here looks at the
//! font format, it only reads the bytes and turns them into text that can be
//! embedded in a `data:` URI.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use base64::{Engine, engine::general_purpose::STANDARD};
use log::debug;

use crate::error::DiagramError;

/// The two font weights embedded in a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Bold,
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontWeight::Regular => write!(f, "regular"),
            FontWeight::Bold => write!(f, "bold"),
        }
    }
}

/// Raw bytes of a font file, together with the path they were read from.
#[derive(Debug, Clone)]
pub struct FontAsset {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl FontAsset {
    /// Reads the whole file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::ReadFont`] if the file does not exist or
    /// cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DiagramError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| DiagramError::ReadFont {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = path.display().to_string(), bytes = bytes.len(); "Font loaded");

        Ok(Self {
            path: path.to_path_buf(),
            bytes,
        })
    }

    /// Wraps bytes that are already in memory.
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            bytes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Encodes the font with the standard, padded base64 alphabet.
    pub fn encode(&self) -> EncodedFont {
        EncodedFont(STANDARD.encode(&self.bytes))
    }
}

/// Base64 text of a [`FontAsset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFont(String);

impl EncodedFont {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decodes the text back into the original font bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::Decode`] if the text is not valid base64.
    pub fn decode(&self) -> Result<Vec<u8>, DiagramError> {
        Ok(STANDARD.decode(&self.0)?)
    }
}

impl From<String> for EncodedFont {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for EncodedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reads the font at `path` and returns its base64 text.
///
/// # Errors
///
/// Returns [`DiagramError::ReadFont`] if the file is missing or unreadable.
pub fn encode(path: impl AsRef<Path>) -> Result<EncodedFont, DiagramError> {
    Ok(FontAsset::load(path)?.encode())
}
