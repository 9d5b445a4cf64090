//! Document exporter port - report in, downloadable document out.
//!
//! The original page handed its summary to a bundled PDF library; here the
//! core hands a [`ScreeningReport`] to whichever adapter is configured and
//! receives a finished document. The core consumes nothing from the result
//! beyond passing it along.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::report::ScreeningReport;

/// Port for turning a report into a downloadable document.
///
/// # Contract
///
/// Implementations must serialize every section and field of the report in
/// order, and must accept reports carrying N/A placeholders (an incomplete
/// session is not an error).
pub trait DocumentExporter {
    /// The format this exporter produces.
    fn format(&self) -> ExportFormat;

    /// Renders the report into a document named `base_filename` plus the
    /// format's extension.
    fn export(
        &self,
        report: &ScreeningReport,
        base_filename: &str,
    ) -> Result<ExportedDocument, ExportError>;
}

/// Export formats supported by the bundled adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Paginated plain text.
    #[default]
    Text,
    /// Markdown for downstream conversion.
    Markdown,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain; charset=utf-8",
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Markdown => "md",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(ExportFormat::Text),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exported document with content and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    /// The exported content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
    /// The format that was used.
    pub format: ExportFormat,
}

impl ExportedDocument {
    /// Creates a new exported document.
    pub fn new(content: Vec<u8>, format: ExportFormat, base_filename: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", base_filename, format.extension()),
            format,
        }
    }

    /// The content interpreted as UTF-8, for tests and logging.
    pub fn content_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }
}

/// Errors that can occur during document export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// Unsupported export format requested.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Base filename is empty or otherwise unusable.
    #[error("Invalid export filename: {0}")]
    InvalidFilename(String),

    /// I/O error while writing the document out.
    #[error("I/O error during export: {0}")]
    IoError(String),
}

impl ExportError {
    /// Creates an I/O error.
    pub fn io_error(reason: impl Into<String>) -> Self {
        Self::IoError(reason.into())
    }

    /// Creates an invalid filename error.
    pub fn invalid_filename(reason: impl Into<String>) -> Self {
        Self::InvalidFilename(reason.into())
    }
}
