//! Exporter adapters for the DocumentExporter port.

mod markdown;
mod text;
mod writer;

pub use markdown::MarkdownExporter;
pub use text::PlainTextExporter;
pub use writer::write_document;

use crate::ports::{DocumentExporter, ExportFormat};

/// Returns the bundled exporter for a format.
pub fn exporter_for(format: ExportFormat) -> Box<dyn DocumentExporter> {
    match format {
        ExportFormat::Text => Box::new(PlainTextExporter::new()),
        ExportFormat::Markdown => Box::new(MarkdownExporter::new()),
    }
}
