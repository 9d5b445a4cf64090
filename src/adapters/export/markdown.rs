//! Markdown exporter - report rendition for downstream conversion.

use crate::domain::report::ScreeningReport;
use crate::ports::{DocumentExporter, ExportError, ExportFormat, ExportedDocument};

/// Markdown implementation of the exporter port.
#[derive(Debug, Clone, Default)]
pub struct MarkdownExporter;

impl MarkdownExporter {
    /// Creates a new markdown exporter.
    pub fn new() -> Self {
        Self
    }

    fn render(report: &ScreeningReport) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", report.title));
        out.push_str(&format!("*Variant: {}*\n\n", report.variant));
        out.push_str(&format!(
            "*Generated: {}*\n\n",
            report.generated_at.report_format()
        ));
        for section in &report.sections {
            out.push_str(&format!("## {}\n\n", section.heading));
            for field in &section.fields {
                out.push_str(&format!("- **{}:** {}\n", field.label, field.value));
            }
            out.push('\n');
        }
        out
    }
}

impl DocumentExporter for MarkdownExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Markdown
    }

    fn export(
        &self,
        report: &ScreeningReport,
        base_filename: &str,
    ) -> Result<ExportedDocument, ExportError> {
        if base_filename.trim().is_empty() {
            return Err(ExportError::invalid_filename("base filename is empty"));
        }
        Ok(ExportedDocument::new(
            Self::render(report).into_bytes(),
            ExportFormat::Markdown,
            base_filename,
        ))
    }
}
