//! Plain text exporter - paginated layout for printing and download.
//!
//! The closest analogue of the original's PDF layout: a title block, then
//! body lines flowed into fixed-height pages separated by form feeds, each
//! page carrying a "Page N of M" header line.

use crate::domain::report::ScreeningReport;
use crate::ports::{DocumentExporter, ExportError, ExportFormat, ExportedDocument};

/// Body lines per page, excluding the per-page header.
const LINES_PER_PAGE: usize = 40;

/// Horizontal rule width for the title block and page headers.
const RULE_WIDTH: usize = 64;

/// Paginated plain text implementation of the exporter port.
#[derive(Debug, Clone, Default)]
pub struct PlainTextExporter;

impl PlainTextExporter {
    /// Creates a new plain text exporter.
    pub fn new() -> Self {
        Self
    }

    fn paginate(report: &ScreeningReport) -> String {
        let body = report.to_lines();
        let pages: Vec<&[String]> = if body.is_empty() {
            vec![&[]]
        } else {
            body.chunks(LINES_PER_PAGE).collect()
        };
        let total = pages.len();
        let rule = "-".repeat(RULE_WIDTH);

        let mut out = String::new();
        for (number, page) in pages.iter().enumerate() {
            if number > 0 {
                out.push('\u{c}');
            }
            out.push_str(&report.title);
            out.push('\n');
            if number == 0 {
                out.push_str(&format!("Variant: {}\n", report.variant));
                out.push_str(&format!(
                    "Generated: {}\n",
                    report.generated_at.report_format()
                ));
            }
            out.push_str(&format!("Page {} of {}\n", number + 1, total));
            out.push_str(&rule);
            out.push('\n');
            for line in page.iter() {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }
}

impl DocumentExporter for PlainTextExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Text
    }

    fn export(
        &self,
        report: &ScreeningReport,
        base_filename: &str,
    ) -> Result<ExportedDocument, ExportError> {
        if base_filename.trim().is_empty() {
            return Err(ExportError::invalid_filename("base filename is empty"));
        }
        let text = Self::paginate(report);
        Ok(ExportedDocument::new(
            text.into_bytes(),
            ExportFormat::Text,
            base_filename,
        ))
    }
}
