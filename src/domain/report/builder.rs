//! ScreeningReport - structured summary of a session and its outcome.
//!
//! The report is an ordered list of labeled sections, independent of any
//! output format. Exporter adapters turn it into text or markdown. A report
//! built from an incomplete session degrades to "N/A" placeholders instead
//! of failing.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::screening::{
    Questionnaire, Recommendation, ScreeningSession,
};

/// Placeholder for values a partially completed session cannot provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// A single labeled value in a report section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportField {
    pub label: String,
    pub value: String,
}

impl ReportField {
    /// Creates a field, substituting the N/A placeholder for a missing value.
    pub fn new(label: impl Into<String>, value: Option<String>) -> Self {
        Self {
            label: label.into(),
            value: value.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}

/// An ordered group of fields under a heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    pub heading: String,
    pub fields: Vec<ReportField>,
}

/// The full screening summary, ready for an exporter adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningReport {
    /// Report title, fixed across variants.
    pub title: String,
    /// Questionnaire variant the session ran against.
    pub variant: String,
    /// When the report was generated.
    pub generated_at: Timestamp,
    /// Ordered sections.
    pub sections: Vec<ReportSection>,
}

impl ScreeningReport {
    /// Builds a report from a session and, when available, its evaluation.
    ///
    /// Pass `None` for the recommendation when the session has not reached
    /// the result step; the result section then carries N/A placeholders.
    pub fn build(
        questionnaire: &Questionnaire,
        session: &ScreeningSession,
        recommendation: Option<&Recommendation>,
    ) -> Self {
        let mut sections = Vec::with_capacity(5);

        sections.push(ReportSection {
            heading: "Procurement Amount".to_string(),
            fields: {
                let mut fields = vec![ReportField::new(
                    "Estimated amount",
                    session.amount_tier().map(|t| t.label().to_string()),
                )];
                if session.amount_tier().map(|t| t.requires_additional_approval()) == Some(true) {
                    fields.push(ReportField::new(
                        "Note",
                        Some("Additional approval required for this amount".to_string()),
                    ));
                }
                fields
            },
        });

        sections.push(ReportSection {
            heading: "Screening Questions".to_string(),
            fields: questionnaire
                .questions
                .iter()
                .enumerate()
                .map(|(i, question)| ReportField {
                    label: strip_markup(&question.text),
                    value: session.answer(i).label().to_string(),
                })
                .collect(),
        });

        let selected: Vec<String> = session
            .justifications()
            .map(|tag| tag.label().to_string())
            .collect();
        sections.push(ReportSection {
            heading: "Justification".to_string(),
            fields: if selected.is_empty() {
                vec![ReportField::new("Selected reasons", Some("None selected".to_string()))]
            } else {
                selected
                    .into_iter()
                    .map(|label| ReportField::new("Reason", Some(label)))
                    .collect()
            },
        });

        sections.push(ReportSection {
            heading: "Acknowledgment".to_string(),
            fields: vec![ReportField::new(
                "Final determination notice accepted",
                Some(if session.acknowledged() { "Yes" } else { "No" }.to_string()),
            )],
        });

        sections.push(ReportSection {
            heading: "Result".to_string(),
            fields: vec![
                ReportField::new(
                    "Final Result",
                    recommendation.map(|r| r.title().to_string()),
                ),
                ReportField::new(
                    "Guidance",
                    recommendation.map(|r| strip_markup(&r.message)),
                ),
            ],
        });

        Self {
            title: "Sole Source Pre-Screening Summary".to_string(),
            variant: questionnaire.name.clone(),
            generated_at: Timestamp::now(),
            sections,
        }
    }

    /// Flattens the report to `"Label: Value"` lines with section headings,
    /// the shared body layout of the exporter adapters.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for section in &self.sections {
            lines.push(section.heading.clone());
            for field in &section.fields {
                lines.push(format!("{}: {}", field.label, field.value));
            }
            lines.push(String::new());
        }
        if lines.last().map(String::is_empty) == Some(true) {
            lines.pop();
        }
        lines
    }
}

/// Removes markup tags from legacy guidance text, collapsing the remainder's
/// surrounding whitespace. Unterminated tags are dropped to the end of input.
pub fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.trim().to_string()
}
