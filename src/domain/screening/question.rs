//! Screening question value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// A single yes/no screening question.
///
/// Questions are immutable configuration. The ordinal position is the index
/// in the owning questionnaire's list; it is not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The question text shown to the requester.
    pub text: String,

    /// Optional guidance displayed under the question. May contain markup
    /// in legacy variants; the report exporter strips it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance: Option<String>,
}

impl Question {
    /// Creates a question without guidance.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            guidance: None,
        }
    }

    /// Creates a question with guidance text.
    pub fn with_guidance(text: impl Into<String>, guidance: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            guidance: Some(guidance.into()),
        }
    }

    /// Validates the question text is non-empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::empty_field("question.text"));
        }
        Ok(())
    }
}
