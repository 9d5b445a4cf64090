//! Configuration error types.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Export filename must not be empty")]
    EmptyExportFilename,

    #[error("Questionnaire configuration is invalid: {0}")]
    InvalidQuestionnaire(#[from] ValidationError),
}
