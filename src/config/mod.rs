//! Application configuration module.
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values carry the `SCREENER` prefix with
//! `__` separating nested sections, e.g.
//! `SCREENER__EXPORT__DIRECTORY=./exports`.

mod error;

pub use error::ConfigError;

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::screening::{Questionnaire, STANDARD_QUESTIONNAIRE};
use crate::ports::ExportFormat;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Questionnaire variant selection.
    #[serde(default)]
    pub questionnaire: QuestionnaireConfig,

    /// Export destination and format.
    #[serde(default)]
    pub export: ExportConfig,
}

/// Which questionnaire variant to run.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct QuestionnaireConfig {
    /// Path to a YAML variant file. The built-in standard variant is used
    /// when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Where and how the report is exported.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory the exported document is written to.
    #[serde(default = "ExportConfig::default_directory")]
    pub directory: PathBuf,

    /// Export format (`text` or `markdown`).
    #[serde(default)]
    pub format: ExportFormat,

    /// Base filename without extension.
    #[serde(default = "ExportConfig::default_filename")]
    pub filename: String,
}

impl ExportConfig {
    fn default_directory() -> PathBuf {
        PathBuf::from(".")
    }

    fn default_filename() -> String {
        "sole-source-screening".to_string()
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: Self::default_directory(),
            format: ExportFormat::default(),
            filename: Self::default_filename(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the environment.
    ///
    /// Reads a `.env` file if present, then environment variables with the
    /// `SCREENER` prefix. Every value has a default, so an empty environment
    /// is valid.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SCREENER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.export.filename.trim().is_empty() {
            return Err(ConfigError::EmptyExportFilename);
        }
        Ok(())
    }

    /// Resolves the questionnaire this run uses: the configured YAML file,
    /// or the built-in standard variant.
    pub fn resolve_questionnaire(&self) -> Result<Questionnaire, ConfigError> {
        match &self.questionnaire.path {
            Some(path) => {
                Questionnaire::from_yaml_file(path).map_err(ConfigError::InvalidQuestionnaire)
            }
            None => Ok(STANDARD_QUESTIONNAIRE.clone()),
        }
    }
}
