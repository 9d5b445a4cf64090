//! Questionnaire configuration.
//!
//! Historically each campus unit shipped its own near-identical copy of the
//! wizard with a different question count, scored prefix, and threshold set.
//! Those variants collapse here into data: one [`Questionnaire`] value fully
//! describes a variant, and the sequencer and decision engine read it instead
//! of forking.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::foundation::ValidationError;

use super::question::Question;
use super::decision::RecommendationTier;

/// Maps a minimum affirmative count to a recommendation tier.
///
/// Rules are ordered by descending `min_affirmative`; the first rule whose
/// minimum is met wins. Counts below every rule fall through to
/// [`RecommendationTier::NotLikely`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdRule {
    /// Minimum number of affirmative scored answers for this tier.
    pub min_affirmative: usize,
    /// The tier awarded when the minimum is met.
    pub tier: RecommendationTier,
}

/// A complete questionnaire variant.
///
/// # Invariants
///
/// - At least one question; every question non-blank.
/// - `1 <= required_count <= questions.len()`. Questions past the scored
///   prefix are informational: they never gate navigation or scoring.
/// - Threshold minimums strictly descend and fit in `0..=required_count`;
///   only `StrongCase` and `WeakCase` may be awarded by a rule.
/// - `gating_question`, when present, indexes into the scored prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questionnaire {
    /// Variant name, used in logs and the report header.
    pub name: String,

    /// Ordered question list.
    pub questions: Vec<Question>,

    /// Size of the scored prefix of `questions`.
    pub required_count: usize,

    /// Index of a question whose affirmative answer is a precondition for
    /// any tier above NotLikely. Typically the market-check question.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gating_question: Option<usize>,

    /// Ordered threshold table (descending minimums).
    pub thresholds: Vec<ThresholdRule>,
}

impl Questionnaire {
    /// Builds and validates a questionnaire.
    pub fn new(
        name: impl Into<String>,
        questions: Vec<Question>,
        required_count: usize,
        gating_question: Option<usize>,
        thresholds: Vec<ThresholdRule>,
    ) -> Result<Self, ValidationError> {
        let questionnaire = Self {
            name: name.into(),
            questions,
            required_count,
            gating_question,
            thresholds,
        };
        questionnaire.validate()?;
        Ok(questionnaire)
    }

    /// Validates all configuration invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("questionnaire.name"));
        }
        if self.questions.is_empty() {
            return Err(ValidationError::empty_field("questionnaire.questions"));
        }
        for question in &self.questions {
            question.validate()?;
        }
        if self.required_count == 0 || self.required_count > self.questions.len() {
            return Err(ValidationError::out_of_range(
                "questionnaire.required_count",
                1,
                self.questions.len() as i32,
                self.required_count as i32,
            ));
        }
        if let Some(gate) = self.gating_question {
            if gate >= self.required_count {
                return Err(ValidationError::invalid_format(
                    "questionnaire.gating_question",
                    format!(
                        "gating question {} is outside the scored prefix of {}",
                        gate, self.required_count
                    ),
                ));
            }
        }
        let mut previous_min: Option<usize> = None;
        for rule in &self.thresholds {
            if rule.min_affirmative > self.required_count {
                return Err(ValidationError::out_of_range(
                    "questionnaire.thresholds",
                    0,
                    self.required_count as i32,
                    rule.min_affirmative as i32,
                ));
            }
            if !matches!(
                rule.tier,
                RecommendationTier::StrongCase | RecommendationTier::WeakCase
            ) {
                return Err(ValidationError::invalid_format(
                    "questionnaire.thresholds",
                    format!("tier {:?} cannot be awarded by a threshold rule", rule.tier),
                ));
            }
            if let Some(prev) = previous_min {
                if rule.min_affirmative >= prev {
                    return Err(ValidationError::invalid_format(
                        "questionnaire.thresholds",
                        "threshold minimums must strictly descend",
                    ));
                }
            }
            previous_min = Some(rule.min_affirmative);
        }
        Ok(())
    }

    /// Number of questions in this variant.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Returns true if the question at `index` counts toward scoring.
    pub fn is_scored(&self, index: usize) -> bool {
        index < self.required_count
    }

    /// Parses and validates a questionnaire from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ValidationError> {
        let questionnaire: Questionnaire = serde_yaml::from_str(yaml).map_err(|e| {
            ValidationError::invalid_format("questionnaire", e.to_string())
        })?;
        questionnaire.validate()?;
        Ok(questionnaire)
    }

    /// Loads and validates a questionnaire from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ValidationError> {
        let yaml = fs::read_to_string(path).map_err(|e| {
            ValidationError::invalid_format(
                "questionnaire",
                format!("cannot read {}: {}", path.display(), e),
            )
        })?;
        Self::from_yaml_str(&yaml)
    }
}

/// The built-in standard variant: eight questions, six scored, thresholds at
/// five and three affirmatives, no gating question.
pub static STANDARD_QUESTIONNAIRE: Lazy<Questionnaire> = Lazy::new(|| {
    Questionnaire::new(
        "Standard Sole Source Pre-Screening",
        vec![
            Question::with_guidance(
                "Is this product or service available from only one source?",
                "Only one supplier can practically provide this product or service.",
            ),
            Question::new(
                "Does the recommended supplier hold exclusive distribution, copyright, or patent rights?",
            ),
            Question::new(
                "Is the item an integral part or accessory compatible with existing equipment?",
            ),
            Question::new(
                "Is the purchase required for continuity of research results?",
            ),
            Question::with_guidance(
                "Have you researched alternative products or services?",
                "You have looked at other options and none meets the need.",
            ),
            Question::with_guidance(
                "Have you determined the price to be reasonable?",
                "For example public price lists, prices paid by other customers, or negotiated discounts.",
            ),
            Question::new(
                "Would considerable re-orientation and training be required to switch suppliers?",
            ),
            Question::new(
                "Is the vendor specifically named in a grant or grant proposal?",
            ),
        ],
        6,
        None,
        vec![
            ThresholdRule {
                min_affirmative: 5,
                tier: RecommendationTier::StrongCase,
            },
            ThresholdRule {
                min_affirmative: 3,
                tier: RecommendationTier::WeakCase,
            },
        ],
    )
    .expect("standard questionnaire is valid")
});
