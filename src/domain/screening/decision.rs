//! Decision engine - maps a session to a recommendation.
//!
//! `evaluate` is a total, pure function: the same questionnaire and session
//! always produce the same recommendation and message text. It is recomputed
//! on demand and never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::answer::ScreeningAnswer;
use super::questionnaire::Questionnaire;
use super::session::ScreeningSession;

/// The possible screening outcomes, strongest case first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    /// Under the delegated authority threshold; no justification needed.
    NotSoleSourceDelegated,
    /// The answers make a strong case for a sole source justification.
    StrongCase,
    /// The answers make a weak case; expect follow-up questions.
    WeakCase,
    /// A sole source justification is unlikely to hold up.
    NotLikely,
}

impl RecommendationTier {
    /// Fixed result title shown in the wizard and the exported report.
    pub fn title(&self) -> &'static str {
        match self {
            RecommendationTier::NotSoleSourceDelegated => "Sole Source Not Required",
            RecommendationTier::StrongCase => "Strong Case for Sole Source",
            RecommendationTier::WeakCase => "Weak Case for Sole Source",
            RecommendationTier::NotLikely => "Sole Source Not Likely",
        }
    }
}

impl fmt::Display for RecommendationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// A derived screening outcome with templated guidance text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The outcome tier.
    pub tier: RecommendationTier,
    /// Guidance text for the requester. May quote the affirmative count.
    pub message: String,
}

impl Recommendation {
    /// The result title, fixed per tier.
    pub fn title(&self) -> &'static str {
        self.tier.title()
    }
}

/// Evaluates a session against a questionnaire variant.
///
/// Rules, in order:
///
/// 1. An under-threshold amount wins unconditionally: every other answer is
///    ignored and the delegated-authority outcome is returned.
/// 2. Affirmative answers are counted over the scored prefix only.
/// 3. A configured gating question that is not affirmative caps the outcome
///    at NotLikely regardless of the count.
/// 4. The first threshold rule whose minimum the count meets decides the
///    tier; no rule met means NotLikely.
///
/// A session with no amount tier selected evaluates as NotLikely with a
/// prompt to complete the screening; the sequencer never surfaces this
/// through the UI, but the report's N/A path can reach it.
pub fn evaluate(questionnaire: &Questionnaire, session: &ScreeningSession) -> Recommendation {
    if session.is_under_threshold() {
        return Recommendation {
            tier: RecommendationTier::NotSoleSourceDelegated,
            message: "Purchases below the delegated authority threshold do not require \
                      a sole source justification. Proceed with a standard purchase \
                      requisition."
                .to_string(),
        };
    }

    let affirmative = session.affirmative_count(questionnaire);
    let scored = questionnaire.required_count;

    if let Some(gate) = questionnaire.gating_question {
        if session.answer(gate) != ScreeningAnswer::Yes {
            return Recommendation {
                tier: RecommendationTier::NotLikely,
                message: format!(
                    "The market-check question must be answered yes before a sole \
                     source case can be made. You answered yes to {} of {} scored \
                     screening questions; a competitive solicitation is the likely \
                     path for this purchase.",
                    affirmative, scored
                ),
            };
        }
    }

    for rule in &questionnaire.thresholds {
        if affirmative >= rule.min_affirmative {
            return build_threshold_recommendation(rule.tier, affirmative, scored);
        }
    }

    Recommendation {
        tier: RecommendationTier::NotLikely,
        message: format!(
            "You answered yes to {} of {} scored screening questions. Based on \
             these answers a sole source justification is unlikely to be approved; \
             a competitive solicitation is the likely path for this purchase.",
            affirmative, scored
        ),
    }
}

fn build_threshold_recommendation(
    tier: RecommendationTier,
    affirmative: usize,
    scored: usize,
) -> Recommendation {
    let message = match tier {
        RecommendationTier::StrongCase => format!(
            "You answered yes to {} of {} scored screening questions, which makes \
             a strong case for a sole source justification. Complete the sole \
             source justification form and attach it to your requisition. \
             Procurement Services makes the final determination.",
            affirmative, scored
        ),
        RecommendationTier::WeakCase => format!(
            "You answered yes to {} of {} scored screening questions. Your request \
             may qualify as a sole source, but expect follow-up questions from \
             Procurement Services; additional market research is recommended \
             before submitting the justification form.",
            affirmative, scored
        ),
        // Validation keeps these tiers out of the threshold table.
        other => format!("Screening outcome: {}.", other.title()),
    };
    Recommendation { tier, message }
}
