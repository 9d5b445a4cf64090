//! ScreeningSession aggregate - the answer store.
//!
//! One session exists per wizard run. It is an owned value passed to the
//! sequencer, decision engine, and report builder; nothing in the crate holds
//! it as a global.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Timestamp};

use super::answer::{AmountTier, JustificationTag, ScreeningAnswer};
use super::questionnaire::Questionnaire;

/// Accumulated answers for one screening run.
///
/// # Invariants
///
/// - `answers.len()` equals the questionnaire's question count and never
///   changes after construction.
/// - Mutators are idempotent for the same input: repeating a mutation leaves
///   the session equal to applying it once (`updated_at` only moves on an
///   actual change).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningSession {
    /// Unique identifier for this run.
    id: SessionId,

    /// Selected procurement amount tier, if any.
    amount_tier: Option<AmountTier>,

    /// Tri-state answer per question, indexed by question ordinal.
    answers: Vec<ScreeningAnswer>,

    /// Selected justification reasons, kept sorted for deterministic export.
    justifications: BTreeSet<JustificationTag>,

    /// Whether the requester acknowledged the final-determination notice.
    acknowledged: bool,

    /// When the session was created.
    created_at: Timestamp,

    /// When an answer last actually changed.
    updated_at: Timestamp,
}

impl ScreeningSession {
    /// Creates an empty session sized for the given questionnaire.
    pub fn new(questionnaire: &Questionnaire) -> Self {
        let now = Timestamp::now();
        Self {
            id: SessionId::new(),
            amount_tier: None,
            answers: vec![ScreeningAnswer::Unanswered; questionnaire.question_count()],
            justifications: BTreeSet::new(),
            acknowledged: false,
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the selected amount tier, if any.
    pub fn amount_tier(&self) -> Option<AmountTier> {
        self.amount_tier
    }

    /// Returns the answer for a question, `Unanswered` for an unknown index.
    pub fn answer(&self, index: usize) -> ScreeningAnswer {
        self.answers.get(index).copied().unwrap_or_default()
    }

    /// Returns all answers in question order.
    pub fn answers(&self) -> &[ScreeningAnswer] {
        &self.answers
    }

    /// Returns the selected justification tags in stable order.
    pub fn justifications(&self) -> impl Iterator<Item = JustificationTag> + '_ {
        self.justifications.iter().copied()
    }

    /// Returns true if the tag is currently selected.
    pub fn has_justification(&self, tag: JustificationTag) -> bool {
        self.justifications.contains(&tag)
    }

    /// Returns the acknowledgment flag.
    pub fn acknowledged(&self) -> bool {
        self.acknowledged
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when an answer last changed.
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutators
    // ─────────────────────────────────────────────────────────────────────

    /// Selects the procurement amount tier.
    pub fn set_amount_tier(&mut self, tier: AmountTier) {
        if self.amount_tier != Some(tier) {
            self.amount_tier = Some(tier);
            self.touch();
        }
    }

    /// Records the answer to a screening question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionIndexOutOfRange` for an index past the question list.
    /// The UI cannot produce one; tests and misconfigured callers can.
    pub fn set_screening_answer(
        &mut self,
        index: usize,
        answer: ScreeningAnswer,
    ) -> Result<(), DomainError> {
        let slot = self.answers.get_mut(index).ok_or_else(|| {
            DomainError::new(
                ErrorCode::QuestionIndexOutOfRange,
                format!("No question at index {}", index),
            )
            .with_detail("index", index.to_string())
        })?;
        if *slot != answer {
            *slot = answer;
            self.touch();
        }
        Ok(())
    }

    /// Sets a justification tag's membership explicitly (idempotent form).
    pub fn set_justification(&mut self, tag: JustificationTag, selected: bool) {
        let changed = if selected {
            self.justifications.insert(tag)
        } else {
            self.justifications.remove(&tag)
        };
        if changed {
            self.touch();
        }
    }

    /// Flips a justification tag, matching checkbox behavior.
    pub fn toggle_justification(&mut self, tag: JustificationTag) {
        let selected = !self.has_justification(tag);
        self.set_justification(tag, selected);
    }

    /// Records the acknowledgment flag.
    pub fn set_acknowledgment(&mut self, acknowledged: bool) {
        if self.acknowledged != acknowledged {
            self.acknowledged = acknowledged;
            self.touch();
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Derived completeness
    // ─────────────────────────────────────────────────────────────────────

    /// Returns true when an amount tier has been selected.
    pub fn amount_selected(&self) -> bool {
        self.amount_tier.is_some()
    }

    /// Returns true when the amount is below the delegated threshold.
    pub fn is_under_threshold(&self) -> bool {
        self.amount_tier.map(|t| t.is_under_threshold()).unwrap_or(false)
    }

    /// Returns true when every scored question has been answered.
    ///
    /// Informational questions past the scored prefix never block.
    pub fn required_answers_complete(&self, questionnaire: &Questionnaire) -> bool {
        self.answers
            .iter()
            .take(questionnaire.required_count)
            .all(|a| a.is_answered())
    }

    /// Counts affirmative answers among the scored prefix.
    pub fn affirmative_count(&self, questionnaire: &Questionnaire) -> usize {
        self.answers
            .iter()
            .take(questionnaire.required_count)
            .filter(|a| a.is_affirmative())
            .count()
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
