//! StepSequencer - guarded navigation through the wizard steps.
//!
//! The sequencer owns only the current step. Completeness guards read the
//! session; nothing here mutates answers. A refused advance is silent (the
//! front end keeps its next control disabled), never an error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::{Percentage, StateMachine};

use super::questionnaire::Questionnaire;
use super::session::ScreeningSession;
use super::step::WizardStep;

/// Tracks and enforces the current wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StepSequencer {
    current: WizardStep,
}

impl StepSequencer {
    /// Creates a sequencer positioned at the first step.
    pub fn new() -> Self {
        Self {
            current: WizardStep::first(),
        }
    }

    /// Returns the current step.
    pub fn current(&self) -> WizardStep {
        self.current
    }

    /// Returns true once the wizard has reached its terminal step.
    pub fn is_finished(&self) -> bool {
        self.current.is_terminal()
    }

    /// Returns the step the next forward transition would land on, taking
    /// the under-threshold fast exit into account. None at the terminal step.
    pub fn next_step(&self, session: &ScreeningSession) -> Option<WizardStep> {
        match self.current {
            WizardStep::Amount if session.is_under_threshold() => Some(WizardStep::Result),
            step => step.next(),
        }
    }

    /// The derived "next enabled" flag: true when the current step's required
    /// fields are complete.
    pub fn can_advance(&self, questionnaire: &Questionnaire, session: &ScreeningSession) -> bool {
        match self.current {
            WizardStep::Amount => session.amount_selected(),
            WizardStep::Screening => session.required_answers_complete(questionnaire),
            WizardStep::Acknowledge => session.acknowledged(),
            WizardStep::Result => false,
        }
    }

    /// Returns true from any non-initial, non-terminal step.
    pub fn can_go_back(&self) -> bool {
        !self.current.is_first() && !self.current.is_terminal()
    }

    /// Moves forward one step if the guard allows it.
    ///
    /// Returns true when the step changed. An incomplete step is rejected
    /// silently, leaving the sequencer unchanged.
    pub fn advance(
        &mut self,
        questionnaire: &Questionnaire,
        session: &ScreeningSession,
    ) -> bool {
        if !self.can_advance(questionnaire, session) {
            return false;
        }
        let Some(target) = self.next_step(session) else {
            return false;
        };
        match self.current.transition_to(target) {
            Ok(step) => {
                debug!(from = %self.current, to = %step, "wizard advanced");
                self.current = step;
                true
            }
            Err(_) => false,
        }
    }

    /// Moves back one step without skipping; answers are untouched.
    ///
    /// Returns true when the step changed.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        let Some(target) = self.current.previous() else {
            return false;
        };
        match self.current.transition_to(target) {
            Ok(step) => {
                debug!(from = %self.current, to = %step, "wizard stepped back");
                self.current = step;
                true
            }
            Err(_) => false,
        }
    }

    /// Returns to the first step, for a restarted session.
    pub fn reset(&mut self) {
        self.current = WizardStep::first();
    }

    /// Progress through the wizard as a percentage of the full path.
    pub fn progress(&self) -> Percentage {
        Percentage::of_position(self.current.order_index() + 1, WizardStep::ORDER.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::screening::{AmountTier, ScreeningAnswer, STANDARD_QUESTIONNAIRE};

    fn answered_session(tier: AmountTier) -> ScreeningSession {
        let mut s = ScreeningSession::new(&STANDARD_QUESTIONNAIRE);
        s.set_amount_tier(tier);
        for i in 0..STANDARD_QUESTIONNAIRE.required_count {
            s.set_screening_answer(i, ScreeningAnswer::Yes).unwrap();
        }
        s.set_acknowledgment(true);
        s
    }

    #[test]
    fn starts_at_amount_step() {
        assert_eq!(StepSequencer::new().current(), WizardStep::Amount);
    }

    #[test]
    fn advance_is_silently_refused_when_incomplete() {
        let session = ScreeningSession::new(&STANDARD_QUESTIONNAIRE);
        let mut seq = StepSequencer::new();

        assert!(!seq.advance(&STANDARD_QUESTIONNAIRE, &session));
        assert_eq!(seq.current(), WizardStep::Amount);
    }

    #[test]
    fn full_forward_path_for_at_or_above_threshold() {
        let session = answered_session(AmountTier::TenKTo200k);
        let mut seq = StepSequencer::new();

        assert!(seq.advance(&STANDARD_QUESTIONNAIRE, &session));
        assert_eq!(seq.current(), WizardStep::Screening);
        assert!(seq.advance(&STANDARD_QUESTIONNAIRE, &session));
        assert_eq!(seq.current(), WizardStep::Acknowledge);
        assert!(seq.advance(&STANDARD_QUESTIONNAIRE, &session));
        assert_eq!(seq.current(), WizardStep::Result);
        assert!(seq.is_finished());
    }

    #[test]
    fn under_threshold_amount_fast_exits_to_result() {
        let mut session = ScreeningSession::new(&STANDARD_QUESTIONNAIRE);
        session.set_amount_tier(AmountTier::LessThan10k);
        let mut seq = StepSequencer::new();

        assert!(seq.advance(&STANDARD_QUESTIONNAIRE, &session));
        assert_eq!(seq.current(), WizardStep::Result);
    }

    #[test]
    fn screening_step_blocks_until_scored_answers_complete() {
        let mut session = ScreeningSession::new(&STANDARD_QUESTIONNAIRE);
        session.set_amount_tier(AmountTier::TenKTo200k);
        let mut seq = StepSequencer::new();
        seq.advance(&STANDARD_QUESTIONNAIRE, &session);

        // Five of six scored answers: still blocked.
        for i in 0..5 {
            session.set_screening_answer(i, ScreeningAnswer::No).unwrap();
        }
        assert!(!seq.advance(&STANDARD_QUESTIONNAIRE, &session));

        session.set_screening_answer(5, ScreeningAnswer::No).unwrap();
        assert!(seq.advance(&STANDARD_QUESTIONNAIRE, &session));
    }

    #[test]
    fn informational_questions_do_not_block_next() {
        let mut session = ScreeningSession::new(&STANDARD_QUESTIONNAIRE);
        session.set_amount_tier(AmountTier::TenKTo200k);
        for i in 0..STANDARD_QUESTIONNAIRE.required_count {
            session.set_screening_answer(i, ScreeningAnswer::Yes).unwrap();
        }
        // Questions 6 and 7 stay unanswered.
        let mut seq = StepSequencer::new();
        seq.advance(&STANDARD_QUESTIONNAIRE, &session);
        assert!(seq.can_advance(&STANDARD_QUESTIONNAIRE, &session));
    }

    #[test]
    fn back_returns_to_immediately_preceding_step() {
        let session = answered_session(AmountTier::TenKTo200k);
        let mut seq = StepSequencer::new();
        seq.advance(&STANDARD_QUESTIONNAIRE, &session);
        seq.advance(&STANDARD_QUESTIONNAIRE, &session);
        assert_eq!(seq.current(), WizardStep::Acknowledge);

        assert!(seq.back());
        assert_eq!(seq.current(), WizardStep::Screening);
        assert!(seq.back());
        assert_eq!(seq.current(), WizardStep::Amount);
        assert!(!seq.back());
    }

    #[test]
    fn back_then_forward_restores_the_same_step() {
        let session = answered_session(AmountTier::TenKTo200k);
        let mut seq = StepSequencer::new();
        seq.advance(&STANDARD_QUESTIONNAIRE, &session);
        seq.advance(&STANDARD_QUESTIONNAIRE, &session);

        let before = seq.current();
        seq.back();
        seq.advance(&STANDARD_QUESTIONNAIRE, &session);
        assert_eq!(seq.current(), before);
    }

    #[test]
    fn terminal_step_refuses_both_directions() {
        let mut session = ScreeningSession::new(&STANDARD_QUESTIONNAIRE);
        session.set_amount_tier(AmountTier::LessThan10k);
        let mut seq = StepSequencer::new();
        seq.advance(&STANDARD_QUESTIONNAIRE, &session);
        assert!(seq.is_finished());

        assert!(!seq.advance(&STANDARD_QUESTIONNAIRE, &session));
        assert!(!seq.back());
    }

    #[test]
    fn progress_tracks_step_position() {
        let session = answered_session(AmountTier::TenKTo200k);
        let mut seq = StepSequencer::new();
        assert_eq!(seq.progress().value(), 25);
        seq.advance(&STANDARD_QUESTIONNAIRE, &session);
        assert_eq!(seq.progress().value(), 50);
    }

    #[test]
    fn reset_returns_to_first_step() {
        let session = answered_session(AmountTier::TenKTo200k);
        let mut seq = StepSequencer::new();
        seq.advance(&STANDARD_QUESTIONNAIRE, &session);
        seq.reset();
        assert_eq!(seq.current(), WizardStep::Amount);
    }
}
