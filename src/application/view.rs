//! StepView - pure state-to-view rendering.
//!
//! The original page built DOM fragments inside its content-creation
//! functions, which made the branching rules untestable without a browser.
//! Here the view is plain data derived from the session, questionnaire, and
//! sequencer; renderers display it however they like.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;
use crate::domain::screening::{
    evaluate, AmountTier, JustificationTag, Questionnaire, Recommendation, ScreeningAnswer,
    ScreeningSession, StepSequencer, WizardStep,
};

/// A selectable option with its current selection state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceView {
    pub label: String,
    pub hint: Option<String>,
    pub selected: bool,
}

/// One screening question with its current answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub text: String,
    pub guidance: Option<String>,
    pub answer: ScreeningAnswer,
    /// False for trailing informational questions.
    pub scored: bool,
}

/// Step-specific view content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "step")]
pub enum StepBody {
    /// Amount tier radio group.
    Amount { tiers: Vec<ChoiceView> },
    /// Screening questions plus justification checkboxes.
    Screening {
        questions: Vec<QuestionView>,
        justifications: Vec<ChoiceView>,
    },
    /// Acknowledgment checkbox.
    Acknowledge { notice: String, accepted: bool },
    /// Terminal result with the evaluated recommendation.
    Result { recommendation: Recommendation },
}

/// Everything a renderer needs to draw the current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepView {
    pub step: WizardStep,
    pub title: String,
    pub step_number: usize,
    pub step_count: usize,
    pub progress: Percentage,
    pub body: StepBody,
    pub next_enabled: bool,
    pub back_enabled: bool,
}

/// Notice text shown on the acknowledgment step.
const ACKNOWLEDGMENT_NOTICE: &str =
    "I understand this pre-screening is advisory. Procurement Services makes \
     the final sole source determination after reviewing the submitted \
     justification.";

impl StepView {
    /// Builds the view for the sequencer's current step. Pure: no mutation,
    /// no I/O.
    pub fn build(
        questionnaire: &Questionnaire,
        session: &ScreeningSession,
        sequencer: &StepSequencer,
    ) -> Self {
        let step = sequencer.current();
        let body = match step {
            WizardStep::Amount => StepBody::Amount {
                tiers: AmountTier::ALL
                    .iter()
                    .map(|tier| ChoiceView {
                        label: tier.label().to_string(),
                        hint: Some(tier.hint().to_string()),
                        selected: session.amount_tier() == Some(*tier),
                    })
                    .collect(),
            },
            WizardStep::Screening => StepBody::Screening {
                questions: questionnaire
                    .questions
                    .iter()
                    .enumerate()
                    .map(|(i, q)| QuestionView {
                        text: q.text.clone(),
                        guidance: q.guidance.clone(),
                        answer: session.answer(i),
                        scored: questionnaire.is_scored(i),
                    })
                    .collect(),
                justifications: JustificationTag::ALL
                    .iter()
                    .map(|tag| ChoiceView {
                        label: tag.label().to_string(),
                        hint: None,
                        selected: session.has_justification(*tag),
                    })
                    .collect(),
            },
            WizardStep::Acknowledge => StepBody::Acknowledge {
                notice: ACKNOWLEDGMENT_NOTICE.to_string(),
                accepted: session.acknowledged(),
            },
            WizardStep::Result => StepBody::Result {
                recommendation: evaluate(questionnaire, session),
            },
        };

        Self {
            step,
            title: step.title().to_string(),
            step_number: step.order_index() + 1,
            step_count: WizardStep::ORDER.len(),
            progress: sequencer.progress(),
            body,
            next_enabled: sequencer.can_advance(questionnaire, session),
            back_enabled: sequencer.can_go_back(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::screening::STANDARD_QUESTIONNAIRE;

    #[test]
    fn amount_view_marks_selection_and_disables_next_until_selected() {
        let mut session = ScreeningSession::new(&STANDARD_QUESTIONNAIRE);
        let sequencer = StepSequencer::new();

        let view = StepView::build(&STANDARD_QUESTIONNAIRE, &session, &sequencer);
        assert!(!view.next_enabled);
        assert!(!view.back_enabled);

        session.set_amount_tier(AmountTier::TenKTo200k);
        let view = StepView::build(&STANDARD_QUESTIONNAIRE, &session, &sequencer);
        assert!(view.next_enabled);
        match view.body {
            StepBody::Amount { tiers } => {
                assert_eq!(tiers.len(), 3);
                assert!(!tiers[0].selected);
                assert!(tiers[1].selected);
            }
            other => panic!("expected amount body, got {:?}", other),
        }
    }

    #[test]
    fn screening_view_carries_questions_and_justifications() {
        let mut session = ScreeningSession::new(&STANDARD_QUESTIONNAIRE);
        session.set_amount_tier(AmountTier::TenKTo200k);
        let mut sequencer = StepSequencer::new();
        sequencer.advance(&STANDARD_QUESTIONNAIRE, &session);

        session.set_screening_answer(0, ScreeningAnswer::Yes).unwrap();
        session.toggle_justification(JustificationTag::Patent);

        let view = StepView::build(&STANDARD_QUESTIONNAIRE, &session, &sequencer);
        match view.body {
            StepBody::Screening {
                questions,
                justifications,
            } => {
                assert_eq!(questions.len(), 8);
                assert_eq!(questions[0].answer, ScreeningAnswer::Yes);
                assert!(questions[0].scored);
                assert!(!questions[7].scored);
                assert!(justifications.iter().any(|j| j.selected));
            }
            other => panic!("expected screening body, got {:?}", other),
        }
    }

    #[test]
    fn result_view_embeds_the_recommendation() {
        let mut session = ScreeningSession::new(&STANDARD_QUESTIONNAIRE);
        session.set_amount_tier(AmountTier::LessThan10k);
        let mut sequencer = StepSequencer::new();
        sequencer.advance(&STANDARD_QUESTIONNAIRE, &session);

        let view = StepView::build(&STANDARD_QUESTIONNAIRE, &session, &sequencer);
        assert_eq!(view.step, WizardStep::Result);
        assert!(!view.next_enabled);
        match view.body {
            StepBody::Result { recommendation } => {
                assert_eq!(recommendation.title(), "Sole Source Not Required");
            }
            other => panic!("expected result body, got {:?}", other),
        }
    }

    #[test]
    fn step_numbering_matches_sequencer_progress() {
        let session = ScreeningSession::new(&STANDARD_QUESTIONNAIRE);
        let sequencer = StepSequencer::new();
        let view = StepView::build(&STANDARD_QUESTIONNAIRE, &session, &sequencer);
        assert_eq!(view.step_number, 1);
        assert_eq!(view.step_count, 4);
        assert_eq!(view.progress.value(), 25);
    }
}
