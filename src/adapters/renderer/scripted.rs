//! Scripted renderer - replays a fixed event sequence.
//!
//! Test double for driving full wizard runs without a terminal. Records
//! every view it is shown so tests can assert on the rendered sequence.

use crate::application::StepView;
use crate::ports::{WizardEvent, WizardRenderer};

/// Replays a queue of events, recording the views it was shown.
#[derive(Debug, Default)]
pub struct ScriptedRenderer {
    events: std::collections::VecDeque<WizardEvent>,
    shown: Vec<StepView>,
}

impl ScriptedRenderer {
    /// Creates a renderer that will emit the given events in order, then
    /// end the run.
    pub fn new(events: impl IntoIterator<Item = WizardEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            shown: Vec::new(),
        }
    }

    /// The views shown so far, in order.
    pub fn shown(&self) -> &[StepView] {
        &self.shown
    }
}

impl WizardRenderer for ScriptedRenderer {
    fn show(&mut self, view: &StepView) {
        self.shown.push(view.clone());
    }

    fn next_event(&mut self) -> Option<WizardEvent> {
        self.events.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ScreeningWizard;
    use crate::domain::screening::{AmountTier, WizardStep, STANDARD_QUESTIONNAIRE};

    #[test]
    fn replays_events_and_records_views() {
        let mut renderer = ScriptedRenderer::new([
            WizardEvent::AmountSelected {
                tier: AmountTier::LessThan10k,
            },
            WizardEvent::Next,
        ]);
        let mut wizard = ScreeningWizard::new(STANDARD_QUESTIONNAIRE.clone()).unwrap();
        wizard.run(&mut renderer);

        // Amount step twice (before and after selection), then the result.
        assert_eq!(renderer.shown().len(), 3);
        assert_eq!(renderer.shown()[2].step, WizardStep::Result);
    }
}
