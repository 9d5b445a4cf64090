//! Wizard renderer port - view out, user events in.
//!
//! The core never touches a screen. It hands the renderer a pure
//! [`StepView`](crate::application::StepView) description and receives
//! discrete selection events back, mirroring how the original page wired
//! click handlers to an in-memory form object.

use serde::{Deserialize, Serialize};

use crate::application::StepView;
use crate::domain::screening::{AmountTier, JustificationTag, ScreeningAnswer};

/// A discrete user interaction reported by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum WizardEvent {
    /// An amount tier radio was selected.
    AmountSelected { tier: AmountTier },
    /// A screening question was answered.
    ScreeningAnswered {
        index: usize,
        answer: ScreeningAnswer,
    },
    /// A justification checkbox was flipped.
    JustificationToggled { tag: JustificationTag },
    /// The acknowledgment box was set or cleared.
    Acknowledged { accepted: bool },
    /// The next button.
    Next,
    /// The back button.
    Previous,
    /// Start over with a fresh session.
    Restart,
}

/// Port for the presentation layer.
///
/// # Contract
///
/// Implementations display the given view, then block until the user
/// produces the next event. Returning `None` ends the wizard run (the
/// equivalent of closing the page).
pub trait WizardRenderer {
    /// Presents the current step.
    fn show(&mut self, view: &StepView);

    /// Waits for the next user interaction. `None` ends the run.
    fn next_event(&mut self) -> Option<WizardEvent>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_tagged_snake_case() {
        let event = WizardEvent::AmountSelected {
            tier: AmountTier::LessThan10k,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, "{\"event\":\"amount_selected\",\"tier\":\"less_than_10k\"}");
    }

    #[test]
    fn renderer_trait_is_object_safe() {
        fn check<T: WizardRenderer + ?Sized>() {}
        check::<dyn WizardRenderer>();
    }
}
