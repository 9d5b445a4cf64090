//! Screening module - questionnaire, session, sequencing, and decision rules.
//!
//! The answer store is [`ScreeningSession`], step order is enforced by
//! [`StepSequencer`], and [`decision::evaluate`] maps a session to a
//! [`Recommendation`]. All variant-specific behavior (question list, scored
//! prefix, thresholds, gating) lives in [`Questionnaire`] data, not code.

mod answer;
mod decision;
mod question;
mod questionnaire;
mod sequencer;
mod session;
mod step;

pub use answer::{AmountTier, JustificationTag, ScreeningAnswer};
pub use decision::{evaluate, Recommendation, RecommendationTier};
pub use question::Question;
pub use questionnaire::{Questionnaire, ThresholdRule, STANDARD_QUESTIONNAIRE};
pub use sequencer::StepSequencer;
pub use session::ScreeningSession;
pub use step::WizardStep;
