//! Application layer - the wizard service and its view model.

mod view;
mod wizard;

pub use view::{ChoiceView, QuestionView, StepBody, StepView};
pub use wizard::ScreeningWizard;
