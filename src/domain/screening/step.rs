//! WizardStep - the four screening wizard states.
//!
//! Forward order is Amount -> Screening -> Acknowledge -> Result, with a
//! fast exit Amount -> Result for purchases under the delegated authority
//! threshold. Result is terminal; a restart builds a fresh session.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// A step of the screening wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Amount,
    Screening,
    Acknowledge,
    Result,
}

impl WizardStep {
    /// The canonical full path through the wizard.
    pub const ORDER: [WizardStep; 4] = [
        WizardStep::Amount,
        WizardStep::Screening,
        WizardStep::Acknowledge,
        WizardStep::Result,
    ];

    /// Returns the 0-based index of this step in the full path.
    #[inline]
    pub fn order_index(self) -> usize {
        match self {
            WizardStep::Amount => 0,
            WizardStep::Screening => 1,
            WizardStep::Acknowledge => 2,
            WizardStep::Result => 3,
        }
    }

    /// Returns the next step in the full path, or None at the end.
    pub fn next(self) -> Option<WizardStep> {
        Self::ORDER.get(self.order_index() + 1).copied()
    }

    /// Returns the previous step in the full path, or None at the start.
    pub fn previous(self) -> Option<WizardStep> {
        let idx = self.order_index();
        if idx > 0 {
            Self::ORDER.get(idx - 1).copied()
        } else {
            None
        }
    }

    /// Returns the first step.
    pub fn first() -> WizardStep {
        Self::ORDER[0]
    }

    /// Returns true for the initial step.
    pub fn is_first(self) -> bool {
        self == Self::first()
    }

    /// Step title shown in the progress header.
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Amount => "Procurement Amount",
            WizardStep::Screening => "Screening Questions",
            WizardStep::Acknowledge => "Acknowledgment",
            WizardStep::Result => "Result",
        }
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardStep::*;
        matches!(
            (self, target),
            // Forward path
            (Amount, Screening) |
            (Screening, Acknowledge) |
            (Acknowledge, Result) |
            // Fast exit for under-threshold amounts
            (Amount, Result) |
            // Backward path, one step at a time
            (Screening, Amount) |
            (Acknowledge, Screening)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStep::*;
        match self {
            Amount => vec![Screening, Result],
            Screening => vec![Acknowledge, Amount],
            Acknowledge => vec![Result, Screening],
            Result => vec![],
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
