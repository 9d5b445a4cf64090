//! Answer value objects: amount tiers, tri-state answers, justification tags.
//!
//! Wire names (`snake_case`) match the data values the questionnaire front
//! ends have always used, so exported sessions stay readable across variants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Estimated dollar amount of the procurement.
///
/// Only the under-threshold distinction drives sequencing and the decision
/// rules; the top tier additionally flags the purchase for extra approval in
/// the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmountTier {
    /// Below the delegated authority threshold; no justification required.
    #[serde(rename = "less_than_10k")]
    LessThan10k,
    /// Standard sole source documentation required.
    #[serde(rename = "10k_to_200k")]
    TenKTo200k,
    /// Additional approval required on top of the justification.
    #[serde(rename = "above_200k")]
    Above200k,
}

impl AmountTier {
    /// All tiers in presentation order.
    pub const ALL: [AmountTier; 3] = [
        AmountTier::LessThan10k,
        AmountTier::TenKTo200k,
        AmountTier::Above200k,
    ];

    /// Returns true when the amount is below the delegated authority
    /// threshold, which short-circuits the rest of the wizard.
    pub fn is_under_threshold(&self) -> bool {
        matches!(self, AmountTier::LessThan10k)
    }

    /// Returns true when the tier requires additional approval beyond the
    /// standard justification.
    pub fn requires_additional_approval(&self) -> bool {
        matches!(self, AmountTier::Above200k)
    }

    /// Display label for forms and reports.
    pub fn label(&self) -> &'static str {
        match self {
            AmountTier::LessThan10k => "Less than $10,000",
            AmountTier::TenKTo200k => "$10,000 to $200,000",
            AmountTier::Above200k => "$200,000 and above",
        }
    }

    /// Short guidance shown under each option.
    pub fn hint(&self) -> &'static str {
        match self {
            AmountTier::LessThan10k => "Delegated authority threshold",
            AmountTier::TenKTo200k => "Standard sole source documentation required",
            AmountTier::Above200k => "Additional approval required",
        }
    }
}

impl fmt::Display for AmountTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Tri-state answer to a screening question.
///
/// `Unanswered` is the starting state for every question; the sequencer will
/// not leave the screening step while any scored question is unanswered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningAnswer {
    Yes,
    No,
    #[default]
    Unanswered,
}

impl ScreeningAnswer {
    /// Returns true for an affirmative answer.
    pub fn is_affirmative(&self) -> bool {
        matches!(self, ScreeningAnswer::Yes)
    }

    /// Returns true once the question has been answered either way.
    pub fn is_answered(&self) -> bool {
        !matches!(self, ScreeningAnswer::Unanswered)
    }

    /// Display label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            ScreeningAnswer::Yes => "Yes",
            ScreeningAnswer::No => "No",
            ScreeningAnswer::Unanswered => "Not answered",
        }
    }
}

impl fmt::Display for ScreeningAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Checkbox reasons supporting a sole source justification.
///
/// The set is fixed across questionnaire variants; selections are supporting
/// context for the procurement office and do not affect scoring.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum JustificationTag {
    ExclusiveDistribution,
    CompatibleAccessory,
    Maintenance,
    SoftwareMaintenance,
    ResearchContinuity,
    Patent,
    Training,
    Grant,
}

impl JustificationTag {
    /// All tags in presentation order.
    pub const ALL: [JustificationTag; 8] = [
        JustificationTag::ExclusiveDistribution,
        JustificationTag::CompatibleAccessory,
        JustificationTag::Maintenance,
        JustificationTag::SoftwareMaintenance,
        JustificationTag::ResearchContinuity,
        JustificationTag::Patent,
        JustificationTag::Training,
        JustificationTag::Grant,
    ];

    /// Display label for forms and reports.
    pub fn label(&self) -> &'static str {
        match self {
            JustificationTag::ExclusiveDistribution => "Exclusive distribution",
            JustificationTag::CompatibleAccessory => {
                "Integral part or accessory compatible with existing equipment"
            }
            JustificationTag::Maintenance => "Maintenance service for existing equipment",
            JustificationTag::SoftwareMaintenance => {
                "Upgrade or maintenance for existing software"
            }
            JustificationTag::ResearchContinuity => {
                "Used in research and required for continuity of results"
            }
            JustificationTag::Patent => {
                "Copyrighted or patented and only available from the recommended source"
            }
            JustificationTag::Training => {
                "Considerable re-orientation and training would be required"
            }
            JustificationTag::Grant => "Vendor specifically named in a grant and/or grant proposal",
        }
    }
}

impl fmt::Display for JustificationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
