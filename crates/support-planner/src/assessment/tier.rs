use super::scoring::CategoryScores;
use serde::{Deserialize, Serialize};

/// Ordinal summary of overall support need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NeedsTier {
    Low,
    Mild,
    Moderate,
    High,
}

impl NeedsTier {
    pub const HIGH_THRESHOLD: u32 = 20;
    pub const MODERATE_THRESHOLD: u32 = 12;
    pub const MILD_THRESHOLD: u32 = 6;

    /// Thresholds are inclusive: a total sitting on a boundary takes the higher tier.
    pub const fn from_total(total: u32) -> Self {
        if total >= Self::HIGH_THRESHOLD {
            Self::High
        } else if total >= Self::MODERATE_THRESHOLD {
            Self::Moderate
        } else if total >= Self::MILD_THRESHOLD {
            Self::Mild
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    pub const fn daily_tip(self) -> &'static str {
        match self {
            Self::High => {
                "Keep today calm and predictable: preview the schedule together, \
                 limit surprises, and plan quiet breaks between activities."
            }
            Self::Moderate => {
                "Try one small, structured activity today with a clear start and finish, \
                 and celebrate completing it together."
            }
            Self::Low | Self::Mild => {
                "Make room for exploration today: offer a new activity and let \
                 independence lead while you stay nearby for support."
            }
        }
    }
}

pub fn classify(scores: &CategoryScores) -> NeedsTier {
    NeedsTier::from_total(scores.total())
}
