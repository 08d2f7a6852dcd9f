//! Personality phases.
//!
//! Two separate mappings live here:
//! - `resolve_phase()`: the user's phase from raw activity (drives the mascot)
//! - `phase_for_milestone()`: a milestone's phase from its catalog order
//!   (color-coding along the milestone path)
//!
//! They use different transition logic and must not be merged.

use crate::catalog::MilestoneId;
use crate::levels::Mascot;
use serde::{Deserialize, Serialize};

/// The five phases, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Beginner,
    Student,
    Analyst,
    Advisor,
    Master,
}

/// Static description of a phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseDefinition {
    pub phase: Phase,
    pub name: &'static str,
    pub mascot: Mascot,
    pub description: &'static str,
    /// Milestone whose completion usually coincides with entering the phase.
    /// Informational only; phases are resolved from raw activity.
    pub milestone: MilestoneId,
}

impl Phase {
    pub const ALL: &'static [Phase] = &[
        Phase::Beginner,
        Phase::Student,
        Phase::Analyst,
        Phase::Advisor,
        Phase::Master,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Beginner => "beginner",
            Phase::Student => "student",
            Phase::Analyst => "analyst",
            Phase::Advisor => "advisor",
            Phase::Master => "master",
        }
    }

    pub fn mascot(&self) -> Mascot {
        self.definition().mascot
    }

    pub fn definition(&self) -> PhaseDefinition {
        let (name, mascot, description, milestone) = match self {
            Phase::Beginner => (
                "The Curious Beginner",
                Mascot::Egg,
                "Just getting set up. Penny is waiting to see your first numbers.",
                MilestoneId::CurrencySet,
            ),
            Phase::Student => (
                "The Eager Student",
                Mascot::Chick,
                "Your first month is in. Penny is learning how you spend.",
                MilestoneId::Month1,
            ),
            Phase::Analyst => (
                "The Sharp Analyst",
                Mascot::Fledgling,
                "Budgets are in place. Penny compares plans against reality.",
                MilestoneId::FirstBudget,
            ),
            Phase::Advisor => (
                "The Trusted Advisor",
                Mascot::Owl,
                "Half a year of history. Penny can spot trends and suggest changes.",
                MilestoneId::Month6,
            ),
            Phase::Master => (
                "The Money Master",
                Mascot::SageOwl,
                "A full year tracked. Penny knows your seasons and your habits.",
                MilestoneId::Month12,
            ),
        };

        PhaseDefinition { phase: *self, name, mascot, description, milestone }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Phase from raw activity. First match wins:
/// months >= 12 master, months >= 6 advisor, budgets >= 1 analyst,
/// months >= 1 student, otherwise beginner.
pub fn resolve_phase(months_tracked: u64, budgets_configured: u64) -> Phase {
    if months_tracked >= 12 {
        Phase::Master
    } else if months_tracked >= 6 {
        Phase::Advisor
    } else if budgets_configured >= 1 {
        Phase::Analyst
    } else if months_tracked >= 1 {
        Phase::Student
    } else {
        Phase::Beginner
    }
}

/// Path color phase for a milestone's catalog order
pub fn phase_for_milestone(order: f64) -> Phase {
    if order <= 4.0 {
        Phase::Beginner
    } else if order <= 9.0 {
        Phase::Student
    } else if order <= 14.0 {
        Phase::Analyst
    } else if order <= 19.0 {
        Phase::Advisor
    } else {
        Phase::Master
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert_eq!(resolve_phase(0, 0), Phase::Beginner);
        assert_eq!(resolve_phase(1, 0), Phase::Student);
        assert_eq!(resolve_phase(0, 1), Phase::Analyst);
        assert_eq!(resolve_phase(3, 2), Phase::Analyst);
        assert_eq!(resolve_phase(7, 0), Phase::Advisor);
        assert_eq!(resolve_phase(6, 10), Phase::Advisor);
        assert_eq!(resolve_phase(12, 0), Phase::Master);
        assert_eq!(resolve_phase(40, 40), Phase::Master);
    }

    #[test]
    fn test_phases_ordered() {
        for pair in Phase::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_phase_mascots_distinct() {
        let mut mascots: Vec<_> = Phase::ALL.iter().map(|p| p.mascot()).collect();
        mascots.dedup();
        assert_eq!(mascots.len(), Phase::ALL.len());
    }

    #[test]
    fn test_phase_for_milestone_ranges() {
        assert_eq!(phase_for_milestone(1.0), Phase::Beginner);
        assert_eq!(phase_for_milestone(4.0), Phase::Beginner);
        assert_eq!(phase_for_milestone(4.3), Phase::Student);
        assert_eq!(phase_for_milestone(9.0), Phase::Student);
        assert_eq!(phase_for_milestone(12.0), Phase::Analyst);
        assert_eq!(phase_for_milestone(17.0), Phase::Advisor);
        assert_eq!(phase_for_milestone(22.0), Phase::Master);
    }

    #[test]
    fn test_definition_serializes_catalog_id() {
        let json = serde_json::to_value(Phase::Student.definition()).unwrap();
        assert_eq!(json["milestone"], "month_1");
        assert_eq!(json["phase"], "student");
        assert_eq!(json["mascot"], "chick");
    }

    #[test]
    fn test_definition_round_trip() {
        for phase in Phase::ALL {
            assert_eq!(phase.definition().phase, *phase);
        }
        assert_eq!(Phase::Analyst.definition().milestone, MilestoneId::FirstBudget);
    }
}
