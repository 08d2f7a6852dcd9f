//! Progress aggregation.
//!
//! Turns one usage snapshot into the complete `ProgressState` the frontend
//! renders. Stateless: callers recompute on every render and cache if they
//! want to.

use crate::bonus::bonus_xp;
use crate::catalog::{catalog, MilestoneDefinition};
use crate::evaluator::{evaluate, MilestoneStatus};
use crate::levels::{level_from_xp, level_info, Mascot};
use crate::phase::{resolve_phase, Phase};
use crate::snapshot::UsageSnapshot;
use serde::Serialize;
use tracing::debug;

/// Everything the UI needs to draw the progress screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressState {
    pub total_xp: u64,
    pub level: u32,
    pub level_title: String,
    /// XP earned inside the current level
    pub current_level_xp: u64,
    /// XP span of the current level
    pub next_level_xp: u64,
    /// Percent through the current level (0-100)
    pub level_progress: f64,
    /// Phase mascot (not the level badge mascot)
    pub mascot: Mascot,
    pub mascot_image: &'static str,
    /// Sorted by `order`, ascending
    pub milestones: Vec<MilestoneStatus>,
    pub completed_count: usize,
    pub total_milestones: usize,
    /// First incomplete milestone in display order
    pub next_milestone: Option<MilestoneStatus>,
    pub bonus_xp: u64,
    pub phase: Phase,
}

impl ProgressState {
    /// XP from completed milestones only
    pub fn milestone_xp(&self) -> u64 {
        self.total_xp - self.bonus_xp
    }

    pub fn milestone(&self, id: &str) -> Option<&MilestoneStatus> {
        self.milestones.iter().find(|m| m.id() == id)
    }

    pub fn all_complete(&self) -> bool {
        self.completed_count == self.total_milestones
    }
}

/// Compute the progress state for a snapshot using the built-in catalog
pub fn calculate_progress(snapshot: &UsageSnapshot) -> ProgressState {
    calculate_progress_with(&catalog(), snapshot)
}

/// Compute the progress state for a snapshot against a given catalog
pub fn calculate_progress_with(
    definitions: &[MilestoneDefinition],
    snapshot: &UsageSnapshot,
) -> ProgressState {
    let mut milestones: Vec<MilestoneStatus> =
        definitions.iter().map(|def| evaluate(def, snapshot)).collect();
    milestones.sort_by(|a, b| a.definition.order.total_cmp(&b.definition.order));

    let milestone_xp = milestones
        .iter()
        .filter(|m| m.completed)
        .fold(0u64, |acc, m| acc.saturating_add(m.xp()));
    let bonus = bonus_xp(snapshot);
    let total_xp = milestone_xp.saturating_add(bonus);

    let level = level_from_xp(total_xp);
    let current = level_info(level);
    let next = level_info(level.saturating_add(1));

    let current_level_xp = total_xp - current.xp_required;
    let next_level_xp = next.xp_required - current.xp_required;
    let level_progress = if next_level_xp == 0 {
        100.0
    } else {
        (current_level_xp as f64 * 100.0 / next_level_xp as f64).min(100.0)
    };

    let completed_count = milestones.iter().filter(|m| m.completed).count();
    let next_milestone = milestones.iter().find(|m| !m.completed).cloned();

    let phase = resolve_phase(snapshot.months_tracked, snapshot.budgets_configured);
    let mascot = phase.mascot();

    debug!(
        total_xp,
        milestone_xp,
        bonus_xp = bonus,
        level,
        completed = completed_count,
        phase = %phase,
        "progress calculated"
    );

    ProgressState {
        total_xp,
        level,
        level_title: current.title,
        current_level_xp,
        next_level_xp,
        level_progress,
        mascot,
        mascot_image: mascot.image(),
        total_milestones: milestones.len(),
        milestones,
        completed_count,
        next_milestone,
        bonus_xp: bonus,
        phase,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, MilestoneId};
    use crate::levels::xp_required;

    fn onboarded() -> UsageSnapshot {
        UsageSnapshot {
            currency_set: true,
            banks_configured: 1,
            parsing_preferences: 1,
            months_tracked: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_snapshot() {
        let state = calculate_progress(&UsageSnapshot::default());
        assert_eq!(state.total_xp, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.level_title, "Penny Pincher");
        assert_eq!(state.level_progress, 0.0);
        assert_eq!(state.completed_count, 0);
        assert_eq!(state.phase, Phase::Beginner);
        assert_eq!(state.mascot, Mascot::Egg);
        assert_eq!(state.next_milestone.unwrap().id(), "currency_set");
    }

    #[test]
    fn test_onboarding_end_to_end() {
        let state = calculate_progress(&onboarded());
        assert_eq!(state.milestone_xp(), 400);
        assert_eq!(state.bonus_xp, 0);
        assert_eq!(state.total_xp, 400);
        assert_eq!(state.level, 4);
        assert_eq!(state.level_title, "Ledger Keeper");
        assert_eq!(state.current_level_xp, 100);
        assert_eq!(state.next_level_xp, 200);
        assert_eq!(state.level_progress, 50.0);
        assert_eq!(state.completed_count, 4);
        assert_eq!(state.phase, Phase::Student);
        assert_eq!(state.next_milestone.as_ref().unwrap().id(), "statements_10");
    }

    #[test]
    fn test_level_progress_zero_at_threshold() {
        // 50 + 50 + 100 + 100 (first_rule) = 300 = xp_required(4)
        let snap = UsageSnapshot {
            currency_set: true,
            banks_configured: 1,
            parsing_preferences: 1,
            categorization_rules: 1,
            ..Default::default()
        };
        let state = calculate_progress(&snap);
        assert_eq!(state.total_xp, xp_required(4));
        assert_eq!(state.level, 4);
        assert_eq!(state.current_level_xp, 0);
        assert_eq!(state.level_progress, 0.0);
    }

    #[test]
    fn test_mascot_follows_phase_not_level() {
        // Same milestone XP, different phase
        let student = UsageSnapshot { months_tracked: 1, ..Default::default() };
        let analyst = UsageSnapshot {
            budgets_configured: 1,
            parsing_preferences: 1,
            banks_configured: 1,
            ..Default::default()
        };

        let a = calculate_progress(&student);
        let b = calculate_progress(&analyst);
        assert_eq!(a.total_xp, 200);
        assert_eq!(b.total_xp, 300);
        assert_eq!(a.phase, Phase::Student);
        assert_eq!(b.phase, Phase::Analyst);
        assert_ne!(a.mascot, b.mascot);
        assert_eq!(b.mascot_image, Mascot::Fledgling.image());
    }

    #[test]
    fn test_bonus_added_to_total() {
        let snap = UsageSnapshot { months_tracked: 15, ..Default::default() };
        let state = calculate_progress(&snap);
        // month_1 + month_3 + month_6 + month_12
        assert_eq!(state.milestone_xp(), 200 + 300 + 500 + 1000);
        assert_eq!(state.bonus_xp, 150);
        assert_eq!(state.total_xp, 2150);
        assert_eq!(state.phase, Phase::Master);
    }

    #[test]
    fn test_sorted_by_order_even_for_shuffled_catalog() {
        let mut defs = catalog();
        defs.reverse();
        let state = calculate_progress_with(&defs, &onboarded());
        for pair in state.milestones.windows(2) {
            assert!(pair[0].definition.order < pair[1].definition.order);
        }
        assert_eq!(state, calculate_progress(&onboarded()));
    }

    #[test]
    fn test_unknown_milestone_in_catalog() {
        let mut defs = catalog();
        defs.push(MilestoneDefinition::new("mystery", "Mystery", "", Category::Tools, 9999, "?", 0.5));
        let state = calculate_progress_with(&defs, &onboarded());

        assert_eq!(state.total_milestones, MilestoneId::ALL.len() + 1);
        assert_eq!(state.total_xp, 400);
        // Sorted first and never completes
        assert_eq!(state.milestones[0].id(), "mystery");
        assert_eq!(state.next_milestone.unwrap().id(), "mystery");
    }

    #[test]
    fn test_everything_complete() {
        let snap = UsageSnapshot {
            currency_set: true,
            banks_configured: 3,
            parsing_preferences: 2,
            months_tracked: 36,
            budgets_configured: 20,
            categorization_rules: 100,
            recategorizations: 10,
            data_fetches: 50,
            statements: 72,
            preferences_updated: true,
            multi_month_analyses: 4,
            full_year_budget: true,
            foreign_currency_statements: 2,
        };
        let state = calculate_progress(&snap);
        assert!(state.all_complete());
        assert!(state.next_milestone.is_none());

        let catalog_xp: u64 = catalog().iter().map(|d| d.xp).sum();
        assert_eq!(state.milestone_xp(), catalog_xp);
    }

    #[test]
    fn test_idempotent() {
        let snap = UsageSnapshot { months_tracked: 8, budgets_configured: 3, ..onboarded() };
        assert_eq!(calculate_progress(&snap), calculate_progress(&snap));
    }
}
