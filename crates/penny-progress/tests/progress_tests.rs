//! Tests for the progression engine as a whole.

use penny_progress::levels::{level_from_xp, xp_required};
use penny_progress::{
    bonus_xp, calculate_progress, catalog, level_info, phase_for_milestone, resolve_phase,
    MilestoneId, Phase, UsageSnapshot,
};
use proptest::prelude::*;

#[test]
fn test_onboarding_snapshot_reaches_level_4() {
    let snap = UsageSnapshot {
        currency_set: true,
        banks_configured: 1,
        parsing_preferences: 1,
        months_tracked: 1,
        ..Default::default()
    };
    let state = calculate_progress(&snap);

    let completed: Vec<_> = state.milestones.iter().filter(|m| m.completed).map(|m| m.id()).collect();
    assert_eq!(completed, vec!["currency_set", "banks_configured", "first_parsing", "month_1"]);
    assert_eq!(state.bonus_xp, 0);
    assert_eq!(state.total_xp, 400);
    assert_eq!(state.level, 4);
}

#[test]
fn test_phase_priority_cases() {
    assert_eq!(resolve_phase(0, 1), Phase::Analyst);
    assert_eq!(resolve_phase(7, 0), Phase::Advisor);
    assert_eq!(resolve_phase(0, 0), Phase::Beginner);

    let state = calculate_progress(&UsageSnapshot { budgets_configured: 1, ..Default::default() });
    assert_eq!(state.phase, Phase::Analyst);
}

#[test]
fn test_financial_mastery_composite() {
    let snap = UsageSnapshot {
        months_tracked: 36,
        categorization_rules: 100,
        budgets_configured: 20,
        ..Default::default()
    };
    let state = calculate_progress(&snap);
    let fm = state.milestone("financial_mastery").unwrap();
    assert!(fm.completed);
    assert_eq!((fm.current, fm.target), (3, 3));

    let state = calculate_progress(&UsageSnapshot { categorization_rules: 99, ..snap });
    let fm = state.milestone("financial_mastery").unwrap();
    assert!(!fm.completed);
    assert_eq!((fm.current, fm.target), (2, 3));
}

#[test]
fn test_bonus_example() {
    let snap = UsageSnapshot {
        months_tracked: 15,
        budgets_configured: 7,
        categorization_rules: 25,
        ..Default::default()
    };
    assert_eq!(bonus_xp(&snap), 250);
    assert_eq!(calculate_progress(&snap).bonus_xp, 250);
}

#[test]
fn test_catalog_orders_distinct() {
    let defs = catalog();
    for (i, a) in defs.iter().enumerate() {
        for b in &defs[i + 1..] {
            assert_ne!(a.order, b.order, "{} and {}", a.id, b.id);
        }
    }
    assert_eq!(defs.len(), MilestoneId::ALL.len());
}

#[test]
fn test_sparse_json_snapshot_end_to_end() {
    let snap = UsageSnapshot::from_json(r#"{"currency_set": true}"#).unwrap();
    let state = calculate_progress(&snap);
    assert_eq!(state.total_xp, 50);
    assert_eq!(state.level, 2);
    assert_eq!(state.level_progress, 0.0);
}

#[test]
fn test_progress_state_json_shape() {
    let state = calculate_progress(&UsageSnapshot { months_tracked: 2, ..Default::default() });
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["phase"], "student");
    assert_eq!(json["mascot"], "chick");
    assert_eq!(json["mascot_image"], "/mascots/chick.png");
    assert_eq!(json["milestones"].as_array().unwrap().len(), MilestoneId::ALL.len());
    assert_eq!(json["next_milestone"]["id"], "currency_set");
}

#[test]
fn test_level_info_matches_state() {
    let state = calculate_progress(&UsageSnapshot { months_tracked: 12, ..Default::default() });
    let info = level_info(state.level);
    assert_eq!(info.title, state.level_title);
    assert_eq!(state.total_xp - info.xp_required, state.current_level_xp);
    assert_eq!(info.xp_for_next - info.xp_required, state.next_level_xp);
}

#[test]
fn test_path_phase_independent_of_activity() {
    // Master on the path, beginner by activity
    let state = calculate_progress(&UsageSnapshot::default());
    let last = state.milestones.last().unwrap();
    assert_eq!(phase_for_milestone(last.definition.order), Phase::Master);
    assert_eq!(state.phase, Phase::Beginner);
}

fn snapshot_strategy() -> impl Strategy<Value = UsageSnapshot> {
    (
        (any::<bool>(), 0u64..5, 0u64..5, 0u64..60, 0u64..30),
        (0u64..150, 0u64..30, 0u64..80, 0u64..200),
        (any::<bool>(), 0u64..5, any::<bool>(), 0u64..5),
    )
        .prop_map(|(a, b, c)| UsageSnapshot {
            currency_set: a.0,
            banks_configured: a.1,
            parsing_preferences: a.2,
            months_tracked: a.3,
            budgets_configured: a.4,
            categorization_rules: b.0,
            recategorizations: b.1,
            data_fetches: b.2,
            statements: b.3,
            preferences_updated: c.0,
            multi_month_analyses: c.1,
            full_year_budget: c.2,
            foreign_currency_statements: c.3,
        })
}

proptest! {
    #[test]
    fn proptest_level_round_trip(level in 1u32..100_000u32) {
        prop_assert_eq!(level_from_xp(xp_required(level)), level);
        prop_assert_eq!(level_from_xp(xp_required(level + 1) - 1), level);
        prop_assert!(xp_required(level + 1) > xp_required(level));
    }

    #[test]
    fn proptest_xp_in_level_window(xp in 0u64..10_000_000_000u64) {
        let level = level_from_xp(xp);
        prop_assert!(level >= 1);
        prop_assert!(xp_required(level) <= xp);
        prop_assert!(xp < xp_required(level + 1));
    }

    #[test]
    fn proptest_state_invariants(snap in snapshot_strategy()) {
        let state = calculate_progress(&snap);

        let completed = state.milestones.iter().filter(|m| m.completed).count();
        prop_assert_eq!(state.completed_count, completed);
        prop_assert!(state.completed_count <= state.total_milestones);
        prop_assert!(state.level_progress >= 0.0 && state.level_progress <= 100.0);

        for pair in state.milestones.windows(2) {
            prop_assert!(pair[0].definition.order < pair[1].definition.order);
        }
        for m in &state.milestones {
            prop_assert!(m.progress >= 0.0 && m.progress <= 100.0);
            prop_assert_eq!(m.claimable, m.completed);
        }

        let first_open = state.milestones.iter().find(|m| !m.completed).map(|m| m.id());
        prop_assert_eq!(state.next_milestone.as_ref().map(|m| m.id()), first_open);
        prop_assert_eq!(state.total_xp, state.milestone_xp() + bonus_xp(&snap));
        prop_assert_eq!(state.phase, resolve_phase(snap.months_tracked, snap.budgets_configured));
        prop_assert_eq!(&state, &calculate_progress(&snap));
    }
}
