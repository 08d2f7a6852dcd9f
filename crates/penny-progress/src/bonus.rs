//! Bonus XP for repeatable activity past the milestone thresholds.
//!
//! | Activity              | Threshold | XP per unit over |
//! |-----------------------|-----------|------------------|
//! | Months tracked        | 12        | +50              |
//! | Budgets configured    | 5         | +25              |
//! | Categorization rules  | 20        | +10              |
//!
//! Linear and uncapped. Bonus XP only ever adds to milestone XP.

use crate::snapshot::UsageSnapshot;
use serde::Serialize;

pub const MONTHS_THRESHOLD: u64 = 12;
pub const XP_PER_EXTRA_MONTH: u64 = 50;

pub const BUDGETS_THRESHOLD: u64 = 5;
pub const XP_PER_EXTRA_BUDGET: u64 = 25;

pub const RULES_THRESHOLD: u64 = 20;
pub const XP_PER_EXTRA_RULE: u64 = 10;

/// Bonus XP split by source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BonusBreakdown {
    pub months: u64,
    pub budgets: u64,
    pub rules: u64,
}

impl BonusBreakdown {
    pub fn from_snapshot(snapshot: &UsageSnapshot) -> Self {
        Self {
            months: over(snapshot.months_tracked, MONTHS_THRESHOLD, XP_PER_EXTRA_MONTH),
            budgets: over(snapshot.budgets_configured, BUDGETS_THRESHOLD, XP_PER_EXTRA_BUDGET),
            rules: over(snapshot.categorization_rules, RULES_THRESHOLD, XP_PER_EXTRA_RULE),
        }
    }

    pub fn total(&self) -> u64 {
        self.months.saturating_add(self.budgets).saturating_add(self.rules)
    }
}

fn over(value: u64, threshold: u64, per_unit: u64) -> u64 {
    value.saturating_sub(threshold).saturating_mul(per_unit)
}

/// Total bonus XP for a snapshot
pub fn bonus_xp(snapshot: &UsageSnapshot) -> u64 {
    BonusBreakdown::from_snapshot(snapshot).total()
}
