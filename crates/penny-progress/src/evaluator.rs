//! Milestone evaluation.
//!
//! Each `MilestoneId` maps to a typed `Rule`; evaluation reads the matching
//! counters from the snapshot and reports completion plus progress.

use crate::catalog::{MilestoneDefinition, MilestoneId};
use crate::snapshot::UsageSnapshot;
use serde::Serialize;
use tracing::warn;

/// Numeric snapshot counters a rule can read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    ParsingPreferences,
    MonthsTracked,
    BudgetsConfigured,
    CategorizationRules,
    Recategorizations,
    DataFetches,
    Statements,
    MultiMonthAnalyses,
    ForeignCurrencyStatements,
}

impl Counter {
    pub fn read(&self, snapshot: &UsageSnapshot) -> u64 {
        match self {
            Counter::ParsingPreferences => snapshot.parsing_preferences,
            Counter::MonthsTracked => snapshot.months_tracked,
            Counter::BudgetsConfigured => snapshot.budgets_configured,
            Counter::CategorizationRules => snapshot.categorization_rules,
            Counter::Recategorizations => snapshot.recategorizations,
            Counter::DataFetches => snapshot.data_fetches,
            Counter::Statements => snapshot.statements,
            Counter::MultiMonthAnalyses => snapshot.multi_month_analyses,
            Counter::ForeignCurrencyStatements => snapshot.foreign_currency_statements,
        }
    }
}

/// Yes/no conditions a rule can read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    CurrencySet,
    AnyBankConfigured,
    PreferencesUpdated,
    FullYearBudget,
}

impl Flag {
    pub fn read(&self, snapshot: &UsageSnapshot) -> bool {
        match self {
            Flag::CurrencySet => snapshot.currency_set,
            Flag::AnyBankConfigured => snapshot.banks_configured >= 1,
            Flag::PreferencesUpdated => snapshot.preferences_updated,
            Flag::FullYearBudget => snapshot.full_year_budget,
        }
    }
}

/// Completion rule for a milestone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Done when the flag holds; progress is 0 or 100
    Flag(Flag),
    /// Done when `counter >= target`
    Threshold { counter: Counter, target: u64 },
    /// Done when every `(counter, target)` pair is met
    AllOf(&'static [(Counter, u64)]),
}

const FINANCIAL_MASTERY: &[(Counter, u64)] = &[
    (Counter::MonthsTracked, 36),
    (Counter::CategorizationRules, 100),
    (Counter::BudgetsConfigured, 20),
];

impl MilestoneId {
    /// Evaluation rule for this milestone
    pub fn rule(&self) -> Rule {
        use Counter::*;
        let at_least = |counter, target| Rule::Threshold { counter, target };

        match self {
            MilestoneId::CurrencySet => Rule::Flag(Flag::CurrencySet),
            MilestoneId::BanksConfigured => Rule::Flag(Flag::AnyBankConfigured),
            MilestoneId::FirstParsing => at_least(ParsingPreferences, 1),
            MilestoneId::Month1 => at_least(MonthsTracked, 1),
            MilestoneId::Statements10 => at_least(Statements, 10),
            MilestoneId::FirstBudget => at_least(BudgetsConfigured, 1),
            MilestoneId::FirstRule => at_least(CategorizationRules, 1),
            MilestoneId::Month3 => at_least(MonthsTracked, 3),
            MilestoneId::FirstFetch => at_least(DataFetches, 1),
            MilestoneId::PreferencesUpdated => Rule::Flag(Flag::PreferencesUpdated),
            MilestoneId::Recategorize10 => at_least(Recategorizations, 10),
            MilestoneId::Categories20 => at_least(CategorizationRules, 20),
            MilestoneId::Budgets5 => at_least(BudgetsConfigured, 5),
            MilestoneId::Month6 => at_least(MonthsTracked, 6),
            MilestoneId::MultiMonthAnalysis => at_least(MultiMonthAnalyses, 1),
            MilestoneId::ForeignCurrency => at_least(ForeignCurrencyStatements, 1),
            MilestoneId::Fetches50 => at_least(DataFetches, 50),
            MilestoneId::Month12 => at_least(MonthsTracked, 12),
            MilestoneId::FullYearBudget => Rule::Flag(Flag::FullYearBudget),
            MilestoneId::Categories100 => at_least(CategorizationRules, 100),
            MilestoneId::Month24 => at_least(MonthsTracked, 24),
            MilestoneId::Month36 => at_least(MonthsTracked, 36),
            MilestoneId::FinancialMastery => Rule::AllOf(FINANCIAL_MASTERY),
        }
    }
}

/// Definition plus evaluated completion state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MilestoneStatus {
    #[serde(flatten)]
    pub definition: MilestoneDefinition,
    pub completed: bool,
    /// Percent complete (0-100)
    pub progress: f64,
    /// Raw progress counter
    pub current: u64,
    /// Counter value that means 100%
    pub target: u64,
    /// Completed milestones can be claimed by the UI
    pub claimable: bool,
}

impl MilestoneStatus {
    fn new(definition: &MilestoneDefinition, current: u64, target: u64) -> Self {
        let completed = target > 0 && current >= target;
        Self {
            definition: definition.clone(),
            completed,
            progress: percent(current, target),
            current,
            target,
            claimable: completed,
        }
    }

    pub fn id(&self) -> &'static str {
        self.definition.id
    }

    pub fn xp(&self) -> u64 {
        self.definition.xp
    }
}

/// Apply a rule to a snapshot, returning `(current, target)`
pub fn apply_rule(rule: Rule, snapshot: &UsageSnapshot) -> (u64, u64) {
    match rule {
        Rule::Flag(flag) => (flag.read(snapshot) as u64, 1),
        Rule::Threshold { counter, target } => (counter.read(snapshot), target),
        Rule::AllOf(conditions) => {
            let met = conditions
                .iter()
                .filter(|(counter, target)| counter.read(snapshot) >= *target)
                .count() as u64;
            (met, conditions.len() as u64)
        }
    }
}

/// Evaluate one definition against a snapshot.
///
/// An id without a rule is a catalog mistake: it yields an incomplete,
/// zero-progress status instead of an error.
pub fn evaluate(definition: &MilestoneDefinition, snapshot: &UsageSnapshot) -> MilestoneStatus {
    match definition.id.parse::<MilestoneId>() {
        Ok(id) => {
            let (current, target) = apply_rule(id.rule(), snapshot);
            MilestoneStatus::new(definition, current, target)
        }
        Err(_) => {
            warn!(milestone = definition.id, "no evaluation rule for milestone");
            MilestoneStatus::new(definition, 0, 1)
        }
    }
}

fn percent(current: u64, target: u64) -> f64 {
    if target == 0 {
        return 0.0;
    }
    (current as f64 * 100.0 / target as f64).min(100.0)
}
