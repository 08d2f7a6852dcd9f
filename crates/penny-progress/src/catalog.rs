//! Milestone catalog.
//!
//! Every milestone is a `MilestoneId` variant. The variant maps to its
//! definition here and to its completion rule in `evaluator`, both through
//! exhaustive matches, so a new milestone cannot ship without a rule.

use crate::error::{ProgressError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::str::FromStr;

/// Milestone category (drives grouping and color)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Onboarding,
    Data,
    Analysis,
    Mastery,
    Tools,
    Longterm,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::Onboarding,
        Category::Data,
        Category::Analysis,
        Category::Mastery,
        Category::Tools,
        Category::Longterm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Onboarding => "onboarding",
            Category::Data => "data",
            Category::Analysis => "analysis",
            Category::Mastery => "mastery",
            Category::Tools => "tools",
            Category::Longterm => "longterm",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Color token for a milestone category
pub fn category_color(category: Category) -> &'static str {
    match category {
        Category::Onboarding => "sky",
        Category::Data => "emerald",
        Category::Analysis => "violet",
        Category::Mastery => "gold",
        Category::Tools => "orange",
        Category::Longterm => "rose",
    }
}

/// Immutable milestone definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MilestoneDefinition {
    /// Unique identifier
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    /// XP awarded on completion
    pub xp: u64,
    /// Display token, opaque to the engine
    pub icon: &'static str,
    /// Sort key; fractional values slot a milestone between two others
    pub order: f64,
    /// Level at which the milestone is shown unlocked (presentation only)
    pub unlock_level: Option<u32>,
}

impl MilestoneDefinition {
    pub const fn new(
        id: &'static str,
        title: &'static str,
        description: &'static str,
        category: Category,
        xp: u64,
        icon: &'static str,
        order: f64,
    ) -> Self {
        Self { id, title, description, category, xp, icon, order, unlock_level: None }
    }

    pub const fn gated(mut self, level: u32) -> Self {
        self.unlock_level = Some(level);
        self
    }

    /// Whether a user at `level` sees this milestone unlocked
    pub fn is_unlocked_at(&self, level: u32) -> bool {
        self.unlock_level.map_or(true, |gate| level >= gate)
    }
}

/// Milestone identifiers, in catalog order.
///
/// Serialized as the catalog id string (`"month_1"`), not the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MilestoneId {
    CurrencySet,
    BanksConfigured,
    FirstParsing,
    Month1,
    Statements10,
    FirstBudget,
    FirstRule,
    Month3,
    FirstFetch,
    PreferencesUpdated,
    Recategorize10,
    Categories20,
    Budgets5,
    Month6,
    MultiMonthAnalysis,
    ForeignCurrency,
    Fetches50,
    Month12,
    FullYearBudget,
    Categories100,
    Month24,
    Month36,
    FinancialMastery,
}

impl MilestoneId {
    pub const ALL: &'static [MilestoneId] = &[
        MilestoneId::CurrencySet,
        MilestoneId::BanksConfigured,
        MilestoneId::FirstParsing,
        MilestoneId::Month1,
        MilestoneId::Statements10,
        MilestoneId::FirstBudget,
        MilestoneId::FirstRule,
        MilestoneId::Month3,
        MilestoneId::FirstFetch,
        MilestoneId::PreferencesUpdated,
        MilestoneId::Recategorize10,
        MilestoneId::Categories20,
        MilestoneId::Budgets5,
        MilestoneId::Month6,
        MilestoneId::MultiMonthAnalysis,
        MilestoneId::ForeignCurrency,
        MilestoneId::Fetches50,
        MilestoneId::Month12,
        MilestoneId::FullYearBudget,
        MilestoneId::Categories100,
        MilestoneId::Month24,
        MilestoneId::Month36,
        MilestoneId::FinancialMastery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneId::CurrencySet => "currency_set",
            MilestoneId::BanksConfigured => "banks_configured",
            MilestoneId::FirstParsing => "first_parsing",
            MilestoneId::Month1 => "month_1",
            MilestoneId::Statements10 => "statements_10",
            MilestoneId::FirstBudget => "first_budget",
            MilestoneId::FirstRule => "first_rule",
            MilestoneId::Month3 => "month_3",
            MilestoneId::FirstFetch => "first_fetch",
            MilestoneId::PreferencesUpdated => "preferences_updated",
            MilestoneId::Recategorize10 => "recategorize_10",
            MilestoneId::Categories20 => "categories_20",
            MilestoneId::Budgets5 => "budgets_5",
            MilestoneId::Month6 => "month_6",
            MilestoneId::MultiMonthAnalysis => "multi_month_analysis",
            MilestoneId::ForeignCurrency => "foreign_currency",
            MilestoneId::Fetches50 => "fetches_50",
            MilestoneId::Month12 => "month_12",
            MilestoneId::FullYearBudget => "full_year_budget",
            MilestoneId::Categories100 => "categories_100",
            MilestoneId::Month24 => "month_24",
            MilestoneId::Month36 => "month_36",
            MilestoneId::FinancialMastery => "financial_mastery",
        }
    }

    /// Catalog entry for this milestone
    pub fn definition(&self) -> MilestoneDefinition {
        use Category::*;
        use MilestoneDefinition as Def;
        let id = self.as_str();

        match self {
            // Onboarding
            MilestoneId::CurrencySet => Def::new(
                id, "Pick Your Currency",
                "Choose the home currency for all your totals",
                Onboarding, 50, "coins", 1.0,
            ),
            MilestoneId::BanksConfigured => Def::new(
                id, "Connect Your Banks",
                "Add at least one bank account",
                Onboarding, 50, "bank", 2.0,
            ),
            MilestoneId::FirstParsing => Def::new(
                id, "Teach Me Your Statements",
                "Save a parsing preference for a statement format",
                Onboarding, 100, "scroll", 3.0,
            ),
            MilestoneId::Month1 => Def::new(
                id, "First Month Tracked",
                "Save one full month of transactions",
                Data, 200, "calendar", 4.0,
            ),
            MilestoneId::Statements10 => Def::new(
                id, "Paper Trail",
                "Upload 10 statements across your banks and months",
                Data, 150, "stack", 4.3,
            ),
            MilestoneId::FirstBudget => Def::new(
                id, "Budget Beginner",
                "Configure your first budget",
                Analysis, 150, "target", 5.0,
            ),
            MilestoneId::FirstRule => Def::new(
                id, "Rule Maker",
                "Create your first categorization rule",
                Analysis, 100, "tag", 6.0,
            ),
            MilestoneId::Month3 => Def::new(
                id, "Quarter Keeper",
                "Track three months of data",
                Data, 300, "calendar", 7.0,
            ),
            MilestoneId::FirstFetch => Def::new(
                id, "Data Detective",
                "Ask Penny to fetch your financial data",
                Tools, 100, "magnifier", 8.0,
            ),
            MilestoneId::PreferencesUpdated => Def::new(
                id, "Make It Yours",
                "Update your preferences",
                Onboarding, 100, "gear", 9.0,
            ),
            MilestoneId::Recategorize10 => Def::new(
                id, "Fine Tuner",
                "Recategorize 10 transactions",
                Tools, 150, "wrench", 10.0,
            ).gated(3),
            MilestoneId::Categories20 => Def::new(
                id, "Category Curator",
                "Create 20 categorization rules",
                Analysis, 250, "tags", 11.0,
            ).gated(3),
            MilestoneId::Budgets5 => Def::new(
                id, "Budget Architect",
                "Configure 5 budgets",
                Analysis, 300, "blueprint", 12.0,
            ).gated(4),
            MilestoneId::Month6 => Def::new(
                id, "Half-Year Habit",
                "Track six months of data",
                Longterm, 500, "hourglass", 13.0,
            ).gated(4),
            MilestoneId::MultiMonthAnalysis => Def::new(
                id, "Big Picture",
                "Run an analysis spanning several months",
                Analysis, 200, "chart", 14.0,
            ).gated(5),
            MilestoneId::ForeignCurrency => Def::new(
                id, "Globetrotter",
                "Upload a statement in a foreign currency",
                Data, 250, "globe", 15.0,
            ).gated(5),
            MilestoneId::Fetches50 => Def::new(
                id, "Power Analyst",
                "Fetch data 50 times",
                Tools, 400, "lightning", 16.0,
            ).gated(6),
            MilestoneId::Month12 => Def::new(
                id, "Year in Review",
                "Track a full year of data",
                Longterm, 1000, "trophy", 17.0,
            ).gated(7),
            MilestoneId::FullYearBudget => Def::new(
                id, "Annual Planner",
                "Set up a budget that covers a whole year",
                Mastery, 750, "map", 18.0,
            ).gated(8),
            MilestoneId::Categories100 => Def::new(
                id, "Taxonomy Titan",
                "Create 100 categorization rules",
                Mastery, 600, "library", 19.0,
            ).gated(9),
            MilestoneId::Month24 => Def::new(
                id, "Two-Year Veteran",
                "Track two years of data",
                Longterm, 1500, "medal", 20.0,
            ).gated(10),
            MilestoneId::Month36 => Def::new(
                id, "Three-Year Legend",
                "Track three years of data",
                Longterm, 2000, "crown", 21.0,
            ).gated(12),
            MilestoneId::FinancialMastery => Def::new(
                id, "Financial Mastery",
                "Track 36 months, create 100 rules and configure 20 budgets",
                Mastery, 3000, "star", 22.0,
            ).gated(15),
        }
    }
}

impl FromStr for MilestoneId {
    type Err = ProgressError;

    fn from_str(s: &str) -> Result<Self> {
        let id = match s {
            "currency_set" => MilestoneId::CurrencySet,
            "banks_configured" => MilestoneId::BanksConfigured,
            "first_parsing" => MilestoneId::FirstParsing,
            "month_1" => MilestoneId::Month1,
            "statements_10" => MilestoneId::Statements10,
            "first_budget" => MilestoneId::FirstBudget,
            "first_rule" => MilestoneId::FirstRule,
            "month_3" => MilestoneId::Month3,
            "first_fetch" => MilestoneId::FirstFetch,
            "preferences_updated" => MilestoneId::PreferencesUpdated,
            "recategorize_10" => MilestoneId::Recategorize10,
            "categories_20" => MilestoneId::Categories20,
            "budgets_5" => MilestoneId::Budgets5,
            "month_6" => MilestoneId::Month6,
            "multi_month_analysis" => MilestoneId::MultiMonthAnalysis,
            "foreign_currency" => MilestoneId::ForeignCurrency,
            "fetches_50" => MilestoneId::Fetches50,
            "month_12" => MilestoneId::Month12,
            "full_year_budget" => MilestoneId::FullYearBudget,
            "categories_100" => MilestoneId::Categories100,
            "month_24" => MilestoneId::Month24,
            "month_36" => MilestoneId::Month36,
            "financial_mastery" => MilestoneId::FinancialMastery,
            _ => return Err(ProgressError::UnknownMilestone(s.to_string())),
        };
        Ok(id)
    }
}

impl Serialize for MilestoneId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MilestoneId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        id.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for MilestoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The built-in catalog, in catalog order
pub fn catalog() -> Vec<MilestoneDefinition> {
    MilestoneId::ALL.iter().map(|id| id.definition()).collect()
}

/// Look up a built-in definition by id
pub fn find_definition(id: &str) -> Option<MilestoneDefinition> {
    id.parse::<MilestoneId>().ok().map(|id| id.definition())
}

/// Check a catalog for duplicate ids, duplicate or non-finite orders, and
/// ids without an evaluation rule. All problems are reported together.
pub fn validate_catalog(definitions: &[MilestoneDefinition]) -> Result<()> {
    let mut problems = Vec::new();
    let mut ids = HashSet::new();
    let mut orders: Vec<(f64, &str)> = Vec::new();

    for def in definitions {
        if def.id.is_empty() {
            problems.push(format!("milestone '{}' has an empty id", def.title));
        } else if !ids.insert(def.id) {
            problems.push(format!("duplicate id '{}'", def.id));
        }

        if def.id.parse::<MilestoneId>().is_err() {
            problems.push(format!("no evaluation rule for '{}'", def.id));
        }

        if !def.order.is_finite() {
            problems.push(format!("'{}' has a non-finite order", def.id));
        } else if let Some((_, other)) = orders.iter().find(|(o, _)| *o == def.order) {
            problems.push(format!("'{}' and '{}' share order {}", other, def.id, def.order));
        } else {
            orders.push((def.order, def.id));
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ProgressError::Catalog(problems.join("; ")))
    }
}
