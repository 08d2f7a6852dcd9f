//! Usage snapshot fed into the progression engine.
//!
//! The caller assembles this from its own stores. Every field is optional on
//! the wire and defaults to zero/false, so a sparse snapshot is always valid.

use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

/// Raw usage counters for one evaluation.
///
/// Absent and `null` fields both read as zero/false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageSnapshot {
    /// Home currency has been chosen
    #[serde(deserialize_with = "null_as_default")]
    pub currency_set: bool,
    /// Bank accounts configured
    #[serde(deserialize_with = "null_as_default")]
    pub banks_configured: u64,
    /// Saved statement parsing preferences
    #[serde(deserialize_with = "null_as_default")]
    pub parsing_preferences: u64,
    /// Total months of tracked data
    #[serde(deserialize_with = "null_as_default")]
    pub months_tracked: u64,
    /// Budgets configured
    #[serde(deserialize_with = "null_as_default")]
    pub budgets_configured: u64,
    /// Categorization rules created
    #[serde(deserialize_with = "null_as_default")]
    pub categorization_rules: u64,
    /// Manual recategorizations applied
    #[serde(deserialize_with = "null_as_default")]
    pub recategorizations: u64,
    /// Data fetch tool invocations
    #[serde(deserialize_with = "null_as_default")]
    pub data_fetches: u64,
    /// Distinct bank x month statements uploaded
    #[serde(deserialize_with = "null_as_default")]
    pub statements: u64,
    /// User preferences have been edited at least once
    #[serde(deserialize_with = "null_as_default")]
    pub preferences_updated: bool,
    /// Multi-month analyses run
    #[serde(deserialize_with = "null_as_default")]
    pub multi_month_analyses: u64,
    /// A budget covering a whole year exists
    #[serde(deserialize_with = "null_as_default")]
    pub full_year_budget: bool,
    /// Statements in a currency other than the home currency
    #[serde(deserialize_with = "null_as_default")]
    pub foreign_currency_statements: u64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl UsageSnapshot {
    /// Parse a snapshot from JSON. Missing fields default, unknown fields are ignored.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// True when no activity has been recorded at all
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
