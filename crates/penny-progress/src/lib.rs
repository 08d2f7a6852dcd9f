//! Progression engine for Penny.
//!
//! Converts raw usage counters into XP, an infinite level curve, titles,
//! personality phases and milestone statuses. Everything here is a pure
//! function of the input snapshot, except `celebration`.

pub mod bonus;
pub mod catalog;
pub mod celebration;
pub mod error;
pub mod evaluator;
pub mod levels;
pub mod phase;
pub mod progress;
pub mod snapshot;

pub use bonus::{bonus_xp, BonusBreakdown};
pub use catalog::{
    catalog, category_color, find_definition, validate_catalog, Category, MilestoneDefinition,
    MilestoneId,
};
pub use celebration::random_celebration_message;
pub use error::ProgressError;
pub use evaluator::{evaluate, MilestoneStatus, Rule};
pub use levels::{level_from_xp, level_info, xp_required, LevelInfo, Mascot};
pub use phase::{phase_for_milestone, resolve_phase, Phase, PhaseDefinition};
pub use progress::{calculate_progress, calculate_progress_with, ProgressState};
pub use snapshot::UsageSnapshot;
