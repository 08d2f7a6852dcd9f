//! Level System
//!
//! Infinite levels with a quadratic XP curve, tiered titles, and per-level
//! mascot/color tokens for badges.
//!
//! ## XP Curve
//!
//! Cumulative XP required for level L: `25 * L * (L - 1)`
//! - Level 1: 0 XP
//! - Level 2: 50 XP
//! - Level 3: 150 XP
//! - Level 4: 300 XP
//! - Level 5: 500 XP
//!
//! Each level costs 50 XP more than the previous one.

use serde::{Deserialize, Serialize};

/// XP step of the curve (`xp_required(L) = XP_STEP * L * (L - 1)`)
pub const XP_STEP: u64 = 25;

/// Highest level with a dedicated title table entry
pub const MAX_TABLE_LEVEL: u32 = 20;

/// Title bands: levels sharing a band get a Roman-numeral tier suffix
pub const TITLE_BANDS: &[(u32, u32, &str)] = &[
    (1, 1, "Penny Pincher"),
    (2, 2, "Coin Counter"),
    (3, 3, "Receipt Ranger"),
    (4, 4, "Ledger Keeper"),
    (5, 5, "Budget Builder"),
    (6, 6, "Savings Scout"),
    (7, 7, "Cashflow Captain"),
    (8, 8, "Trend Tracker"),
    (9, 9, "Money Mapper"),
    (10, 10, "Finance Wizard"),
    (11, 12, "Strategist"),
    (13, 15, "Sage"),
    (16, 18, "Oracle"),
    (19, 20, "Legend"),
];

/// Title used past the table, tiered by `level - MAX_TABLE_LEVEL`
pub const ETERNAL_TITLE: &str = "Eternal";

/// Highest Eternal tier written in Roman numerals; higher tiers use digits
pub const MAX_ROMAN_TIER: u32 = 3999;

/// Mascot growth stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mascot {
    Egg,
    Chick,
    Fledgling,
    Owl,
    SageOwl,
    GoldenOwl,
    CosmicOwl,
}

impl Mascot {
    /// Stable token for the frontend
    pub fn as_str(&self) -> &'static str {
        match self {
            Mascot::Egg => "egg",
            Mascot::Chick => "chick",
            Mascot::Fledgling => "fledgling",
            Mascot::Owl => "owl",
            Mascot::SageOwl => "sage_owl",
            Mascot::GoldenOwl => "golden_owl",
            Mascot::CosmicOwl => "cosmic_owl",
        }
    }

    /// Image asset path for this mascot
    pub fn image(&self) -> &'static str {
        match self {
            Mascot::Egg => "/mascots/egg.png",
            Mascot::Chick => "/mascots/chick.png",
            Mascot::Fledgling => "/mascots/fledgling.png",
            Mascot::Owl => "/mascots/owl.png",
            Mascot::SageOwl => "/mascots/sage-owl.png",
            Mascot::GoldenOwl => "/mascots/golden-owl.png",
            Mascot::CosmicOwl => "/mascots/cosmic-owl.png",
        }
    }
}

impl std::fmt::Display for Mascot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Badge mascot per level (index = level - 1), saturating at the last entry
const LEVEL_MASCOTS: &[Mascot] = &[
    Mascot::Egg,
    Mascot::Egg,
    Mascot::Chick,
    Mascot::Chick,
    Mascot::Chick,
    Mascot::Fledgling,
    Mascot::Fledgling,
    Mascot::Fledgling,
    Mascot::Owl,
    Mascot::Owl,
    Mascot::Owl,
    Mascot::SageOwl,
    Mascot::SageOwl,
    Mascot::SageOwl,
    Mascot::SageOwl,
    Mascot::GoldenOwl,
    Mascot::GoldenOwl,
    Mascot::GoldenOwl,
    Mascot::GoldenOwl,
    Mascot::CosmicOwl,
];

/// Badge color per level (index = level - 1), saturating at the last entry
const LEVEL_COLORS: &[&str] = &[
    "gray", "slate", "sky", "cyan", "teal", "emerald", "green", "lime", "amber", "orange",
    "rose", "fuchsia", "violet", "indigo", "gold",
];

/// Level details for badges and progress bars
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelInfo {
    pub level: u32,
    pub title: String,
    /// Cumulative XP to reach this level
    pub xp_required: u64,
    /// Cumulative XP to reach the next level
    pub xp_for_next: u64,
    pub mascot: Mascot,
    pub color: &'static str,
}

/// Cumulative XP required to reach a level
pub fn xp_required(level: u32) -> u64 {
    u64::try_from(xp_required_wide(level)).unwrap_or(u64::MAX)
}

fn xp_required_wide(level: u32) -> u128 {
    if level <= 1 {
        return 0;
    }
    let level = level as u128;
    XP_STEP as u128 * level * (level - 1)
}

/// Level reached with a given amount of XP (minimum 1)
///
/// Closed-form root of the curve, corrected against `xp_required` so the
/// float estimate can never land one level off.
pub fn level_from_xp(total_xp: u64) -> u32 {
    let estimate = ((1.0 + (1.0 + 4.0 * total_xp as f64 / XP_STEP as f64).sqrt()) / 2.0).floor();
    let mut level = (estimate as u32).max(1);

    let xp = total_xp as u128;
    while level > 1 && xp_required_wide(level) > xp {
        level -= 1;
    }
    while xp_required_wide(level + 1) <= xp {
        level += 1;
    }
    level
}

/// Title for a level, e.g. "Ledger Keeper", "Sage II", "Eternal IV"
pub fn level_title(level: u32) -> String {
    let level = level.max(1);
    if level > MAX_TABLE_LEVEL {
        let tier = level - MAX_TABLE_LEVEL;
        if tier > MAX_ROMAN_TIER {
            return format!("{} {}", ETERNAL_TITLE, tier);
        }
        return format!("{} {}", ETERNAL_TITLE, roman_numeral(tier));
    }
    for &(min, max, title) in TITLE_BANDS {
        if level >= min && level <= max {
            if min == max {
                return title.to_string();
            }
            return format!("{} {}", title, roman_numeral(level - min + 1));
        }
    }
    ETERNAL_TITLE.to_string()
}

/// Badge mascot for a level
pub fn level_mascot(level: u32) -> Mascot {
    LEVEL_MASCOTS[table_index(level, LEVEL_MASCOTS.len())]
}

/// Badge color token for a level
pub fn level_color(level: u32) -> &'static str {
    LEVEL_COLORS[table_index(level, LEVEL_COLORS.len())]
}

fn table_index(level: u32, len: usize) -> usize {
    (level.max(1) as usize - 1).min(len - 1)
}

/// Full level details
pub fn level_info(level: u32) -> LevelInfo {
    let level = level.max(1);
    LevelInfo {
        level,
        title: level_title(level),
        xp_required: xp_required(level),
        xp_for_next: xp_required(level.saturating_add(1)),
        mascot: level_mascot(level),
        color: level_color(level),
    }
}

/// Roman numeral for a positive integer (empty for 0)
pub fn roman_numeral(mut n: u32) -> String {
    const NUMERALS: &[(u32, &str)] = &[
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut out = String::new();
    for &(value, symbol) in NUMERALS {
        while n >= value {
            out.push_str(symbol);
            n -= value;
        }
    }
    out
}
