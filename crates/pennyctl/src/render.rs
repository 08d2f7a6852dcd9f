//! Text rendering for progress, levels and the milestone catalog.
//!
//! ASCII only. Color is optional and decided by the caller.

use owo_colors::OwoColorize;
use penny_progress::{
    category_color, level_info, phase_for_milestone, BonusBreakdown, LevelInfo,
    MilestoneDefinition, MilestoneStatus, ProgressState,
};
use std::fmt::Write;

/// Rendering options
#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub color: bool,
    pub bar_width: usize,
}

impl Default for Style {
    fn default() -> Self {
        Self { color: false, bar_width: 20 }
    }
}

impl Style {
    fn bold(&self, s: &str) -> String {
        if self.color { s.bold().to_string() } else { s.to_string() }
    }

    fn green(&self, s: &str) -> String {
        if self.color { s.green().to_string() } else { s.to_string() }
    }

    fn dim(&self, s: &str) -> String {
        if self.color { s.dimmed().to_string() } else { s.to_string() }
    }

    fn yellow(&self, s: &str) -> String {
        if self.color { s.yellow().to_string() } else { s.to_string() }
    }
}

/// Progress bar, e.g. `[=====-----]`. `progress` is a percentage.
pub fn progress_bar(progress: f64, width: usize) -> String {
    let clamped = progress.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).floor() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), "-".repeat(empty))
}

/// Full status screen for a progress state
pub fn render_status(state: &ProgressState, bonus: &BonusBreakdown, style: Style) -> String {
    let mut out = String::new();

    let header = format!("Level {} - {}", state.level, state.level_title);
    let _ = writeln!(
        out,
        "{}  {} {:.0}%  ({}/{} XP)",
        style.bold(&header),
        progress_bar(state.level_progress, style.bar_width),
        state.level_progress,
        state.current_level_xp,
        state.next_level_xp,
    );
    let _ = writeln!(
        out,
        "Total XP: {}  (milestones {}, bonus {})",
        state.total_xp,
        state.milestone_xp(),
        state.bonus_xp
    );
    if bonus.total() > 0 {
        let _ = writeln!(
            out,
            "  bonus: months +{}, budgets +{}, rules +{}",
            bonus.months, bonus.budgets, bonus.rules
        );
    }

    let phase = state.phase.definition();
    let _ = writeln!(out, "Phase: {} [{}]", phase.name, state.mascot);
    let _ = writeln!(out, "  {}", style.dim(phase.description));
    let _ = writeln!(out, "Milestones: {}/{} complete", state.completed_count, state.total_milestones);

    if state.all_complete() {
        let _ = writeln!(out, "{}", style.green("All milestones complete!"));
    } else if let Some(next) = &state.next_milestone {
        let _ = writeln!(
            out,
            "Next: {} - {} ({}/{})",
            style.yellow(next.definition.title),
            next.definition.description,
            next.current,
            next.target
        );
    }

    out.push('\n');
    for status in &state.milestones {
        let _ = writeln!(out, "{}", render_milestone_line(status, state.level, style));
    }
    out
}

/// One line per milestone: `[x] Title   3/12   +200 XP`
pub fn render_milestone_line(status: &MilestoneStatus, level: u32, style: Style) -> String {
    let def = &status.definition;
    if status.completed {
        style.green(&format!("[x] {:<26} {:>9}  +{} XP", def.title, "done", def.xp))
    } else if !def.is_unlocked_at(level) {
        let gate = def.unlock_level.unwrap_or_default();
        style.dim(&format!("[#] {:<26} {:>9}  unlocks at level {}", def.title, "locked", gate))
    } else {
        let counter = format!("{}/{}", status.current, status.target);
        format!("[ ] {:<26} {:>9}  +{} XP", def.title, counter, def.xp)
    }
}

/// Details for one level
pub fn render_level(info: &LevelInfo) -> String {
    format!(
        "Level {}: {}\n  XP required: {}\n  Next level at: {}\n  Mascot: {}\n  Color: {}\n",
        info.level, info.title, info.xp_required, info.xp_for_next, info.mascot, info.color
    )
}

/// Level table from 1 to `up_to`
pub fn render_level_table(up_to: u32) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>5}  {:<18} {:>10}  {:<10} {}", "LEVEL", "TITLE", "XP", "MASCOT", "COLOR");
    for level in 1..=up_to.max(1) {
        let info = level_info(level);
        let _ = writeln!(
            out,
            "{:>5}  {:<18} {:>10}  {:<10} {}",
            info.level, info.title, info.xp_required, info.mascot.as_str(), info.color
        );
    }
    out
}

/// Catalog listing with order, category and path phase
pub fn render_catalog(definitions: &[MilestoneDefinition]) -> String {
    let mut out = String::new();
    for def in definitions {
        let gate = def.unlock_level.map(|l| format!("L{}", l)).unwrap_or_default();
        let _ = writeln!(
            out,
            "{:>5}  {:<22} {:<11} {:<8} {:>5} XP  {:<4} {}",
            def.order,
            def.id,
            def.category.as_str(),
            category_color(def.category),
            def.xp,
            gate,
            phase_for_milestone(def.order)
        );
    }
    out
}
