//! Command implementations for pennyctl.

use crate::config::{OutputFormat, PennyConfig};
use crate::render::{self, Style};
use anyhow::{bail, Context, Result};
use penny_progress::{
    calculate_progress, catalog, level_info, random_celebration_message, validate_catalog,
    BonusBreakdown, MilestoneId, UsageSnapshot,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Resolved output settings for a single invocation
pub struct Output {
    pub format: OutputFormat,
    pub style: Style,
}

impl Output {
    pub fn from_config(config: &PennyConfig, force_json: bool) -> Self {
        let format = if force_json { OutputFormat::Json } else { config.output.format };
        Self {
            format,
            style: Style {
                color: format == OutputFormat::Text && config.output.use_color(),
                bar_width: config.output.bar_width,
            },
        }
    }

    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(value).context("Failed to serialize output")
            }
            OutputFormat::Text => Ok(text()),
        }
    }
}

/// Pick the snapshot path: explicit flag, then config default
pub fn resolve_snapshot_path(flag: Option<PathBuf>, config: &PennyConfig) -> Result<PathBuf> {
    match flag.or_else(|| config.snapshot.default_path.clone()) {
        Some(path) => Ok(path),
        None => bail!("No snapshot given. Pass --snapshot <file> or set snapshot.default_path"),
    }
}

/// Read a snapshot from a file, or from stdin when the path is "-"
pub fn read_snapshot(path: &Path) -> Result<UsageSnapshot> {
    if path == Path::new("-") {
        debug!("reading snapshot from stdin");
        let contents = std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")?;
        return UsageSnapshot::from_json(&contents).context("Invalid snapshot on stdin");
    }

    info!(path = %path.display(), "loading snapshot");
    UsageSnapshot::load(path).with_context(|| format!("Failed to load snapshot {}", path.display()))
}

#[derive(Serialize)]
struct StatusReport<'a> {
    #[serde(flatten)]
    state: &'a penny_progress::ProgressState,
    bonus_breakdown: BonusBreakdown,
}

pub fn status(snapshot: &UsageSnapshot, output: &Output) -> Result<String> {
    let state = calculate_progress(snapshot);
    let bonus = BonusBreakdown::from_snapshot(snapshot);
    let report = StatusReport { state: &state, bonus_breakdown: bonus };
    output.emit(&report, || {
        let mut out = render::render_status(&state, &bonus, output.style);
        if snapshot.is_empty() {
            out.push_str(EMPTY_SNAPSHOT_HINT);
        }
        out
    })
}

/// Appended to text status when the snapshot records no activity
pub const EMPTY_SNAPSHOT_HINT: &str =
    "\nNo activity recorded yet. Set your currency and upload a statement to get started.\n";

pub fn level(level: u32, output: &Output) -> Result<String> {
    if level == 0 {
        bail!("Levels start at 1");
    }
    let info = level_info(level);
    output.emit(&info, || render::render_level(&info))
}

/// Upper bound for `levels --up-to`
pub const MAX_LEVELS_LISTED: u32 = 1000;

pub fn levels(up_to: u32, output: &Output) -> Result<String> {
    let up_to = up_to.clamp(1, MAX_LEVELS_LISTED);
    match output.format {
        OutputFormat::Json => {
            let infos: Vec<_> = (1..=up_to).map(level_info).collect();
            serde_json::to_string_pretty(&infos).context("Failed to serialize output")
        }
        OutputFormat::Text => Ok(render::render_level_table(up_to)),
    }
}

pub fn milestones(check: bool, output: &Output) -> Result<String> {
    let defs = catalog();
    if check {
        validate_catalog(&defs).context("Milestone catalog is invalid")?;
        info!(count = defs.len(), "catalog valid");
    }
    output.emit(&defs, || render::render_catalog(&defs))
}

pub fn celebrate(milestone: &str) -> Result<String> {
    // Unknown ids still get a generic message; warn so typos are visible
    if milestone.parse::<MilestoneId>().is_err() {
        tracing::warn!(milestone, "unknown milestone id");
    }
    Ok(random_celebration_message(milestone))
}
