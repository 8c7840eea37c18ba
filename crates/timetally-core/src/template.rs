//! Template rendering over a fixed placeholder vocabulary.
//!
//! A template is a plain user-owned string with `{{name}}` tokens. Known
//! names are substituted from the current totals in a single pass (inserted
//! values are never re-scanned); unknown tokens are left verbatim in the
//! output and their names collected for the caller to surface. Rendering is
//! pure: the persisted template slot lives in [`crate::storage`] and this
//! module never touches it.
//!
//! Recognized placeholders:
//!
//! | Token | Value |
//! |-------|-------|
//! | `totaltime` | compact duration, `3h15m` (zero components omitted, `0m` when empty) |
//! | `TotalTime` | full-width duration, `3小时15分钟` (same omission rule, `0分钟` when empty) |
//! | `hours`, `minutes` | raw components of the total |
//! | `totalMinutes` | total flattened to minutes |
//! | `rangeCount` | number of valid entries |
//! | `points`, `totalPoints` | score with insignificant decimals stripped; unknown until a score exists |
//! | `Points` | same number suffixed with the points label |

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::session::TotalDuration;

/// Placeholder token: double-brace-delimited identifier starting with a letter.
const TOKEN_PATTERN: &str = r"\{\{([A-Za-z][A-Za-z0-9_]*)\}\}";

const POINTS_LABEL: &str = "积分";

/// Current state snapshot the renderer substitutes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateVars {
    /// Aggregate duration
    pub total: TotalDuration,
    /// Last computed score; `None` makes the points placeholders unknown
    pub points: Option<f64>,
    /// Number of valid entries
    pub range_count: usize,
}

impl TemplateVars {
    fn lookup(&self, name: &str) -> Option<String> {
        match name {
            "totaltime" => Some(format_compact(self.total.hours, self.total.minutes)),
            "TotalTime" => Some(format_fullwidth(self.total.hours, self.total.minutes)),
            "hours" => Some(self.total.hours.to_string()),
            "minutes" => Some(self.total.minutes.to_string()),
            "totalMinutes" => Some(self.total.total_minutes().to_string()),
            "rangeCount" => Some(self.range_count.to_string()),
            "points" | "totalPoints" => self.points.map(format_points),
            "Points" => self
                .points
                .map(|p| format!("{} {POINTS_LABEL}", format_points(p))),
            _ => None,
        }
    }
}

/// A rendered template plus the unrecognized placeholder names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedTemplate {
    /// Output with known tokens substituted and unknown tokens untouched
    pub output: String,
    /// Unknown placeholder names, in order of first appearance
    pub unknown: Vec<String>,
}

/// Substitute `vars` into `template`. Single pass, case-sensitive names.
pub fn render(template: &str, vars: &TemplateVars) -> RenderedTemplate {
    let re = Regex::new(TOKEN_PATTERN).unwrap();
    let mut unknown: Vec<String> = Vec::new();

    let output = re
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            match vars.lookup(name) {
                Some(value) => value,
                None => {
                    if !unknown.iter().any(|u| u == name) {
                        unknown.push(name.to_string());
                    }
                    caps[0].to_string()
                }
            }
        })
        .into_owned();

    RenderedTemplate { output, unknown }
}

/// Compact duration: `3h15m`, `3h`, `15m`; `0m` when both components are zero.
pub fn format_compact(hours: u32, minutes: u32) -> String {
    match (hours, minutes) {
        (0, 0) => "0m".to_string(),
        (h, 0) => format!("{h}h"),
        (0, m) => format!("{m}m"),
        (h, m) => format!("{h}h{m}m"),
    }
}

/// Full-width duration: `3小时15分钟`, `3小时`, `15分钟`; `0分钟` when empty.
pub fn format_fullwidth(hours: u32, minutes: u32) -> String {
    match (hours, minutes) {
        (0, 0) => "0分钟".to_string(),
        (h, 0) => format!("{h}小时"),
        (0, m) => format!("{m}分钟"),
        (h, m) => format!("{h}小时{m}分钟"),
    }
}

/// Score formatting: two decimals with the insignificant tail stripped
/// (19 -> "19", 19.5 -> "19.5", 19.25 -> "19.25").
pub fn format_points(points: f64) -> String {
    let fixed = format!("{points:.2}");
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
