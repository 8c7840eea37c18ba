//! Line-level time-range parsing.
//!
//! One trimmed line either yields nothing (blank), a valid
//! [`TimeRangeEntry`], or an invalid entry carrying a typed
//! [`ParseErrorKind`]. Parsing never returns `Err` and never aborts sibling
//! lines: a malformed line is data, and invalid entries simply contribute
//! zero to any later tally.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use uuid::Uuid;

/// Strict line shape: `H{1,2}:MM - H{1,2}:MM`, optional spaces around the
/// dash. ASCII digits only: full-width digits like `１２` must fall through
/// to [`ParseErrorKind::MalformedFormat`], not parse as zero.
const LINE_PATTERN: &str = r"^([0-9]{1,2}):([0-9]{2})\s*-\s*([0-9]{1,2}):([0-9]{2})$";

fn line_regex() -> &'static Regex {
    static LINE_RE: OnceLock<Regex> = OnceLock::new();
    LINE_RE.get_or_init(|| Regex::new(LINE_PATTERN).unwrap())
}

/// Prefix added to the end label when the range crosses midnight.
pub const NEXT_DAY_MARKER: &str = "次日 ";

/// Why a line failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    /// Line does not match the `hh:mm - hh:mm` shape
    MalformedFormat,
    /// Shape matched but an hour or minute component exceeds its bound
    OutOfRange,
}

impl ParseErrorKind {
    /// User-facing message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ParseErrorKind::MalformedFormat => "格式错误，请使用 hh:mm - hh:mm 格式",
            ParseErrorKind::OutOfRange => "时间值无效，小时应为0-23，分钟应为0-59",
        }
    }
}

/// One parsed line, valid or not. Immutable once created; removal by id is
/// the only mutation the owning [`crate::Session`] performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRangeEntry {
    /// Session-unique id (UUID v4)
    pub id: String,
    /// Original trimmed line text
    pub raw_input: String,
    /// Whether the line parsed into a usable range
    pub is_valid: bool,
    /// Canonical `HH:MM` start label (empty when invalid)
    pub start_label: String,
    /// Canonical `HH:MM` end label, prefixed with [`NEXT_DAY_MARKER`] when
    /// the span crossed midnight (empty when invalid)
    pub end_label: String,
    /// Whole hours of the span (meaningful only when valid)
    pub hours: u32,
    /// Leftover minutes of the span, 0..=59 (meaningful only when valid)
    pub minutes: u32,
    /// Error kind when invalid
    pub error: Option<ParseErrorKind>,
}

impl TimeRangeEntry {
    fn valid(raw_input: &str, start_label: String, end_label: String, span_minutes: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            raw_input: raw_input.to_string(),
            is_valid: true,
            start_label,
            end_label,
            hours: span_minutes / 60,
            minutes: span_minutes % 60,
            error: None,
        }
    }

    fn invalid(raw_input: &str, kind: ParseErrorKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            raw_input: raw_input.to_string(),
            is_valid: false,
            start_label: String::new(),
            end_label: String::new(),
            hours: 0,
            minutes: 0,
            error: Some(kind),
        }
    }

    /// Span length in minutes; zero for invalid entries.
    pub fn span_minutes(&self) -> u32 {
        if self.is_valid {
            self.hours * 60 + self.minutes
        } else {
            0
        }
    }
}

/// Parse one line. Blank lines yield `None`; everything else yields exactly
/// one entry.
///
/// When the end offset is earlier than the start offset the end is taken to
/// be on the next calendar day. Only a single midnight crossing is
/// representable; a span longer than 24h cannot be expressed and is silently
/// read as its sub-24h remainder.
pub fn parse_line(line: &str) -> Option<TimeRangeEntry> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let Some(caps) = line_regex().captures(trimmed) else {
        return Some(TimeRangeEntry::invalid(
            trimmed,
            ParseErrorKind::MalformedFormat,
        ));
    };

    let start_hour: u32 = caps[1].parse().unwrap_or(0);
    let start_min: u32 = caps[2].parse().unwrap_or(0);
    let end_hour: u32 = caps[3].parse().unwrap_or(0);
    let end_min: u32 = caps[4].parse().unwrap_or(0);

    if start_hour > 23 || start_min > 59 || end_hour > 23 || end_min > 59 {
        return Some(TimeRangeEntry::invalid(trimmed, ParseErrorKind::OutOfRange));
    }

    let start_offset = start_hour * 60 + start_min;
    let mut end_offset = end_hour * 60 + end_min;
    let cross_day = end_offset < start_offset;
    if cross_day {
        end_offset += 24 * 60;
    }

    let start_label = format!("{start_hour:02}:{start_min:02}");
    let end_label = if cross_day {
        format!("{NEXT_DAY_MARKER}{end_hour:02}:{end_min:02}")
    } else {
        format!("{end_hour:02}:{end_min:02}")
    };

    Some(TimeRangeEntry::valid(
        trimmed,
        start_label,
        end_label,
        end_offset - start_offset,
    ))
}

/// Parse a whole blob, one entry per non-blank line, in input order.
pub fn parse_text(text: &str) -> Vec<TimeRangeEntry> {
    text.lines().filter_map(parse_line).collect()
}
