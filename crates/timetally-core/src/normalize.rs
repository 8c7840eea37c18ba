//! Five-mode text cleanup for pasted time-range notes.
//!
//! People paste ranges out of task lists, chat logs and notes, so the raw
//! text arrives with bullet markers, checkboxes, full-width colons, mixed
//! dash/tilde separators and blank filler lines. Each mode is a pure,
//! idempotent text transform; nothing here reports errors. Text that fails
//! to match a range is dropped or passed through depending on the mode, and
//! real validation happens later in [`crate::parse`].

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Loose time-range pattern: two `H[:：]M`-like clusters joined by one of
/// the accepted separators. Hours and minutes are 1-2 ASCII digits each
/// (full-width digits do not match); values above range are clamped during
/// rewriting, not rejected.
pub(crate) const RANGE_PATTERN: &str =
    r"([0-9]{1,2})[：:]([0-9]{1,2})\s*(?:-|–|—|~|～|to|至)\s*([0-9]{1,2})[：:]([0-9]{1,2})";

/// Leading unordered-list or checkbox-list marker. At most one marker is
/// stripped per line, and only as a true line prefix (leading whitespace
/// included in the match).
const LIST_MARKER_PATTERN: &str = r"^\s*(?:[-*+•·]\s+\[(?:\s|x|X)\]\s+|[-*+•·]\s+)";

/// Cleanup mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizeMode {
    /// StripListMarkers -> NormalizeRanges -> ExtractRangesOnly -> RemoveBlankLines
    Smart,
    /// Remove one leading bullet/checkbox marker per line
    StripListMarkers,
    /// Rewrite every range match in place as `HH:MM - HH:MM` (clamped)
    NormalizeRanges,
    /// Keep only the first range match per line, drop everything else
    ExtractRangesOnly,
    /// Drop lines that are empty after trimming
    RemoveBlankLines,
}

/// Apply the selected cleanup mode to a whole text blob.
pub fn normalize(text: &str, mode: NormalizeMode) -> String {
    match mode {
        NormalizeMode::StripListMarkers => strip_list_markers(text),
        NormalizeMode::NormalizeRanges => normalize_ranges(text),
        NormalizeMode::ExtractRangesOnly => extract_ranges_only(text),
        NormalizeMode::RemoveBlankLines => remove_blank_lines(text),
        NormalizeMode::Smart => remove_blank_lines(&extract_ranges_only(&normalize_ranges(
            &strip_list_markers(text),
        ))),
    }
}

/// Remove a single leading list marker (`- `, `* `, `- [ ] `, ...) per line.
pub fn strip_list_markers(text: &str) -> String {
    let re = Regex::new(LIST_MARKER_PATTERN).unwrap();
    text.lines()
        .map(|line| re.replace(line, "").into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rewrite every range match as canonical `HH:MM - HH:MM`, clamping hours
/// to <=23 and minutes to <=59. Non-matching text is left unchanged.
pub fn normalize_ranges(text: &str) -> String {
    let re = Regex::new(RANGE_PATTERN).unwrap();
    re.replace_all(text, |caps: &Captures| canonical_range(caps))
        .into_owned()
}

/// Keep only the first range match per line (canonical, clamped form);
/// lines without a match become empty and are dropped.
pub fn extract_ranges_only(text: &str) -> String {
    let re = Regex::new(RANGE_PATTERN).unwrap();
    text.lines()
        .filter_map(|line| re.captures(line).map(|caps| canonical_range(&caps)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop lines that are empty after trimming, preserving order of the rest.
pub fn remove_blank_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn canonical_range(caps: &Captures) -> String {
    let sh = clamp_component(&caps[1], 23);
    let sm = clamp_component(&caps[2], 59);
    let eh = clamp_component(&caps[3], 23);
    let em = clamp_component(&caps[4], 59);
    format!("{sh:02}:{sm:02} - {eh:02}:{em:02}")
}

fn clamp_component(digits: &str, max: u32) -> u32 {
    digits.parse::<u32>().unwrap_or(0).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bullet_and_checkbox_markers() {
        let input = "- 09:00 - 10:00\n  * [x] 10:00 - 11:00\n• 11:00 - 12:00\nplain line";
        let out = strip_list_markers(input);
        assert_eq!(
            out,
            "09:00 - 10:00\n10:00 - 11:00\n11:00 - 12:00\nplain line"
        );
    }

    #[test]
    fn strips_at_most_one_marker() {
        assert_eq!(strip_list_markers("- - 09:00"), "- 09:00");
    }

    #[test]
    fn marker_must_be_line_prefix() {
        assert_eq!(strip_list_markers("09:00 - 10:00"), "09:00 - 10:00");
    }

    #[test]
    fn normalizes_separators_and_fullwidth_colons() {
        assert_eq!(normalize_ranges("9：5～17:45"), "09:05 - 17:45");
        assert_eq!(normalize_ranges("9:00 to 10:30"), "09:00 - 10:30");
        assert_eq!(normalize_ranges("9:00 至 10:30"), "09:00 - 10:30");
        assert_eq!(normalize_ranges("9:00–10:30"), "09:00 - 10:30");
    }

    #[test]
    fn normalize_clamps_out_of_range_components() {
        assert_eq!(normalize_ranges("25:99 - 30:61"), "23:59 - 23:59");
    }

    #[test]
    fn normalize_rewrites_multiple_matches_per_line() {
        let out = normalize_ranges("am 9:00~12:00, pm 13：0至17:30");
        assert_eq!(out, "am 09:00 - 12:00, pm 13:00 - 17:30");
    }

    #[test]
    fn fullwidth_digits_are_not_range_matches() {
        assert_eq!(normalize_ranges("１２:３０～１３:００"), "１２:３０～１３:００");
        assert_eq!(extract_ranges_only("１２:３０～１３:００"), "");
    }

    #[test]
    fn normalize_leaves_non_matching_text_alone() {
        assert_eq!(normalize_ranges("no ranges here"), "no ranges here");
    }

    #[test]
    fn extract_keeps_first_match_and_drops_the_rest() {
        let input = "meeting 9:00~10:30 then 11:00~12:00\nnothing here\n13:00 - 14:00 review";
        assert_eq!(extract_ranges_only(input), "09:00 - 10:30\n13:00 - 14:00");
    }

    #[test]
    fn remove_blank_lines_preserves_order() {
        assert_eq!(remove_blank_lines("a\n\n  \nb\nc\n"), "a\nb\nc");
    }

    #[test]
    fn smart_mode_produces_one_range_per_useful_line() {
        let input = "- [ ] work 9：00～12:00\n\n* lunch\n- 13:00 至 17:45 afternoon\n";
        let out = normalize(input, NormalizeMode::Smart);
        assert_eq!(out, "09:00 - 12:00\n13:00 - 17:45");
    }

    #[test]
    fn smart_mode_is_idempotent() {
        let once = normalize("- 9:00~10:00\n\n10:30 至 11:00", NormalizeMode::Smart);
        let twice = normalize(&once, NormalizeMode::Smart);
        assert_eq!(once, twice);
    }

    #[test]
    fn extract_then_trim_is_idempotent_on_clean_text() {
        let clean = "09:00 - 10:00\n10:30 - 11:00";
        let pass = |t: &str| remove_blank_lines(&extract_ranges_only(t));
        assert_eq!(pass(clean), clean);
        assert_eq!(pass(&pass(clean)), clean);
    }
}
