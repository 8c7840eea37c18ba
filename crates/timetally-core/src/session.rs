//! Entry list ownership and duration aggregation.
//!
//! A [`Session`] owns the ordered entry list produced by one parse pass plus
//! the most recently computed points value. The total duration is re-derived
//! O(n) on request; at the expected scale (tens of entries) incremental
//! bookkeeping would buy nothing. The points value is recomputed only on
//! explicit request and is dropped on any structural change, so a displayed
//! score can never silently drift out of sync with the entries it was
//! computed from.

use serde::{Deserialize, Serialize};

use crate::parse::{parse_text, TimeRangeEntry};
use crate::points;
use crate::template::TemplateVars;

/// Aggregate duration, normalized so `minutes` is 0..=59.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalDuration {
    pub hours: u32,
    pub minutes: u32,
}

impl TotalDuration {
    fn from_minutes(total: u32) -> Self {
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }

    /// The total flattened to minutes.
    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

/// One logical editing session: the entry list and the last computed score.
#[derive(Debug, Default)]
pub struct Session {
    entries: Vec<TimeRangeEntry>,
    points: Option<f64>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entry list with a fresh parse of `text`. Invalidates any
    /// previously computed points value.
    pub fn parse_text(&mut self, text: &str) {
        self.entries = parse_text(text);
        self.points = None;
    }

    /// Entries in input-line order, valid and invalid alike.
    pub fn entries(&self) -> &[TimeRangeEntry] {
        &self.entries
    }

    /// Sum over valid entries, re-derived on every call.
    pub fn total(&self) -> TotalDuration {
        let minutes = self
            .entries
            .iter()
            .filter(|e| e.is_valid)
            .map(TimeRangeEntry::span_minutes)
            .sum();
        TotalDuration::from_minutes(minutes)
    }

    /// Number of valid entries.
    pub fn valid_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_valid).count()
    }

    /// Drop exactly one entry by id. Returns whether anything was removed;
    /// an absent id is a no-op. Invalidates the points value.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;
        if removed {
            self.points = None;
        }
        removed
    }

    /// Empty the entry list and reset the points value.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.points = None;
    }

    /// Recompute the points score from the current total. `None` (and the
    /// stored value is cleared) when the total is zero.
    pub fn calculate_points(&mut self) -> Option<f64> {
        self.points = points::score(self.total().total_minutes());
        self.points
    }

    /// Last computed points value; `None` until [`Self::calculate_points`]
    /// ran against the current entry set.
    pub fn points(&self) -> Option<f64> {
        self.points
    }

    /// Template variables for the current state.
    pub fn template_vars(&self) -> TemplateVars {
        let total = self.total();
        TemplateVars {
            total,
            points: self.points,
            range_count: self.valid_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(text: &str) -> Session {
        let mut session = Session::new();
        session.parse_text(text);
        session
    }

    #[test]
    fn total_sums_only_valid_entries() {
        // 1h30m + 0h45m + one invalid line -> 2h15m
        let session = session_with("09:00 - 10:30\n11:00 - 11:45\nnot a range");
        assert_eq!(session.entries().len(), 3);
        assert_eq!(session.valid_count(), 2);
        let total = session.total();
        assert_eq!((total.hours, total.minutes), (2, 15));
    }

    #[test]
    fn total_minutes_normalize_across_entries() {
        // 0h40m + 0h50m = 1h30m
        let session = session_with("09:00 - 09:40\n10:00 - 10:50");
        let total = session.total();
        assert_eq!((total.hours, total.minutes), (1, 30));
        assert_eq!(total.total_minutes(), 90);
    }

    #[test]
    fn blank_lines_produce_no_entries() {
        let session = session_with("09:00 - 10:00\n\n10:30 - 11:00");
        assert_eq!(session.entries().len(), 2);
    }

    #[test]
    fn remove_recomputes_total_by_exactly_that_entry() {
        let mut session = session_with("09:00 - 10:30\n11:00 - 11:45");
        let id = session.entries()[0].id.clone();
        assert!(session.remove(&id));
        let total = session.total();
        assert_eq!((total.hours, total.minutes), (0, 45));
    }

    #[test]
    fn remove_of_unknown_id_is_noop() {
        let mut session = session_with("09:00 - 10:30");
        assert!(!session.remove("no-such-id"));
        assert_eq!(session.entries().len(), 1);
    }

    #[test]
    fn points_are_explicit_and_invalidated_on_change() {
        let mut session = session_with("09:00 - 11:30");
        assert_eq!(session.points(), None);
        assert_eq!(session.calculate_points(), Some(19.0));
        assert_eq!(session.points(), Some(19.0));

        let id = session.entries()[0].id.clone();
        session.remove(&id);
        assert_eq!(session.points(), None);
    }

    #[test]
    fn clear_resets_total_and_points() {
        let mut session = session_with("09:00 - 10:00");
        session.calculate_points();
        session.clear();
        assert!(session.entries().is_empty());
        assert_eq!(session.total().total_minutes(), 0);
        assert_eq!(session.points(), None);
    }

    #[test]
    fn zero_total_yields_no_points() {
        let mut session = session_with("junk line");
        assert_eq!(session.calculate_points(), None);
    }
}
