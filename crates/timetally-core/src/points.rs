//! Tiered points scoring over a total duration.
//!
//! The first hour is worth a flat 6 points and is billed in full even when
//! only part of it is used. Every additional full hour i is worth `6 + 2*i`
//! (8, 10, 12, ...), and a trailing partial hour is billed at the *next*
//! tier's full rate scaled by the fraction consumed. The result is rounded
//! to two decimals. A zero total has no score at all.
//!
//! Worked example: 2h30m -> 6 + 8 + 10*0.5 = 19.

use serde::{Deserialize, Serialize};

/// Points awarded for the first hour.
pub const BASE_POINTS: f64 = 6.0;

/// Full-hour rate for the i-th additional hour (1-based): 8, 10, 12, ...
fn tier_rate(i: u32) -> f64 {
    6.0 + 2.0 * f64::from(i)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One scoring term, for explaining how a score was assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsTerm {
    /// Term name: `base`, `hour_2`, `hour_3`, ... or `partial`
    pub name: String,
    /// Minutes this term covers
    pub minutes: u32,
    /// Points this term awards (unrounded)
    pub points: f64,
}

/// Complete scoring breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    /// Individual terms in billing order
    pub terms: Vec<PointsTerm>,
    /// Two-decimal rounded total
    pub total: f64,
}

impl PointsBreakdown {
    fn new() -> Self {
        Self {
            terms: Vec::new(),
            total: 0.0,
        }
    }

    fn add_term(&mut self, name: impl Into<String>, minutes: u32, points: f64) {
        self.terms.push(PointsTerm {
            name: name.into(),
            minutes,
            points,
        });
    }
}

/// Score a total duration given in minutes. `None` when the total is zero.
pub fn score(total_minutes: u32) -> Option<f64> {
    breakdown(total_minutes).map(|b| b.total)
}

/// Score with the per-term breakdown. `None` when the total is zero.
pub fn breakdown(total_minutes: u32) -> Option<PointsBreakdown> {
    if total_minutes == 0 {
        return None;
    }

    let mut breakdown = PointsBreakdown::new();
    let mut raw = BASE_POINTS;
    breakdown.add_term("base", total_minutes.min(60), BASE_POINTS);

    if total_minutes > 60 {
        let remaining = total_minutes - 60;
        let full_hours = remaining / 60;
        let extra = remaining % 60;

        for i in 1..=full_hours {
            let rate = tier_rate(i);
            raw += rate;
            breakdown.add_term(format!("hour_{}", i + 1), 60, rate);
        }

        if extra > 0 {
            let prorated = tier_rate(full_hours + 1) * f64::from(extra) / 60.0;
            raw += prorated;
            breakdown.add_term("partial", extra, prorated);
        }
    }

    breakdown.total = round2(raw);
    Some(breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_total_has_no_score() {
        assert_eq!(score(0), None);
    }

    #[test]
    fn first_hour_is_flat_six_even_when_partial() {
        assert_eq!(score(1), Some(6.0));
        assert_eq!(score(45), Some(6.0));
        assert_eq!(score(60), Some(6.0));
    }

    #[test]
    fn partial_hour_billed_at_next_tier_rate() {
        // 1h30m: base 6, then 30min at the tier-1 rate of 8 -> 6 + 4 = 10
        assert_eq!(score(90), Some(10.0));
    }

    #[test]
    fn worked_example_two_and_a_half_hours() {
        // 2h30m: 6 + 8 + 10*0.5 = 19
        assert_eq!(score(150), Some(19.0));
    }

    #[test]
    fn full_hours_use_increasing_rates() {
        // 3h: 6 + 8 + 10 = 24; 4h: 6 + 8 + 10 + 12 = 36
        assert_eq!(score(180), Some(24.0));
        assert_eq!(score(240), Some(36.0));
    }

    #[test]
    fn result_is_rounded_to_two_decimals() {
        // 1h10m: 6 + 8*(10/60) = 7.3333... -> 7.33
        assert_eq!(score(70), Some(7.33));
    }

    #[test]
    fn breakdown_for_worked_example() {
        let b = breakdown(150).unwrap();
        assert_eq!(b.total, 19.0);
        assert_eq!(b.terms.len(), 3);
        assert_eq!((b.terms[0].name.as_str(), b.terms[0].minutes), ("base", 60));
        assert_eq!(b.terms[0].points, 6.0);
        assert_eq!(
            (b.terms[1].name.as_str(), b.terms[1].minutes),
            ("hour_2", 60)
        );
        assert_eq!(b.terms[1].points, 8.0);
        assert_eq!(
            (b.terms[2].name.as_str(), b.terms[2].minutes),
            ("partial", 30)
        );
        assert_eq!(b.terms[2].points, 5.0);
    }

    #[test]
    fn breakdown_base_term_covers_actual_minutes_under_an_hour() {
        let b = breakdown(45).unwrap();
        assert_eq!(b.terms.len(), 1);
        assert_eq!(b.terms[0].minutes, 45);
    }
}
