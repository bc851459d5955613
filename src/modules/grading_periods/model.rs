//! Grading period domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An administrator-defined time window controlling whether due dates
/// within it may be edited by non-admins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingPeriod {
    /// Display title (e.g., "Q1", "Fall 2024")
    pub title: String,
    /// Start of the period window, exclusive for containment
    pub start_date: DateTime<Utc>,
    /// End of the period window, inclusive for containment
    pub end_date: DateTime<Utc>,
    /// Closed periods reject due-date edits from non-admins
    #[serde(default)]
    pub closed: bool,
}

impl GradingPeriod {
    /// Whether `date` falls inside this period.
    ///
    /// Containment is half-open: a date exactly on `start_date` belongs to
    /// the adjacent earlier period, a date exactly on `end_date` to this one.
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        self.start_date < date && date <= self.end_date
    }
}

/// Ordered collection of an account's grading periods.
#[derive(Debug, Clone, Default)]
pub struct GradingPeriodSet {
    periods: Vec<GradingPeriod>,
}

impl GradingPeriodSet {
    pub fn new(periods: Vec<GradingPeriod>) -> Self {
        Self { periods }
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn periods(&self) -> &[GradingPeriod] {
        &self.periods
    }

    /// First period whose window contains `date`, in the supplied order.
    pub fn period_containing(&self, date: DateTime<Utc>) -> Option<&GradingPeriod> {
        self.periods.iter().find(|period| period.contains(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn period(title: &str, start: DateTime<Utc>, end: DateTime<Utc>, closed: bool) -> GradingPeriod {
        GradingPeriod {
            title: title.to_string(),
            start_date: start,
            end_date: end,
            closed,
        }
    }

    #[test]
    fn test_containment_is_half_open() {
        let q1 = period("Q1", date(2024, 1, 1), date(2024, 3, 31), false);

        assert!(!q1.contains(date(2024, 1, 1)));
        assert!(q1.contains(date(2024, 1, 2)));
        assert!(q1.contains(date(2024, 3, 31)));
        assert!(!q1.contains(date(2024, 4, 1)));
    }

    #[test]
    fn test_adjacent_periods_share_no_date() {
        let q1 = period("Q1", date(2024, 1, 1), date(2024, 3, 31), false);
        let q2 = period("Q2", date(2024, 3, 31), date(2024, 6, 30), false);

        // The shared boundary belongs to Q1 only
        let boundary = date(2024, 3, 31);
        assert!(q1.contains(boundary));
        assert!(!q2.contains(boundary));
    }

    #[test]
    fn test_period_containing_finds_first_match() {
        let set = GradingPeriodSet::new(vec![
            period("Q1", date(2024, 1, 1), date(2024, 3, 31), true),
            period("Q2", date(2024, 3, 31), date(2024, 6, 30), false),
        ]);

        let hit = set.period_containing(date(2024, 2, 15)).unwrap();
        assert_eq!(hit.title, "Q1");
        assert!(hit.closed);

        let hit = set.period_containing(date(2024, 5, 1)).unwrap();
        assert_eq!(hit.title, "Q2");

        assert!(set.period_containing(date(2024, 8, 1)).is_none());
    }
}
