//! Date-window validation rules.

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use crate::config::policy::{PolicyContext, ValidDateRange};
use crate::modules::date_windows::model::{DateField, DateWindowInput, ValidationErrorSet};

const DUE_AFTER_LOCK: &str = "Due date cannot be after the availability end date.";
const DUE_BEFORE_UNLOCK: &str = "Due date cannot be before the availability start date.";
const UNLOCK_AFTER_LOCK: &str = "Availability start date cannot be after end date.";
const DUE_OUTSIDE_GRADING_PERIODS: &str = "Due date must fall within a grading period.";
const SIS_DUE_REQUIRED: &str =
    "Due date is required when this assignment posts grades to the student information system.";

/// Validates a candidate due date and availability window against the
/// policy captured at construction.
///
/// One validator serves one edit session. It holds no mutable state; every
/// call rebuilds the error set in full, so a field that becomes valid again
/// simply stops appearing.
#[derive(Debug, Clone)]
pub struct DateWindowValidator {
    policy: PolicyContext,
}

/// Dates extracted from the raw input.
///
/// Unparseable text has already been flagged by the time this exists and is
/// treated as absent from here on.
struct ParsedDates {
    due_at: Option<DateTime<Utc>>,
    unlock_at: Option<DateTime<Utc>>,
    lock_at: Option<DateTime<Utc>>,
}

impl DateWindowValidator {
    pub fn new(policy: PolicyContext) -> Self {
        Self { policy }
    }

    /// Policy this validator was built with.
    pub fn policy(&self) -> &PolicyContext {
        &self.policy
    }

    /// Validate one snapshot of the form state.
    ///
    /// All applicable rules run; every violated field gets exactly one
    /// message, chosen by rule priority (format errors first, then ordering,
    /// window, institutional range, grading periods, SIS requirement).
    #[instrument(skip_all, fields(set_type = ?input.set_type))]
    pub fn validate(&self, input: &DateWindowInput) -> ValidationErrorSet {
        let mut errors = ValidationErrorSet::new();

        let dates = Self::parse_dates(input, &mut errors);

        self.check_ordering(&dates, &mut errors);
        self.check_institutional_range(&dates, &mut errors);
        self.check_grading_periods(&dates, &mut errors);
        self.check_sis_requirement(&dates, &mut errors);

        debug!(violations = errors.len(), "Date window validated");

        errors
    }

    fn parse_dates(input: &DateWindowInput, errors: &mut ValidationErrorSet) -> ParsedDates {
        ParsedDates {
            due_at: Self::parse_field(DateField::DueAt, input.due_at.as_deref(), errors),
            unlock_at: Self::parse_field(DateField::UnlockAt, input.unlock_at.as_deref(), errors),
            lock_at: Self::parse_field(DateField::LockAt, input.lock_at.as_deref(), errors),
        }
    }

    /// Parse one field's text. Blank text counts as absent, like a cleared
    /// form field; unparseable text is flagged and then treated as absent.
    fn parse_field(
        field: DateField,
        raw: Option<&str>,
        errors: &mut ValidationErrorSet,
    ) -> Option<DateTime<Utc>> {
        let raw = raw?.trim();
        if raw.is_empty() {
            return None;
        }

        match DateTime::parse_from_rfc3339(raw) {
            Ok(parsed) => Some(parsed.with_timezone(&Utc)),
            Err(_) => {
                errors.flag(field, format!("{} is not a valid date.", field.label()));
                None
            }
        }
    }

    fn check_ordering(&self, dates: &ParsedDates, errors: &mut ValidationErrorSet) {
        if let (Some(due), Some(lock)) = (dates.due_at, dates.lock_at)
            && due > lock
        {
            errors.flag(DateField::DueAt, DUE_AFTER_LOCK);
        }

        if let (Some(due), Some(unlock)) = (dates.due_at, dates.unlock_at)
            && due < unlock
        {
            errors.flag(DateField::DueAt, DUE_BEFORE_UNLOCK);
        }

        if let (Some(unlock), Some(lock)) = (dates.unlock_at, dates.lock_at)
            && unlock > lock
        {
            errors.flag(DateField::UnlockAt, UNLOCK_AFTER_LOCK);
        }
    }

    /// Admins are exempt from the institutional range.
    fn check_institutional_range(&self, dates: &ParsedDates, errors: &mut ValidationErrorSet) {
        if self.policy.user_is_admin() {
            return;
        }
        let Some(range) = self.policy.valid_date_range() else {
            return;
        };

        let fields = [
            (DateField::DueAt, dates.due_at),
            (DateField::UnlockAt, dates.unlock_at),
            (DateField::LockAt, dates.lock_at),
        ];

        for (field, date) in fields {
            if let Some(date) = date
                && !range.contains(date)
            {
                errors.flag(field, Self::range_message(field, range));
            }
        }
    }

    fn range_message(field: DateField, range: &ValidDateRange) -> String {
        let day = |date: DateTime<Utc>| date.format("%Y-%m-%d");
        match (range.start, range.end) {
            (Some(start), Some(end)) => format!(
                "{} must be between {} and {}.",
                field.label(),
                day(start),
                day(end)
            ),
            (Some(start), None) => {
                format!("{} must be on or after {}.", field.label(), day(start))
            }
            (None, Some(end)) => {
                format!("{} must be on or before {}.", field.label(), day(end))
            }
            // An unbounded range contains everything; this message is never
            // reached but keeps the match total.
            (None, None) => format!("{} is outside the permitted range.", field.label()),
        }
    }

    /// Admins are exempt from grading-period placement entirely: they may
    /// set due dates outside any period or inside a closed one.
    fn check_grading_periods(&self, dates: &ParsedDates, errors: &mut ValidationErrorSet) {
        if self.policy.user_is_admin() {
            return;
        }
        let Some(periods) = self.policy.grading_periods() else {
            return;
        };
        let Some(due) = dates.due_at else {
            return;
        };

        match periods.period_containing(due) {
            None => errors.flag(DateField::DueAt, DUE_OUTSIDE_GRADING_PERIODS),
            Some(period) if period.closed => {
                errors.flag(
                    DateField::DueAt,
                    format!(
                        "Due date falls within the closed grading period {}.",
                        period.title
                    ),
                );
            }
            Some(_) => {}
        }
    }

    /// The requirement applies whenever no usable due date is present, which
    /// includes unparseable text; the format error already flagged in that
    /// case takes priority for the field's message.
    fn check_sis_requirement(&self, dates: &ParsedDates, errors: &mut ValidationErrorSet) {
        if self.policy.post_to_sis_required() && dates.due_at.is_none() {
            errors.flag(DateField::DueAt, SIS_DUE_REQUIRED);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::policy::PolicyConfig;

    fn validator(config: PolicyConfig) -> DateWindowValidator {
        DateWindowValidator::new(PolicyContext::new(config).unwrap())
    }

    fn input(due: Option<&str>, unlock: Option<&str>, lock: Option<&str>) -> DateWindowInput {
        DateWindowInput {
            due_at: due.map(String::from),
            unlock_at: unlock.map(String::from),
            lock_at: lock.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_due_inside_window_is_valid() {
        let validator = validator(PolicyConfig::default());

        let errors = validator.validate(&input(
            Some("2024-03-03T00:00:00Z"),
            Some("2024-03-01T00:00:00Z"),
            Some("2024-03-05T00:00:00Z"),
        ));

        assert!(errors.is_empty());
    }

    #[test]
    fn test_due_after_lock_flags_due() {
        let validator = validator(PolicyConfig::default());

        let errors = validator.validate(&input(
            Some("2024-03-10T23:59:00Z"),
            Some("2024-03-01T00:00:00Z"),
            Some("2024-03-05T00:00:00Z"),
        ));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message(DateField::DueAt), Some(DUE_AFTER_LOCK));
    }

    #[test]
    fn test_inverted_window_flags_unlock() {
        let validator = validator(PolicyConfig::default());

        let errors = validator.validate(&input(
            None,
            Some("2024-03-05T00:00:00Z"),
            Some("2024-03-01T00:00:00Z"),
        ));

        assert_eq!(errors.message(DateField::UnlockAt), Some(UNLOCK_AFTER_LOCK));
    }

    #[test]
    fn test_unparseable_date_is_flagged_and_ignored_for_ordering() {
        let validator = validator(PolicyConfig::default());

        let errors = validator.validate(&input(
            Some("next tuesday"),
            None,
            Some("2024-03-05T00:00:00Z"),
        ));

        // The garbled due date gets a format error; no ordering rule fires
        // because the value is treated as absent.
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message(DateField::DueAt),
            Some("Due date is not a valid date.")
        );
    }

    #[test]
    fn test_blank_text_counts_as_absent() {
        let validator = validator(PolicyConfig::default());

        let errors = validator.validate(&input(Some("   "), None, None));

        assert!(errors.is_empty());
    }
}
