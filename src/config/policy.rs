//! Institutional policy captured at the start of an edit session.
//!
//! A [`PolicyContext`] is immutable once built and is shared by every
//! `validate` call of the session. Construction is the fail-fast boundary:
//! an inconsistent or malformed configuration indicates a bug in the caller,
//! not bad user input, so it is rejected here instead of being folded into
//! the per-field error set later.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::modules::grading_periods::model::{GradingPeriod, GradingPeriodSet};
use crate::utils::errors::PolicyError;

/// Window the institution permits assignment dates to fall within.
///
/// Either bound may be absent, leaving that side unbounded.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ValidDateRange {
    /// Earliest permitted date, inclusive
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    /// Latest permitted date, inclusive
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
}

impl ValidDateRange {
    /// Whether `date` falls inside the permitted window (inclusive bounds).
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

/// Raw policy configuration as rendered by the server at page load.
///
/// This is the wire shape; it becomes usable only through
/// [`PolicyContext::new`], which performs the structural checks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolicyConfig {
    /// Institution-wide window assignment dates must fall within
    #[serde(default)]
    pub valid_date_range: Option<ValidDateRange>,
    /// Whether the account has grading periods enabled
    #[serde(default)]
    pub has_grading_periods: bool,
    /// Grading period windows, in display order
    #[serde(default)]
    pub grading_periods: Vec<GradingPeriod>,
    /// Whether the editing user holds an admin role
    #[serde(default)]
    pub user_is_admin: bool,
    /// True only when SIS posting is enabled and the account requires due
    /// dates for SIS-tracked assignments
    #[serde(default)]
    pub post_to_sis_required: bool,
}

/// Validated, immutable policy held by a validator for one edit session.
#[derive(Debug, Clone)]
pub struct PolicyContext {
    valid_date_range: Option<ValidDateRange>,
    grading_periods: Option<GradingPeriodSet>,
    user_is_admin: bool,
    post_to_sis_required: bool,
}

impl PolicyContext {
    /// Build a context from raw configuration, rejecting structural problems.
    ///
    /// # Errors
    ///
    /// Returns a [`PolicyError`] when the configuration is inconsistent:
    /// an inverted `valid_date_range`, an inverted grading period window, or
    /// a `grading_periods` list that disagrees with `has_grading_periods`.
    pub fn new(config: PolicyConfig) -> Result<Self, PolicyError> {
        if let Some(range) = &config.valid_date_range
            && let (Some(start), Some(end)) = (range.start, range.end)
            && start > end
        {
            return Err(PolicyError::InvertedDateRange { start, end });
        }

        for period in &config.grading_periods {
            if period.start_date >= period.end_date {
                return Err(PolicyError::InvertedGradingPeriod {
                    title: period.title.clone(),
                    start: period.start_date,
                    end: period.end_date,
                });
            }
        }

        if !config.has_grading_periods && !config.grading_periods.is_empty() {
            return Err(PolicyError::UnexpectedGradingPeriods);
        }
        if config.has_grading_periods && config.grading_periods.is_empty() {
            return Err(PolicyError::MissingGradingPeriods);
        }

        let grading_periods = config
            .has_grading_periods
            .then(|| GradingPeriodSet::new(config.grading_periods));

        debug!(
            has_date_range = config.valid_date_range.is_some(),
            grading_periods = grading_periods.as_ref().map_or(0, GradingPeriodSet::len),
            user_is_admin = config.user_is_admin,
            post_to_sis_required = config.post_to_sis_required,
            "Policy context built"
        );

        Ok(Self {
            valid_date_range: config.valid_date_range,
            grading_periods,
            user_is_admin: config.user_is_admin,
            post_to_sis_required: config.post_to_sis_required,
        })
    }

    /// Build a context directly from the server-rendered JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::Parse`] when the payload is not valid JSON for
    /// [`PolicyConfig`], or any structural error from [`PolicyContext::new`].
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        let config: PolicyConfig = serde_json::from_str(json)?;
        Self::new(config)
    }

    /// Institution-wide permitted window, if configured.
    pub fn valid_date_range(&self) -> Option<&ValidDateRange> {
        self.valid_date_range.as_ref()
    }

    /// Grading periods, present only when the account has them enabled.
    pub fn grading_periods(&self) -> Option<&GradingPeriodSet> {
        self.grading_periods.as_ref()
    }

    /// Whether the editing user holds an admin role.
    pub fn user_is_admin(&self) -> bool {
        self.user_is_admin
    }

    /// Whether a due date is required for SIS posting.
    pub fn post_to_sis_required(&self) -> bool {
        self.post_to_sis_required
    }
}
