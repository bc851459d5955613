//! Typed errors for policy configuration problems.
//!
//! These indicate a caller bug (bad server-rendered configuration) rather
//! than bad user input, so they are raised at construction time instead of
//! being folded into a per-field error set. A host that receives one should
//! refuse to open the editing session.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Error raised when a policy configuration is structurally invalid.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("valid date range starts at {start} but ends at {end}")]
    InvertedDateRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("grading period \"{title}\" starts at {start} but does not end after it ({end})")]
    InvertedGradingPeriod {
        title: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("grading periods supplied but has_grading_periods is false")]
    UnexpectedGradingPeriods,

    #[error("has_grading_periods is true but no grading periods were supplied")]
    MissingGradingPeriods,

    #[error("policy configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
