//! # Datebound
//!
//! A date-window validation engine for assignment due and availability dates
//! in learning-management systems.
//!
//! ## Overview
//!
//! When an editor changes an assignment's due date, availability window, or
//! assignee list, the host needs to know, per field, what is wrong with the
//! current values. Datebound answers that question as a pure function: given
//! the form state and the institution's policy, it returns a field-keyed set
//! of human-readable messages.
//!
//! - **Ordering rules**: the due date must fall inside the unlock/lock window,
//!   and the window itself must not be inverted
//! - **Institutional range**: non-admins must keep dates inside the range the
//!   account permits
//! - **Grading periods**: non-admins cannot place due dates outside a grading
//!   period or inside a closed one
//! - **SIS requirement**: assignments that post grades to the student
//!   information system must carry a due date
//!
//! ## Architecture
//!
//! The codebase follows a modular architecture inspired by NestJS:
//!
//! ```text
//! src/
//! ├── config/           # Policy configuration (institution range, periods, flags)
//! ├── ids.rs            # Strongly-typed identifier newtypes
//! ├── logging.rs        # Tracing setup for embedding hosts
//! ├── modules/          # Feature modules
//! │   ├── date_windows/     # Input model, error set, validation rules
//! │   └── grading_periods/  # Grading period windows and containment lookup
//! └── utils/            # Shared utilities (errors, field-name mapping)
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `model.rs`: Data models and DTOs
//! - `service.rs`: Business logic
//!
//! ## Usage
//!
//! A validator is built once per edit session from the server-rendered policy
//! and then called on every field change:
//!
//! ```
//! use datebound::{DateWindowInput, DateWindowValidator, PolicyConfig, PolicyContext};
//!
//! let policy = PolicyContext::new(PolicyConfig::default()).unwrap();
//! let validator = DateWindowValidator::new(policy);
//!
//! let input = DateWindowInput {
//!     due_at: Some("2024-03-10T23:59:00Z".to_string()),
//!     unlock_at: Some("2024-03-01T00:00:00Z".to_string()),
//!     lock_at: Some("2024-03-05T00:00:00Z".to_string()),
//!     ..Default::default()
//! };
//!
//! let errors = validator.validate(&input);
//! assert!(!errors.is_empty());
//! ```
//!
//! ## Error model
//!
//! User-facing problems (rule violations and unparseable date text) are
//! never thrown. They come back as entries in a
//! [`ValidationErrorSet`](modules::date_windows::model::ValidationErrorSet),
//! at most one message per field. Only a structurally invalid
//! [`PolicyConfig`](config::policy::PolicyConfig) fails fast, at construction,
//! with a [`PolicyError`](utils::errors::PolicyError): that is a caller bug,
//! and proceeding would silently mis-validate user input.
//!
//! ## Modules
//!
//! - [`config`]: Policy configuration supplied at edit-session start
//! - [`ids`]: Strongly-typed identifier newtypes
//! - [`logging`]: Tracing and logging setup
//! - [`modules`]: Feature modules (date windows, grading periods)
//! - [`utils`]: Shared utilities (errors, field-name mapping)

pub mod config;
pub mod ids;
pub mod logging;
pub mod modules;
pub mod utils;

// Re-export the main surface at the crate root for convenience
pub use config::policy::{PolicyConfig, PolicyContext, ValidDateRange};
pub use modules::date_windows::model::{
    AssigneeSetType, DateField, DateWindowInput, ValidationErrorSet,
};
pub use modules::date_windows::service::DateWindowValidator;
pub use modules::grading_periods::model::{GradingPeriod, GradingPeriodSet};
pub use utils::errors::PolicyError;
pub use utils::field_map::FieldNameMap;
