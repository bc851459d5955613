//! Date-window input models and the field-keyed error set.
//!
//! The input mirrors the form state of an assignment date editor: dates
//! arrive as text exactly as typed, together with the assignee references
//! the row targets. Unparseable text is a user problem, not a structural
//! one, so it surfaces as a field message rather than a deserialization
//! failure.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::{SectionId, StudentId};
use crate::utils::field_map::FieldNameMap;

/// Assignee-grouping kind attached to a date-window row.
///
/// Affects which messages the host surfaces and how the row is labelled;
/// the validator carries it opaquely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssigneeSetType {
    /// Everyone in the course
    Course,
    /// A single course section
    CourseSection,
    /// A student group
    Group,
    /// An ad-hoc list of students
    AdHoc,
}

/// Raw per-edit form state handed over by the presentation layer.
///
/// A fresh value is supplied on every field change; nothing is retained
/// between calls.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DateWindowInput {
    /// Candidate due date, as typed
    pub due_at: Option<String>,
    /// Start of the availability window ("available from"), as typed
    pub unlock_at: Option<String>,
    /// End of the availability window ("available until"), as typed
    pub lock_at: Option<String>,
    /// Assignee-grouping kind for this row
    pub set_type: Option<AssigneeSetType>,
    /// Section the row targets, opaque to validation
    pub course_section_id: Option<SectionId>,
    /// Students the row targets, opaque to validation
    #[serde(default)]
    pub student_ids: Vec<StudentId>,
}

/// Date fields a validation message can attach to.
///
/// The derived ordering fixes iteration and serialization order of the
/// error set: `due_at`, then `unlock_at`, then `lock_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    DueAt,
    UnlockAt,
    LockAt,
}

impl DateField {
    /// Internal attribute name, used as the error-set key.
    pub fn attribute(self) -> &'static str {
        match self {
            DateField::DueAt => "due_at",
            DateField::UnlockAt => "unlock_at",
            DateField::LockAt => "lock_at",
        }
    }

    /// Human label used inside messages.
    pub fn label(self) -> &'static str {
        match self {
            DateField::DueAt => "Due date",
            DateField::UnlockAt => "Available from date",
            DateField::LockAt => "Available until date",
        }
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute())
    }
}

/// Field-keyed validation messages for one date-window input.
///
/// Absence of a field means that field is currently valid. The set is
/// rebuilt in full on every `validate` call; at most one message is kept
/// per field, the first one recorded winning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrorSet {
    errors: BTreeMap<DateField, String>,
}

impl ValidationErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless a higher-priority rule already
    /// flagged it.
    pub(crate) fn flag(&mut self, field: DateField, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    /// True when every field is valid.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of flagged fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message recorded for `field`, if any.
    pub fn message(&self, field: DateField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Flagged fields and their messages, in field order.
    pub fn iter(&self) -> impl Iterator<Item = (DateField, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Re-key the set for an external surface.
    ///
    /// Attributes without an entry in `map` pass through under their
    /// internal name.
    pub fn remapped(&self, map: &FieldNameMap) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .map(|(field, msg)| {
                (
                    map.external_name(field.attribute()).to_string(),
                    msg.clone(),
                )
            })
            .collect()
    }
}
