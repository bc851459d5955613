//! Internal-to-external field-name mapping at the boundary.
//!
//! External surfaces such as camelCase form payloads or GraphQL-style
//! inputs rarely share the model's attribute names. The boundary owns an explicit
//! rename table applied when an error set leaves the crate, instead of any
//! reflective lookup at error time. Attributes without an entry pass
//! through under their internal name.

use std::collections::BTreeMap;

/// Explicit rename table from internal attribute names to external field
/// names.
#[derive(Debug, Clone, Default)]
pub struct FieldNameMap {
    renames: BTreeMap<String, String>,
}

impl FieldNameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare that internal `attribute` surfaces externally as `field`.
    pub fn rename(mut self, attribute: impl Into<String>, field: impl Into<String>) -> Self {
        self.renames.insert(attribute.into(), field.into());
        self
    }

    /// External name for `attribute`; unmapped attributes keep their own.
    pub fn external_name<'a>(&'a self, attribute: &'a str) -> &'a str {
        self.renames
            .get(attribute)
            .map(String::as_str)
            .unwrap_or(attribute)
    }
}
