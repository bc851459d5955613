//! Date windows module.
//!
//! This module provides the per-edit input model, the field-keyed error set,
//! and the validation rules for assignment due/availability dates.

pub mod model;
pub mod service;
