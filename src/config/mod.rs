//! Configuration modules for the validation engine.
//!
//! Unlike server-side configuration loaded from environment variables, the
//! policy here is rendered by the server into the page that hosts the editor
//! and handed over as JSON when an edit session opens. The types in this
//! module deserialize that payload and check it for structural problems
//! before any validation runs.
//!
//! # Modules
//!
//! - [`policy`]: Institutional policy captured per edit session

pub mod policy;
