//! Grading periods module.
//!
//! Grading periods are administrator-defined time windows with an open/closed
//! flag controlling whether due dates within them may be edited by
//! non-admins. The date-window rules only need containment lookup; managing
//! the periods themselves belongs to the surrounding system.

pub mod model;
