pub mod date_windows;
pub mod grading_periods;

pub use self::date_windows::model::DateWindowInput;
pub use self::date_windows::service::DateWindowValidator;
