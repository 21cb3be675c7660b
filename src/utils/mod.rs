//! Utility functions

pub mod math;
pub mod time;
pub mod validation;

pub use math::{rounded_mean, rounded_percentage};
pub use time::now_utc;
pub use validation::{normalize_email, sanitize_string};
