//! Time utilities

use chrono::{DateTime, Utc};

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}
