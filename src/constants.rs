//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// QUIZ RULES
// =============================================================================

/// Every question carries exactly this many options
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Seconds tolerated past a quiz's time limit before a submission is rejected
pub const TIME_LIMIT_GRACE_SECONDS: i64 = 30;

/// Maximum quiz title length
pub const MAX_QUIZ_TITLE_LENGTH: usize = 200;

/// Maximum student name length
pub const MAX_STUDENT_NAME_LENGTH: u64 = 100;

// =============================================================================
// STORAGE BACKENDS
// =============================================================================

/// Storage backend identifiers
pub mod storage_backends {
    pub const POSTGRES: &str = "postgres";
    pub const MEMORY: &str = "memory";
}

// =============================================================================
// LOGGING
// =============================================================================

/// Log output formats
pub mod log_formats {
    pub const PRETTY: &str = "pretty";
    pub const JSON: &str = "json";
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
