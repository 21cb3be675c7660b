//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod quiz;
pub mod submission;

pub use quiz::*;
pub use submission::*;
