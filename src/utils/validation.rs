//! Input validation utilities

use crate::constants::MAX_STUDENT_NAME_LENGTH;

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Trim and lowercase an email address
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validate and sanitize a student's display name
pub fn validate_student_name(name: &str) -> Result<String, &'static str> {
    let sanitized = sanitize_string(name);
    if sanitized.is_empty() {
        return Err("Student name cannot be empty");
    }
    if sanitized.chars().count() as u64 > MAX_STUDENT_NAME_LENGTH {
        return Err("Student name must be at most 100 characters");
    }
    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_string() {
        assert_eq!(sanitize_string("  Ada\u{0007} "), "Ada");
        assert_eq!(sanitize_string("line\nbreak"), "line\nbreak");
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Ada@Example.COM "), "ada@example.com");
    }

    #[test]
    fn test_validate_student_name() {
        assert_eq!(validate_student_name("  Ada Lovelace ").unwrap(), "Ada Lovelace");
        assert!(validate_student_name("   ").is_err());
        assert!(validate_student_name(&"x".repeat(101)).is_err());
    }
}
