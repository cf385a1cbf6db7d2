// Error handling utilities for consistent error messages and exit codes

use std::process;

/// Exit with a user error (exit code 1)
/// User errors are for invalid input, unknown record names, etc.
pub fn user_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Exit with an internal error (exit code >1)
/// Internal errors are for unreadable or corrupt exports and the like
pub fn internal_error(message: &str) -> ! {
    eprintln!("Internal error: {}", message);
    process::exit(2);
}

/// Validate that a record name is plausible (non-empty after trimming)
pub fn validate_record_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        Err("Record name cannot be empty".to_string())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_record_name() {
        assert!(validate_record_name("PR-00001").is_ok());
        assert!(validate_record_name("").is_err());
        assert!(validate_record_name("   ").is_err());
    }
}
