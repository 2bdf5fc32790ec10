//! Input validation utilities for the lock endpoint
//!
//! This module provides validation and conversion functions for lock
//! requests. Each error carries the exact client-facing message so
//! handlers can return it verbatim.

use validator::ValidationError;

/// Validate the key parameter
///
/// The key must be present and non-empty.
pub fn validate_lock_key(key: &str) -> Result<(), ValidationError> {
    if key.is_empty() {
        let mut error = ValidationError::new("key_missing");
        error.message = Some("key is missing.".into());
        return Err(error);
    }
    Ok(())
}

/// Validate the owner parameter
pub fn validate_lock_owner(owner: &str) -> Result<(), ValidationError> {
    if owner.is_empty() {
        let mut error = ValidationError::new("owner_missing");
        error.message = Some("owner is missing.".into());
        return Err(error);
    }
    Ok(())
}

/// Parse a duration expressed in decimal seconds into whole milliseconds
///
/// Fractions below one millisecond are truncated toward zero. Negative
/// and zero durations are accepted; they request an immediate release.
pub fn parse_duration_millis(raw: &str) -> Result<i64, ValidationError> {
    match raw.parse::<f64>() {
        Ok(seconds) => Ok((seconds * 1000.0) as i64),
        Err(e) => {
            let mut error = ValidationError::new("duration_invalid");
            error.message = Some(format!("Failed to convert duration: {}", e).into());
            Err(error)
        }
    }
}

/// Parse an unlock token
///
/// The token is the `lock_time` returned by a previous grant. Zero is
/// rejected because 0 marks an unheld row and can never authorize a
/// release.
pub fn parse_unlock_token(raw: &str) -> Result<i64, ValidationError> {
    match raw.parse::<i64>() {
        Ok(0) => {
            let mut error = ValidationError::new("unlock_zero");
            error.message = Some("unlock must not be 0.".into());
            Err(error)
        }
        Ok(token) => Ok(token),
        Err(e) => {
            let mut error = ValidationError::new("unlock_invalid");
            error.message = Some(format!("Failed to convert unlock: {}", e).into());
            Err(error)
        }
    }
}
