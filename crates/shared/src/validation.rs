//! Common validation utilities.

use validator::ValidationError;

/// Validates that an id is positive (database ids start at 1).
pub fn validate_positive_id(id: i64) -> Result<(), ValidationError> {
    if id > 0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("positive_id");
        err.message = Some("Id must be a positive integer".into());
        Err(err)
    }
}

/// Validates that every id in a target list is positive.
pub fn validate_id_list(ids: &[i64]) -> Result<(), ValidationError> {
    if ids.iter().all(|&id| id > 0) {
        Ok(())
    } else {
        let mut err = ValidationError::new("positive_id_list");
        err.message = Some("All ids must be positive integers".into());
        Err(err)
    }
}

/// Validates that a string is not blank (non-empty after trimming).
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !value.trim().is_empty() {
        Ok(())
    } else {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_id() {
        assert!(validate_positive_id(1).is_ok());
        assert!(validate_positive_id(i64::MAX).is_ok());
        assert!(validate_positive_id(0).is_err());
        assert!(validate_positive_id(-3).is_err());
    }

    #[test]
    fn test_validate_id_list() {
        assert!(validate_id_list(&[]).is_ok());
        assert!(validate_id_list(&[1, 2, 3]).is_ok());
        assert!(validate_id_list(&[1, 0, 3]).is_err());
        assert!(validate_id_list(&[-1]).is_err());
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Quarterly update").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
    }
}
