//! Phone number validation.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// E.164-ish phone format: optional +, 7 to 15 digits.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{7,15}$").expect("phone regex is valid"));

/// Check a phone number against the accepted format.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Validator-compatible hook for `#[validate(custom(...))]` fields.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone");
        err.message = Some("Invalid phone number format".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_e164() {
        assert!(is_valid_phone("+15551234567"));
        assert!(is_valid_phone("15551234567"));
        assert!(is_valid_phone("5551234"));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("+1 555 123"));
        assert!(!is_valid_phone("phone"));
        assert!(!is_valid_phone("123"));
        assert!(!is_valid_phone("+123456789012345678"));
    }
}
