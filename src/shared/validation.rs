use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Regex for validating phone numbers
    /// Optional leading +, then digits with optional space grouping
    /// - Valid: "+91 9876543210", "9876543210"
    /// - Invalid: "98-76-54", "phone", "12345"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9][0-9 ]{7,14}$").unwrap();

    /// Regex for validating Indian postal codes (6 digits, no leading zero)
    /// - Valid: "834002"
    /// - Invalid: "034002", "83400", "8340021"
    pub static ref PINCODE_REGEX: Regex = Regex::new(r"^[1-9][0-9]{5}$").unwrap();
}

/// Rejects values that are empty or whitespace-only
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_REGEX.is_match("+91 9876543210"));
        assert!(PHONE_REGEX.is_match("9876543210"));
        assert!(PHONE_REGEX.is_match("0651 2446066"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_REGEX.is_match("98-76-54-32-10")); // hyphens
        assert!(!PHONE_REGEX.is_match("phone")); // letters
        assert!(!PHONE_REGEX.is_match("12345")); // too short
        assert!(!PHONE_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_pincode_regex_valid() {
        assert!(PINCODE_REGEX.is_match("834002"));
        assert!(PINCODE_REGEX.is_match("110001"));
    }

    #[test]
    fn test_pincode_regex_invalid() {
        assert!(!PINCODE_REGEX.is_match("034002")); // leading zero
        assert!(!PINCODE_REGEX.is_match("83400")); // too short
        assert!(!PINCODE_REGEX.is_match("8340021")); // too long
        assert!(!PINCODE_REGEX.is_match("83400a")); // letter
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("pothole on the corner").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("\t\n").is_err());
    }
}
