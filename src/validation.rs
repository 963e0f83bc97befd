//! Input validation for Spare Gold.
//!
//! This module provides validation functions for all user inputs.
//! All validators return SpareError::Validation on failure.

use crate::error::{SpareError, SpareResult};

/// Minimum password length accepted before calling the identity provider
pub const MIN_PASSWORD_LENGTH: usize = 6;

const TLD_MIN_LENGTH: usize = 2;
const TLD_MAX_LENGTH: usize = 4;

fn is_local_part_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-'
}

fn is_domain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '-'
}

/// Validate an email address.
///
/// Accepted shape: local-part `@` domain `.` TLD, where the local part uses
/// letters, digits, `.`, `_` and `-`, the domain uses letters, digits, `.`
/// and `-`, and the TLD is 2 to 4 ASCII letters.
///
/// Valid: "user@example.com", "first.last@cars.co.in"
/// Invalid: "user@example", "user@@example.com", "user@example.c"
pub fn validate_email(email: &str) -> SpareResult<()> {
    let invalid = || SpareError::validation("email", "is not a valid email address");

    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return Err(invalid()),
    };

    if local.is_empty() || !local.chars().all(is_local_part_char) {
        return Err(invalid());
    }

    // The domain must end in a dot-separated TLD of 2-4 letters
    let (host, tld) = match domain.rsplit_once('.') {
        Some(parts) => parts,
        None => return Err(invalid()),
    };

    if host.is_empty() || !host.chars().all(is_domain_char) {
        return Err(invalid());
    }

    if tld.len() < TLD_MIN_LENGTH
        || tld.len() > TLD_MAX_LENGTH
        || !tld.chars().all(|c| c.is_ascii_alphabetic())
    {
        return Err(invalid());
    }

    Ok(())
}

/// Validate a password: at least [`MIN_PASSWORD_LENGTH`] characters.
pub fn validate_password(password: &str) -> SpareResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(SpareError::validation(
            "password",
            format!("must be at least {} characters long", MIN_PASSWORD_LENGTH),
        ));
    }
    Ok(())
}

/// Validate a required form field: non-empty after trimming whitespace.
pub fn validate_required(field_name: &str, value: &str) -> SpareResult<()> {
    if value.trim().is_empty() {
        return Err(SpareError::validation(field_name, "cannot be empty"));
    }
    Ok(())
}

/// Validate and parse a price entered as a decimal string.
///
/// Must parse as a finite, non-negative number.
pub fn validate_price(value: &str) -> SpareResult<f64> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| SpareError::validation("price", format!("'{}' is not a number", value)))?;

    if !parsed.is_finite() || parsed < 0.0 {
        return Err(SpareError::validation(
            "price",
            "must be a non-negative amount",
        ));
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("first.last@example.com").is_ok());
        assert!(validate_email("user_name-1@sub.example.org").is_ok());
        assert!(validate_email("a@b.in").is_ok());
        assert!(validate_email("user@example.info").is_ok());
    }

    #[test]
    fn test_validate_email_missing_at() {
        assert!(validate_email("userexample.com").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_validate_email_bad_local_part() {
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("us er@example.com").is_err());
        assert!(validate_email("user!@example.com").is_err());
    }

    #[test]
    fn test_validate_email_bad_domain() {
        assert!(validate_email("user@example").is_err());
        assert!(validate_email("user@.com").is_err());
        assert!(validate_email("user@@example.com").is_err());
        assert!(validate_email("user@exa mple.com").is_err());
    }

    #[test]
    fn test_validate_email_tld_length() {
        assert!(validate_email("user@example.c").is_err());
        assert!(validate_email("user@example.co").is_ok());
        assert!(validate_email("user@example.comm").is_ok());
        assert!(validate_email("user@example.commm").is_err());
        assert!(validate_email("user@example.c0m").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("secret").is_ok());
        assert!(validate_password("longer-password").is_ok());
        assert!(validate_password("12345").is_err());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("name", "Tesla").is_ok());
        assert!(validate_required("name", "  Trimmed  ").is_ok());
        assert!(validate_required("name", "").is_err());
        assert!(validate_required("name", "   ").is_err());
    }

    #[test]
    fn test_validate_required_reports_field() {
        let err = validate_required("carMake", "").unwrap_err();
        match err {
            SpareError::Validation { field, .. } => assert_eq!(field, "carMake"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_price_valid() {
        assert_eq!(validate_price("120.00").unwrap(), 120.0);
        assert_eq!(validate_price("0").unwrap(), 0.0);
        assert_eq!(validate_price(" 99.5 ").unwrap(), 99.5);
    }

    #[test]
    fn test_validate_price_invalid() {
        assert!(validate_price("abc").is_err());
        assert!(validate_price("").is_err());
        assert!(validate_price("-5").is_err());
        assert!(validate_price("inf").is_err());
        assert!(validate_price("NaN").is_err());
    }
}
