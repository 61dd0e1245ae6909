//! Input checks for credentials and login data.
//!
//! Every check has a parser returning [`ValidationError`] (whose `Display` is the
//! message shown inline at the prompt) and a `bool` predicate built on top of it.

use std::sync::OnceLock;

use regex::Regex;

pub const API_HASH_LEN: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("API ID must be a positive number (e.g., 123456)")]
    ApiId,

    #[error("API Hash must be exactly 32 characters long")]
    ApiHashLength,

    #[error("API Hash must contain only hexadecimal characters (0-9, a-f)")]
    ApiHashCharset,

    #[error("Phone number must start with + and include country code")]
    PhoneMissingPlus,

    #[error("Phone number must be in format +1234567890 (10-15 digits)")]
    PhoneFormat,

    #[error("Verification code must be 5 digits")]
    VerificationCode,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+[0-9]{10,15}$").expect("valid regex"))
}

fn code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{5}$").expect("valid regex"))
}

/// Parse an API ID.
///
/// The value must be a positive `i32` whose canonical decimal form equals the
/// input exactly, so `"007"`, `"+5"` and `"1.0"` are all rejected.
pub fn parse_api_id(input: &str) -> Result<i32, ValidationError> {
    let id = input.parse::<i32>().map_err(|_| ValidationError::ApiId)?;
    if id <= 0 || id.to_string() != input {
        return Err(ValidationError::ApiId);
    }
    Ok(id)
}

pub fn is_valid_api_id(input: &str) -> bool {
    parse_api_id(input).is_ok()
}

/// Parse an API hash, returning it lowercased.
pub fn parse_api_hash(input: &str) -> Result<String, ValidationError> {
    if input.chars().count() != API_HASH_LEN {
        return Err(ValidationError::ApiHashLength);
    }
    if !input.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::ApiHashCharset);
    }
    Ok(input.to_ascii_lowercase())
}

pub fn is_valid_api_hash(input: &str) -> bool {
    parse_api_hash(input).is_ok()
}

pub fn check_phone_number(input: &str) -> Result<(), ValidationError> {
    if !input.starts_with('+') {
        return Err(ValidationError::PhoneMissingPlus);
    }
    if !phone_re().is_match(input) {
        return Err(ValidationError::PhoneFormat);
    }
    Ok(())
}

pub fn is_valid_phone_number(input: &str) -> bool {
    check_phone_number(input).is_ok()
}

pub fn check_verification_code(input: &str) -> Result<(), ValidationError> {
    if !code_re().is_match(input) {
        return Err(ValidationError::VerificationCode);
    }
    Ok(())
}

pub fn is_valid_verification_code(input: &str) -> bool {
    check_verification_code(input).is_ok()
}

pub fn check_password(input: &str) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    Ok(())
}

pub fn is_valid_password(input: &str) -> bool {
    check_password(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_id_accepts_canonical_positive_integers() {
        assert_eq!(parse_api_id("123456"), Ok(123456));
        assert!(is_valid_api_id("1"));
        assert!(is_valid_api_id("999999999"));
        assert!(is_valid_api_id("2147483647"));
    }

    #[test]
    fn api_id_rejects_non_canonical_or_non_positive() {
        for bad in [
            "", "0", "-1", "-123", "abc", "123abc", "123.456", "1.5", "007", "+5", " 12", "12 ",
            "123+456", "123-456", "123 456", "123,456",
        ] {
            assert!(!is_valid_api_id(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn api_id_rejects_unicode_and_overflow() {
        assert!(!is_valid_api_id("123456α"));
        assert!(!is_valid_api_id("123456😀"));
        assert!(!is_valid_api_id("١٢٣"));
        assert!(!is_valid_api_id("2147483648"));
        assert!(!is_valid_api_id("1000000000000000000"));
        assert!(!is_valid_api_id(&"1".repeat(100)));
    }

    #[test]
    fn api_hash_accepts_any_case_hex() {
        assert!(is_valid_api_hash("abc123def45678901234567890123456"));
        assert!(is_valid_api_hash("ABCDEF1234567890abcdef1234567890"));
        assert!(is_valid_api_hash("12345678901234567890123456789012"));
        assert_eq!(
            parse_api_hash("AbCdEf1234567890AbCdEf1234567890").as_deref(),
            Ok("abcdef1234567890abcdef1234567890")
        );
    }

    #[test]
    fn api_hash_reports_length_before_charset() {
        assert_eq!(parse_api_hash("abc123"), Err(ValidationError::ApiHashLength));
        assert_eq!(parse_api_hash(&"a".repeat(33)), Err(ValidationError::ApiHashLength));
        assert_eq!(parse_api_hash(""), Err(ValidationError::ApiHashLength));
        assert_eq!(
            parse_api_hash("abc123def4567890123456789012345g"),
            Err(ValidationError::ApiHashCharset)
        );
        assert_eq!(
            parse_api_hash("abc123def456789012345678901234 6"),
            Err(ValidationError::ApiHashCharset)
        );
    }

    #[test]
    fn api_hash_counts_characters_not_bytes() {
        // 31 ascii + one multi-byte char: 32 chars but not hex.
        let s = format!("{}α", "a".repeat(31));
        assert_eq!(parse_api_hash(&s), Err(ValidationError::ApiHashCharset));
        assert!(!is_valid_api_hash("abc123def45678901234567890123456😀"));
    }

    #[test]
    fn phone_number_rules() {
        assert!(is_valid_phone_number("+1234567890"));
        assert!(is_valid_phone_number("+123456789012345"));
        assert_eq!(
            check_phone_number("1234567890"),
            Err(ValidationError::PhoneMissingPlus)
        );
        assert_eq!(check_phone_number("+123456789"), Err(ValidationError::PhoneFormat));
        assert_eq!(
            check_phone_number("+1234567890123456"),
            Err(ValidationError::PhoneFormat)
        );
        assert_eq!(check_phone_number("+12345 67890"), Err(ValidationError::PhoneFormat));
        assert_eq!(check_phone_number("+١٢٣٤٥٦٧٨٩٠"), Err(ValidationError::PhoneFormat));
    }

    #[test]
    fn verification_code_is_five_digits() {
        assert!(is_valid_verification_code("12345"));
        assert!(!is_valid_verification_code("1234"));
        assert!(!is_valid_verification_code("123456"));
        assert!(!is_valid_verification_code("12a45"));
        assert!(!is_valid_verification_code(""));
    }

    #[test]
    fn password_only_needs_one_char() {
        assert!(is_valid_password("x"));
        assert!(is_valid_password(" "));
        assert_eq!(check_password(""), Err(ValidationError::EmptyPassword));
    }

    #[test]
    fn messages_match_prompt_copy() {
        assert_eq!(
            ValidationError::ApiId.to_string(),
            "API ID must be a positive number (e.g., 123456)"
        );
        assert_eq!(
            ValidationError::VerificationCode.to_string(),
            "Verification code must be 5 digits"
        );
    }
}
