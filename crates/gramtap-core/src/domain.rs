use crate::{validation, Result};

/// Validated API credential pair as entered by the user.
///
/// `api_hash` is always lowercase hex; construct through [`ApiCredentials::parse`]
/// to get that guarantee from raw input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiCredentials {
    pub api_id: i32,
    pub api_hash: String,
}

impl ApiCredentials {
    pub fn parse(api_id: &str, api_hash: &str) -> Result<Self> {
        Ok(Self {
            api_id: validation::parse_api_id(api_id)?,
            api_hash: validation::parse_api_hash(api_hash)?,
        })
    }
}

/// Outcome of submitting a login code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignInOutcome {
    Authorized,
    /// The account has two-factor authentication enabled.
    PasswordRequired,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::Error, validation::ValidationError};

    #[test]
    fn parse_normalises_hash() {
        let c = ApiCredentials::parse("42", "ABCDEF1234567890ABCDEF1234567890").unwrap();
        assert_eq!(c.api_id, 42);
        assert_eq!(c.api_hash, "abcdef1234567890abcdef1234567890");
    }

    #[test]
    fn parse_reports_first_invalid_field() {
        let err = ApiCredentials::parse("0", "nope").unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::ApiId)));
    }
}
