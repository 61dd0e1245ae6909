use std::path::Path;

use async_trait::async_trait;

use crate::{
    domain::{ApiCredentials, SignInOutcome},
    errors::Error,
    Result,
};

/// Interactive collection of credentials and login data.
///
/// Implementations validate input before returning it and re-ask on invalid
/// values; an `Err` means the user gave up or the input stream broke.
#[async_trait]
pub trait CredentialPrompt: Send {
    async fn prompt_for_credentials(&mut self) -> Result<ApiCredentials>;
    async fn prompt_for_phone_number(&mut self) -> Result<String>;
    async fn prompt_for_verification_code(&mut self) -> Result<String>;
    async fn prompt_for_password(&mut self) -> Result<String>;

    async fn show_success(&mut self, config_path: &Path) -> Result<()>;
    async fn show_error(&mut self, error: &Error) -> Result<()>;
}

/// Hexagonal port over an external Telegram protocol library.
///
/// The library owns the wire protocol and session crypto; gramtap only hands it
/// credentials plus the stored session string and persists what it returns.
#[async_trait]
pub trait TelegramClient: Send {
    /// Connect using `session` (empty when none is stored).
    async fn connect(&mut self, credentials: &ApiCredentials, session: &str) -> Result<()>;
    async fn is_authorized(&mut self) -> Result<bool>;
    async fn request_login_code(&mut self, phone_number: &str) -> Result<()>;
    async fn sign_in(&mut self, code: &str) -> Result<SignInOutcome>;
    async fn check_password(&mut self, password: &str) -> Result<()>;

    /// Serialized session for reconnecting later; empty before `connect`.
    fn session_string(&self) -> String;
    fn is_connected(&self) -> bool;
    async fn disconnect(&mut self) -> Result<()>;
}
