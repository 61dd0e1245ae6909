//! Terminal adapter (tokio stdio).
//!
//! This crate implements the `gramtap-core` CredentialPrompt port as a plain
//! line-oriented question/answer loop. Invalid answers print the validation
//! message and ask again; end of input cancels.

use std::path::Path;

use async_trait::async_trait;
use tokio::io::{
    self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};

use gramtap_core::{
    domain::ApiCredentials,
    errors::Error,
    ports::CredentialPrompt,
    validation::{self, ValidationError},
    Result,
};

pub mod screens;

const SETUP_CANCELLED: &str = "Setup cancelled. Run the command again when you're ready.";
const LOGIN_CANCELLED: &str = "Login cancelled.";

pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompt<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> TerminalPrompt<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    async fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    /// One line without its terminator; `None` at end of input.
    async fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf).await? == 0 {
            return Ok(None);
        }
        let len = buf.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        buf.truncate(len);
        Ok(Some(buf))
    }

    /// Ask until `check` accepts the answer.
    ///
    /// Surrounding whitespace is stripped unless `keep_whitespace` is set.
    async fn ask<T, F>(
        &mut self,
        question: &str,
        keep_whitespace: bool,
        cancel_message: &str,
        check: F,
    ) -> Result<T>
    where
        T: Send,
        F: Fn(&str) -> std::result::Result<T, ValidationError> + Send,
    {
        loop {
            self.write(&screens::question(question)).await?;
            let Some(line) = self.read_line().await? else {
                self.write(&screens::cancelled(cancel_message)).await?;
                return Err(Error::Cancelled);
            };

            let answer = if keep_whitespace { line.as_str() } else { line.trim() };
            match check(answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!(error = %e, "rejected input");
                    self.write(&screens::invalid(&e.to_string())).await?;
                }
            }
        }
    }
}

#[async_trait]
impl<R, W> CredentialPrompt for TerminalPrompt<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn prompt_for_credentials(&mut self) -> Result<ApiCredentials> {
        self.write(&screens::credentials_intro()).await?;

        let api_id = self
            .ask(
                "Enter your API ID (numbers only):",
                false,
                SETUP_CANCELLED,
                validation::parse_api_id,
            )
            .await?;
        let api_hash = self
            .ask(
                "Enter your API Hash (32 character hex string):",
                false,
                SETUP_CANCELLED,
                validation::parse_api_hash,
            )
            .await?;

        Ok(ApiCredentials { api_id, api_hash })
    }

    async fn prompt_for_phone_number(&mut self) -> Result<String> {
        self.write(&screens::phone_intro()).await?;
        self.ask(
            "Enter your phone number (with country code, e.g., +1234567890):",
            false,
            LOGIN_CANCELLED,
            |s: &str| validation::check_phone_number(s).map(|_| s.to_string()),
        )
        .await
    }

    async fn prompt_for_verification_code(&mut self) -> Result<String> {
        self.write(&screens::code_intro()).await?;
        self.ask(
            "Enter the verification code:",
            false,
            LOGIN_CANCELLED,
            |s: &str| validation::check_verification_code(s).map(|_| s.to_string()),
        )
        .await
    }

    async fn prompt_for_password(&mut self) -> Result<String> {
        self.write(&screens::password_intro()).await?;
        self.ask(
            "Enter your 2FA password:",
            true,
            LOGIN_CANCELLED,
            |s: &str| validation::check_password(s).map(|_| s.to_string()),
        )
        .await
    }

    async fn show_success(&mut self, config_path: &Path) -> Result<()> {
        self.write(&screens::success(config_path)).await
    }

    async fn show_error(&mut self, error: &Error) -> Result<()> {
        self.write(&screens::failure(&error.to_string())).await
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    type TestPrompt = TerminalPrompt<BufReader<&'static [u8]>, Vec<u8>>;

    fn prompt(input: &'static str) -> TestPrompt {
        TerminalPrompt::new(BufReader::new(input.as_bytes()), Vec::new())
    }

    fn output(p: TestPrompt) -> String {
        String::from_utf8(p.into_inner().1).unwrap()
    }

    #[tokio::test]
    async fn credentials_are_validated_and_hash_lowercased() {
        let mut p = prompt("abc\n0\n 123456 \nabc123\nABC123DEF45678901234567890123456\n");

        let creds = p.prompt_for_credentials().await.unwrap();
        assert_eq!(creds.api_id, 123456);
        assert_eq!(creds.api_hash, "abc123def45678901234567890123456");

        let out = output(p);
        assert!(out.contains("Telegram API Credentials Setup"));
        assert_eq!(
            out.matches("API ID must be a positive number (e.g., 123456)")
                .count(),
            2
        );
        assert!(out.contains("API Hash must be exactly 32 characters long"));
    }

    #[tokio::test]
    async fn hash_with_bad_characters_is_reasked() {
        let mut p = prompt("1\nabc123def4567890123456789012345g\nabcdef1234567890abcdef1234567890\n");
        let creds = p.prompt_for_credentials().await.unwrap();
        assert_eq!(creds.api_hash, "abcdef1234567890abcdef1234567890");
        assert!(output(p).contains("API Hash must contain only hexadecimal characters"));
    }

    #[tokio::test]
    async fn end_of_input_cancels_setup() {
        let mut p = prompt("123456\n");
        let err = p.prompt_for_credentials().await.unwrap_err();
        assert!(matches!(err, Error::Cancelled));
        assert!(output(p).contains("Setup cancelled"));
    }

    #[tokio::test]
    async fn phone_code_and_password_flow() {
        let mut p = prompt("1234567890\n+1234567890\r\n1234\n12345\n\n  secret  \n");

        assert_eq!(p.prompt_for_phone_number().await.unwrap(), "+1234567890");
        assert_eq!(p.prompt_for_verification_code().await.unwrap(), "12345");
        assert_eq!(p.prompt_for_password().await.unwrap(), "  secret  ");

        let out = output(p);
        assert!(out.contains("Phone number must start with + and include country code"));
        assert!(out.contains("Verification code must be 5 digits"));
        assert!(out.contains("Password cannot be empty"));
        assert!(out.contains("Two-Factor Authentication"));
    }

    #[tokio::test]
    async fn end_of_input_cancels_login() {
        let mut p = prompt("");
        let err = p.prompt_for_verification_code().await.unwrap_err();
        assert!(matches!(err, Error::Cancelled));
        assert!(output(p).contains("Login cancelled."));
    }

    #[tokio::test]
    async fn success_and_error_screens() {
        let mut p = prompt("");
        p.show_success(&PathBuf::from("/test/path/config.json"))
            .await
            .unwrap();
        p.show_error(&Error::SaveFailed {
            path: PathBuf::from("/test/path/config.json"),
        })
        .await
        .unwrap();

        let out = output(p);
        assert!(out.contains("Configuration Complete"));
        assert!(out.contains("/test/path/config.json"));
        assert!(out.contains("Configuration Failed"));
        assert!(out.contains("Error saving credentials: could not save configuration"));
    }
}
