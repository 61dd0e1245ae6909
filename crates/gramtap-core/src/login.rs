//! Login orchestration: prompt -> config store -> protocol client -> config store.

use crate::{
    config::ConfigStore,
    domain::{ApiCredentials, SignInOutcome},
    errors::Error,
    ports::{CredentialPrompt, TelegramClient},
    Result,
};

/// Ask for API credentials and persist them.
///
/// On a failed save the prompt's error screen is shown and
/// [`Error::SaveFailed`] is returned.
pub async fn setup_credentials(
    store: &mut ConfigStore,
    prompt: &mut dyn CredentialPrompt,
) -> Result<ApiCredentials> {
    let creds = prompt.prompt_for_credentials().await?;

    if !store.set_credentials(creds.api_id, &creds.api_hash, None) {
        let err = Error::SaveFailed {
            path: store.config_path().to_path_buf(),
        };
        prompt.show_error(&err).await?;
        return Err(err);
    }

    tracing::info!(path = %store.config_path().display(), "stored API credentials");
    prompt.show_success(store.config_path()).await?;
    Ok(creds)
}

/// Stored credentials, or run [`setup_credentials`] when missing (or when `force`).
pub async fn ensure_credentials(
    store: &mut ConfigStore,
    prompt: &mut dyn CredentialPrompt,
    force: bool,
) -> Result<ApiCredentials> {
    if !force {
        if let Some(creds) = stored_api_credentials(store) {
            return Ok(creds);
        }
    }
    setup_credentials(store, prompt).await
}

pub fn stored_api_credentials(store: &mut ConfigStore) -> Option<ApiCredentials> {
    let c = store.credentials();
    if !c.is_complete() {
        return None;
    }
    Some(ApiCredentials {
        api_id: c.api_id?,
        api_hash: c.api_hash?,
    })
}

/// Connect with the stored session, run the interactive sign-in when the
/// session is not authorized, and persist the refreshed session string.
///
/// The client is disconnected before returning, whether or not sign-in
/// succeeded.
pub async fn authenticate(
    store: &mut ConfigStore,
    prompt: &mut dyn CredentialPrompt,
    client: &mut dyn TelegramClient,
) -> Result<()> {
    let creds = stored_api_credentials(store).ok_or(Error::MissingCredentials)?;
    let session = store.credentials().session.unwrap_or_default();

    client.connect(&creds, &session).await?;
    let result = sign_in_and_persist(store, prompt, client).await;

    if client.is_connected() {
        if let Err(e) = client.disconnect().await {
            tracing::warn!(error = %e, "error disconnecting");
        }
    }
    result
}

async fn sign_in_and_persist(
    store: &mut ConfigStore,
    prompt: &mut dyn CredentialPrompt,
    client: &mut dyn TelegramClient,
) -> Result<()> {
    if client.is_authorized().await? {
        tracing::debug!("stored session is still authorized");
    } else {
        let phone = prompt.prompt_for_phone_number().await?;
        client.request_login_code(&phone).await?;

        let code = prompt.prompt_for_verification_code().await?;
        if client.sign_in(&code).await? == SignInOutcome::PasswordRequired {
            let password = prompt.prompt_for_password().await?;
            client.check_password(&password).await?;
        }
        tracing::info!("signed in");
    }

    if !store.update_session(&client.session_string()) {
        return Err(Error::SaveFailed {
            path: store.config_path().to_path_buf(),
        });
    }
    Ok(())
}

/// Forget the stored session; API credentials stay.
pub fn clear_session(store: &mut ConfigStore) -> Result<()> {
    if store.update_session("") {
        Ok(())
    } else {
        Err(Error::SaveFailed {
            path: store.config_path().to_path_buf(),
        })
    }
}
