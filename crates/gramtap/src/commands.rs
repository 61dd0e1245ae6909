use anyhow::Context;
use serde_json::json;

use gramtap_core::{
    config::{ConfigStore, OutputFormat},
    login,
};
use gramtap_term::TerminalPrompt;

use crate::cli::Commands;

pub async fn run(command: Commands, store: &mut ConfigStore) -> anyhow::Result<()> {
    match command {
        Commands::Login { setup } => login_cmd(store, setup).await,
        Commands::Status { json } => {
            let as_json = json || store.settings().output_format == OutputFormat::Json;
            println!("{}", render_status(store, as_json)?);
            Ok(())
        }
        Commands::Logout => {
            login::clear_session(store).context("failed to clear session")?;
            println!("Session cleared. API credentials are kept.");
            Ok(())
        }
        Commands::ConfigPath => {
            println!("{}", store.config_path().display());
            Ok(())
        }
    }
}

async fn login_cmd(store: &mut ConfigStore, setup: bool) -> anyhow::Result<()> {
    if !setup && store.has_credentials() {
        println!(
            "API credentials are already configured in {}.\nRun `gramtap login --setup` to replace them.",
            store.config_path().display()
        );
        return Ok(());
    }

    let mut prompt = TerminalPrompt::stdio();
    login::ensure_credentials(store, &mut prompt, setup)
        .await
        .context("credential setup did not complete")?;
    Ok(())
}

/// Status summary; never includes the API hash or session contents.
fn render_status(store: &mut ConfigStore, as_json: bool) -> anyhow::Result<String> {
    let creds = store.credentials();
    let has_credentials = creds.is_complete();
    let has_session = creds.session.as_deref().is_some_and(|s| !s.is_empty());
    let path = store.config_path().display().to_string();

    if as_json {
        let v = json!({
            "configPath": path,
            "hasCredentials": has_credentials,
            "apiId": creds.api_id,
            "hasSession": has_session,
        });
        return Ok(serde_json::to_string_pretty(&v)?);
    }

    let credentials_line = match creds.api_id {
        Some(id) if has_credentials => format!("configured (API ID {id})"),
        _ => "missing (run `gramtap login`)".to_string(),
    };
    let session_line = if has_session { "stored" } else { "none" };

    Ok(format!(
        "Config file:     {path}\nAPI credentials: {credentials_line}\nSession:         {session_line}"
    ))
}
