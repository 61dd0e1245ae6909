use std::path::PathBuf;

use crate::validation::ValidationError;

/// Core error type for gramtap.
///
/// Adapter crates (terminal prompt, protocol clients) map their specific
/// errors into this type so the CLI can report failures consistently.
/// Config persistence itself never surfaces here: load falls back to defaults
/// and save reports a boolean.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not save configuration to {path}")]
    SaveFailed { path: PathBuf },

    #[error("no API credentials configured; run `gramtap login` first")]
    MissingCredentials,

    #[error("cancelled by user")]
    Cancelled,

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
