use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::{paths, validation, Result};

pub const DEFAULT_CHAT_LIMIT: u32 = 20;

/// Persisted configuration (`config.json`).
///
/// Deserialization is tolerant per field: a block or field that is missing,
/// `null` or of the wrong type falls back to its default while the rest of the
/// file is kept. Keys gramtap does not know about are carried through saves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default, deserialize_with = "lenient")]
    pub telegram: TelegramConfig,
    #[serde(default, deserialize_with = "lenient")]
    pub settings: Settings,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelegramConfig {
    #[serde(default, deserialize_with = "lenient")]
    pub api_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient")]
    pub api_hash: Option<String>,
    /// Opaque resumable session token produced by the protocol client.
    #[serde(default, deserialize_with = "lenient")]
    pub session: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_chat_limit", deserialize_with = "positive_or_default_limit")]
    pub default_chat_limit: u32,
    #[serde(default, deserialize_with = "lenient")]
    pub output_format: OutputFormat,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_chat_limit: DEFAULT_CHAT_LIMIT,
            output_format: OutputFormat::Text,
            extra: Map::new(),
        }
    }
}

fn default_chat_limit() -> u32 {
    DEFAULT_CHAT_LIMIT
}

/// Accept any JSON value; `null` or one that does not fit `T` becomes `T::default()`.
fn lenient<'de, D, T>(de: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(de)?;
    if value.is_null() {
        return Ok(T::default());
    }
    match serde_json::from_value(value) {
        Ok(v) => Ok(v),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring invalid config value");
            Ok(T::default())
        }
    }
}

fn positive_or_default_limit<'de, D>(de: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let limit: Option<u32> = lenient(de)?;
    Ok(limit.filter(|n| *n > 0).unwrap_or(DEFAULT_CHAT_LIMIT))
}

/// Snapshot of the stored Telegram credentials. Any field may be absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub api_id: Option<i32>,
    pub api_hash: Option<String>,
    pub session: Option<String>,
}

impl Credentials {
    /// Both halves of the API credential pair are present (positive id, non-empty hash).
    pub fn is_complete(&self) -> bool {
        self.api_id.is_some_and(|id| id > 0)
            && self.api_hash.as_deref().is_some_and(|h| !h.is_empty())
    }
}

impl From<&TelegramConfig> for Credentials {
    fn from(t: &TelegramConfig) -> Self {
        Self {
            api_id: t.api_id,
            api_hash: t.api_hash.clone(),
            session: t.session.clone(),
        }
    }
}

/// Owns `config.json` and its in-memory copy.
///
/// The file is read at most once per instance; call [`ConfigStore::invalidate`]
/// to observe changes written by another instance or process. Writes are
/// last-writer-wins, there is no locking.
#[derive(Debug)]
pub struct ConfigStore {
    config_dir: PathBuf,
    config_file: PathBuf,
    cached: Option<Configuration>,
}

impl ConfigStore {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        let config_file = paths::config_file_in(&config_dir);
        Self {
            config_dir,
            config_file,
            cached: None,
        }
    }

    /// Store at the platform default location (see [`paths::config_dir`]).
    pub fn open_default() -> Self {
        Self::new(paths::config_dir())
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_file
    }

    pub fn default_config() -> Configuration {
        Configuration::default()
    }

    /// Return the cached configuration, reading the file on first use.
    ///
    /// Never fails: a missing file yields defaults, and an unreadable or
    /// malformed one is logged and also yields defaults.
    pub fn load(&mut self) -> &Configuration {
        self.loaded_mut()
    }

    /// Drop the cached copy so the next [`ConfigStore::load`] re-reads the file.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Write the cached configuration as pretty-printed JSON.
    ///
    /// Returns `false` (after logging) when the directory cannot be created or
    /// the file cannot be written. Callers decide how to surface that.
    pub fn save(&mut self) -> bool {
        match self.try_save() {
            Ok(()) => {
                tracing::debug!(path = %self.config_file.display(), "saved config");
                true
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.config_file.display(),
                    error = %e,
                    "error saving config"
                );
                false
            }
        }
    }

    pub fn has_credentials(&mut self) -> bool {
        self.credentials().is_complete()
    }

    pub fn credentials(&mut self) -> Credentials {
        Credentials::from(&self.load().telegram)
    }

    pub fn settings(&mut self) -> Settings {
        self.load().settings.clone()
    }

    /// Store the API credential pair and persist.
    ///
    /// `session` is only written when non-empty; passing `None` keeps whatever
    /// session is already stored.
    pub fn set_credentials(&mut self, api_id: i32, api_hash: &str, session: Option<&str>) -> bool {
        let telegram = &mut self.loaded_mut().telegram;
        telegram.api_id = Some(api_id);
        telegram.api_hash = Some(api_hash.to_string());
        if let Some(s) = session.filter(|s| !s.is_empty()) {
            telegram.session = Some(s.to_string());
        }
        self.save()
    }

    /// Overwrite the stored session (an empty string clears it) and persist.
    pub fn update_session(&mut self, session: &str) -> bool {
        self.loaded_mut().telegram.session = Some(session.to_string());
        self.save()
    }

    pub fn validate_api_id(value: &str) -> bool {
        validation::is_valid_api_id(value)
    }

    pub fn validate_api_hash(value: &str) -> bool {
        validation::is_valid_api_hash(value)
    }

    fn loaded_mut(&mut self) -> &mut Configuration {
        let path = &self.config_file;
        self.cached.get_or_insert_with(|| read_config_file(path))
    }

    fn try_save(&mut self) -> Result<()> {
        let data = serde_json::to_string_pretty(&*self.loaded_mut())?;
        fs::create_dir_all(&self.config_dir)?;
        fs::write(&self.config_file, data)?;
        Ok(())
    }
}

fn read_config_file(path: &Path) -> Configuration {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Configuration::default();
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "error loading config");
            return Configuration::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "error loading config");
            Configuration::default()
        }
    }
}
