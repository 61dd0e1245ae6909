use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Subdirectory name used under the platform config root.
pub const APP_DIR_NAME: &str = "gramtap";

/// File name of the persisted configuration.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Platform families with distinct config directory conventions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux, BSDs and anything else that follows XDG.
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Unix
        }
    }
}

/// Config directory for the current platform and process environment.
///
/// - Windows: `%APPDATA%\gramtap` (falls back to `<home>\AppData\Roaming\gramtap`)
/// - macOS:   `~/Library/Application Support/gramtap`
/// - Unix:    `$XDG_CONFIG_HOME/gramtap` (falls back to `~/.config/gramtap`)
pub fn config_dir() -> PathBuf {
    resolve_config_dir(Platform::current(), |key| env::var_os(key), dirs::home_dir())
}

/// Full path of `config.json` inside [`config_dir`].
pub fn config_file() -> PathBuf {
    config_file_in(&config_dir())
}

pub fn config_file_in(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Resolve the config directory from explicit inputs.
///
/// A missing home directory is not special-cased: the empty path stands in for
/// it, so the result degrades to a relative path.
pub fn resolve_config_dir(
    platform: Platform,
    env_lookup: impl Fn(&str) -> Option<OsString>,
    home: Option<PathBuf>,
) -> PathBuf {
    let home = home.unwrap_or_default();
    let var = |key: &str| env_lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);

    let root = match platform {
        Platform::Windows => {
            var("APPDATA").unwrap_or_else(|| home.join("AppData").join("Roaming"))
        }
        Platform::MacOs => home.join("Library").join("Application Support"),
        Platform::Unix => var("XDG_CONFIG_HOME").unwrap_or_else(|| home.join(".config")),
    };

    root.join(APP_DIR_NAME)
}
