use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const CONFIG_FILE: &str = "config.json";

/// Get the hostnotify home directory (~/.hostnotify)
///
/// `HOSTNOTIFY_HOME` replaces the whole directory when set.
pub fn home_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("HOSTNOTIFY_HOME") {
        return PathBuf::from(home);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".hostnotify")
}

/// Get the settings file path (~/.hostnotify/config.json)
pub fn config_path() -> PathBuf {
    home_dir().join(CONFIG_FILE)
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Which event types may produce a notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HookEvents {
    /// The literal `"all"`.
    All,
    /// Absent or empty: no filtering.
    #[default]
    Unset,
    Listed(Vec<String>),
}

impl HookEvents {
    fn from_raw(raw: RawHookEvents) -> Self {
        match raw {
            RawHookEvents::Keyword(s) if s == "all" => Self::All,
            RawHookEvents::Keyword(s) if s.is_empty() => Self::Unset,
            RawHookEvents::Keyword(s) => Self::Listed(vec![s]),
            RawHookEvents::List(list) if list.is_empty() => Self::Unset,
            RawHookEvents::List(list) => Self::Listed(list),
        }
    }
}

/// Resolved notification settings. Loaded once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub enabled: bool,
    pub popup_notifications: bool,
    pub always_notify: bool,
    pub hook_events: HookEvents,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            popup_notifications: true,
            always_notify: false,
            hook_events: HookEvents::Unset,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawDocument {
    notifications: Option<RawNotifications>,
}

#[derive(Debug, Default, Deserialize)]
struct RawNotifications {
    enabled: Option<bool>,
    popup_notifications: Option<bool>,
    always_notify: Option<bool>,
    hook_events: Option<RawHookEvents>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawHookEvents {
    Keyword(String),
    List(Vec<String>),
}

impl Config {
    /// Parse a settings document, filling every missing field from the defaults.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let doc: RawDocument = serde_json::from_str(content)?;
        Ok(Self::default().merge(doc.notifications.unwrap_or_default()))
    }

    fn merge(self, raw: RawNotifications) -> Self {
        Self {
            enabled: raw.enabled.unwrap_or(self.enabled),
            popup_notifications: raw.popup_notifications.unwrap_or(self.popup_notifications),
            always_notify: raw.always_notify.unwrap_or(self.always_notify),
            hook_events: raw
                .hook_events
                .map(HookEvents::from_raw)
                .unwrap_or(self.hook_events),
        }
    }
}

/// Read and parse the settings file, reporting what went wrong.
pub fn try_load(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Config::from_json(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the settings file, falling back to defaults on any failure.
///
/// Failures stay at debug level so a broken file never reaches the user.
pub fn load(path: &Path) -> Config {
    match try_load(path) {
        Ok(config) => {
            debug!("Loaded config from {:?}: {:?}", path, config);
            config
        }
        Err(e) => {
            debug!("{}; using defaults", e);
            Config::default()
        }
    }
}
