use std::{fmt, str::FromStr};

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        format!("Switch to {} theme", self.toggled())
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Classes for the element that scopes tailwind's `dark:` variants.
pub fn theme_root_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "light bg-background text-foreground",
        Theme::Dark => "dark bg-background text-foreground",
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("couldn't write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Host key/value storage, e.g. the browser's `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: DashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Current theme plus where it is persisted.
///
/// Storage problems never surface to callers: the store drops to
/// session-only mode and keeps working in memory.
#[derive(Debug)]
pub struct ThemeStore<S> {
    theme: Theme,
    storage: Option<S>,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Restores the persisted theme, or follows the system preference if none is stored.
    pub fn load(storage: S, prefers_dark: bool) -> Self {
        let system = if prefers_dark { Theme::Dark } else { Theme::Light };
        match storage.get(THEME_KEY) {
            Ok(Some(value)) => {
                let theme = value.parse::<Theme>().unwrap_or_else(|e| {
                    log::warn!("ignoring stored theme: {e}");
                    system
                });
                Self {
                    theme,
                    storage: Some(storage),
                }
            }
            Ok(None) => Self {
                theme: system,
                storage: Some(storage),
            },
            Err(e) => {
                log::warn!("theme preference won't persist: {e}");
                Self::session_only(system)
            }
        }
    }

    pub fn session_only(theme: Theme) -> Self {
        Self {
            theme,
            storage: None,
        }
    }

    pub fn get(&self) -> Theme {
        self.theme
    }

    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }

    /// Returns true if the theme changed.
    pub fn set(&mut self, theme: Theme) -> bool {
        if self.theme == theme {
            return false;
        }
        self.theme = theme;
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set(THEME_KEY, theme.as_str()) {
                log::warn!("theme preference won't persist: {e}");
                self.storage = None;
            }
        }
        true
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }
}
