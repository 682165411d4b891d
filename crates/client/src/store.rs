use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// Tiny persisted key-value store for device-local preferences.
///
/// The app keeps exactly two entries here: the cached auth token and the
/// selected theme. A missing or corrupted file starts empty instead of
/// erroring; there is nothing here worth failing startup over.
#[derive(Debug)]
pub struct PrefStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl PrefStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<StoreFile>(&bytes) {
                Ok(file) => file.entries,
                Err(err) => {
                    log::warn!("Pref store corrupted {}: {err}", path.display());
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        Self { path, entries }
    }

    /// Platform data directory, `folio/prefs.json`.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
            .join("prefs.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.get(AUTH_TOKEN_KEY)
    }

    pub fn set_auth_token(&mut self, token: impl Into<String>) {
        self.set(AUTH_TOKEN_KEY, token);
    }

    pub fn clear_auth_token(&mut self) {
        self.remove(AUTH_TOKEN_KEY);
    }

    pub fn theme(&self) -> Option<&str> {
        self.get(THEME_KEY)
    }

    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.set(THEME_KEY, theme);
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create pref dir {}", parent.display()))?;
        }
        let file = StoreFile {
            entries: self.entries.clone(),
        };
        let bytes = serde_json::to_vec_pretty(&file)?;
        std::fs::write(&self.path, bytes)
            .with_context(|| format!("Cannot write {}", self.path.display()))?;
        Ok(())
    }
}
