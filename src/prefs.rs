//! Persisted editor preferences
//!
//! Loaded once when the store is opened and written back on every change.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("Preferences I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Preferences file is malformed: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub dark_mode: bool,
}

/// File-backed preference record
#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    prefs: Preferences,
}

impl PreferenceStore {
    /// Open the store at `path`; a missing file yields defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PrefsError> {
        let path = path.as_ref().to_path_buf();
        let prefs = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Preferences::default(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No preferences at {}, using defaults", path.display());
                Preferences::default()
            }
            Err(source) => return Err(PrefsError::Io { path, source }),
        };
        Ok(Self { path, prefs })
    }

    pub fn preferences(&self) -> Preferences {
        self.prefs
    }

    pub fn dark_mode(&self) -> bool {
        self.prefs.dark_mode
    }

    pub fn set_dark_mode(&mut self, enabled: bool) -> Result<(), PrefsError> {
        self.prefs.dark_mode = enabled;
        self.save()
    }

    /// Flip dark mode and return the new value
    pub fn toggle_dark_mode(&mut self) -> Result<bool, PrefsError> {
        let enabled = !self.prefs.dark_mode;
        self.set_dark_mode(enabled)?;
        Ok(enabled)
    }

    fn save(&self) -> Result<(), PrefsError> {
        let json = serde_json::to_string_pretty(&self.prefs)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| PrefsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&self.path, json).map_err(|source| PrefsError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
