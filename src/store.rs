//! JSON-file persistence for the settings profile.
//!
//! The store is a thin wrapper over one pretty-printed JSON file. Handlers
//! share it behind the app state's mutex; the store itself never locks.

use std::fs;
use std::path::PathBuf;

use crate::error::StoreError;
use crate::mock;
use crate::models::SettingsProfile;

pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Remember the backing path. Does not touch the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SettingsStore { path: path.into() }
    }

    /// Create the parent directory and seed the default profile if the file
    /// is absent. The composition root calls this once at startup.
    pub fn ensure_seeded(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }
        log::info!("seeding settings store at {}", self.path.display());
        self.save(&mock::default_settings())
    }

    /// Read and parse the stored profile. A missing file is the
    /// [`StoreError::NotFound`] case the settings route maps to 404.
    pub fn load(&self) -> Result<SettingsProfile, StoreError> {
        if !self.path.exists() {
            return Err(StoreError::NotFound);
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Persist the profile as pretty-printed JSON, creating the parent
    /// directory if needed.
    pub fn save(&self, profile: &SettingsProfile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(profile)?)?;
        Ok(())
    }
}
