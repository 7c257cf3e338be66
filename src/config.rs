use std::env;
use std::path::PathBuf;

/// Runtime configuration, read from the environment with fixed defaults.
///
/// There is no configuration file; everything the server needs fits in a
/// handful of variables, each with a default that works out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the server binds, `BANKDASH_ADDR`.
    pub addr: String,
    /// Directory holding the settings JSON file, `BANKDASH_DATA_DIR`.
    pub data_dir: PathBuf,
    /// Directory uploaded avatars are written to and served from,
    /// `BANKDASH_UPLOADS_DIR`.
    pub uploads_dir: PathBuf,
}

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

impl Config {
    pub fn from_env() -> Self {
        Config {
            addr: env::var("BANKDASH_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string()),
            data_dir: env::var("BANKDASH_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("database")),
            uploads_dir: env::var("BANKDASH_UPLOADS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("uploads")),
        }
    }

    /// Path of the JSON file backing the settings store.
    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            addr: DEFAULT_ADDR.to_string(),
            data_dir: PathBuf::from("database"),
            uploads_dir: PathBuf::from("uploads"),
        }
    }
}
