//! Settings Engine: the player's `settings.json`.
//!
//! The file names the video and subtitle track to play and the window to open.
//! A missing file means defaults; the first launch writes them out so the
//! user has something to edit. Every loaded or saved file is validated.

use std::fs::{self, File};
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::PlayerSettings;

/// File name inside the platform config directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&self) -> Result<PlayerSettings, SettingsError>;
    fn save(&self, settings: &PlayerSettings) -> Result<(), SettingsError>;
    fn load_or_init(&self) -> Result<PlayerSettings, SettingsError>;
    fn config_path(&self) -> &Path;
}

/// Reads and writes one settings file.
#[derive(Debug, Clone)]
pub struct SettingsEngine {
    config_path: PathBuf,
}

impl SettingsEngine {
    /// Uses `path` when given, otherwise `settings.json` in the platform config directory.
    pub fn new(path: Option<PathBuf>) -> Self {
        let config_path = path.unwrap_or_else(|| platform::get_config_dir().join(SETTINGS_FILE));
        Self { config_path }
    }

    fn io_error(&self, action: &str, e: std::io::Error) -> SettingsError {
        SettingsError::IoError(format!("{} {}: {}", action, self.config_path.display(), e))
    }

    /// Sibling file the new contents are written to before replacing the original.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .config_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| SETTINGS_FILE.into());
        name.push(".tmp");
        self.config_path.with_file_name(name)
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Missing file gives defaults; missing sections fall back to theirs.
    fn load(&self) -> Result<PlayerSettings, SettingsError> {
        let file = match File::open(&self.config_path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.config_path.display(), "no settings file, using defaults");
                return Ok(PlayerSettings::default());
            }
            Err(e) => return Err(self.io_error("cannot open", e)),
        };

        let settings: PlayerSettings =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                SettingsError::SerializationError(format!(
                    "{}: {}",
                    self.config_path.display(),
                    e
                ))
            })?;
        settings.validate()?;

        tracing::info!(path = %self.config_path.display(), "loaded settings");
        Ok(settings)
    }

    /// Refuses invalid settings. The file is replaced in one rename, so a
    /// failed write never leaves a truncated config behind.
    fn save(&self, settings: &PlayerSettings) -> Result<(), SettingsError> {
        settings.validate()?;

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error("cannot create directory for", e))?;
        }

        let json = serde_json::to_vec_pretty(settings)
            .map_err(|e| SettingsError::SerializationError(e.to_string()))?;
        let staging = self.staging_path();
        fs::write(&staging, json).map_err(|e| self.io_error("cannot write", e))?;
        fs::rename(&staging, &self.config_path).map_err(|e| self.io_error("cannot replace", e))?;
        Ok(())
    }

    /// Loads the file, writing defaults first when it does not exist yet.
    fn load_or_init(&self) -> Result<PlayerSettings, SettingsError> {
        if self.config_path.exists() {
            return self.load();
        }
        let defaults = PlayerSettings::default();
        self.save(&defaults)?;
        tracing::info!(path = %self.config_path.display(), "wrote default settings");
        Ok(defaults)
    }

    fn config_path(&self) -> &Path {
        &self.config_path
    }
}
