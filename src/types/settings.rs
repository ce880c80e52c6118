use serde::{Deserialize, Serialize};

use super::errors::SettingsError;

/// Top-level player configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PlayerSettings {
    #[serde(default)]
    pub media: MediaSettings,
    #[serde(default)]
    pub window: WindowSettings,
}

/// Where the video and its subtitle track come from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaSettings {
    pub video_path: String,
    pub subtitle_path: String,
    pub subtitle_label: String,
    pub subtitle_language: String,
}

impl Default for MediaSettings {
    fn default() -> Self {
        Self {
            video_path: "assets/trailer.mp4".to_string(),
            subtitle_path: "assets/subtitles.vtt".to_string(),
            subtitle_label: "English".to_string(),
            subtitle_language: "en".to_string(),
        }
    }
}

/// Native window options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub devtools: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "CuePlayer".to_string(),
            width: 1280,
            height: 800,
            devtools: false,
        }
    }
}

impl PlayerSettings {
    /// Checks the values the player cannot start without.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let required = [
            ("media.video_path", &self.media.video_path),
            ("media.subtitle_path", &self.media.subtitle_path),
            ("media.subtitle_language", &self.media.subtitle_language),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(SettingsError::Invalid {
                    field,
                    reason: "must not be empty".to_string(),
                });
            }
        }

        let dimensions = [
            ("window.width", self.window.width),
            ("window.height", self.window.height),
        ];
        for (field, value) in dimensions {
            if value == 0 {
                return Err(SettingsError::Invalid {
                    field,
                    reason: "must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }
}
