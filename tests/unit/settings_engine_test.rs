//! Unit tests for the settings file: defaults, first-run init, persistence
//! and validation.

use std::fs;
use std::path::PathBuf;

use cueplayer::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use cueplayer::types::errors::SettingsError;
use cueplayer::types::settings::PlayerSettings;
use rstest::rstest;
use tempfile::TempDir;

fn settings_path(dir: &TempDir) -> PathBuf {
    dir.path().join("settings.json")
}

fn engine_in(dir: &TempDir) -> SettingsEngine {
    SettingsEngine::new(Some(settings_path(dir)))
}

#[test]
fn test_load_defaults_without_writing() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in(&dir);

    assert_eq!(engine.load().unwrap(), PlayerSettings::default());
    assert!(!settings_path(&dir).exists());
}

#[test]
fn test_load_or_init_writes_defaults_on_first_run() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in(&dir);

    assert_eq!(engine.load_or_init().unwrap(), PlayerSettings::default());
    assert!(settings_path(&dir).exists());
    assert!(!dir.path().join("settings.json.tmp").exists());

    let written: PlayerSettings =
        serde_json::from_str(&fs::read_to_string(settings_path(&dir)).unwrap()).unwrap();
    assert_eq!(written, PlayerSettings::default());
}

#[test]
fn test_load_or_init_keeps_existing_file() {
    let dir = TempDir::new().unwrap();
    let original = r#"{"window":{"title":"Oppenheimer","width":1920,"height":1080}}"#;
    fs::write(settings_path(&dir), original).unwrap();

    let settings = engine_in(&dir).load_or_init().unwrap();
    assert_eq!(settings.window.title, "Oppenheimer");
    assert_eq!(fs::read_to_string(settings_path(&dir)).unwrap(), original);
}

#[test]
fn test_save_then_load_in_nested_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("settings.json");
    let engine = SettingsEngine::new(Some(path.clone()));

    let mut settings = PlayerSettings::default();
    settings.media.video_path = "/srv/media/oppenheimer.mp4".to_string();
    settings.media.subtitle_language = "de".to_string();
    settings.window.devtools = true;

    engine.save(&settings).unwrap();
    assert!(path.exists());
    assert_eq!(SettingsEngine::new(Some(path)).load().unwrap(), settings);
}

#[test]
fn test_load_malformed_json_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    fs::write(settings_path(&dir), "{ invalid json }").unwrap();

    let err = engine_in(&dir).load().unwrap_err();
    assert!(matches!(err, SettingsError::SerializationError(_)));
    assert!(err.to_string().contains("settings.json"));
}

#[rstest]
#[case(r#"{"window":{"title":"x","width":0,"height":600}}"#, "window.width")]
#[case(r#"{"window":{"title":"x","width":800,"height":0}}"#, "window.height")]
#[case(
    r#"{"media":{"video_path":"  ","subtitle_path":"a.vtt","subtitle_label":"English","subtitle_language":"en"}}"#,
    "media.video_path"
)]
#[case(
    r#"{"media":{"video_path":"a.mp4","subtitle_path":"","subtitle_label":"English","subtitle_language":"en"}}"#,
    "media.subtitle_path"
)]
#[case(
    r#"{"media":{"video_path":"a.mp4","subtitle_path":"a.vtt","subtitle_label":"English","subtitle_language":""}}"#,
    "media.subtitle_language"
)]
fn test_load_rejects_unusable_values(#[case] json: &str, #[case] expected_field: &str) {
    let dir = TempDir::new().unwrap();
    fs::write(settings_path(&dir), json).unwrap();

    match engine_in(&dir).load() {
        Err(SettingsError::Invalid { field, .. }) => assert_eq!(field, expected_field),
        other => panic!("expected Invalid for {}, got {:?}", expected_field, other),
    }
}

#[test]
fn test_save_refuses_invalid_settings() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in(&dir);
    let mut settings = PlayerSettings::default();
    settings.window.height = 0;

    assert!(matches!(
        engine.save(&settings),
        Err(SettingsError::Invalid { field: "window.height", .. })
    ));
    assert!(!settings_path(&dir).exists());
}

#[test]
fn test_default_settings_values() {
    let defaults = PlayerSettings::default();
    assert!(defaults.validate().is_ok());
    assert_eq!(defaults.media.video_path, "assets/trailer.mp4");
    assert_eq!(defaults.media.subtitle_path, "assets/subtitles.vtt");
    assert_eq!(defaults.media.subtitle_label, "English");
    assert_eq!(defaults.media.subtitle_language, "en");
    assert_eq!(defaults.window.title, "CuePlayer");
    assert_eq!((defaults.window.width, defaults.window.height), (1280, 800));
    assert!(!defaults.window.devtools);
}
