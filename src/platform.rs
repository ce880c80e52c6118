// CuePlayer platform paths
// Selects the per-OS configuration directory at compile time.

use std::env;
use std::path::PathBuf;

fn env_dir(var: &str) -> Option<PathBuf> {
    env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg_attr(target_os = "windows", allow(dead_code))]
fn home_dir() -> PathBuf {
    env_dir("HOME").unwrap_or_else(|| PathBuf::from("/tmp"))
}

/// Returns the directory `settings.json` lives in.
///
/// - **Linux**: `$XDG_CONFIG_HOME/cueplayer`, else `~/.config/cueplayer`
/// - **macOS**: `~/Library/Application Support/CuePlayer`
/// - **Windows**: `%APPDATA%/CuePlayer`
#[cfg(target_os = "linux")]
pub fn get_config_dir() -> PathBuf {
    env_dir("XDG_CONFIG_HOME")
        .unwrap_or_else(|| home_dir().join(".config"))
        .join("cueplayer")
}

#[cfg(target_os = "macos")]
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("CuePlayer")
}

#[cfg(target_os = "windows")]
pub fn get_config_dir() -> PathBuf {
    env_dir("APPDATA")
        .unwrap_or_else(|| PathBuf::from("C:\\Users\\Default\\AppData\\Roaming"))
        .join("CuePlayer")
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub fn get_config_dir() -> PathBuf {
    home_dir().join(".cueplayer")
}
