//! CuePlayer: a video playback screen with toggleable, user-styled subtitles.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod ipc_handler;
pub mod managers;
pub mod platform;
pub mod screen;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
