// CuePlayer shared type definitions
// Each submodule defines types used across the player.

pub mod errors;
pub mod playback;
pub mod settings;
pub mod style;
