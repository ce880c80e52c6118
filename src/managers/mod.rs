// CuePlayer managers
// Managers hold the playback-side state of the screen.

pub mod page_session;
pub mod track_controller;
