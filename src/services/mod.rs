// CuePlayer services
// Services generate and hold subtitle styles, build page scripts, answer protocol requests and load settings.

pub mod media_assets;
pub mod page_script;
pub mod protocol_responder;
pub mod settings_engine;
pub mod style_generator;
pub mod style_registry;
