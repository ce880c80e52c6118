//! IPC message handler for the player page.
//!
//! Kept apart from the WebView host so it can be unit-tested without a window.
//! The page posts one JSON object per event, e.g. `{"cmd":"select",
//! "field":"font_size","value":"1"}`; `handle` applies it to the screen and
//! sends the resulting scripts through the sink.

use std::rc::Rc;

use serde_json::Value;

use crate::managers::page_session::PageSession;
use crate::screen::VideoScreen;
use crate::services::page_script::{self, ScriptSink};
use crate::types::errors::IpcError;
use crate::types::style::SelectionChange;

pub struct IpcHandler {
    sink: Rc<dyn ScriptSink>,
}

impl IpcHandler {
    pub fn new(sink: Rc<dyn ScriptSink>) -> Self {
        Self { sink }
    }

    /// Dispatches one page message.
    ///
    /// Rejected messages leave the screen untouched and send nothing.
    pub fn handle(&self, screen: &mut VideoScreen, message: &str) -> Result<(), IpcError> {
        let msg: Value =
            serde_json::from_str(message).map_err(|e| IpcError::Malformed(e.to_string()))?;
        let cmd = msg
            .get("cmd")
            .and_then(|v| v.as_str())
            .ok_or_else(|| IpcError::Malformed("missing cmd".to_string()))?;

        match cmd {
            "ui_ready" => {
                screen.mount();
                self.sync(screen);
            }

            "session_ready" => {
                let tracks = track_count(&msg)?;
                let session = PageSession::new(tracks, self.sink.clone());
                screen.attach_session(Box::new(session));
            }

            "session_lost" => {
                screen.detach_session();
            }

            "toggle_subtitles" => {
                screen.toggle_subtitles();
                self.render(screen);
            }

            "toggle_options" => {
                screen.toggle_options_panel();
                self.render(screen);
            }

            "select" => {
                let field = string_field(&msg, "field")?;
                let value = string_field(&msg, "value")?;
                let change = SelectionChange::parse(field, value)?;
                let effects = screen.select(change);
                for script in page_script::effect_scripts(&effects) {
                    self.sink.eval(script);
                }
                self.render(screen);
            }

            other => return Err(IpcError::UnknownCommand(other.to_string())),
        }
        Ok(())
    }

    /// Re-sends the whole style scope and view, for a freshly loaded page.
    fn sync(&self, screen: &VideoScreen) {
        if let Some(registry) = screen.registry() {
            for rule in registry.rules() {
                self.sink
                    .eval(page_script::insert_rule_script(&rule.id, &rule.css));
            }
            if let Some(active) = registry.active() {
                self.sink.eval(page_script::apply_class_script(active));
            }
        }
        self.render(screen);
    }

    fn render(&self, screen: &VideoScreen) {
        self.sink.eval(page_script::render_script(&screen.view()));
    }
}

fn string_field<'a>(msg: &'a Value, name: &str) -> Result<&'a str, IpcError> {
    msg.get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| IpcError::MissingField(name.to_string()))
}

/// `tracks` must be a non-negative integer that fits in `usize`.
fn track_count(msg: &Value) -> Result<usize, IpcError> {
    let value = msg
        .get("tracks")
        .ok_or_else(|| IpcError::MissingField("tracks".to_string()))?;
    value
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| IpcError::InvalidField {
            field: "tracks".to_string(),
            value: value.to_string(),
        })
}
