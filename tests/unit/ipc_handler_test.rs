//! Unit tests for the page IPC handler.
//!
//! Every test drives a fresh VideoScreen through JSON messages and inspects
//! the scripts collected by a recording sink.

use std::cell::RefCell;
use std::rc::Rc;

use cueplayer::ipc_handler::IpcHandler;
use cueplayer::screen::VideoScreen;
use cueplayer::services::page_script::ScriptSink;
use cueplayer::types::errors::{IpcError, StyleError};
use cueplayer::types::playback::SubtitleVisibility;
use cueplayer::types::style::FontSize;

#[derive(Default)]
struct CollectingSink(RefCell<Vec<String>>);

impl ScriptSink for CollectingSink {
    fn eval(&self, script: String) {
        self.0.borrow_mut().push(script);
    }
}

impl CollectingSink {
    fn take(&self) -> Vec<String> {
        self.0.borrow_mut().drain(..).collect()
    }
}

fn setup() -> (IpcHandler, Rc<CollectingSink>, VideoScreen) {
    let sink = Rc::new(CollectingSink::default());
    let handler = IpcHandler::new(sink.clone());
    (handler, sink, VideoScreen::new())
}

#[test]
fn test_ui_ready_mounts_and_syncs() {
    let (handler, sink, mut screen) = setup();
    handler.handle(&mut screen, r#"{"cmd":"ui_ready"}"#).unwrap();

    assert!(screen.is_mounted());
    let scripts = sink.take();
    assert_eq!(scripts.len(), 3);
    assert!(scripts[0].starts_with("if(window.__cp_insertRule)__cp_insertRule(\"st-Poppins-3-white-black\""));
    assert_eq!(
        scripts[1],
        "if(window.__cp_applyClass)__cp_applyClass(\"st-Poppins-3-white-black\")"
    );
    assert!(scripts[2].starts_with("if(window.__cp_render)__cp_render({"));
}

#[test]
fn test_ui_ready_after_reload_resends_all_rules() {
    let (handler, sink, mut screen) = setup();
    handler.handle(&mut screen, r#"{"cmd":"ui_ready"}"#).unwrap();
    handler
        .handle(&mut screen, r#"{"cmd":"select","field":"font_size","value":"1"}"#)
        .unwrap();
    sink.take();

    handler.handle(&mut screen, r#"{"cmd":"ui_ready"}"#).unwrap();
    let scripts = sink.take();
    let inserts = scripts.iter().filter(|s| s.contains("__cp_insertRule(")).count();
    assert_eq!(inserts, 2);
    assert!(scripts
        .iter()
        .any(|s| s.ends_with("__cp_applyClass(\"st-Poppins-1-white-black\")")));
}

#[test]
fn test_select_inserts_applies_and_renders() {
    let (handler, sink, mut screen) = setup();
    handler.handle(&mut screen, r#"{"cmd":"ui_ready"}"#).unwrap();
    sink.take();

    handler
        .handle(&mut screen, r#"{"cmd":"select","field":"font_size","value":"1"}"#)
        .unwrap();
    assert_eq!(screen.selection().font_size, FontSize::Half);
    let scripts = sink.take();
    assert_eq!(scripts.len(), 3);
    assert!(scripts[0].contains("st-Poppins-1-white-black"));
    assert!(scripts[0].contains("font-size: 50%;"));
    assert!(scripts[1].ends_with("__cp_applyClass(\"st-Poppins-1-white-black\")"));
    assert!(scripts[2].contains("\"applied_class\":\"st-Poppins-1-white-black\""));
}

#[test]
fn test_toggle_subtitles_without_session_only_renders() {
    let (handler, sink, mut screen) = setup();
    handler.handle(&mut screen, r#"{"cmd":"ui_ready"}"#).unwrap();
    sink.take();

    handler
        .handle(&mut screen, r#"{"cmd":"toggle_subtitles"}"#)
        .unwrap();
    assert_eq!(screen.subtitle_visibility(), SubtitleVisibility::Hidden);
    let scripts = sink.take();
    assert_eq!(scripts.len(), 1);
    assert!(scripts[0].contains("\"subtitle_button_label\":\"Show Subtitles\""));
}

#[test]
fn test_session_ready_applies_deferred_toggle() {
    let (handler, sink, mut screen) = setup();
    handler
        .handle(&mut screen, r#"{"cmd":"toggle_subtitles"}"#)
        .unwrap();
    sink.take();

    handler
        .handle(&mut screen, r#"{"cmd":"session_ready","tracks":1}"#)
        .unwrap();
    assert!(screen.has_session());
    assert_eq!(
        sink.take(),
        vec!["if(window.__cp_setPrimaryTrackVisible)__cp_setPrimaryTrackVisible(false)".to_string()]
    );
}

#[test]
fn test_toggle_with_track_sends_track_script() {
    let (handler, sink, mut screen) = setup();
    handler.handle(&mut screen, r#"{"cmd":"ui_ready"}"#).unwrap();
    handler
        .handle(&mut screen, r#"{"cmd":"session_ready","tracks":1}"#)
        .unwrap();
    sink.take();

    handler
        .handle(&mut screen, r#"{"cmd":"toggle_subtitles"}"#)
        .unwrap();
    let scripts = sink.take();
    assert_eq!(
        scripts[0],
        "if(window.__cp_setPrimaryTrackVisible)__cp_setPrimaryTrackVisible(false)"
    );
}

#[test]
fn test_session_lost_detaches() {
    let (handler, _sink, mut screen) = setup();
    handler
        .handle(&mut screen, r#"{"cmd":"session_ready","tracks":0}"#)
        .unwrap();
    assert!(screen.has_session());
    handler.handle(&mut screen, r#"{"cmd":"session_lost"}"#).unwrap();
    assert!(!screen.has_session());
}

#[test]
fn test_toggle_options_renders_panel_state() {
    let (handler, sink, mut screen) = setup();
    handler.handle(&mut screen, r#"{"cmd":"toggle_options"}"#).unwrap();
    assert!(screen.options_visible());
    assert!(sink.take()[0].contains("\"options_visible\":true"));
}

#[test]
fn test_rejected_messages_change_nothing() {
    let (handler, sink, mut screen) = setup();
    handler.handle(&mut screen, r#"{"cmd":"ui_ready"}"#).unwrap();
    sink.take();
    let before = screen.view();

    assert!(matches!(
        handler.handle(&mut screen, "not json"),
        Err(IpcError::Malformed(_))
    ));
    assert!(matches!(
        handler.handle(&mut screen, r#"{"command":"ui_ready"}"#),
        Err(IpcError::Malformed(_))
    ));
    assert_eq!(
        handler.handle(&mut screen, r#"{"cmd":"seek","to":10}"#),
        Err(IpcError::UnknownCommand("seek".to_string()))
    );
    assert_eq!(
        handler.handle(&mut screen, r#"{"cmd":"session_ready"}"#),
        Err(IpcError::MissingField("tracks".to_string()))
    );
    assert_eq!(
        handler.handle(&mut screen, r#"{"cmd":"select","field":"font_size"}"#),
        Err(IpcError::MissingField("value".to_string()))
    );
    assert_eq!(
        handler.handle(
            &mut screen,
            r#"{"cmd":"select","field":"font_color","value":"purple"}"#
        ),
        Err(IpcError::Style(StyleError::UnknownOption {
            field: "font_color".to_string(),
            value: "purple".to_string(),
        }))
    );

    assert_eq!(screen.view(), before);
    assert!(!screen.has_session());
    assert!(sink.take().is_empty());
}

#[test]
fn test_session_ready_rejects_invalid_track_counts() {
    let (handler, sink, mut screen) = setup();

    for (message, value) in [
        (r#"{"cmd":"session_ready","tracks":-1}"#, "-1"),
        (r#"{"cmd":"session_ready","tracks":1.5}"#, "1.5"),
        (r#"{"cmd":"session_ready","tracks":"2"}"#, "\"2\""),
    ] {
        assert_eq!(
            handler.handle(&mut screen, message),
            Err(IpcError::InvalidField {
                field: "tracks".to_string(),
                value: value.to_string(),
            })
        );
    }

    assert!(!screen.has_session());
    assert!(sink.take().is_empty());
}
