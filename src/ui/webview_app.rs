//! WebView-based player window using `wry` + `tao`.
//!
//! Architecture:
//! - The player page and its media are served via the `cueplayer://` custom
//!   protocol; media URLs in the page are relative so the same page works on
//!   every platform's protocol mapping.
//! - IPC from JS → Rust via `window.ipc.postMessage()`, dispatched by
//!   [`IpcHandler`] against the shared [`VideoScreen`].
//! - Rust → JS goes through an event-loop proxy: every script is queued as a
//!   user event and evaluated on the main thread.

use std::borrow::Cow;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::WindowBuilder;
use wry::http::{header, Request, Response};
use wry::WebViewBuilder;

use crate::ipc_handler::IpcHandler;
use crate::screen::VideoScreen;
use crate::services::media_assets::MediaAssets;
use crate::services::page_script::{self, ScriptSink, PAGE_URL, SCHEME};
use crate::services::protocol_responder;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::settings::PlayerSettings;

#[derive(Debug)]
enum UserEvent {
    EvalScript(String),
}

/// Queues scripts onto the event loop.
struct ProxySink(EventLoopProxy<UserEvent>);

impl ScriptSink for ProxySink {
    fn eval(&self, script: String) {
        if self.0.send_event(UserEvent::EvalScript(script)).is_err() {
            tracing::warn!("event loop closed, dropping script");
        }
    }
}

type Body = Cow<'static, [u8]>;

/// Copies a protocol response into an HTTP response.
fn serve(page: &str, assets: &MediaAssets, request: &Request<Vec<u8>>) -> Response<Body> {
    let range = request
        .headers()
        .get(header::RANGE)
        .and_then(|v| v.to_str().ok());
    let answer = protocol_responder::respond(page, assets, request.uri().path(), range);

    let mut builder = Response::builder().status(answer.status);
    for (name, value) in &answer.headers {
        builder = builder.header(*name, value.as_str());
    }
    builder.body(Cow::Owned(answer.body)).unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to build response");
        Response::new(Cow::Borrowed(&[][..]))
    })
}

/// Loads settings, writing a default config file on first run.
fn load_settings() -> PlayerSettings {
    let engine = SettingsEngine::new(None);
    engine.load_or_init().unwrap_or_else(|e| {
        tracing::warn!(error = %e, path = %engine.config_path().display(), "using default settings");
        PlayerSettings::default()
    })
}

// ─── Main entry point ───

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings();
    let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let assets = MediaAssets::new(settings.media.clone(), base_dir);
    tracing::info!(
        video = %assets.video_path().display(),
        subtitles = %assets.subtitle_path().display(),
        "starting player"
    );

    let screen = Rc::new(RefCell::new(VideoScreen::new()));
    let page = page_script::player_page(&settings.media, &screen.borrow().selection());

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let sink: Rc<dyn ScriptSink> = Rc::new(ProxySink(event_loop.create_proxy()));
    let handler = IpcHandler::new(sink);

    let window = WindowBuilder::new()
        .with_title(settings.window.title.as_str())
        .with_inner_size(tao::dpi::LogicalSize::new(
            f64::from(settings.window.width),
            f64::from(settings.window.height),
        ))
        .build(&event_loop)?;

    let ipc_screen = screen.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol(SCHEME.into(), move |_wv_id, request| {
            serve(&page, &assets, &request)
        })
        .with_url(PAGE_URL)
        .with_ipc_handler(move |msg: Request<String>| {
            let body = msg.body().as_str();
            tracing::debug!(body = %body.chars().take(200).collect::<String>(), "ipc");
            let Ok(mut screen) = ipc_screen.try_borrow_mut() else {
                tracing::warn!("screen busy, dropping ipc message");
                return;
            };
            if let Err(e) = handler.handle(&mut screen, body) {
                tracing::warn!(error = %e, "rejected ipc message");
            }
        })
        .with_devtools(settings.window.devtools);

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window
            .default_vbox()
            .ok_or("window has no GTK container")?;
        builder.build_gtk(vbox)?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window)?;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                screen.borrow_mut().unmount();
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::EvalScript(js)) => {
                if let Err(e) = webview.evaluate_script(&js) {
                    tracing::warn!(error = %e, "script evaluation failed");
                }
            }

            _ => {}
        }
    });
}
