//! CuePlayer: a video playback screen with toggleable, user-styled subtitles.
//!
//! Entry point: opens the WebView player window.
//! When built without the `gui` feature, runs a console walkthrough of the screen.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cueplayer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(feature = "gui")]
fn main() {
    init_tracing();
    if let Err(e) = cueplayer::ui::webview_app::run() {
        tracing::error!(error = %e, "player failed to start");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    use std::rc::Rc;

    use cueplayer::ipc_handler::IpcHandler;
    use cueplayer::screen::VideoScreen;
    use cueplayer::services::page_script::ScriptSink;

    /// Prints every script instead of sending it to a page.
    struct ConsoleSink;

    impl ScriptSink for ConsoleSink {
        fn eval(&self, script: String) {
            let short: String = script.chars().take(96).collect();
            println!("    -> {}", short);
        }
    }

    init_tracing();

    println!();
    println!("CuePlayer v{} console walkthrough", env!("CARGO_PKG_VERSION"));
    println!();

    let handler = IpcHandler::new(Rc::new(ConsoleSink));
    let mut screen = VideoScreen::new();

    let messages = [
        r#"{"cmd":"ui_ready"}"#,
        r#"{"cmd":"toggle_subtitles"}"#,
        r#"{"cmd":"session_ready","tracks":1}"#,
        r#"{"cmd":"toggle_options"}"#,
        r#"{"cmd":"select","field":"font_size","value":"1"}"#,
        r#"{"cmd":"select","field":"font_family","value":"Noto Serif"}"#,
        r#"{"cmd":"select","field":"font_size","value":"1"}"#,
        r#"{"cmd":"select","field":"font_color","value":"purple"}"#,
        r#"{"cmd":"toggle_subtitles"}"#,
    ];

    for message in messages {
        println!("  <- {}", message);
        if let Err(e) = handler.handle(&mut screen, message) {
            println!("    !! {}", e);
        }
    }

    println!();
    println!("  applied class : {}", screen.applied_class().unwrap_or("-"));
    println!(
        "  rules         : {}",
        screen.registry().map(|r| r.len()).unwrap_or(0)
    );
    println!("  subtitles     : {:?}", screen.subtitle_visibility());
    println!("  options panel : {}", screen.options_visible());

    screen.unmount();
    println!("  unmounted, registry released");
}
