//! CuePlayer UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The player page is HTML/CSS/JS inside the WebView; all state lives in
//! Rust and the two sides talk over wry IPC.

pub mod webview_app;
