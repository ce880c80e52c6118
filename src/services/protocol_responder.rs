//! Protocol Responder: answers `cueplayer://` requests for the page and its media.
//!
//! Responses are plain values so the WebView host only has to copy them into
//! an HTTP response. The video honors a single byte range and reads only the
//! bytes asked for.

use crate::services::media_assets::{parse_range, MediaAssets};
use crate::services::page_script::VIDEO_PATH;
use crate::types::errors::AssetError;

/// Status, headers and body of one protocol response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, String)>,
    pub body: Vec<u8>,
}

impl ProtocolResponse {
    fn new(status: u16, content_type: &str, body: Vec<u8>) -> Self {
        Self {
            status,
            headers: vec![("Content-Type", content_type.to_string())],
            body,
        }
    }

    fn with_header(mut self, name: &'static str, value: String) -> Self {
        self.headers.push((name, value));
        self
    }

    /// First value of the named header, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

fn not_found(path: &str, err: &AssetError) -> ProtocolResponse {
    tracing::warn!(path, error = %err, "asset request failed");
    ProtocolResponse::new(404, "text/plain", err.to_string().into_bytes())
}

/// Answers one request. `range` is the raw `Range` header, if sent.
pub fn respond(
    page: &str,
    assets: &MediaAssets,
    path: &str,
    range: Option<&str>,
) -> ProtocolResponse {
    if path == "/" || path == "/index.html" {
        return ProtocolResponse::new(200, "text/html; charset=utf-8", page.as_bytes().to_vec());
    }

    if path == VIDEO_PATH {
        if let Some(header) = range {
            return respond_range(assets, header);
        }
    }

    match assets.load(path) {
        Ok(asset) => {
            let response = ProtocolResponse::new(200, asset.content_type, asset.bytes);
            if path == VIDEO_PATH {
                response.with_header("Accept-Ranges", "bytes".to_string())
            } else {
                response
            }
        }
        Err(e) => not_found(path, &e),
    }
}

fn respond_range(assets: &MediaAssets, header: &str) -> ProtocolResponse {
    let len = match assets.video_len() {
        Ok(len) => len,
        Err(e) => return not_found(VIDEO_PATH, &e),
    };

    let Some(range) = parse_range(header, len) else {
        tracing::debug!(range = header, len, "unsatisfiable range");
        return ProtocolResponse::new(416, "text/plain", Vec::new())
            .with_header("Content-Range", format!("bytes */{}", len));
    };

    match assets.open_range(range.clone()) {
        Ok(bytes) => ProtocolResponse::new(206, assets.video_content_type(), bytes)
            .with_header("Accept-Ranges", "bytes".to_string())
            .with_header(
                "Content-Range",
                format!("bytes {}-{}/{}", range.start, range.end - 1, len),
            ),
        Err(e) => not_found(VIDEO_PATH, &e),
    }
}
