//! Media Assets: reads the configured video and subtitle files for the page.

use std::fs::{self, File};
use std::io::{Read, Seek, SeekFrom};
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::services::page_script::{SUBTITLES_PATH, VIDEO_PATH};
use crate::types::errors::AssetError;
use crate::types::settings::MediaSettings;

/// Bytes of one asset with the content type it is served as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAsset {
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Resolves request paths to the configured media files.
#[derive(Debug, Clone)]
pub struct MediaAssets {
    media: MediaSettings,
    base_dir: PathBuf,
}

impl MediaAssets {
    /// Relative media paths are resolved against `base_dir`.
    pub fn new(media: MediaSettings, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            media,
            base_dir: base_dir.into(),
        }
    }

    fn resolve_path(&self, configured: &str) -> PathBuf {
        let path = Path::new(configured);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    pub fn video_path(&self) -> PathBuf {
        self.resolve_path(&self.media.video_path)
    }

    pub fn subtitle_path(&self) -> PathBuf {
        self.resolve_path(&self.media.subtitle_path)
    }

    /// Size of the video file in bytes.
    pub fn video_len(&self) -> Result<u64, AssetError> {
        let path = self.video_path();
        fs::metadata(&path)
            .map(|m| m.len())
            .map_err(|e| io_error(&path, e))
    }

    /// Reads only `range` of the video file.
    ///
    /// The range must lie within [`video_len`](Self::video_len); a file that
    /// shrank in between yields a shorter body rather than an error.
    pub fn open_range(&self, range: Range<u64>) -> Result<Vec<u8>, AssetError> {
        let path = self.video_path();
        let mut file = File::open(&path).map_err(|e| io_error(&path, e))?;
        file.seek(SeekFrom::Start(range.start))
            .map_err(|e| io_error(&path, e))?;

        let wanted = range.end.saturating_sub(range.start);
        let mut bytes = Vec::with_capacity(usize::try_from(wanted).unwrap_or(0));
        file.take(wanted)
            .read_to_end(&mut bytes)
            .map_err(|e| io_error(&path, e))?;
        Ok(bytes)
    }

    /// Content type of the video, from its file extension.
    pub fn video_content_type(&self) -> &'static str {
        video_content_type(&self.video_path())
    }

    /// Loads the whole asset behind a request path such as `/media/video`.
    pub fn load(&self, request_path: &str) -> Result<MediaAsset, AssetError> {
        match request_path {
            VIDEO_PATH => {
                let path = self.video_path();
                let bytes = fs::read(&path).map_err(|e| io_error(&path, e))?;
                Ok(MediaAsset {
                    content_type: video_content_type(&path),
                    bytes,
                })
            }
            SUBTITLES_PATH => {
                let path = self.subtitle_path();
                let bytes = fs::read(&path).map_err(|e| io_error(&path, e))?;
                if !has_webvtt_header(&bytes) {
                    tracing::warn!(path = %path.display(), "subtitle file has no WEBVTT header");
                }
                Ok(MediaAsset {
                    content_type: "text/vtt; charset=utf-8",
                    bytes,
                })
            }
            other => Err(AssetError::NotFound(other.to_string())),
        }
    }
}

fn io_error(path: &Path, e: std::io::Error) -> AssetError {
    AssetError::Io(format!("{}: {}", path.display(), e))
}

/// Content type from the file extension.
pub fn video_content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("mp4") | Some("m4v") => "video/mp4",
        Some("webm") => "video/webm",
        Some("ogv") | Some("ogg") => "video/ogg",
        Some("mov") => "video/quicktime",
        Some("mkv") => "video/x-matroska",
        _ => "application/octet-stream",
    }
}

/// A WebVTT file starts with `WEBVTT`, optionally after a UTF-8 BOM.
pub fn has_webvtt_header(bytes: &[u8]) -> bool {
    let body = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match body.strip_prefix(b"WEBVTT") {
        Some(rest) => matches!(rest.first(), None | Some(b' ' | b'\t' | b'\n' | b'\r')),
        None => false,
    }
}

/// Parses a single `bytes=` range header against a body of `len` bytes.
///
/// Supports `start-end`, open-ended `start-` and suffix `-count` forms.
/// Multiple ranges and unsatisfiable ranges yield `None`.
pub fn parse_range(header: &str, len: u64) -> Option<Range<u64>> {
    let ranges = header.trim().strip_prefix("bytes=")?;
    if ranges.contains(',') || len == 0 {
        return None;
    }
    let (start, end) = ranges.split_once('-')?;
    let (start, end) = (start.trim(), end.trim());

    if start.is_empty() {
        let count: u64 = end.parse().ok()?;
        if count == 0 {
            return None;
        }
        return Some(len.saturating_sub(count)..len);
    }

    let start: u64 = start.parse().ok()?;
    if start >= len {
        return None;
    }
    let end = if end.is_empty() {
        len - 1
    } else {
        end.parse::<u64>().ok()?.min(len - 1)
    };
    if end < start {
        return None;
    }
    Some(start..end + 1)
}
