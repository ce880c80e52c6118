/// Whether the primary subtitle track should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubtitleVisibility {
    #[default]
    Showing,
    Hidden,
}

impl SubtitleVisibility {
    pub fn toggled(self) -> Self {
        match self {
            SubtitleVisibility::Showing => SubtitleVisibility::Hidden,
            SubtitleVisibility::Hidden => SubtitleVisibility::Showing,
        }
    }

    pub fn is_showing(self) -> bool {
        self == SubtitleVisibility::Showing
    }

    pub fn track_mode(self) -> TrackMode {
        match self {
            SubtitleVisibility::Showing => TrackMode::Showing,
            SubtitleVisibility::Hidden => TrackMode::Hidden,
        }
    }
}

/// Text track mode as understood by the media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackMode {
    Showing,
    Hidden,
}

impl TrackMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TrackMode::Showing => "showing",
            TrackMode::Hidden => "hidden",
        }
    }
}

/// Outcome of asking a playback session to change its primary track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackUpdate {
    /// The primary track's mode was set.
    Applied,
    /// The session has no text track yet; nothing changed.
    NoTrack,
}
