//! Track Controller: subtitle visibility and the primary text track of the playback session.

use crate::types::playback::{SubtitleVisibility, TrackUpdate};

/// Capability exposed by the playback widget.
///
/// The controller never sees the session's track list; it can only ask for
/// the primary (first) text track to be shown or hidden.
pub trait PlaybackSession {
    fn set_primary_track_visible(&mut self, visible: bool) -> TrackUpdate;
}

/// Trait defining the track controller interface.
pub trait TrackControllerTrait {
    fn toggle_subtitles(&mut self) -> SubtitleVisibility;
    fn visibility(&self) -> SubtitleVisibility;
    fn attach_session(&mut self, session: Box<dyn PlaybackSession>) -> TrackUpdate;
    fn detach_session(&mut self) -> bool;
    fn has_session(&self) -> bool;
}

/// Owns the visibility flag and a non-owning handle to the live session.
pub struct TrackController {
    visibility: SubtitleVisibility,
    session: Option<Box<dyn PlaybackSession>>,
}

impl Default for TrackController {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackController {
    /// Creates a controller with subtitles showing and no session.
    pub fn new() -> Self {
        Self {
            visibility: SubtitleVisibility::Showing,
            session: None,
        }
    }

    /// Pushes the current visibility to the session's primary track, if any.
    fn sync_track(&mut self) -> TrackUpdate {
        let visible = self.visibility.is_showing();
        match self.session.as_mut() {
            Some(session) => session.set_primary_track_visible(visible),
            None => TrackUpdate::NoTrack,
        }
    }
}

impl TrackControllerTrait for TrackController {
    /// Flips visibility, then applies it to the primary track when one is available.
    ///
    /// Without a session or track the flag still flips; the new mode is
    /// applied when a session is attached.
    fn toggle_subtitles(&mut self) -> SubtitleVisibility {
        self.visibility = self.visibility.toggled();
        match self.sync_track() {
            TrackUpdate::Applied => {
                tracing::debug!(mode = self.visibility.track_mode().as_str(), "primary track updated")
            }
            TrackUpdate::NoTrack => {
                tracing::debug!(visibility = ?self.visibility, "no text track available, deferring")
            }
        }
        self.visibility
    }

    fn visibility(&self) -> SubtitleVisibility {
        self.visibility
    }

    /// Stores the session handle and brings its primary track in line with the flag.
    fn attach_session(&mut self, session: Box<dyn PlaybackSession>) -> TrackUpdate {
        self.session = Some(session);
        let update = self.sync_track();
        tracing::info!(?update, visibility = ?self.visibility, "playback session attached");
        update
    }

    /// Drops the session handle. Returns `true` if one was attached.
    fn detach_session(&mut self) -> bool {
        let had_session = self.session.take().is_some();
        if had_session {
            tracing::info!("playback session detached");
        }
        had_session
    }

    fn has_session(&self) -> bool {
        self.session.is_some()
    }
}
