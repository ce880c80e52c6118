//! Page Session: the playback session of the page's `<video>` element.

use std::rc::Rc;

use crate::managers::track_controller::PlaybackSession;
use crate::services::page_script::{track_visibility_script, ScriptSink};
use crate::types::playback::TrackUpdate;

/// Session handle created when the page reports loaded media.
pub struct PageSession {
    track_count: usize,
    sink: Rc<dyn ScriptSink>,
}

impl PageSession {
    pub fn new(track_count: usize, sink: Rc<dyn ScriptSink>) -> Self {
        Self { track_count, sink }
    }
}

impl PlaybackSession for PageSession {
    fn set_primary_track_visible(&mut self, visible: bool) -> TrackUpdate {
        if self.track_count == 0 {
            return TrackUpdate::NoTrack;
        }
        self.sink.eval(track_visibility_script(visible));
        TrackUpdate::Applied
    }
}
