//! Video Screen: the single playback screen with user-styled subtitles.
//!
//! Owns the style selection, the style registry (while mounted), the track
//! controller and the options panel flag. Style operations return the
//! [`StyleEffect`]s the page must perform; track changes go straight through
//! the attached [`PlaybackSession`].

use serde::Serialize;

use crate::managers::track_controller::{PlaybackSession, TrackController, TrackControllerTrait};
use crate::services::style_generator::{StyleGenerator, StyleGeneratorTrait};
use crate::services::style_registry::StyleRegistry;
use crate::types::playback::{SubtitleVisibility, TrackUpdate};
use crate::types::style::{ActiveStyleRule, SelectionChange, StyleSelection};

/// A change the page must make to its style scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleEffect {
    /// Add a newly registered rule to the page.
    Insert(ActiveStyleRule),
    /// Apply the identifier to the subtitle container.
    Apply(String),
    /// Remove every rule added so far.
    Clear,
}

/// Snapshot of everything the page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenView {
    pub subtitles_visible: bool,
    pub options_visible: bool,
    pub subtitle_button_label: &'static str,
    pub options_button_label: &'static str,
    pub selection: StyleSelection,
    pub applied_class: Option<String>,
}

pub struct VideoScreen {
    selection: StyleSelection,
    generator: StyleGenerator,
    registry: Option<StyleRegistry>,
    controller: TrackController,
    options_visible: bool,
}

impl Default for VideoScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoScreen {
    /// Unmounted screen with the default selection.
    pub fn new() -> Self {
        Self::with_selection(StyleSelection::default())
    }

    pub fn with_selection(selection: StyleSelection) -> Self {
        Self {
            selection,
            generator: StyleGenerator::new(),
            registry: None,
            controller: TrackController::new(),
            options_visible: false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.registry.is_some()
    }

    /// Creates the style registry and activates the rule for the current selection.
    ///
    /// Mounting an already mounted screen changes nothing.
    pub fn mount(&mut self) -> Vec<StyleEffect> {
        if self.registry.is_some() {
            return Vec::new();
        }
        tracing::info!(selection = ?self.selection, "mounting video screen");
        self.registry = Some(StyleRegistry::new());
        self.activate_current()
    }

    /// Tears the registry down and releases the playback session.
    pub fn unmount(&mut self) -> Vec<StyleEffect> {
        self.controller.detach_session();
        match self.registry.take() {
            Some(mut registry) => {
                let released = registry.teardown();
                tracing::info!(released, "video screen unmounted");
                vec![StyleEffect::Clear]
            }
            None => Vec::new(),
        }
    }

    /// Applies one selection event.
    ///
    /// The rule is regenerated and reactivated only when the field actually
    /// changed and the screen is mounted.
    pub fn select(&mut self, change: SelectionChange) -> Vec<StyleEffect> {
        let next = self.selection.with(change);
        if next == self.selection {
            return Vec::new();
        }
        self.selection = next;
        tracing::debug!(?change, "style selection changed");
        self.activate_current()
    }

    /// Generates the rule for the current selection, registers it and makes it active.
    fn activate_current(&mut self) -> Vec<StyleEffect> {
        let Some(registry) = self.registry.as_mut() else {
            return Vec::new();
        };
        let rule = self.generator.generate(&self.selection);
        let id = rule.id.clone();

        let mut effects = Vec::with_capacity(2);
        if registry.insert(rule.clone()) {
            effects.push(StyleEffect::Insert(rule));
        }
        if registry.activate(&id) {
            effects.push(StyleEffect::Apply(id));
        }
        effects
    }

    pub fn toggle_subtitles(&mut self) -> SubtitleVisibility {
        self.controller.toggle_subtitles()
    }

    /// Flips the styling controls' visibility. Purely presentational.
    pub fn toggle_options_panel(&mut self) -> bool {
        self.options_visible = !self.options_visible;
        self.options_visible
    }

    pub fn attach_session(&mut self, session: Box<dyn PlaybackSession>) -> TrackUpdate {
        self.controller.attach_session(session)
    }

    pub fn detach_session(&mut self) -> bool {
        self.controller.detach_session()
    }

    pub fn has_session(&self) -> bool {
        self.controller.has_session()
    }

    pub fn selection(&self) -> StyleSelection {
        self.selection
    }

    pub fn subtitle_visibility(&self) -> SubtitleVisibility {
        self.controller.visibility()
    }

    pub fn options_visible(&self) -> bool {
        self.options_visible
    }

    pub fn registry(&self) -> Option<&StyleRegistry> {
        self.registry.as_ref()
    }

    /// Identifier currently applied to the subtitle container.
    pub fn applied_class(&self) -> Option<&str> {
        self.registry.as_ref().and_then(|r| r.active())
    }

    pub fn view(&self) -> ScreenView {
        let subtitles_visible = self.subtitle_visibility().is_showing();
        ScreenView {
            subtitles_visible,
            options_visible: self.options_visible,
            subtitle_button_label: if subtitles_visible {
                "Hide Subtitles"
            } else {
                "Show Subtitles"
            },
            options_button_label: if self.options_visible {
                "Hide Subtitle Options"
            } else {
                "View Subtitle Options"
            },
            selection: self.selection,
            applied_class: self.applied_class().map(str::to_string),
        }
    }
}
