#![forbid(unsafe_code)]

//! Background and headline presentation for tablet and narrow viewports.
//!
//! Slide 0 shares the hero video; every other slide has a static image
//! tagged with its index. Desktop layouts keep the video running and never
//! take this path after mount.

use tracing::{debug, warn};

use crate::surface::Surface;
use crate::titles::title_for;
use crate::viewport::Breakpoints;

/// Present the background for `card_index` at the surface's current width.
pub fn present_background<S: Surface + ?Sized>(
    surface: &mut S,
    card_index: usize,
    breakpoints: &Breakpoints,
) {
    let mode = breakpoints.classify(surface.viewport_width());
    if !mode.is_mobile() {
        return;
    }

    surface.clear_background_images();
    present_title(surface, card_index, breakpoints);

    if card_index == 0 {
        debug!(card_index, ?mode, "background: video");
        surface.set_video_visible(true);
        surface.restart_video();
        return;
    }

    debug!(card_index, ?mode, "background: image");
    surface.set_video_visible(false);
    surface.activate_background_image(card_index);
}

/// Swap the hero headline for `card_index`; desktop widths are left alone.
pub fn present_title<S: Surface + ?Sized>(
    surface: &mut S,
    card_index: usize,
    breakpoints: &Breakpoints,
) {
    if !breakpoints.classify(surface.viewport_width()).is_mobile() {
        return;
    }
    surface.apply_title(&title_for(card_index));
}

/// A rejected media playback request, classified by the host's error name
/// (e.g. `NotAllowedError`, `AbortError`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackFailure {
    pub name: String,
}

impl PlaybackFailure {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Log and drop. Playback failures never reach controller state.
    pub fn report(&self) {
        warn!(error = %self.name, "background video playback was interrupted");
    }
}

impl core::fmt::Display for PlaybackFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "video playback interrupted: {}", self.name)
    }
}

impl std::error::Error for PlaybackFailure {}
