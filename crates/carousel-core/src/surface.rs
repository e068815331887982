#![forbid(unsafe_code)]

//! Rendering adapter for the carousel.
//!
//! [`Surface`] is the only way the controller touches the page. The web
//! frontend implements it over the DOM; [`RecordingSurface`] captures every
//! write so the state machine can run headless.

use crate::titles::TitleCard;

/// Visual side effects the carousel needs from its host.
///
/// Implementations treat missing elements as no-ops.
pub trait Surface {
    /// Current viewport width in CSS pixels.
    fn viewport_width(&self) -> u32;

    /// Remove the active marking from every card and indicator, then mark
    /// the pair at `index`.
    fn mark_active(&mut self, index: usize);

    /// Smoothly scroll the cards strip so the card at `index` is centred.
    fn scroll_to_card(&mut self, index: usize);

    /// Write the fill percentage (0–100) onto the indicator at `index`.
    fn set_fill(&mut self, index: usize, percent: f64);

    fn set_video_visible(&mut self, visible: bool);

    /// Rewind the background video to zero and start playback.
    ///
    /// Playback is fire-and-forget; failures are logged by the adapter.
    fn restart_video(&mut self);

    /// Remove the active marking from every background image.
    fn clear_background_images(&mut self);

    /// Mark the background image tagged with `index` as active.
    fn activate_background_image(&mut self, index: usize);

    /// Swap the hero headline, subtitle, and progress bar offset.
    fn apply_title(&mut self, card: &TitleCard);
}

/// One captured surface write.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    MarkActive(usize),
    ScrollToCard(usize),
    SetFill { index: usize, percent: f64 },
    SetVideoVisible(bool),
    RestartVideo,
    ClearBackgroundImages,
    ActivateBackgroundImage(usize),
    ApplyTitle(TitleCard),
}

/// In-memory [`Surface`] that records writes and tracks resulting state.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    ops: Vec<SurfaceOp>,
    active: Option<usize>,
    fills: Vec<f64>,
    video_visible: bool,
    video_restarts: u32,
    active_image: Option<usize>,
    image_count: usize,
    title: Option<TitleCard>,
    has_title: bool,
}

impl RecordingSurface {
    /// Surface for `slides` slides, with one background image per slide
    /// except the first (slide 0 uses the video).
    #[must_use]
    pub fn new(slides: usize, width: u32) -> Self {
        Self {
            width,
            ops: Vec::new(),
            active: None,
            fills: vec![0.0; slides],
            video_visible: false,
            video_restarts: 0,
            active_image: None,
            image_count: slides,
            title: None,
            has_title: true,
        }
    }

    /// Simulate a page without the hero headline element.
    #[must_use]
    pub fn without_title(mut self) -> Self {
        self.has_title = false;
        self
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Take captured writes, leaving the log empty.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    #[must_use]
    pub const fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn fill(&self, index: usize) -> Option<f64> {
        self.fills.get(index).copied()
    }

    #[must_use]
    pub const fn video_visible(&self) -> bool {
        self.video_visible
    }

    #[must_use]
    pub const fn video_restarts(&self) -> u32 {
        self.video_restarts
    }

    #[must_use]
    pub const fn active_image(&self) -> Option<usize> {
        self.active_image
    }

    #[must_use]
    pub const fn title(&self) -> Option<&TitleCard> {
        self.title.as_ref()
    }
}

impl Surface for RecordingSurface {
    fn viewport_width(&self) -> u32 {
        self.width
    }

    fn mark_active(&mut self, index: usize) {
        self.ops.push(SurfaceOp::MarkActive(index));
        self.active = (index < self.fills.len()).then_some(index);
    }

    fn scroll_to_card(&mut self, index: usize) {
        self.ops.push(SurfaceOp::ScrollToCard(index));
    }

    fn set_fill(&mut self, index: usize, percent: f64) {
        self.ops.push(SurfaceOp::SetFill { index, percent });
        if let Some(fill) = self.fills.get_mut(index) {
            *fill = percent;
        }
    }

    fn set_video_visible(&mut self, visible: bool) {
        self.ops.push(SurfaceOp::SetVideoVisible(visible));
        self.video_visible = visible;
    }

    fn restart_video(&mut self) {
        self.ops.push(SurfaceOp::RestartVideo);
        self.video_restarts += 1;
    }

    fn clear_background_images(&mut self) {
        self.ops.push(SurfaceOp::ClearBackgroundImages);
        self.active_image = None;
    }

    fn activate_background_image(&mut self, index: usize) {
        self.ops.push(SurfaceOp::ActivateBackgroundImage(index));
        if (1..self.image_count).contains(&index) {
            self.active_image = Some(index);
        }
    }

    fn apply_title(&mut self, card: &TitleCard) {
        if !self.has_title {
            return;
        }
        self.ops.push(SurfaceOp::ApplyTitle(*card));
        self.title = Some(*card);
    }
}
