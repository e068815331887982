#![forbid(unsafe_code)]

//! Carousel controller.
//!
//! [`Carousel`] owns the active index and the timer table and drives a
//! [`Surface`]. The host feeds it monotonic time and DOM-derived events:
//!
//! 1. [`Carousel::init`] once after the page is ready.
//! 2. [`Carousel::handle_event`] for clicks, keys, hover, and resize.
//! 3. [`Carousel::pump`] whenever the host wakes up; it returns how long the
//!    host may sleep before the next call.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use carousel_core::{Carousel, CarouselConfig, Clock, ManualClock, RecordingSurface};
//!
//! let mut clock = ManualClock::new();
//! let surface = RecordingSurface::new(7, 1920);
//! let mut carousel = Carousel::new(surface, 7, CarouselConfig::default()).unwrap();
//! carousel.init(clock.now_mono());
//!
//! clock.tick_ms(3000);
//! let sleep = carousel.pump(&clock);
//! assert_eq!(carousel.active_index(), 1);
//! assert_eq!(sleep, Some(Duration::from_millis(16)));
//! ```

use core::time::Duration;

use tracing::{debug, trace};

use crate::background::present_background;
use crate::clock::Clock;
use crate::config::{CarouselConfig, KeyboardScope};
use crate::error::CarouselError;
use crate::surface::Surface;
use crate::timers::{TimerSlot, Timers};
use crate::viewport::ViewportMode;

/// Keys that navigate between slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            _ => None,
        }
    }
}

/// Host-observed interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    CardClicked(usize),
    IndicatorClicked(usize),
    Key {
        key: NavKey,
        /// The key was typed into an input, textarea, or editable element.
        in_editable: bool,
    },
    PointerEnter,
    PointerLeave,
    Resized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FillRun {
    index: usize,
    started_at: Duration,
}

pub struct Carousel<S: Surface> {
    surface: S,
    config: CarouselConfig,
    slide_count: usize,
    active: usize,
    timers: Timers,
    fill: Option<FillRun>,
    now: Duration,
    initialized: bool,
}

impl<S: Surface> Carousel<S> {
    /// Create a controller for `slide_count` slides starting on slide 0.
    pub fn new(
        surface: S,
        slide_count: usize,
        config: CarouselConfig,
    ) -> Result<Self, CarouselError> {
        if slide_count == 0 {
            return Err(CarouselError::NoSlides);
        }
        config.validate()?;
        Ok(Self {
            surface,
            config,
            slide_count,
            active: 0,
            timers: Timers::new(),
            fill: None,
            now: Duration::ZERO,
            initialized: false,
        })
    }

    /// Mark the first slide, start autoplay, schedule the first fill, and
    /// put the initial background in place.
    ///
    /// Calling this twice is a no-op.
    pub fn init(&mut self, now: Duration) {
        if self.initialized {
            debug!("carousel already initialized");
            return;
        }
        self.initialized = true;
        self.now = self.now.max(now);

        self.surface.mark_active(self.active);
        self.start_autoplay();
        self.timers
            .arm_once(TimerSlot::FillKickoff, self.now, self.config.fill_kickoff());

        let mode = self.viewport_mode();
        debug!(slides = self.slide_count, ?mode, "carousel initialized");
        if mode.is_mobile() {
            present_background(&mut self.surface, 0, &self.config.breakpoints);
        } else {
            self.surface.set_video_visible(true);
            self.surface.restart_video();
        }
    }

    /// Fire every timer due at or before `now`, in deadline order.
    ///
    /// Timers fire at `now` itself: autoplay advances at most one slide per
    /// wake-up and the fill tick reads the real elapsed time.
    pub fn advance(&mut self, now: Duration) {
        self.now = self.now.max(now);
        while let Some((slot, due)) = self.timers.pop_due(self.now) {
            trace!(?slot, late_by = ?self.now.saturating_sub(due), "timer fired");
            match slot {
                TimerSlot::Autoplay => {
                    debug!(from = self.active, "autoplay tick");
                    self.next_slide();
                }
                TimerSlot::Fill => self.fill_tick(),
                TimerSlot::FillKickoff => self.start_fill_animation(),
            }
        }
    }

    /// Advance to `clock`'s reading and return how long the host may sleep
    /// before pumping again. `None` means no timer is armed.
    pub fn pump(&mut self, clock: &impl Clock) -> Option<Duration> {
        self.advance(clock.now_mono());
        self.time_to_next_deadline()
    }

    /// When the host should call [`advance`](Self::advance) next.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    #[must_use]
    pub fn time_to_next_deadline(&self) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_sub(self.now))
    }

    /// Apply one interaction at time `now`.
    ///
    /// Returns `true` when the event was acted on; hosts use this to decide
    /// whether to suppress the browser default for key events.
    pub fn handle_event(&mut self, event: CarouselEvent, now: Duration) -> bool {
        self.advance(now);
        match event {
            CarouselEvent::CardClicked(index) | CarouselEvent::IndicatorClicked(index) => {
                debug!(index, ?event, "slide selected");
                self.stop_fill_animation();
                self.go_to_slide(index);
                self.restart_autoplay();
                true
            }
            CarouselEvent::Key { key, in_editable } => {
                if in_editable && self.config.keyboard_scope == KeyboardScope::IgnoreEditable {
                    trace!(?key, "arrow key ignored in editable target");
                    return false;
                }
                self.stop_fill_animation();
                match key {
                    NavKey::ArrowLeft => self.previous_slide(),
                    NavKey::ArrowRight => self.next_slide(),
                }
                self.restart_autoplay();
                true
            }
            CarouselEvent::PointerEnter => {
                debug!("hover: pausing");
                self.stop_autoplay();
                self.stop_fill_animation();
                true
            }
            CarouselEvent::PointerLeave => {
                debug!("hover ended: resuming autoplay");
                self.start_autoplay();
                if self.config.resume_fill_on_leave {
                    self.start_fill_animation();
                }
                true
            }
            CarouselEvent::Resized => {
                self.on_resize();
                true
            }
        }
    }

    /// Activate slide `index`. Out-of-range indices are ignored.
    ///
    /// Returns whether the slide was applied.
    pub fn go_to_slide(&mut self, index: usize) -> bool {
        if index >= self.slide_count {
            debug!(index, slides = self.slide_count, "go_to_slide out of range");
            return false;
        }

        self.surface.mark_active(index);
        self.surface.scroll_to_card(index);
        self.active = index;
        self.start_fill_animation();
        present_background(&mut self.surface, index, &self.config.breakpoints);
        true
    }

    pub fn next_slide(&mut self) {
        let next = (self.active + 1) % self.slide_count;
        self.go_to_slide(next);
    }

    pub fn previous_slide(&mut self) {
        let prev = (self.active + self.slide_count - 1) % self.slide_count;
        self.go_to_slide(prev);
    }

    /// Start (or replace) the autoplay timer.
    pub fn start_autoplay(&mut self) {
        self.timers
            .arm_interval(TimerSlot::Autoplay, self.now, self.config.autoplay_period());
    }

    pub fn stop_autoplay(&mut self) {
        self.timers.cancel(TimerSlot::Autoplay);
    }

    pub fn restart_autoplay(&mut self) {
        self.stop_autoplay();
        self.start_autoplay();
    }

    /// Animate the active indicator from 0% over one autoplay period.
    pub fn start_fill_animation(&mut self) {
        self.timers.cancel(TimerSlot::Fill);
        let index = self.active;
        self.surface.set_fill(index, 0.0);
        self.fill = Some(FillRun {
            index,
            started_at: self.now,
        });
        self.timers
            .arm_interval(TimerSlot::Fill, self.now, self.config.fill_frame());
    }

    /// Cancel the fill animation and reset the active indicator to 0%.
    ///
    /// A pending post-mount kickoff is cancelled too.
    pub fn stop_fill_animation(&mut self) {
        self.timers.cancel(TimerSlot::Fill);
        self.timers.cancel(TimerSlot::FillKickoff);
        self.fill = None;
        self.surface.set_fill(self.active, 0.0);
    }

    fn fill_tick(&mut self) {
        let Some(run) = self.fill else {
            self.timers.cancel(TimerSlot::Fill);
            return;
        };
        let progress = self.progress_of(run);
        let percent = progress * 100.0;
        trace!(index = run.index, percent, "fill tick");
        self.surface.set_fill(run.index, percent);

        if progress >= 1.0 {
            self.timers.cancel(TimerSlot::Fill);
            self.fill = None;
            if self.viewport_mode().is_narrow() {
                self.surface.set_fill(run.index, 100.0);
            }
        }
    }

    fn progress_of(&self, run: FillRun) -> f64 {
        let elapsed = self.now.saturating_sub(run.started_at).as_secs_f64();
        let duration = self.config.fill_duration().as_secs_f64();
        (elapsed / duration).min(1.0)
    }

    fn on_resize(&mut self) {
        let mode = self.viewport_mode();
        debug!(?mode, "viewport resized");
        if mode.is_mobile() {
            present_background(&mut self.surface, self.active, &self.config.breakpoints);
        } else {
            self.surface.set_video_visible(true);
            self.surface.clear_background_images();
        }
    }

    /// Layout mode at the surface's current width.
    #[must_use]
    pub fn viewport_mode(&self) -> ViewportMode {
        self.config
            .breakpoints
            .classify(self.surface.viewport_width())
    }

    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.slide_count
    }

    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub const fn config(&self) -> &CarouselConfig {
        &self.config
    }

    #[must_use]
    pub const fn timers(&self) -> &Timers {
        &self.timers
    }

    #[must_use]
    pub fn is_autoplaying(&self) -> bool {
        self.timers.is_armed(TimerSlot::Autoplay)
    }

    #[must_use]
    pub fn is_filling(&self) -> bool {
        self.timers.is_armed(TimerSlot::Fill)
    }

    /// Slide whose indicator the running fill animation writes to.
    #[must_use]
    pub fn fill_index(&self) -> Option<usize> {
        self.fill.map(|run| run.index)
    }

    /// Fill progress (0.0–1.0) of the running animation, at the controller's
    /// current time.
    #[must_use]
    pub fn fill_progress(&self) -> Option<f64> {
        self.fill.map(|run| self.progress_of(run))
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::surface::{RecordingSurface, SurfaceOp};
    use crate::titles::title_for;
    use pretty_assertions::assert_eq;

    const DESKTOP: u32 = 1920;
    const PHONE: u32 = 800;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn carousel(width: u32) -> Carousel<RecordingSurface> {
        Carousel::new(RecordingSurface::new(7, width), 7, CarouselConfig::default()).unwrap()
    }

    /// Coarse timings so fill percentages are round numbers.
    fn coarse(width: u32) -> Carousel<RecordingSurface> {
        let config = CarouselConfig {
            autoplay_period_ms: 1000,
            fill_frame_ms: 100,
            fill_kickoff_ms: 100,
            ..CarouselConfig::default()
        };
        Carousel::new(RecordingSurface::new(7, width), 7, config).unwrap()
    }

    #[test]
    fn rejects_empty_slide_set() {
        let result = Carousel::new(RecordingSurface::new(0, DESKTOP), 0, CarouselConfig::default());
        assert!(matches!(result, Err(CarouselError::NoSlides)));
    }

    #[test]
    fn rejects_invalid_config() {
        let config = CarouselConfig {
            autoplay_period_ms: 0,
            ..CarouselConfig::default()
        };
        let result = Carousel::new(RecordingSurface::new(3, DESKTOP), 3, config);
        assert!(matches!(result, Err(CarouselError::InvalidConfig(_))));
    }

    #[test]
    fn desktop_init_plays_video_and_schedules_timers() {
        let mut c = carousel(DESKTOP);
        c.init(ms(0));
        assert_eq!(
            c.surface().ops(),
            &[
                SurfaceOp::MarkActive(0),
                SurfaceOp::SetVideoVisible(true),
                SurfaceOp::RestartVideo,
            ]
        );
        assert!(c.is_autoplaying());
        assert!(!c.is_filling());
        assert_eq!(c.timers().deadline(TimerSlot::FillKickoff), Some(ms(100)));
        assert_eq!(c.next_deadline(), Some(ms(100)));
    }

    #[test]
    fn mobile_init_applies_title_for_first_slide() {
        let mut c = carousel(PHONE);
        c.init(ms(0));
        assert_eq!(c.surface().title(), Some(&title_for(0)));
        assert!(c.surface().video_visible());
        assert_eq!(c.surface().active_image(), None);
    }

    #[test]
    fn second_init_is_ignored() {
        let mut c = carousel(DESKTOP);
        c.init(ms(0));
        let before = c.surface().ops().len();
        c.init(ms(50));
        assert_eq!(c.surface().ops().len(), before);
    }

    #[test]
    fn kickoff_starts_fill_after_delay() {
        let mut c = carousel(DESKTOP);
        c.init(ms(0));
        c.advance(ms(99));
        assert!(!c.is_filling());
        c.advance(ms(100));
        assert!(c.is_filling());
        assert_eq!(c.surface().fill(0), Some(0.0));
    }

    #[test]
    fn autoplay_advances_each_period() {
        let mut c = carousel(DESKTOP);
        c.init(ms(0));
        c.advance(ms(2999));
        assert_eq!(c.active_index(), 0);
        c.advance(ms(3000));
        assert_eq!(c.active_index(), 1);
        c.advance(ms(6000));
        c.advance(ms(9000));
        assert_eq!(c.active_index(), 3);
        assert_eq!(c.surface().active(), Some(3));
    }

    #[test]
    fn autoplay_wraps_to_first_slide() {
        let mut c = carousel(DESKTOP);
        c.init(ms(0));
        for period in 1..=7 {
            c.advance(ms(period * 3000));
        }
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut c = carousel(DESKTOP);
        c.init(ms(0));
        c.previous_slide();
        assert_eq!(c.active_index(), 6);
        c.next_slide();
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn out_of_range_go_to_is_silent() {
        let mut c = carousel(DESKTOP);
        c.init(ms(0));
        c.go_to_slide(2);
        c.surface_mut().take_ops();
        assert!(!c.go_to_slide(7));
        assert_eq!(c.active_index(), 2);
        assert!(c.surface().ops().is_empty());
    }

    #[test]
    fn go_to_slide_applies_pair_scroll_and_fill() {
        let mut c = carousel(DESKTOP);
        c.init(ms(0));
        c.surface_mut().take_ops();
        assert!(c.go_to_slide(4));
        assert_eq!(
            c.surface().ops(),
            &[
                SurfaceOp::MarkActive(4),
                SurfaceOp::ScrollToCard(4),
                SurfaceOp::SetFill {
                    index: 4,
                    percent: 0.0
                },
            ]
        );
    }

    #[test]
    fn go_to_same_slide_is_idempotent() {
        let mut c = carousel(PHONE);
        c.init(ms(0));
        c.go_to_slide(3);
        let first = c.surface_mut().take_ops();
        c.go_to_slide(3);
        assert_eq!(c.surface_mut().take_ops(), first);
        assert_eq!(c.active_index(), 3);
    }

    #[test]
    fn fill_progress_tracks_elapsed_time() {
        let mut c = coarse(DESKTOP);
        c.init(ms(0));
        c.advance(ms(100));
        c.advance(ms(600));
        assert_eq!(c.surface().fill(0), Some(50.0));
        assert_eq!(c.fill_progress(), Some(0.5));
    }

    #[test]
    fn fill_completes_and_stops_itself() {
        let mut c = coarse(DESKTOP);
        c.init(ms(0));
        c.stop_autoplay();
        c.advance(ms(100));
        c.advance(ms(5000));
        assert!(!c.is_filling());
        assert_eq!(c.surface().fill(0), Some(100.0));
        let hundreds = c
            .surface()
            .ops()
            .iter()
            .filter(|op| matches!(op, SurfaceOp::SetFill { percent, .. } if *percent == 100.0))
            .count();
        assert_eq!(hundreds, 1);
    }

    #[test]
    fn narrow_viewport_pins_completed_fill() {
        let mut c = coarse(PHONE);
        c.init(ms(0));
        c.stop_autoplay();
        c.advance(ms(100));
        c.advance(ms(5000));
        let ops = c.surface().ops();
        assert_eq!(
            &ops[ops.len() - 2..],
            &[
                SurfaceOp::SetFill {
                    index: 0,
                    percent: 100.0
                },
                SurfaceOp::SetFill {
                    index: 0,
                    percent: 100.0
                },
            ]
        );
    }

    #[test]
    fn click_jumps_and_restarts_autoplay() {
        let mut c = carousel(DESKTOP);
        c.init(ms(0));
        assert!(c.handle_event(CarouselEvent::CardClicked(4), ms(2500)));
        assert_eq!(c.active_index(), 4);
        c.advance(ms(5499));
        assert_eq!(c.active_index(), 4);
        c.advance(ms(5500));
        assert_eq!(c.active_index(), 5);
    }

    #[test]
    fn indicator_click_resets_previous_fill() {
        let mut c = coarse(DESKTOP);
        c.init(ms(0));
        c.advance(ms(100));
        c.advance(ms(600));
        assert_eq!(c.surface().fill(0), Some(50.0));
        c.handle_event(CarouselEvent::IndicatorClicked(2), ms(600));
        assert_eq!(c.surface().fill(0), Some(0.0));
        assert_eq!(c.surface().fill(2), Some(0.0));
        assert_eq!(c.timers().live_count(), 2);
    }

    #[test]
    fn arrow_keys_navigate() {
        let mut c = carousel(DESKTOP);
        c.init(ms(0));
        let left = CarouselEvent::Key {
            key: NavKey::ArrowLeft,
            in_editable: false,
        };
        assert!(c.handle_event(left, ms(10)));
        assert_eq!(c.active_index(), 6);
        let right = CarouselEvent::Key {
            key: NavKey::ArrowRight,
            in_editable: false,
        };
        c.handle_event(right, ms(20));
        c.handle_event(right, ms(30));
        assert_eq!(c.active_index(), 1);
        assert_eq!(c.timers().deadline(TimerSlot::Autoplay), Some(ms(3030)));
    }

    #[test]
    fn arrow_keys_in_inputs_are_ignored_by_default() {
        let mut c = carousel(DESKTOP);
        c.init(ms(0));
        let key = CarouselEvent::Key {
            key: NavKey::ArrowRight,
            in_editable: true,
        };
        assert!(!c.handle_event(key, ms(10)));
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn document_scope_navigates_from_inputs() {
        let config = CarouselConfig {
            keyboard_scope: KeyboardScope::Document,
            ..CarouselConfig::default()
        };
        let mut c = Carousel::new(RecordingSurface::new(3, DESKTOP), 3, config).unwrap();
        c.init(ms(0));
        let key = CarouselEvent::Key {
            key: NavKey::ArrowRight,
            in_editable: true,
        };
        assert!(c.handle_event(key, ms(10)));
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn nav_key_parsing() {
        assert_eq!(NavKey::from_dom_key("ArrowLeft"), Some(NavKey::ArrowLeft));
        assert_eq!(NavKey::from_dom_key("ArrowRight"), Some(NavKey::ArrowRight));
        assert_eq!(NavKey::from_dom_key("ArrowUp"), None);
        assert_eq!(NavKey::from_dom_key("Escape"), None);
    }

    #[test]
    fn hover_pauses_everything() {
        let mut c = carousel(DESKTOP);
        c.init(ms(0));
        c.advance(ms(500));
        c.handle_event(CarouselEvent::PointerEnter, ms(500));
        assert_eq!(c.timers().live_count(), 0);
        assert_eq!(c.surface().fill(0), Some(0.0));
        c.advance(ms(60_000));
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn hover_during_kickoff_window_keeps_fill_paused() {
        let mut c = carousel(DESKTOP);
        c.init(ms(0));
        c.handle_event(CarouselEvent::PointerEnter, ms(50));
        c.advance(ms(200));
        assert!(!c.is_filling());
    }

    #[test]
    fn pointer_leave_resumes_autoplay_only() {
        let mut c = carousel(DESKTOP);
        c.init(ms(0));
        c.handle_event(CarouselEvent::PointerEnter, ms(500));
        c.handle_event(CarouselEvent::PointerLeave, ms(10_000));
        assert!(c.is_autoplaying());
        assert!(!c.is_filling());
        c.advance(ms(13_000));
        assert_eq!(c.active_index(), 1);
        assert!(c.is_filling());
    }

    #[test]
    fn pointer_leave_can_resume_fill() {
        let config = CarouselConfig {
            resume_fill_on_leave: true,
            ..CarouselConfig::default()
        };
        let mut c = Carousel::new(RecordingSurface::new(7, DESKTOP), 7, config).unwrap();
        c.init(ms(0));
        c.handle_event(CarouselEvent::PointerEnter, ms(500));
        c.handle_event(CarouselEvent::PointerLeave, ms(1000));
        assert!(c.is_filling());
        assert_eq!(c.fill_progress(), Some(0.0));
    }

    #[test]
    fn resize_to_mobile_presents_current_background() {
        let mut c = carousel(DESKTOP);
        c.init(ms(0));
        c.go_to_slide(3);
        c.surface_mut().set_width(PHONE);
        c.handle_event(CarouselEvent::Resized, ms(10));
        assert!(!c.surface().video_visible());
        assert_eq!(c.surface().active_image(), Some(3));
        assert_eq!(c.surface().title(), Some(&title_for(3)));
    }

    #[test]
    fn resize_to_desktop_restores_video() {
        let mut c = carousel(PHONE);
        c.init(ms(0));
        c.go_to_slide(5);
        assert!(!c.surface().video_visible());
        c.surface_mut().set_width(DESKTOP);
        c.handle_event(CarouselEvent::Resized, ms(10));
        assert!(c.surface().video_visible());
        assert_eq!(c.surface().active_image(), None);
    }

    #[test]
    fn mobile_slide_three_shows_its_image_and_title() {
        let mut c = carousel(PHONE);
        c.init(ms(0));
        c.go_to_slide(3);
        let s = c.surface();
        assert!(!s.video_visible());
        assert_eq!(s.active_image(), Some(3));
        assert_eq!(s.title().map(|t| t.title), Some("SPA и европейские массажи"));
        assert_eq!(s.title().map(|t| t.progress_offset_px), Some(220));
    }

    #[test]
    fn pump_reports_sleep_until_next_timer() {
        let mut clock = ManualClock::new();
        let mut c = carousel(DESKTOP);
        c.init(clock.now_mono());
        clock.tick_ms(40);
        assert_eq!(c.pump(&clock), Some(ms(60)));
        clock.tick_ms(60);
        assert_eq!(c.pump(&clock), Some(ms(16)));
        assert!(c.is_filling());
        c.handle_event(CarouselEvent::PointerEnter, clock.now_mono());
        assert_eq!(c.pump(&clock), None);
    }

    #[test]
    fn late_wake_up_coalesces_missed_ticks() {
        let mut c = carousel(DESKTOP);
        c.init(ms(0));
        c.advance(ms(3000 * 4 + 10));
        assert_eq!(c.active_index(), 1);
        assert_eq!(c.now(), ms(12_010));
        assert_eq!(c.timers().deadline(TimerSlot::Autoplay), Some(ms(15_000)));
        assert_eq!(c.fill_index(), Some(1));
        assert_eq!(c.fill_progress(), Some(0.0));
    }

    #[test]
    fn hour_long_wake_up_does_bounded_work() {
        let mut c = carousel(PHONE);
        c.init(ms(0));
        c.surface_mut().take_ops();
        c.advance(Duration::from_secs(3600));

        let ops = c.surface().ops();
        let count = |pred: fn(&SurfaceOp) -> bool| ops.iter().filter(|op| pred(op)).count();
        assert_eq!(count(|op| matches!(op, SurfaceOp::MarkActive(_))), 1);
        assert_eq!(count(|op| matches!(op, SurfaceOp::SetFill { .. })), 2);
        assert_eq!(count(|op| matches!(op, SurfaceOp::RestartVideo)), 0);
        assert!(ops.len() < 16, "one wake-up wrote {} ops", ops.len());
        assert_eq!(c.active_index(), 1);
    }
}
