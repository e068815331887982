#![forbid(unsafe_code)]

//! Carousel tuning knobs.
//!
//! Every field has a default matching the production page, so an empty
//! JSON object (or no config at all) yields the stock behaviour.

use core::time::Duration;

use serde::Deserialize;

use crate::error::CarouselError;
use crate::viewport::Breakpoints;

/// Which keyboard events may drive slide navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyboardScope {
    /// Every arrow key on the document, including ones typed into inputs.
    Document,
    /// Arrow keys aimed at text inputs or editable content are left alone.
    #[default]
    IgnoreEditable,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Autoplay period; also the length of one fill animation.
    pub autoplay_period_ms: u64,
    /// Fill animation frame interval.
    pub fill_frame_ms: u64,
    /// Delay between mount and the first fill animation.
    pub fill_kickoff_ms: u64,
    pub breakpoints: Breakpoints,
    /// Restart the fill animation when the pointer leaves the carousel.
    pub resume_fill_on_leave: bool,
    pub keyboard_scope: KeyboardScope,
}

impl CarouselConfig {
    pub const DEFAULT_AUTOPLAY_PERIOD_MS: u64 = 3000;
    pub const DEFAULT_FILL_FRAME_MS: u64 = 16;
    pub const DEFAULT_FILL_KICKOFF_MS: u64 = 100;

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, CarouselError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.autoplay_period_ms == 0 {
            return Err(CarouselError::InvalidConfig(
                "autoplayPeriodMs must be positive",
            ));
        }
        if self.fill_frame_ms == 0 {
            return Err(CarouselError::InvalidConfig("fillFrameMs must be positive"));
        }
        if self.breakpoints.narrow > self.breakpoints.tablet {
            return Err(CarouselError::InvalidConfig(
                "narrow breakpoint must not exceed tablet breakpoint",
            ));
        }
        Ok(())
    }

    #[must_use]
    pub const fn autoplay_period(&self) -> Duration {
        Duration::from_millis(self.autoplay_period_ms)
    }

    /// Fill animations run for exactly one autoplay period.
    #[must_use]
    pub const fn fill_duration(&self) -> Duration {
        self.autoplay_period()
    }

    #[must_use]
    pub const fn fill_frame(&self) -> Duration {
        Duration::from_millis(self.fill_frame_ms)
    }

    #[must_use]
    pub const fn fill_kickoff(&self) -> Duration {
        Duration::from_millis(self.fill_kickoff_ms)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_period_ms: Self::DEFAULT_AUTOPLAY_PERIOD_MS,
            fill_frame_ms: Self::DEFAULT_FILL_FRAME_MS,
            fill_kickoff_ms: Self::DEFAULT_FILL_KICKOFF_MS,
            breakpoints: Breakpoints::default(),
            resume_fill_on_leave: false,
            keyboard_scope: KeyboardScope::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_yields_defaults() {
        let config = CarouselConfig::from_json("{}").unwrap();
        assert_eq!(config, CarouselConfig::default());
        assert_eq!(config.autoplay_period(), Duration::from_millis(3000));
        assert_eq!(config.fill_duration(), config.autoplay_period());
        assert_eq!(config.fill_frame(), Duration::from_millis(16));
        assert_eq!(config.fill_kickoff(), Duration::from_millis(100));
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = CarouselConfig::from_json(
            r#"{"autoplayPeriodMs": 5000, "breakpoints": {"narrow": 640}, "keyboardScope": "document"}"#,
        )
        .unwrap();
        assert_eq!(config.autoplay_period_ms, 5000);
        assert_eq!(config.breakpoints.narrow, 640);
        assert_eq!(config.breakpoints.tablet, Breakpoints::DEFAULT_TABLET);
        assert_eq!(config.keyboard_scope, KeyboardScope::Document);
        assert!(!config.resume_fill_on_leave);
    }

    #[test]
    fn zero_periods_are_rejected() {
        assert_eq!(
            CarouselConfig::from_json(r#"{"autoplayPeriodMs": 0}"#),
            Err(CarouselError::InvalidConfig(
                "autoplayPeriodMs must be positive"
            ))
        );
        assert!(matches!(
            CarouselConfig::from_json(r#"{"fillFrameMs": 0}"#),
            Err(CarouselError::InvalidConfig(_))
        ));
    }

    #[test]
    fn inverted_breakpoints_are_rejected() {
        let err = CarouselConfig::from_json(r#"{"breakpoints": {"tablet": 600, "narrow": 800}}"#)
            .unwrap_err();
        assert!(matches!(err, CarouselError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = CarouselConfig::from_json("{autoplay").unwrap_err();
        assert!(matches!(err, CarouselError::Config(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }
}
