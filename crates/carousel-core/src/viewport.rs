#![forbid(unsafe_code)]

//! Responsive layout classification.

use serde::Deserialize;

/// Viewport width thresholds, in CSS pixels. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Breakpoints {
    /// Widths at or below this use the mobile background/title path.
    pub tablet: u32,
    /// Widths at or below this pin a finished fill to exactly 100%.
    pub narrow: u32,
}

impl Breakpoints {
    pub const DEFAULT_TABLET: u32 = 1024;
    pub const DEFAULT_NARROW: u32 = 820;

    #[must_use]
    pub const fn classify(&self, width: u32) -> ViewportMode {
        if width <= self.narrow {
            ViewportMode::Narrow
        } else if width <= self.tablet {
            ViewportMode::Tablet
        } else {
            ViewportMode::Desktop
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            tablet: Self::DEFAULT_TABLET,
            narrow: Self::DEFAULT_NARROW,
        }
    }
}

/// Layout mode derived from the current viewport width. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    Desktop,
    Tablet,
    Narrow,
}

impl ViewportMode {
    /// Tablet or narrower: backgrounds and titles follow the active slide.
    #[must_use]
    pub const fn is_mobile(self) -> bool {
        !matches!(self, Self::Desktop)
    }

    #[must_use]
    pub const fn is_narrow(self) -> bool {
        matches!(self, Self::Narrow)
    }
}
