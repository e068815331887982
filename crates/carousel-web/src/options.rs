#![forbid(unsafe_code)]

//! Mount options accepted from JavaScript.
//!
//! The JS caller passes one plain object; carousel tuning fields sit at the
//! top level and DOM selector overrides under `selectors`:
//!
//! ```json
//! { "autoplayPeriodMs": 4000, "selectors": { "cards": ".card" } }
//! ```

use carousel_core::CarouselConfig;
use serde::Deserialize;

use crate::error::MountError;

/// CSS selectors for every element the carousel and menu touch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub cards: String,
    pub indicators: String,
    /// Hover target that pauses autoplay.
    pub container: String,
    /// Horizontally scrolling strip holding the cards.
    pub scroller: String,
    pub video: String,
    /// Background images; each carries `data-card="<slide index>"`.
    pub background_images: String,
    pub title: String,
    pub subtitle: String,
    pub progress_bar: String,
    pub menu_button: String,
    pub menu_panel: String,
    pub menu_close: String,
    pub menu_items: String,
    /// Class marking an item's next sibling as its submenu.
    pub submenu_class: String,
    /// Arrow image, relative to a menu item.
    pub menu_arrow_image: String,
}

impl Selectors {
    /// Selector for the background image tagged with `index`.
    #[must_use]
    pub fn background_image(&self, index: usize) -> String {
        format!(r#"{}[data-card="{index}"]"#, self.background_images)
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            cards: ".service_card".to_owned(),
            indicators: ".progress_segment".to_owned(),
            container: ".services_container".to_owned(),
            scroller: ".services_cards".to_owned(),
            video: ".video-background video".to_owned(),
            background_images: ".bg-image".to_owned(),
            title: ".angel_title".to_owned(),
            subtitle: ".angel_subtitle".to_owned(),
            progress_bar: ".progress_bar".to_owned(),
            menu_button: ".mobile_menu_btn".to_owned(),
            menu_panel: ".mobile_menu".to_owned(),
            menu_close: ".mobile_menu_close".to_owned(),
            menu_items: ".mobile_menu_item".to_owned(),
            submenu_class: "mobile_submenu".to_owned(),
            menu_arrow_image: ".mobile_menu_arrow img".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MountOptions {
    #[serde(flatten)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub selectors: Selectors,
    /// Console level filter: `error`, `warn`, `info`, `debug`, or `trace`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_owned()
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            selectors: Selectors::default(),
            log_level: default_log_level(),
        }
    }
}

impl MountOptions {
    pub fn from_json(json: &str) -> Result<Self, MountError> {
        let options: Self =
            serde_json::from_str(json).map_err(|err| MountError::Options(err.to_string()))?;
        options.carousel.validate()?;
        Ok(options)
    }
}
