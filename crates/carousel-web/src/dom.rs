#![forbid(unsafe_code)]

//! DOM implementation of the carousel [`Surface`].
//!
//! Cards, indicators, the scroller, and the video are resolved once at
//! mount. Background images and the hero headline are looked up on every
//! write, matching how the page swaps them. Missing optional elements turn
//! the corresponding write into a no-op.

use carousel_core::{Declaration, PlaybackFailure, Surface, TitleCard};
use js_sys::Reflect;
use tracing::{trace, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, DomException, Element, HtmlElement, HtmlVideoElement, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::error::MountError;
use crate::options::Selectors;

pub(crate) const ACTIVE_CLASS: &str = "active";
const FILL_PROPERTY: &str = "--fill-percentage";
const IMPORTANT: &str = "important";

pub(crate) fn query_one<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    match document.query_selector(selector) {
        Ok(found) => found.and_then(|el| el.dyn_into::<T>().ok()),
        Err(err) => {
            warn!(selector, ?err, "invalid selector");
            None
        }
    }
}

pub(crate) fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            warn!(selector, ?err, "invalid selector");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub(crate) fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(err) = result {
        trace!(class, ?err, "class toggle failed");
    }
}

pub(crate) fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        trace!(property, ?err, "style write failed");
    }
}

fn set_important(el: &HtmlElement, declarations: &[Declaration]) {
    let style = el.style();
    for Declaration { property, value } in declarations {
        if let Err(err) = style.set_property_with_priority(property, value, IMPORTANT) {
            trace!(property, ?err, "style write failed");
        }
    }
}

fn playback_failure(err: &JsValue) -> PlaybackFailure {
    let name = err
        .dyn_ref::<DomException>()
        .map(DomException::name)
        .or_else(|| {
            Reflect::get(err, &JsValue::from_str("name"))
                .ok()
                .and_then(|name| name.as_string())
        })
        .unwrap_or_else(|| "UnknownError".to_owned());
    PlaybackFailure::new(name)
}

pub(crate) struct DomSurface {
    window: Window,
    document: Document,
    selectors: Selectors,
    cards: Vec<HtmlElement>,
    indicators: Vec<HtmlElement>,
    scroller: Option<HtmlElement>,
    video: Option<HtmlVideoElement>,
}

impl DomSurface {
    /// Resolve the carousel's elements. Fails only when there are no cards.
    pub(crate) fn query(
        window: Window,
        document: Document,
        selectors: Selectors,
    ) -> Result<Self, MountError> {
        let cards: Vec<HtmlElement> = query_all(&document, &selectors.cards);
        if cards.is_empty() {
            return Err(MountError::MissingElement(selectors.cards.clone()));
        }
        let indicators = query_all(&document, &selectors.indicators);
        let scroller = query_one(&document, &selectors.scroller);
        let video = query_one(&document, &selectors.video);
        Ok(Self {
            window,
            document,
            selectors,
            cards,
            indicators,
            scroller,
            video,
        })
    }

    /// Slides are card/indicator pairs; surplus elements on either side are
    /// ignored.
    pub(crate) fn slide_count(&self) -> usize {
        if self.indicators.len() != self.cards.len() {
            warn!(
                cards = self.cards.len(),
                indicators = self.indicators.len(),
                "card and indicator counts differ"
            );
        }
        if self.indicators.is_empty() {
            return self.cards.len();
        }
        self.cards.len().min(self.indicators.len())
    }

    pub(crate) fn cards(&self) -> &[HtmlElement] {
        &self.cards
    }

    pub(crate) fn indicators(&self) -> &[HtmlElement] {
        &self.indicators
    }

    pub(crate) fn selectors(&self) -> &Selectors {
        &self.selectors
    }

    pub(crate) fn document(&self) -> &Document {
        &self.document
    }

    pub(crate) fn window(&self) -> &Window {
        &self.window
    }

    fn background_images(&self) -> Vec<Element> {
        query_all(&self.document, &self.selectors.background_images)
    }
}

impl Surface for DomSurface {
    fn viewport_width(&self) -> u32 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .map_or(u32::MAX, |width| width.max(0.0) as u32)
    }

    fn mark_active(&mut self, index: usize) {
        for el in self.cards.iter().chain(&self.indicators) {
            set_class(el, ACTIVE_CLASS, false);
        }
        if let Some(card) = self.cards.get(index) {
            set_class(card, ACTIVE_CLASS, true);
        }
        if let Some(indicator) = self.indicators.get(index) {
            set_class(indicator, ACTIVE_CLASS, true);
        }
    }

    fn scroll_to_card(&mut self, index: usize) {
        let (Some(card), Some(scroller)) = (self.cards.get(index), self.scroller.as_ref()) else {
            return;
        };
        let left = f64::from(card.offset_left()) - f64::from(scroller.offset_width()) / 2.0
            + f64::from(card.offset_width()) / 2.0;
        let options = ScrollToOptions::new();
        options.set_left(left);
        options.set_behavior(ScrollBehavior::Smooth);
        scroller.scroll_to_with_scroll_to_options(&options);
    }

    fn set_fill(&mut self, index: usize, percent: f64) {
        if let Some(indicator) = self.indicators.get(index) {
            set_style(indicator, FILL_PROPERTY, &format!("{percent}%"));
        }
    }

    fn set_video_visible(&mut self, visible: bool) {
        if let Some(video) = &self.video {
            set_style(video, "display", if visible { "block" } else { "none" });
        }
    }

    fn restart_video(&mut self) {
        let Some(video) = &self.video else {
            return;
        };
        video.set_current_time(0.0);
        match video.play() {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    playback_failure(&err).report();
                }
            }),
            Err(err) => playback_failure(&err).report(),
        }
    }

    fn clear_background_images(&mut self) {
        for img in self.background_images() {
            set_class(&img, ACTIVE_CLASS, false);
        }
    }

    fn activate_background_image(&mut self, index: usize) {
        let selector = self.selectors.background_image(index);
        if let Some(img) = query_one::<Element>(&self.document, &selector) {
            set_class(&img, ACTIVE_CLASS, true);
        }
    }

    fn apply_title(&mut self, card: &TitleCard) {
        let Some(title) = query_one::<HtmlElement>(&self.document, &self.selectors.title) else {
            return;
        };
        title.set_text_content(Some(card.title));
        set_important(&title, &card.title_styles());

        if let Some(bar) = query_one::<HtmlElement>(&self.document, &self.selectors.progress_bar) {
            set_important(&bar, &card.progress_bar_styles());
        }

        if let Some(subtitle) = query_one::<HtmlElement>(&self.document, &self.selectors.subtitle)
        {
            subtitle.set_text_content(Some(card.subtitle));
            set_important(&subtitle, &card.subtitle_styles());
        }
    }
}
