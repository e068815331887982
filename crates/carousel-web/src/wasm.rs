#![forbid(unsafe_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use carousel_core::{Carousel, CarouselEvent, Clock, NavKey, Surface};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent};
use web_time::Instant;

use crate::dom::{DomSurface, query_one};
use crate::error::MountError;
use crate::logging;
use crate::menu_dom;
use crate::options::MountOptions;
use crate::slot::{Detach, MountSlot};

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// `performance.now()` readings relative to the moment of mounting.
struct WebClock {
    origin: Instant,
}

impl WebClock {
    fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for WebClock {
    fn now_mono(&self) -> Duration {
        self.origin.elapsed()
    }
}

struct Host {
    carousel: Carousel<DomSurface>,
    clock: WebClock,
    /// The single host timer; replaced whenever the next deadline moves.
    pump: Option<Timeout>,
    listeners: Vec<EventListener>,
    destroyed: bool,
}

impl Detach for Rc<RefCell<Host>> {
    fn detach(&mut self) {
        let Ok(mut host) = self.try_borrow_mut() else {
            warn!("carousel busy; detach skipped");
            return;
        };
        if host.destroyed {
            return;
        }
        host.destroyed = true;
        host.pump = None;
        host.listeners.clear();
        debug!("services carousel detached");
    }
}

thread_local! {
    static MOUNTED: RefCell<MountSlot<Rc<RefCell<Host>>>> = const { RefCell::new(MountSlot::new()) };
}

fn delay_ms(delay: Duration) -> u32 {
    u32::try_from(delay.as_micros().div_ceil(1000)).unwrap_or(u32::MAX)
}

fn schedule(host: &Rc<RefCell<Host>>, delay: Option<Duration>) {
    let Ok(mut guard) = host.try_borrow_mut() else {
        return;
    };
    if guard.destroyed {
        return;
    }
    guard.pump = delay.map(|delay| {
        let h = Rc::clone(host);
        Timeout::new(delay_ms(delay), move || pump(&h))
    });
}

fn pump(host: &Rc<RefCell<Host>>) {
    let delay = {
        let Ok(mut guard) = host.try_borrow_mut() else {
            return;
        };
        if guard.destroyed {
            return;
        }
        let host = &mut *guard;
        host.carousel.pump(&host.clock)
    };
    schedule(host, delay);
}

/// Run `f` against the carousel at the current time, then re-arm the timer.
fn with_carousel<R>(
    host: &Rc<RefCell<Host>>,
    f: impl FnOnce(&mut Carousel<DomSurface>, Duration) -> R,
) -> Option<R> {
    let (result, delay) = {
        let Ok(mut guard) = host.try_borrow_mut() else {
            warn!("carousel busy; call dropped");
            return None;
        };
        if guard.destroyed {
            return None;
        }
        let host = &mut *guard;
        let result = f(&mut host.carousel, host.clock.now_mono());
        (result, host.carousel.time_to_next_deadline())
    };
    schedule(host, delay);
    Some(result)
}

fn dispatch(host: &Rc<RefCell<Host>>, event: CarouselEvent) -> bool {
    with_carousel(host, |carousel, now| carousel.handle_event(event, now)).unwrap_or(false)
}

fn is_editable(target: Option<web_sys::EventTarget>) -> bool {
    let Some(el) = target.and_then(|t| t.dyn_into::<Element>().ok()) else {
        return false;
    };
    matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT")
        || el
            .dyn_ref::<HtmlElement>()
            .is_some_and(HtmlElement::is_content_editable)
}

fn wire(host: &Rc<RefCell<Host>>) -> Vec<EventListener> {
    let guard = host.borrow();
    let surface = guard.carousel.surface();
    let mut listeners = Vec::new();

    for (index, card) in surface.cards().iter().enumerate() {
        let h = Rc::clone(host);
        listeners.push(EventListener::new(card, "click", move |_| {
            dispatch(&h, CarouselEvent::CardClicked(index));
        }));
    }

    for (index, indicator) in surface.indicators().iter().enumerate() {
        let h = Rc::clone(host);
        listeners.push(EventListener::new(indicator, "click", move |_| {
            dispatch(&h, CarouselEvent::IndicatorClicked(index));
        }));
    }

    let container = surface.selectors().container.as_str();
    if let Some(container) = query_one::<Element>(surface.document(), container) {
        let h = Rc::clone(host);
        listeners.push(EventListener::new(&container, "mouseenter", move |_| {
            dispatch(&h, CarouselEvent::PointerEnter);
        }));
        let h = Rc::clone(host);
        listeners.push(EventListener::new(&container, "mouseleave", move |_| {
            dispatch(&h, CarouselEvent::PointerLeave);
        }));
    } else {
        debug!(selector = container, "no hover container; autoplay never pauses");
    }

    {
        let h = Rc::clone(host);
        listeners.push(EventListener::new_with_options(
            surface.document(),
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(key) = event
                    .dyn_ref::<KeyboardEvent>()
                    .and_then(|key| NavKey::from_dom_key(&key.key()))
                else {
                    return;
                };
                let in_editable = is_editable(event.target());
                if dispatch(&h, CarouselEvent::Key { key, in_editable }) {
                    event.prevent_default();
                }
            },
        ));
    }

    {
        let h = Rc::clone(host);
        listeners.push(EventListener::new(surface.window(), "resize", move |_| {
            dispatch(&h, CarouselEvent::Resized);
        }));
    }

    listeners
}

/// Services carousel mounted on the current document.
///
/// Event listeners hold the carousel alive after this handle is dropped;
/// call [`destroy`](Self::destroy) to detach it. Only one carousel is live
/// per page: mounting again, including over the autostarted one, detaches
/// the previous instance first.
#[wasm_bindgen]
pub struct ServicesCarousel {
    host: Rc<RefCell<Host>>,
}

#[wasm_bindgen]
impl ServicesCarousel {
    /// Mount on the current document.
    ///
    /// `options` is an optional plain object; see `MountOptions` for the
    /// accepted fields.
    pub fn mount(options: Option<JsValue>) -> Result<ServicesCarousel, JsValue> {
        let options = match options.filter(|value| !value.is_undefined() && !value.is_null()) {
            Some(value) => {
                let json: String = js_sys::JSON::stringify(&value)?.into();
                MountOptions::from_json(&json)?
            }
            None => MountOptions::default(),
        };
        Ok(Self::mount_with(options)?)
    }

    #[wasm_bindgen(js_name = activeIndex)]
    pub fn active_index(&self) -> usize {
        self.host.borrow().carousel.active_index()
    }

    #[wasm_bindgen(js_name = slideCount)]
    pub fn slide_count(&self) -> usize {
        self.host.borrow().carousel.slide_count()
    }

    /// Jump to a slide as if its card had been clicked.
    #[wasm_bindgen(js_name = goToSlide)]
    pub fn go_to_slide(&self, index: usize) {
        dispatch(&self.host, CarouselEvent::CardClicked(index));
    }

    #[wasm_bindgen(js_name = nextSlide)]
    pub fn next_slide(&self) {
        with_carousel(&self.host, |carousel, now| {
            carousel.advance(now);
            carousel.next_slide();
        });
    }

    #[wasm_bindgen(js_name = previousSlide)]
    pub fn previous_slide(&self) {
        with_carousel(&self.host, |carousel, now| {
            carousel.advance(now);
            carousel.previous_slide();
        });
    }

    /// Detach listeners and stop timers. The DOM keeps its last state.
    pub fn destroy(&self) {
        let mut host = Rc::clone(&self.host);
        host.detach();
        MOUNTED.with(|slot| {
            let mut slot = slot.borrow_mut();
            if slot.current().is_some_and(|live| Rc::ptr_eq(live, &self.host)) {
                slot.clear();
            }
        });
    }
}

impl ServicesCarousel {
    fn mount_with(options: MountOptions) -> Result<Self, MountError> {
        logging::init(&options.log_level);
        if MOUNTED.with(|slot| slot.borrow_mut().clear()) {
            info!("replacing mounted services carousel");
        }

        let window = web_sys::window().ok_or(MountError::NoDocument)?;
        let document = window.document().ok_or(MountError::NoDocument)?;
        let surface = DomSurface::query(window, document, options.selectors)?;
        let slides = surface.slide_count();
        let width = surface.viewport_width();
        let carousel = Carousel::new(surface, slides, options.carousel)?;

        let host = Rc::new(RefCell::new(Host {
            carousel,
            clock: WebClock::start(),
            pump: None,
            listeners: Vec::new(),
            destroyed: false,
        }));

        with_carousel(&host, |carousel, now| carousel.init(now));
        let listeners = wire(&host);
        host.borrow_mut().listeners = listeners;
        MOUNTED.with(|slot| slot.borrow_mut().install(Rc::clone(&host)));

        info!(slides, width, "services carousel mounted");
        Ok(Self { host })
    }
}

/// Mount the mobile menu on the current document, replacing any menu
/// mounted earlier.
///
/// Returns `false` when the page has no menu panel.
#[wasm_bindgen(js_name = mountMobileMenu)]
pub fn mount_mobile_menu(options: Option<JsValue>) -> Result<bool, JsValue> {
    let options = match options.filter(|value| !value.is_undefined() && !value.is_null()) {
        Some(value) => {
            let json: String = js_sys::JSON::stringify(&value)?.into();
            MountOptions::from_json(&json)?
        }
        None => MountOptions::default(),
    };
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(MountError::NoDocument)?;
    Ok(menu_dom::mount(&document, &options.selectors))
}

#[cfg(feature = "autostart")]
fn boot() {
    match ServicesCarousel::mount_with(MountOptions::default()) {
        // The mount registry keeps it alive; a later JS mount replaces it.
        Ok(_carousel) => {}
        Err(err) => warn!(%err, "services carousel not mounted"),
    }
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        menu_dom::mount(&document, &MountOptions::default().selectors);
    }
}

/// Mount everything with default options once the DOM is ready.
#[cfg(feature = "autostart")]
#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| boot()).forget();
    } else {
        boot();
    }
}
