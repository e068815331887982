#![forbid(unsafe_code)]

//! Mobile menu wiring.

use std::cell::RefCell;
use std::rc::Rc;

use carousel_core::menu::{ARROW_COLLAPSED_ICON, ARROW_EXPANDED_ICON};
use carousel_core::{MenuEvent, MenuSurface, MobileMenu};
use gloo::events::EventListener;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, HtmlImageElement, KeyboardEvent};

use crate::dom::{ACTIVE_CLASS, query_all, query_one, set_class, set_style};
use crate::options::Selectors;
use crate::slot::{Detach, MountSlot};

const ITEM_ACTIVE_CLASS: &str = "mobile_menu_item_active";

struct MenuItem {
    item: Element,
    submenu: Option<HtmlElement>,
    arrow: Option<HtmlImageElement>,
}

pub(crate) struct DomMenuSurface {
    body: Option<HtmlElement>,
    panel: HtmlElement,
    items: Vec<MenuItem>,
}

impl MenuSurface for DomMenuSurface {
    fn set_panel_open(&mut self, open: bool) {
        set_class(&self.panel, ACTIVE_CLASS, open);
        if let Some(body) = &self.body {
            set_style(body, "overflow", if open { "hidden" } else { "" });
        }
    }

    fn set_submenu_expanded(&mut self, item: usize, expanded: bool) {
        let Some(entry) = self.items.get(item) else {
            return;
        };
        if let Some(submenu) = &entry.submenu {
            set_style(submenu, "display", if expanded { "block" } else { "none" });
        }
        set_class(&entry.item, ITEM_ACTIVE_CLASS, expanded);
        if let Some(arrow) = &entry.arrow {
            arrow.set_src(if expanded {
                ARROW_EXPANDED_ICON
            } else {
                ARROW_COLLAPSED_ICON
            });
        }
    }
}

struct MenuHost {
    menu: MobileMenu<DomMenuSurface>,
    listeners: Vec<EventListener>,
}

impl Detach for Rc<RefCell<MenuHost>> {
    fn detach(&mut self) {
        let Ok(mut host) = self.try_borrow_mut() else {
            warn!("menu busy; detach skipped");
            return;
        };
        // Unlocks page scroll if the panel was left open.
        host.menu.close();
        host.listeners.clear();
    }
}

thread_local! {
    static MOUNTED: RefCell<MountSlot<Rc<RefCell<MenuHost>>>> = const { RefCell::new(MountSlot::new()) };
}

fn dispatch(host: &Rc<RefCell<MenuHost>>, event: MenuEvent) {
    match host.try_borrow_mut() {
        Ok(mut host) => {
            host.menu.handle(event);
        }
        Err(_) => warn!(?event, "menu busy; event dropped"),
    }
}

fn same_node(target: Option<web_sys::EventTarget>, node: &Element) -> bool {
    target.is_some_and(|target| {
        let target: &JsValue = target.as_ref();
        let node: &JsValue = node.as_ref();
        target == node
    })
}

fn read_items(document: &Document, selectors: &Selectors) -> Vec<MenuItem> {
    query_all::<Element>(document, &selectors.menu_items)
        .into_iter()
        .map(|item| {
            let submenu = item
                .next_element_sibling()
                .filter(|next| next.class_list().contains(&selectors.submenu_class))
                .and_then(|next| next.dyn_into::<HtmlElement>().ok());
            let arrow = item
                .query_selector(&selectors.menu_arrow_image)
                .ok()
                .flatten()
                .and_then(|img| img.dyn_into::<HtmlImageElement>().ok());
            MenuItem {
                item,
                submenu,
                arrow,
            }
        })
        .collect()
}

/// Wire the mobile menu. Returns `false` when the page has no menu panel.
///
/// A menu mounted earlier is detached first.
pub(crate) fn mount(document: &Document, selectors: &Selectors) -> bool {
    if MOUNTED.with(|slot| slot.borrow_mut().clear()) {
        debug!("replacing mounted mobile menu");
    }
    let Some(panel) = query_one::<HtmlElement>(document, &selectors.menu_panel) else {
        debug!(selector = %selectors.menu_panel, "no mobile menu on page");
        return false;
    };
    let items = read_items(document, selectors);
    let has_submenu: Vec<bool> = items.iter().map(|i| i.submenu.is_some()).collect();
    let item_elements: Vec<Element> = items.iter().map(|i| i.item.clone()).collect();

    let surface = DomMenuSurface {
        body: document.body(),
        panel: panel.clone(),
        items,
    };
    let host = Rc::new(RefCell::new(MenuHost {
        menu: MobileMenu::new(surface, has_submenu),
        listeners: Vec::new(),
    }));

    let mut listeners = Vec::new();

    if let Some(button) = query_one::<Element>(document, &selectors.menu_button) {
        let h = Rc::clone(&host);
        listeners.push(EventListener::new(&button, "click", move |_| {
            dispatch(&h, MenuEvent::OpenPressed);
        }));
    }

    if let Some(close) = query_one::<Element>(document, &selectors.menu_close) {
        let h = Rc::clone(&host);
        listeners.push(EventListener::new(&close, "click", move |_| {
            dispatch(&h, MenuEvent::ClosePressed);
        }));
    }

    {
        let h = Rc::clone(&host);
        let backdrop = panel.clone();
        listeners.push(EventListener::new(&panel, "click", move |event: &Event| {
            let on_backdrop = same_node(event.target(), &backdrop);
            dispatch(&h, MenuEvent::PanelClicked { on_backdrop });
        }));
    }

    {
        let h = Rc::clone(&host);
        listeners.push(EventListener::new(document, "keydown", move |event: &Event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Escape");
            if is_escape {
                dispatch(&h, MenuEvent::EscapePressed);
            }
        }));
    }

    for (index, item) in item_elements.iter().enumerate() {
        let h = Rc::clone(&host);
        listeners.push(EventListener::new(item, "click", move |_| {
            dispatch(&h, MenuEvent::ItemClicked(index));
        }));
    }

    debug!(items = item_elements.len(), "mobile menu mounted");
    host.borrow_mut().listeners = listeners;
    MOUNTED.with(|slot| slot.borrow_mut().install(host));
    true
}
