#![forbid(unsafe_code)]

//! Mobile navigation menu.
//!
//! Independent of the carousel. The panel opens from a header button and
//! closes from its close button, a click on the backdrop, or Escape. Items
//! that own a submenu behave as an accordion: at most one is expanded.

use tracing::debug;

/// Arrow icon shown next to a collapsed item.
pub const ARROW_COLLAPSED_ICON: &str = "icon/Union.svg";
/// Arrow icon shown next to the expanded item.
pub const ARROW_EXPANDED_ICON: &str = "icon/union2.svg";

/// Rendering adapter for the menu.
pub trait MenuSurface {
    /// Show or hide the panel, locking page scroll while it is shown.
    fn set_panel_open(&mut self, open: bool);

    /// Expand or collapse the submenu owned by `item`, including the item's
    /// highlight and arrow icon. Items without a submenu still receive
    /// collapse calls so their highlight and icon are reset.
    fn set_submenu_expanded(&mut self, item: usize, expanded: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    OpenPressed,
    ClosePressed,
    /// A click landed on the panel; `on_backdrop` is true when the panel
    /// element itself was the target rather than one of its children.
    PanelClicked { on_backdrop: bool },
    EscapePressed,
    ItemClicked(usize),
}

pub struct MobileMenu<S: MenuSurface> {
    surface: S,
    open: bool,
    /// Per item: `None` without a submenu, else whether it is expanded.
    submenus: Vec<Option<bool>>,
}

impl<S: MenuSurface> MobileMenu<S> {
    /// `has_submenu` lists, in document order, whether each item owns a
    /// submenu. Everything starts closed and collapsed.
    pub fn new(surface: S, has_submenu: impl IntoIterator<Item = bool>) -> Self {
        Self {
            surface,
            open: false,
            submenus: has_submenu
                .into_iter()
                .map(|has| has.then_some(false))
                .collect(),
        }
    }

    /// Returns whether the event changed anything.
    pub fn handle(&mut self, event: MenuEvent) -> bool {
        match event {
            MenuEvent::OpenPressed => self.open(),
            MenuEvent::ClosePressed => self.close(),
            MenuEvent::PanelClicked { on_backdrop } => on_backdrop && self.close(),
            MenuEvent::EscapePressed => self.open && self.close(),
            MenuEvent::ItemClicked(item) => self.toggle_submenu(item),
        }
    }

    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        debug!("mobile menu opened");
        self.open = true;
        self.surface.set_panel_open(true);
        true
    }

    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        debug!("mobile menu closed");
        self.open = false;
        self.surface.set_panel_open(false);
        true
    }

    /// Collapse every other item, then flip the submenu owned by `item`.
    /// Clicks on items without a submenu are ignored.
    pub fn toggle_submenu(&mut self, item: usize) -> bool {
        let Some(Some(expanded)) = self.submenus.get(item).copied() else {
            return false;
        };

        for (other, state) in self.submenus.iter_mut().enumerate() {
            if other == item {
                continue;
            }
            if let Some(other_expanded) = state {
                *other_expanded = false;
            }
            self.surface.set_submenu_expanded(other, false);
        }

        let expanded = !expanded;
        self.submenus[item] = Some(expanded);
        self.surface.set_submenu_expanded(item, expanded);
        debug!(item, expanded, "submenu toggled");
        true
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Whether `item`'s submenu is expanded; `None` if it has none.
    #[must_use]
    pub fn is_expanded(&self, item: usize) -> Option<bool> {
        self.submenus.get(item).copied().flatten()
    }

    /// The currently expanded item, if any.
    #[must_use]
    pub fn expanded_item(&self) -> Option<usize> {
        self.submenus.iter().position(|state| *state == Some(true))
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Default)]
    struct Recorder {
        panel: Vec<bool>,
        submenus: Vec<(usize, bool)>,
    }

    impl MenuSurface for Recorder {
        fn set_panel_open(&mut self, open: bool) {
            self.panel.push(open);
        }

        fn set_submenu_expanded(&mut self, item: usize, expanded: bool) {
            self.submenus.push((item, expanded));
        }
    }

    fn menu() -> MobileMenu<Recorder> {
        MobileMenu::new(Recorder::default(), [true, false, true, true])
    }

    #[test]
    fn open_and_close() {
        let mut m = menu();
        assert!(m.handle(MenuEvent::OpenPressed));
        assert!(m.is_open());
        assert!(!m.handle(MenuEvent::OpenPressed));
        assert!(m.handle(MenuEvent::ClosePressed));
        assert!(!m.is_open());
        assert_eq!(m.surface().panel, vec![true, false]);
    }

    #[test]
    fn escape_only_closes_an_open_menu() {
        let mut m = menu();
        assert!(!m.handle(MenuEvent::EscapePressed));
        assert!(m.surface().panel.is_empty());
        m.handle(MenuEvent::OpenPressed);
        assert!(m.handle(MenuEvent::EscapePressed));
        assert!(!m.is_open());
    }

    #[test]
    fn only_backdrop_clicks_close() {
        let mut m = menu();
        m.handle(MenuEvent::OpenPressed);
        assert!(!m.handle(MenuEvent::PanelClicked { on_backdrop: false }));
        assert!(m.is_open());
        assert!(m.handle(MenuEvent::PanelClicked { on_backdrop: true }));
        assert!(!m.is_open());
    }

    #[test]
    fn submenus_behave_as_accordion() {
        let mut m = menu();
        assert!(m.handle(MenuEvent::ItemClicked(0)));
        assert_eq!(m.expanded_item(), Some(0));
        assert!(m.handle(MenuEvent::ItemClicked(2)));
        assert_eq!(m.expanded_item(), Some(2));
        assert_eq!(m.is_expanded(0), Some(false));
        assert_eq!(
            m.surface().submenus,
            vec![
                (1, false),
                (2, false),
                (3, false),
                (0, true),
                (0, false),
                (1, false),
                (3, false),
                (2, true),
            ]
        );
    }

    #[test]
    fn toggling_resets_items_without_submenu() {
        let mut m = menu();
        m.toggle_submenu(3);
        assert!(m.surface().submenus.contains(&(1, false)));
        assert_eq!(m.is_expanded(1), None);
    }

    #[test]
    fn clicking_expanded_item_collapses_it() {
        let mut m = menu();
        m.toggle_submenu(3);
        m.toggle_submenu(3);
        assert_eq!(m.expanded_item(), None);
        assert_eq!(m.is_expanded(3), Some(false));
    }

    #[test]
    fn items_without_submenu_are_inert() {
        let mut m = menu();
        m.toggle_submenu(0);
        assert!(!m.handle(MenuEvent::ItemClicked(1)));
        assert!(!m.handle(MenuEvent::ItemClicked(99)));
        assert_eq!(m.expanded_item(), Some(0));
        assert_eq!(m.is_expanded(1), None);
    }
}
