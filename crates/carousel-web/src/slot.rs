#![forbid(unsafe_code)]

//! Page-wide mount registry.
//!
//! The carousel and the menu each own DOM listeners and timers. A page has
//! one of each, so mounting again detaches whatever was mounted before.

/// Something that can release its listeners and timers.
pub trait Detach {
    /// Stop reacting to the page. Must be idempotent.
    fn detach(&mut self);
}

/// Holds the one live mount of a kind.
#[derive(Debug)]
pub struct MountSlot<T: Detach> {
    current: Option<T>,
}

impl<T: Detach> Default for MountSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Detach> MountSlot<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Detach the previous mount, if any, and keep `next`.
    ///
    /// Returns whether something was replaced.
    pub fn install(&mut self, next: T) -> bool {
        let replaced = self.clear();
        self.current = Some(next);
        replaced
    }

    /// Detach and forget the current mount.
    pub fn clear(&mut self) -> bool {
        match self.current.take() {
            Some(mut previous) => {
                previous.detach();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub const fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Mount {
        id: u32,
        detached: Rc<Cell<u32>>,
    }

    impl Detach for Mount {
        fn detach(&mut self) {
            self.detached.set(self.detached.get() + 1);
        }
    }

    fn mount(id: u32) -> (Mount, Rc<Cell<u32>>) {
        let detached = Rc::new(Cell::new(0));
        (
            Mount {
                id,
                detached: Rc::clone(&detached),
            },
            detached,
        )
    }

    #[test]
    fn second_mount_detaches_the_first() {
        let mut slot = MountSlot::new();
        let (first, first_detached) = mount(1);
        let (second, second_detached) = mount(2);

        assert!(!slot.install(first));
        assert!(slot.install(second));
        assert_eq!(first_detached.get(), 1);
        assert_eq!(second_detached.get(), 0);
        assert_eq!(slot.current().map(|m| m.id), Some(2));
    }

    #[test]
    fn clear_detaches_once() {
        let mut slot = MountSlot::new();
        let (only, detached) = mount(7);
        slot.install(only);
        assert!(slot.clear());
        assert!(!slot.clear());
        assert_eq!(detached.get(), 1);
        assert!(slot.current().is_none());
    }
}
