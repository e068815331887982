#![forbid(unsafe_code)]

//! WASM frontend for the services carousel.
//!
//! This crate is intentionally host-specific (web/WASM). It provides:
//! - a DOM implementation of `carousel_core::Surface`,
//! - DOM event wiring (card/indicator clicks, arrow keys, hover, resize),
//! - a single self-rescheduling host timer driving the controller clock,
//! - mobile menu wiring,
//! - a `wasm-bindgen` entry point (`ServicesCarousel`, `mountMobileMenu`).
//!
//! Option parsing, error types, and the mount registry compile on every
//! target so they can be tested natively. Mounting again (from JS or after
//! autostart) detaches the previous carousel or menu.

pub mod error;
pub mod options;
pub mod slot;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod logging;
#[cfg(target_arch = "wasm32")]
mod menu_dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use error::MountError;
pub use options::{MountOptions, Selectors};
pub use slot::{Detach, MountSlot};

#[cfg(target_arch = "wasm32")]
pub use wasm::{ServicesCarousel, mount_mobile_menu};

/// Native builds compile this crate as a stub so `cargo check --workspace` stays
/// green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct ServicesCarousel;

#[cfg(not(target_arch = "wasm32"))]
impl ServicesCarousel {
    /// There is no DOM to mount on outside the browser.
    pub fn mount(_options: Option<MountOptions>) -> Result<Self, MountError> {
        Err(MountError::NoDocument)
    }
}
