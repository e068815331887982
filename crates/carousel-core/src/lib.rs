#![forbid(unsafe_code)]

//! `carousel-core` is the host-independent half of the services carousel.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment pushes interactions and
//!   reports the viewport width through a [`Surface`].
//! - **Deterministic time**: the host supplies monotonic time through a
//!   [`Clock`]; tests drive it with [`ManualClock`].
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.
//!
//! This crate does not bind to `wasm-bindgen`. `carousel-web` wraps it with
//! a DOM adapter and a JS entry point.

pub mod background;
pub mod carousel;
pub mod clock;
pub mod config;
pub mod error;
pub mod menu;
pub mod surface;
pub mod timers;
pub mod titles;
pub mod viewport;

pub use background::{PlaybackFailure, present_background, present_title};
pub use carousel::{Carousel, CarouselEvent, NavKey};
pub use clock::{Clock, ManualClock};
pub use config::{CarouselConfig, KeyboardScope};
pub use error::CarouselError;
pub use menu::{MenuEvent, MenuSurface, MobileMenu};
pub use surface::{RecordingSurface, Surface, SurfaceOp};
pub use timers::{TimerSlot, Timers};
pub use titles::{Declaration, TitleCard, title_for};
pub use viewport::{Breakpoints, ViewportMode};
