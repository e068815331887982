//! Native-target behaviour of the web frontend.
//!
//! The DOM adapter only exists on `wasm32`; elsewhere the crate exposes a
//! stub so workspace builds stay green, plus the option parsing used by the
//! JS entry point.

#![cfg(not(target_arch = "wasm32"))]

use carousel_web::{MountError, MountOptions, ServicesCarousel};

#[test]
fn native_mount_reports_missing_document() {
    let result = ServicesCarousel::mount(Some(MountOptions::default()));
    assert_eq!(result.err(), Some(MountError::NoDocument));
}

#[test]
fn options_drive_both_halves() {
    let options = MountOptions::from_json(
        r##"{
            "fillFrameMs": 33,
            "keyboardScope": "document",
            "breakpoints": {"tablet": 960},
            "selectors": {"menuPanel": "#nav", "submenuClass": "sub"}
        }"##,
    )
    .unwrap();
    assert_eq!(options.carousel.fill_frame_ms, 33);
    assert_eq!(options.carousel.breakpoints.tablet, 960);
    assert_eq!(options.selectors.menu_panel, "#nav");
    assert_eq!(options.selectors.submenu_class, "sub");
    assert_eq!(options.selectors.menu_button, ".mobile_menu_btn");
}
