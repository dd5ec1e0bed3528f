#![forbid(unsafe_code)]

//! Browser frontend for the `stil` theme color switcher.
//!
//! This crate binds [`stil_core`] to a real page: the body's inline style
//! and computed style, `localStorage`, and DOM rendering of the panel views.
//! The JS entry point is `initSwitchColor(configJson?)`, which installs the
//! widget once the document is ready.
//!
//! Everything that touches `web-sys` is only compiled on `wasm32`; the
//! [`bootstrap`] helpers are host-independent and tested natively.

pub mod bootstrap;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod storage;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use dom::WebPage;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
#[cfg(target_arch = "wasm32")]
pub use wasm::{
    close_panel, colors_json, init_switch_color, is_panel_open, open_panel, reset, set_color,
};
