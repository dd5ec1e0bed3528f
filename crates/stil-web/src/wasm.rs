//! `wasm-bindgen` exports.
//!
//! One switcher per page. It is installed by [`init_switch_color`] and lives
//! in a thread-local slot for the rest of the page session; the other exports
//! operate on it and do nothing before it exists.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Reflect;
use stil_core::{SwitcherConfig, Switcher, ThemeKey, UiEvent};
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::bootstrap;
use crate::dom::{Dispatch, WebPage, js_err};
use crate::storage::LocalStorage;

type WebSwitcher = Switcher<LocalStorage, WebPage>;

thread_local! {
    static INSTANCE: RefCell<Option<Rc<RefCell<WebSwitcher>>>> = const { RefCell::new(None) };
}

fn console(level: &str, msg: &str) {
    let global = js_sys::global();
    let Ok(console) = Reflect::get(&global, &"console".into()) else {
        return;
    };
    let Ok(log) = Reflect::get(&console, &level.into()) else {
        return;
    };
    let Ok(log_fn) = log.dyn_into::<js_sys::Function>() else {
        return;
    };
    let _ = log_fn.call1(&console, &JsValue::from_str(msg));
}

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            console("error", &format!("stil panic: {info}"));
        }));
    });
}

fn with_instance<R>(f: impl FnOnce(&mut WebSwitcher) -> R) -> Option<R> {
    let switcher = INSTANCE.with(|slot| slot.borrow().clone())?;
    let mut switcher = switcher.try_borrow_mut().ok()?;
    Some(f(&mut switcher))
}

fn install(config: SwitcherConfig) {
    if INSTANCE.with(|slot| slot.borrow().is_some()) {
        console("warn", "stil: theme switcher already installed");
        return;
    }
    let Some(window) = web_sys::window() else {
        console("warn", "stil: no window");
        return;
    };
    let page = match WebPage::from_window(window.clone()) {
        Ok(page) => page,
        Err(err) => {
            console("warn", &format!("stil: {err}"));
            return;
        }
    };
    let storage = LocalStorage::from_window(&window);
    let switcher = Rc::new(RefCell::new(Switcher::new(config, storage, page)));

    let weak = Rc::downgrade(&switcher);
    let dispatch: Dispatch = Rc::new(move |event: UiEvent| {
        let Some(switcher) = weak.upgrade() else {
            return;
        };
        match switcher.try_borrow_mut() {
            Ok(mut switcher) => switcher.handle(event),
            Err(_) => warn!(?event, "dropping re-entrant theme switcher event"),
        }
    });
    switcher.borrow_mut().page_mut().set_dispatch(dispatch);

    let report = switcher.borrow_mut().start();
    for message in bootstrap::startup_messages(&report) {
        console("warn", &message);
    }
    INSTANCE.with(|slot| *slot.borrow_mut() = Some(switcher));
}

/// Install the theme switcher once the document is ready.
///
/// `config_json` may override any [`SwitcherConfig`] field; invalid JSON is
/// reported on the console and the defaults are used.
#[wasm_bindgen(js_name = initSwitchColor)]
pub fn init_switch_color(config_json: Option<String>) -> Result<(), JsValue> {
    install_panic_hook();
    let (config, warning) = bootstrap::parse_config(config_json.as_deref());
    if let Some(err) = warning {
        console("warn", &format!("stil: {err}"));
    }

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("stil: no document"))?;
    if bootstrap::waits_for_dom(&document.ready_state()) {
        let on_ready = Closure::once_into_js(move || install(config));
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
            .map_err(|err| JsValue::from_str(&js_err(err).to_string()))?;
    } else {
        install(config);
    }
    Ok(())
}

#[wasm_bindgen(js_name = openPanel)]
pub fn open_panel() {
    with_instance(WebSwitcher::open_panel);
}

#[wasm_bindgen(js_name = closePanel)]
pub fn close_panel() {
    with_instance(WebSwitcher::close_panel);
}

/// Clear every override and the persisted record.
#[wasm_bindgen]
pub fn reset() {
    with_instance(WebSwitcher::reset);
}

/// Set one theme color as if it was picked in the panel. Returns `false` for
/// an unknown key or before the switcher is installed.
#[wasm_bindgen(js_name = setColor)]
pub fn set_color(key: &str, value: &str) -> bool {
    let key = match key.parse::<ThemeKey>() {
        Ok(key) => key,
        Err(err) => {
            console("warn", &format!("stil: {err}"));
            return false;
        }
    };
    with_instance(|switcher| switcher.handle(UiEvent::color(key, value))).is_some()
}

/// Current colors as a JSON object keyed by theme key.
#[wasm_bindgen(js_name = colorsJson)]
pub fn colors_json() -> Option<String> {
    with_instance(|switcher| bootstrap::colors_json(switcher.store().mapping()))
}

#[wasm_bindgen(js_name = isPanelOpen)]
pub fn is_panel_open() -> bool {
    with_instance(|switcher| switcher.is_panel_open()).unwrap_or(false)
}
