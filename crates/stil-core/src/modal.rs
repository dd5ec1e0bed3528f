//! Trigger button and color panel views.

use crate::config::SwitcherConfig;
use crate::mapping::{ColorMapping, ThemeKey};
use crate::view::{Action, ElementSpec, EventKind};

/// Inline styles; they rely on the host page's `--ol-*` design tokens.
pub mod styles {
    pub const PANEL: &str = "position: fixed; padding: var(--ol-space, 1em); z-index: 100; \
        color: var(--ol-foreground); background: var(--ol-background90); \
        border-radius: var(--ol-border-radius); top: 50%; left: 50%; \
        transform: translate(-50%, -50%);";
    pub const FIELD: &str = "background-color: var(--ol-background); padding: 1em; \
        border-radius: var(--ol-border-radius); margin-top: 0.5em; display: flex; \
        flex-direction: row-reverse; justify-content: space-between; align-items: center;";
    pub const CLOSE_BUTTON: &str = "position: absolute; left: 100%; bottom: 100%;";
    pub const INPUT: &str =
        "width: 2em; height: 2em; margin: 0.5em; border: 0; padding: 0; background: none;";
    pub const RESET_BUTTON: &str = "margin: 0.5em auto auto auto;";
}

/// Id of the panel root, so hosts and tests can find it.
pub const PANEL_ID: &str = "stil-color-panel";

/// The footer button that opens the panel.
#[must_use]
pub fn trigger_button(config: &SwitcherConfig) -> ElementSpec {
    ElementSpec::new("button")
        .class("button")
        .text(&config.trigger_label)
        .on(EventKind::Click, Action::OpenPanel)
}

/// One labeled color input bound to `key`.
#[must_use]
pub fn color_field(key: ThemeKey, value: &str) -> ElementSpec {
    let label = ElementSpec::new("label")
        .attr("for", key.as_str())
        .text(key.as_str());
    let input = ElementSpec::new("input")
        .id(key.as_str())
        .attr("type", "color")
        .attr("value", value.trim())
        .style(styles::INPUT)
        .on(EventKind::Change, Action::SetColor(key));
    ElementSpec::new("div")
        .class("input-field")
        .style(styles::FIELD)
        .child(label)
        .child(input)
}

/// Floating panel: close button, one field per key in panel order, reset
/// button.
#[must_use]
pub fn panel(mapping: &ColorMapping, config: &SwitcherConfig) -> ElementSpec {
    let close = ElementSpec::new("button")
        .class("button")
        .style(styles::CLOSE_BUTTON)
        .text(&config.close_label)
        .on(EventKind::Click, Action::ClosePanel);
    let reset = ElementSpec::new("button")
        .class("button")
        .style(styles::RESET_BUTTON)
        .text(&config.reset_label)
        .on(EventKind::Click, Action::Reset);

    ElementSpec::new("div")
        .id(PANEL_ID)
        .class("card")
        .style(styles::PANEL)
        .child(close)
        .children(mapping.iter().map(|(key, value)| color_field(key, value)))
        .child(reset)
}
