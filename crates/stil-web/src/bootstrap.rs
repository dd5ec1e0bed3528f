//! Host-independent glue between the JS API and [`stil_core`].
//!
//! Kept out of the `wasm` module so it can be tested natively.

use stil_core::{ColorMapping, StartupReport, StilError, SwitcherConfig};
use tracing::warn;

/// Config from the optional JSON passed to `initSwitchColor`.
///
/// Invalid JSON falls back to defaults; the error is returned for the caller
/// to surface.
pub fn parse_config(json: Option<&str>) -> (SwitcherConfig, Option<StilError>) {
    let Some(json) = json.map(str::trim).filter(|json| !json.is_empty()) else {
        return (SwitcherConfig::default(), None);
    };
    match SwitcherConfig::from_json(json) {
        Ok(config) => (config, None),
        Err(err) => {
            warn!(error = %err, "using default theme switcher config");
            (SwitcherConfig::default(), Some(err))
        }
    }
}

/// Whether install has to wait for `DOMContentLoaded`, given
/// `document.readyState`.
#[must_use]
pub fn waits_for_dom(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Console lines for a startup report, one per warning.
#[must_use]
pub fn startup_messages(report: &StartupReport) -> Vec<String> {
    report
        .warnings
        .iter()
        .map(|warning| format!("stil: {warning}"))
        .collect()
}

/// The record as the JS API hands it out.
#[must_use]
pub fn colors_json(mapping: &ColorMapping) -> String {
    serde_json::to_string(mapping).unwrap_or_else(|_| String::from("{}"))
}
