use serde::{Deserialize, Serialize};

use crate::error::{Result, StilError};

/// Widget settings. Defaults match the stock footer widget.
///
/// Every field is optional on the wire:
/// ```json
/// { "container_selector": "#footer-nav", "refresh_on_reset": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitcherConfig {
    /// `localStorage` key holding the persisted record.
    pub storage_key: String,
    /// Prepended to each theme key to form the custom property name.
    pub property_prefix: String,
    /// Element the trigger button is appended to.
    pub container_selector: String,
    pub trigger_label: String,
    pub close_label: String,
    pub reset_label: String,
    /// Re-render an open panel after reset so its inputs show the cleared
    /// values. When false the inputs keep their old values until reopened.
    pub refresh_on_reset: bool,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            storage_key: "stilColors".to_owned(),
            property_prefix: "--ol-".to_owned(),
            container_selector: ".footer .navigation__list".to_owned(),
            trigger_label: "switch color".to_owned(),
            close_label: "close".to_owned(),
            reset_label: "reset".to_owned(),
            refresh_on_reset: true,
        }
    }
}

impl SwitcherConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| StilError::InvalidConfig { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(
            SwitcherConfig::from_json("{}").unwrap(),
            SwitcherConfig::default()
        );
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            SwitcherConfig::from_json(r##"{"container_selector":"#nav","refresh_on_reset":false}"##)
                .unwrap();
        assert_eq!(config.container_selector, "#nav");
        assert!(!config.refresh_on_reset);
        assert_eq!(config.storage_key, "stilColors");
        assert_eq!(config.property_prefix, "--ol-");
    }

    #[test]
    fn malformed_json_is_invalid_config() {
        assert!(matches!(
            SwitcherConfig::from_json("{storage_key:"),
            Err(StilError::InvalidConfig { .. })
        ));
    }
}
