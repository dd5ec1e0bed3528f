//! The closed set of theme keys and the record that holds one color per key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StilError;

/// One of the six theme variables the widget controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeKey {
    Primary,
    Secondary,
    Dark,
    DarkAccent,
    Light,
    LightAccent,
}

impl ThemeKey {
    /// All keys in panel order.
    pub const ALL: [ThemeKey; 6] = [
        ThemeKey::Primary,
        ThemeKey::Secondary,
        ThemeKey::Dark,
        ThemeKey::DarkAccent,
        ThemeKey::Light,
        ThemeKey::LightAccent,
    ];

    /// Raw key name, as shown in the panel and stored on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Dark => "dark",
            Self::DarkAccent => "dark-accent",
            Self::Light => "light",
            Self::LightAccent => "light-accent",
        }
    }

    /// Custom property name for this key under `prefix` (e.g. `--ol-dark`).
    #[must_use]
    pub fn property_name(self, prefix: &str) -> String {
        format!("{prefix}{}", self.as_str())
    }
}

impl fmt::Display for ThemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeKey {
    type Err = StilError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == name)
            .ok_or_else(|| StilError::UnknownThemeKey {
                name: name.to_owned(),
            })
    }
}

/// One color string per [`ThemeKey`]. An empty string means "no override".
///
/// Missing fields deserialize as empty and unknown fields are ignored, so a
/// record written by an older widget with fewer keys still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorMapping {
    pub primary: String,
    pub secondary: String,
    pub dark: String,
    #[serde(rename = "dark-accent")]
    pub dark_accent: String,
    pub light: String,
    #[serde(rename = "light-accent")]
    pub light_accent: String,
}

impl ColorMapping {
    #[must_use]
    pub fn get(&self, key: ThemeKey) -> &str {
        match key {
            ThemeKey::Primary => &self.primary,
            ThemeKey::Secondary => &self.secondary,
            ThemeKey::Dark => &self.dark,
            ThemeKey::DarkAccent => &self.dark_accent,
            ThemeKey::Light => &self.light,
            ThemeKey::LightAccent => &self.light_accent,
        }
    }

    fn slot_mut(&mut self, key: ThemeKey) -> &mut String {
        match key {
            ThemeKey::Primary => &mut self.primary,
            ThemeKey::Secondary => &mut self.secondary,
            ThemeKey::Dark => &mut self.dark,
            ThemeKey::DarkAccent => &mut self.dark_accent,
            ThemeKey::Light => &mut self.light,
            ThemeKey::LightAccent => &mut self.light_accent,
        }
    }

    pub fn set(&mut self, key: ThemeKey, value: impl Into<String>) {
        *self.slot_mut(key) = value.into();
    }

    /// Iterate `(key, value)` pairs in panel order.
    pub fn iter(&self) -> impl Iterator<Item = (ThemeKey, &str)> + '_ {
        ThemeKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    /// True when no key carries an override.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, value)| is_unset(value))
    }
}

/// Whether a stored value means "no override". Only the empty string does;
/// anything else, whitespace included, is written as given.
#[must_use]
pub fn is_unset(value: &str) -> bool {
    value.is_empty()
}
