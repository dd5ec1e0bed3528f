use tracing::debug;

use crate::error::StilError;
use crate::host::{KeyValueStorage, StyleScope};
use crate::mapping::{ColorMapping, ThemeKey};
use crate::persistence::Persistence;

/// Where [`ColorStore::initialize`] took its values from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    Persisted,
    /// Read from the page's computed custom properties.
    Computed,
}

/// Outcome of [`ColorStore::initialize`].
#[derive(Debug)]
pub struct Seeding {
    pub source: SeedSource,
    /// Load failure that forced computed seeding, if any.
    pub recovered: Option<StilError>,
}

/// In-memory color record for the page session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorStore {
    mapping: ColorMapping,
}

impl ColorStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: ThemeKey) -> &str {
        self.mapping.get(key)
    }

    pub fn set(&mut self, key: ThemeKey, value: impl Into<String>) {
        self.mapping.set(key, value);
    }

    pub fn reset_all(&mut self) {
        self.mapping = ColorMapping::default();
    }

    #[must_use]
    pub fn mapping(&self) -> &ColorMapping {
        &self.mapping
    }

    /// Seed from the persisted record, or from the page's current computed
    /// values when nothing usable is persisted.
    pub fn initialize<S, C>(
        &mut self,
        persistence: &Persistence<S>,
        scope: &C,
        prefix: &str,
    ) -> Seeding
    where
        S: KeyValueStorage,
        C: StyleScope + ?Sized,
    {
        let recovered = match persistence.load() {
            Ok(Some(record)) => {
                debug!(key = persistence.key(), "seeding colors from persisted record");
                self.mapping = record;
                return Seeding {
                    source: SeedSource::Persisted,
                    recovered: None,
                };
            }
            Ok(None) => None,
            Err(err) => Some(err),
        };

        debug!("seeding colors from computed style");
        for key in ThemeKey::ALL {
            let value = scope.computed_property(&key.property_name(prefix));
            self.mapping.set(key, value);
        }
        Seeding {
            source: SeedSource::Computed,
            recovered,
        }
    }
}
