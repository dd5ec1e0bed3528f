//! Reads and writes the color record under one fixed storage key.

use crate::error::{Result, StilError};
use crate::host::KeyValueStorage;
use crate::mapping::ColorMapping;

/// Persisted copy of the [`ColorMapping`], stored as a JSON object.
#[derive(Debug)]
pub struct Persistence<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> Persistence<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// `Ok(None)` when nothing was ever saved.
    pub fn load(&self) -> Result<Option<ColorMapping>> {
        let Some(text) = self.storage.get_item(&self.key)? else {
            return Ok(None);
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| StilError::CorruptRecord {
                key: self.key.clone(),
                source,
            })
    }

    /// Overwrite the stored record with the complete `mapping`.
    pub fn save(&mut self, mapping: &ColorMapping) -> Result<()> {
        let text = serde_json::to_string(mapping)
            .map_err(|err| StilError::storage(format!("encode record: {err}")))?;
        self.storage.set_item(&self.key, &text)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.storage.remove_item(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::ThemeKey;
    use crate::memory::MemoryStorage;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn persistence() -> Persistence<MemoryStorage> {
        Persistence::new(MemoryStorage::default(), "stilColors")
    }

    #[test]
    fn load_without_record_is_none() {
        assert_eq!(persistence().load().unwrap(), None);
    }

    #[test]
    fn save_writes_the_full_record() {
        let mut persistence = persistence();
        let mut mapping = ColorMapping::default();
        mapping.set(ThemeKey::Primary, "#ff0000");
        persistence.save(&mapping).unwrap();

        let stored = persistence.storage().get_item("stilColors").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(value["primary"], "#ff0000");
        assert_eq!(value["light-accent"], "");
        assert_eq!(value.as_object().unwrap().len(), 6);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut persistence = persistence();
        persistence.save(&ColorMapping::default()).unwrap();
        persistence.clear().unwrap();
        persistence.clear().unwrap();
        assert_eq!(persistence.storage().get_item("stilColors").unwrap(), None);
    }

    #[test]
    fn corrupted_record_is_an_error() {
        let mut storage = MemoryStorage::default();
        storage.set_item("stilColors", "{not json").unwrap();
        let persistence = Persistence::new(storage, "stilColors");
        assert!(matches!(
            persistence.load(),
            Err(StilError::CorruptRecord { key, .. }) if key == "stilColors"
        ));
    }

    #[test]
    fn failing_storage_is_an_error() {
        let persistence = Persistence::new(MemoryStorage::unavailable(), "stilColors");
        assert!(matches!(persistence.load(), Err(StilError::Storage { .. })));
    }

    fn color() -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), "#[0-9a-f]{6}"]
    }

    proptest! {
        #[test]
        fn save_then_load_is_identical(values in prop::collection::vec(color(), 6)) {
            let mut mapping = ColorMapping::default();
            for (key, value) in ThemeKey::ALL.into_iter().zip(values) {
                mapping.set(key, value);
            }
            let mut persistence = persistence();
            persistence.save(&mapping).unwrap();
            prop_assert_eq!(persistence.load().unwrap(), Some(mapping));
        }
    }
}
