use stil_core::{KeyValueStorage, Result, StilError};
use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

fn storage_err(value: JsValue) -> StilError {
    StilError::storage(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// `window.localStorage`. Every call fails when the browser denies access.
pub struct LocalStorage {
    inner: Option<Storage>,
}

impl LocalStorage {
    #[must_use]
    pub fn from_window(window: &Window) -> Self {
        Self {
            inner: window.local_storage().ok().flatten(),
        }
    }

    fn inner(&self) -> Result<&Storage> {
        self.inner
            .as_ref()
            .ok_or_else(|| StilError::storage("localStorage is unavailable"))
    }
}

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.inner()?.get_item(key).map_err(storage_err)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.inner()?.set_item(key, value).map_err(storage_err)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.inner()?.remove_item(key).map_err(storage_err)
    }
}
