//! Deterministic in-memory hosts.
//!
//! [`MemoryPage`] models just enough of a document for the widget: a set of
//! containers addressable by selector, stylesheet defaults for custom
//! properties, inline overrides on the body, and the mounted view trees.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Result, StilError};
use crate::host::{Document, KeyValueStorage, MountId, MountTarget, StyleScope};
use crate::view::ElementSpec;

/// `localStorage` stand-in.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
    unavailable: bool,
}

impl MemoryStorage {
    /// Storage whose every operation fails, like `localStorage` with cookies
    /// disabled.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            items: BTreeMap::new(),
            unavailable: true,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn check(&self) -> Result<()> {
        if self.unavailable {
            return Err(StilError::storage("storage is unavailable"));
        }
        Ok(())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.check()?;
        self.items.remove(key);
        Ok(())
    }
}

/// Where a [`MemoryPage`] mount lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    Container(String),
    Body,
}

#[derive(Debug, Clone)]
struct Mounted {
    placement: Placement,
    view: ElementSpec,
}

/// In-memory document with a styled body.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    containers: BTreeSet<String>,
    defaults: BTreeMap<String, String>,
    inline: BTreeMap<String, String>,
    rejected: BTreeSet<String>,
    mounts: BTreeMap<MountId, Mounted>,
    next_id: u64,
}

impl MemoryPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `selector` resolve to an (empty) container.
    #[must_use]
    pub fn with_container(mut self, selector: impl Into<String>) -> Self {
        self.containers.insert(selector.into());
        self
    }

    /// Stylesheet value for a custom property.
    #[must_use]
    pub fn with_default(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.insert(name.into(), value.into());
        self
    }

    /// Make writes to `name` fail.
    #[must_use]
    pub fn with_rejected_property(mut self, name: impl Into<String>) -> Self {
        self.rejected.insert(name.into());
        self
    }

    #[must_use]
    pub fn inline_property(&self, name: &str) -> Option<&str> {
        self.inline.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn inline_properties(&self) -> &BTreeMap<String, String> {
        &self.inline
    }

    /// Effective value: inline override, then stylesheet default.
    #[must_use]
    pub fn computed(&self, name: &str) -> &str {
        self.inline
            .get(name)
            .or_else(|| self.defaults.get(name))
            .map_or("", String::as_str)
    }

    /// Views mounted at `placement`, in mount order.
    pub fn mounted_at<'a>(
        &'a self,
        placement: &'a Placement,
    ) -> impl Iterator<Item = &'a ElementSpec> + 'a {
        self.mounts
            .values()
            .filter(move |mounted| &mounted.placement == placement)
            .map(|mounted| &mounted.view)
    }

    #[must_use]
    pub fn view(&self, id: MountId) -> Option<&ElementSpec> {
        self.mounts.get(&id).map(|mounted| &mounted.view)
    }

    #[must_use]
    pub fn mount_count(&self) -> usize {
        self.mounts.len()
    }
}

impl StyleScope for MemoryPage {
    fn set_property(&mut self, name: &str, value: &str) -> Result<()> {
        if self.rejected.contains(name) {
            return Err(StilError::host(format!("cannot set {name}")));
        }
        self.inline.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_property(&mut self, name: &str) -> Result<()> {
        if self.rejected.contains(name) {
            return Err(StilError::host(format!("cannot remove {name}")));
        }
        self.inline.remove(name);
        Ok(())
    }

    fn computed_property(&self, name: &str) -> String {
        self.computed(name).to_owned()
    }
}

impl Document for MemoryPage {
    fn mount(&mut self, target: MountTarget<'_>, view: &ElementSpec) -> Result<MountId> {
        let placement = match target {
            MountTarget::Body => Placement::Body,
            MountTarget::Selector(selector) if self.containers.contains(selector) => {
                Placement::Container(selector.to_owned())
            }
            MountTarget::Selector(selector) => {
                return Err(StilError::missing_container(selector));
            }
        };
        let id = MountId(self.next_id);
        self.next_id += 1;
        self.mounts.insert(
            id,
            Mounted {
                placement,
                view: view.clone(),
            },
        );
        Ok(id)
    }

    fn unmount(&mut self, id: MountId) {
        self.mounts.remove(&id);
    }
}
