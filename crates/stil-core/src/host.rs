//! Seams between the core and the page it runs in.
//!
//! A browser host implements these with `web-sys`; [`crate::memory`] provides
//! deterministic in-memory versions.

use crate::error::Result;
use crate::view::ElementSpec;

/// Durable per-origin string storage (`localStorage` in a browser).
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
    /// Removing an absent key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

/// The style scope theme properties are written to (the document body).
pub trait StyleScope {
    fn set_property(&mut self, name: &str, value: &str) -> Result<()>;
    fn remove_property(&mut self, name: &str) -> Result<()>;
    /// Current effective value, inline overrides included. Empty when the
    /// property is not defined anywhere.
    fn computed_property(&self, name: &str) -> String;
}

/// Where a rendered view is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountTarget<'a> {
    /// First element matching a CSS selector.
    Selector(&'a str),
    Body,
}

/// Handle for a mounted view, issued by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MountId(pub u64);

/// Renders [`ElementSpec`] trees into the page.
///
/// Interactions with rendered elements come back to the controller as
/// [`crate::UiEvent`]s; how they are delivered is up to the host.
pub trait Document {
    /// Render `view` and append it as the last child of `target`.
    ///
    /// Fails with [`crate::StilError::MissingContainer`] when a selector
    /// matches nothing.
    fn mount(&mut self, target: MountTarget<'_>, view: &ElementSpec) -> Result<MountId>;

    /// Detach a mounted view. Unknown ids are ignored.
    fn unmount(&mut self, id: MountId);
}
