#![forbid(unsafe_code)]

//! Host-agnostic core of the `stil` theme color switcher.
//!
//! # Role in stil
//! The widget lets a visitor override six theme colors of a page through
//! CSS custom properties and remembers the choice across visits. This crate
//! holds everything that does not need a browser: the closed color record,
//! the store that owns it, persistence, the style applier, the declarative
//! panel views and the [`Switcher`] controller that wires them together.
//!
//! # This crate provides
//! - [`ThemeKey`] and [`ColorMapping`] for the fixed six-key record.
//! - [`ColorStore`] with persisted-or-computed seeding.
//! - [`Persistence`] over any [`KeyValueStorage`].
//! - [`apply_all`] over any [`StyleScope`].
//! - [`ElementSpec`] view trees built by the [`modal`] module.
//! - [`Switcher`], the single owner of the store, driven by [`UiEvent`]s.
//! - [`memory`] hosts for headless use and tests.
//!
//! # How it fits in the system
//! `stil-web` implements the host traits with `web-sys` (body style,
//! `localStorage`, DOM rendering) and forwards DOM events to the
//! [`Switcher`]. Native tests drive the same controller through
//! [`memory::MemoryPage`] and [`memory::MemoryStorage`].

/// Style applier: store contents to custom properties.
pub mod applier;
/// Widget configuration.
pub mod config;
/// Error type shared by the core and hosts.
pub mod error;
/// Traits a host environment implements.
pub mod host;
/// The closed six-key color record.
pub mod mapping;
/// In-memory hosts.
pub mod memory;
/// Trigger button and color panel views.
pub mod modal;
/// Persisted record adapter.
pub mod persistence;
/// Color store with seeding.
pub mod store;
/// Controller wiring store, persistence, styles and views.
pub mod switcher;
/// Declarative element trees.
pub mod view;

pub use applier::apply_all;
pub use config::SwitcherConfig;
pub use error::{Result, StilError};
pub use host::{Document, KeyValueStorage, MountId, MountTarget, StyleScope};
pub use mapping::{ColorMapping, ThemeKey};
pub use persistence::Persistence;
pub use store::{ColorStore, SeedSource, Seeding};
pub use switcher::{StartupReport, Switcher};
pub use view::{Action, ElementSpec, EventBinding, EventKind, UiEvent};
