//! The controller that owns the color store.
//!
//! [`Switcher`] is the only place the store is mutated. Every mutation runs
//! to completion (store update, persist, re-apply) before the next
//! [`UiEvent`] is handled, so the page and the persisted record never lag the
//! store.

use tracing::{debug, warn};

use crate::applier::apply_all;
use crate::config::SwitcherConfig;
use crate::error::StilError;
use crate::host::{Document, KeyValueStorage, MountId, MountTarget, StyleScope};
use crate::mapping::ThemeKey;
use crate::modal;
use crate::persistence::Persistence;
use crate::store::{ColorStore, SeedSource};
use crate::view::{Action, UiEvent};

/// What happened during [`Switcher::start`].
#[derive(Debug)]
pub struct StartupReport {
    pub trigger_mounted: bool,
    pub seed: SeedSource,
    /// Non-fatal failures; startup continued past each of them.
    pub warnings: Vec<StilError>,
}

impl StartupReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Theme color switcher bound to a storage and a page.
#[derive(Debug)]
pub struct Switcher<S, P> {
    config: SwitcherConfig,
    store: ColorStore,
    persistence: Persistence<S>,
    page: P,
    trigger: Option<MountId>,
    panel: Option<MountId>,
}

impl<S, P> Switcher<S, P>
where
    S: KeyValueStorage,
    P: StyleScope + Document,
{
    pub fn new(config: SwitcherConfig, storage: S, page: P) -> Self {
        let persistence = Persistence::new(storage, config.storage_key.clone());
        Self {
            config,
            store: ColorStore::new(),
            persistence,
            page,
            trigger: None,
            panel: None,
        }
    }

    /// Page-ready wiring: mount the trigger, seed the store, apply styles.
    ///
    /// A missing trigger container does not stop seeding and applying; it is
    /// reported in [`StartupReport::warnings`].
    pub fn start(&mut self) -> StartupReport {
        let mut warnings = Vec::new();

        let trigger = modal::trigger_button(&self.config);
        match self
            .page
            .mount(MountTarget::Selector(&self.config.container_selector), &trigger)
        {
            Ok(id) => self.trigger = Some(id),
            Err(err) => {
                warn!(error = %err, "theme switcher trigger not mounted");
                warnings.push(err);
            }
        }

        let seeding =
            self.store
                .initialize(&self.persistence, &self.page, &self.config.property_prefix);
        if let Some(err) = seeding.recovered {
            warn!(error = %err, "persisted colors unusable, seeded from computed style");
            warnings.push(err);
        }
        self.apply();

        StartupReport {
            trigger_mounted: self.trigger.is_some(),
            seed: seeding.source,
            warnings,
        }
    }

    /// Dispatch a host-reported interaction.
    pub fn handle(&mut self, event: UiEvent) {
        match event.action {
            Action::OpenPanel => self.open_panel(),
            Action::ClosePanel => self.close_panel(),
            Action::Reset => self.reset(),
            Action::SetColor(key) => match event.value {
                Some(value) => self.set_color(key, value),
                None => warn!(%key, "color change without a value"),
            },
        }
    }

    /// Mount the panel on the body, replacing any panel already open.
    pub fn open_panel(&mut self) {
        self.close_panel();
        let view = modal::panel(self.store.mapping(), &self.config);
        match self.page.mount(MountTarget::Body, &view) {
            Ok(id) => {
                debug!("color panel opened");
                self.panel = Some(id);
            }
            Err(err) => warn!(error = %err, "color panel not mounted"),
        }
    }

    /// Leaves the store and the persisted record untouched.
    pub fn close_panel(&mut self) {
        if let Some(id) = self.panel.take() {
            self.page.unmount(id);
            debug!("color panel closed");
        }
    }

    /// Store, persist, re-apply.
    pub fn set_color(&mut self, key: ThemeKey, value: impl Into<String>) {
        self.store.set(key, value);
        debug!(%key, value = self.store.get(key), "theme color changed");
        if let Err(err) = self.persistence.save(self.store.mapping()) {
            warn!(error = %err, "theme colors not persisted");
        }
        self.apply();
    }

    /// Drop the persisted record and every override.
    pub fn reset(&mut self) {
        if let Err(err) = self.persistence.clear() {
            warn!(error = %err, "persisted theme colors not cleared");
        }
        self.store.reset_all();
        self.apply();
        debug!("theme colors reset");

        if self.config.refresh_on_reset && self.panel.is_some() {
            self.open_panel();
        }
    }

    fn apply(&mut self) {
        apply_all(
            self.store.mapping(),
            &mut self.page,
            &self.config.property_prefix,
        );
    }

    #[must_use]
    pub fn store(&self) -> &ColorStore {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &SwitcherConfig {
        &self.config
    }

    #[must_use]
    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    #[must_use]
    pub fn panel(&self) -> Option<MountId> {
        self.panel
    }

    #[must_use]
    pub fn trigger(&self) -> Option<MountId> {
        self.trigger
    }

    #[must_use]
    pub fn is_panel_open(&self) -> bool {
        self.panel.is_some()
    }
}
