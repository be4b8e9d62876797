use leptos::prelude::*;

use crate::section::{ActiveSectionStore, Section, VisibilityMap};
use crate::theme::{KeyValueStore, StorageError, Theme, ThemeStore};

/// `window.localStorage`, reachable only once hydrated.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = window()
                .local_storage()
                .ok()
                .flatten()
                .ok_or(StorageError::Unavailable)?;
            storage.get_item(key).map_err(|_| StorageError::Unavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = window()
                .local_storage()
                .ok()
                .flatten()
                .ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write {
                    key: key.to_string(),
                    reason: format!("{e:?}"),
                })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    store: RwSignal<ThemeStore<BrowserStorage>>,
}

impl ThemeContext {
    pub fn get(&self) -> Theme {
        self.store.with(|s| s.get())
    }

    pub fn restore(&self, prefers_dark: bool) {
        self.store
            .set(ThemeStore::load(BrowserStorage, prefers_dark));
    }

    pub fn toggle(&self) {
        self.store.update(|s| {
            s.toggle();
        });
    }
}

pub fn provide_theme_context() -> ThemeContext {
    let ctx = ThemeContext {
        store: RwSignal::new(ThemeStore::session_only(Theme::default())),
    };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[derive(Debug, Clone, Copy)]
pub struct ActiveSectionContext {
    store: RwSignal<ActiveSectionStore>,
    visibility: RwSignal<VisibilityMap>,
}

impl ActiveSectionContext {
    pub fn active(&self) -> Option<Section> {
        self.store.with(|s| s.active())
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.store.with(|s| s.is_active(section))
    }

    pub fn ensure_initialized(&self) {
        self.store.maybe_update(|s| {
            let was_set = s.active().is_some();
            s.ensure_initialized();
            !was_set
        });
    }

    /// Explicit navigation, e.g. a navbar click.
    pub fn navigate(&self, section: Section) {
        self.store.maybe_update(|s| s.set(section));
    }

    /// Intersection observer callback for one section.
    pub fn report(&self, section: Section, ratio: f64) {
        self.visibility.update_untracked(|m| m.record(section, ratio));
        let map = self.visibility.get_untracked();
        self.store.maybe_update(|s| s.observe(&map).is_some());
    }
}

pub fn provide_active_section_context() -> ActiveSectionContext {
    let ctx = ActiveSectionContext {
        store: RwSignal::new(ActiveSectionStore::new()),
        visibility: RwSignal::new(VisibilityMap::new()),
    };
    provide_context(ctx);
    ctx
}

pub fn use_active_section() -> ActiveSectionContext {
    expect_context::<ActiveSectionContext>()
}
