//! The theme preference store.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use super::preference::ThemePreference;
use crate::document::{apply_mode, ClassList, DocumentRoot};
use crate::storage::{MemoryStorage, ThemeStorage};

/// Key the preference is persisted under.
pub const THEME_STORAGE_KEY: &str = "etf-mts-theme";

/// Reads the persisted preference.
///
/// Only a stored `"light"` yields [`ThemePreference::Light`]; a missing or
/// unrecognized value yields [`ThemePreference::Dark`]. Nothing is written.
///
/// ```rust
/// use etf_mts_view::{initialize, MemoryStorage, ThemePreference, THEME_STORAGE_KEY};
///
/// let storage = MemoryStorage::with_entry(THEME_STORAGE_KEY, "light");
/// assert_eq!(initialize(&storage, THEME_STORAGE_KEY), ThemePreference::Light);
/// assert_eq!(initialize(&MemoryStorage::new(), THEME_STORAGE_KEY), ThemePreference::Dark);
/// ```
pub fn initialize(storage: &dyn ThemeStorage, key: &str) -> ThemePreference {
    ThemePreference::from_stored(storage.get(key).as_deref())
}

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(ThemePreference)>;

struct StoreState {
    preference: ThemePreference,
    key: String,
    storage: Box<dyn ThemeStorage>,
    root: Box<dyn DocumentRoot>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
    /// Bumped on every toggle.
    revision: u64,
}

impl StoreState {
    /// Persists the current value and applies its root marker.
    fn commit(&self) {
        self.storage.set(&self.key, self.preference.as_str());
        apply_mode(self.root.as_ref(), self.preference);
    }
}

/// Single source of truth for the theme preference.
///
/// `ThemeStore` is a cheap, clonable handle; clones share one preference.
/// It is bound to the UI thread (`!Send`), and every read and write happens
/// there, so no locking is involved.
///
/// Opening a store reads the persisted value, then persists it back and
/// applies the root marker once, so the document reflects the preference
/// from the first frame.
///
/// # Example
///
/// ```rust
/// use etf_mts_view::{ClassList, DocumentRoot, MemoryStorage, ThemePreference, ThemeStore};
///
/// let root = ClassList::new();
/// let store = ThemeStore::builder()
///     .storage(MemoryStorage::new())
///     .root(root.clone())
///     .open();
///
/// assert!(root.has_class("dark-mode"));
///
/// store.toggle();
/// assert_eq!(store.current(), ThemePreference::Light);
/// assert!(root.has_class("light-mode"));
/// assert!(!root.has_class("dark-mode"));
/// ```
#[derive(Clone)]
pub struct ThemeStore {
    state: Rc<RefCell<StoreState>>,
}

impl ThemeStore {
    pub fn builder() -> ThemeStoreBuilder {
        ThemeStoreBuilder::new()
    }

    /// Opens a store over in-memory storage with a fresh root.
    pub fn in_memory() -> Self {
        Self::builder().open()
    }

    /// Returns the active preference. No side effects.
    pub fn current(&self) -> ThemePreference {
        self.state.borrow().preference
    }

    pub fn is_dark_mode(&self) -> bool {
        self.current().is_dark()
    }

    /// Returns the storage key this store persists under.
    pub fn key(&self) -> String {
        self.state.borrow().key.clone()
    }

    /// Flips the preference, persists it, applies the root marker and then
    /// notifies every subscriber in subscription order.
    ///
    /// Subscribers run after the store's internal borrow is released, so they
    /// may read the store or toggle it again. A toggle made by a subscriber
    /// notifies everyone itself; the outer fan-out then stops so no later
    /// subscriber receives a stale value.
    pub fn toggle(&self) {
        let (preference, revision, listeners) = {
            let mut state = self.state.borrow_mut();
            state.preference = state.preference.toggled();
            state.revision += 1;
            state.commit();
            let listeners: Vec<Listener> =
                state.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
            (state.preference, state.revision, listeners)
        };

        trace!(%preference, subscribers = listeners.len(), "theme toggled");
        for listener in listeners {
            if self.state.borrow().revision != revision {
                trace!(%preference, "superseded by a nested toggle");
                break;
            }
            listener(preference);
        }
    }

    /// Registers a listener called with the new preference after each change.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(ThemePreference) + 'static,
    {
        let mut state = self.state.borrow_mut();
        let id = SubscriptionId(state.next_id);
        state.next_id += 1;
        state.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.listeners.len();
        state.listeners.retain(|(sub, _)| *sub != id);
        state.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Returns true if both handles share the same underlying store.
    pub fn ptr_eq(&self, other: &ThemeStore) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ThemeStore")
            .field("preference", &state.preference)
            .field("key", &state.key)
            .field("subscribers", &state.listeners.len())
            .finish_non_exhaustive()
    }
}

/// Configures and opens a [`ThemeStore`].
pub struct ThemeStoreBuilder {
    storage: Option<Box<dyn ThemeStorage>>,
    root: Option<Box<dyn DocumentRoot>>,
    key: String,
}

impl ThemeStoreBuilder {
    pub fn new() -> Self {
        Self {
            storage: None,
            root: None,
            key: THEME_STORAGE_KEY.to_string(),
        }
    }

    /// Sets the durable storage. Defaults to a fresh [`MemoryStorage`].
    pub fn storage<S: ThemeStorage + 'static>(mut self, storage: S) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    /// Sets the element that receives the mode marker. Defaults to a fresh
    /// [`ClassList`].
    pub fn root<R: DocumentRoot + 'static>(mut self, root: R) -> Self {
        self.root = Some(Box::new(root));
        self
    }

    /// Overrides the storage key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Loads the persisted preference and applies it.
    pub fn open(self) -> ThemeStore {
        let storage = self
            .storage
            .unwrap_or_else(|| Box::new(MemoryStorage::new()));
        let root = self.root.unwrap_or_else(|| Box::new(ClassList::new()));
        let preference = initialize(storage.as_ref(), &self.key);
        debug!(%preference, key = %self.key, "theme store opened");

        let state = StoreState {
            preference,
            key: self.key,
            storage,
            root,
            listeners: Vec::new(),
            next_id: 0,
            revision: 0,
        };
        state.commit();

        ThemeStore {
            state: Rc::new(RefCell::new(state)),
        }
    }
}

impl Default for ThemeStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
