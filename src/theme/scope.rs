//! Provider scopes and the consumer handle.
//!
//! A [`ThemeProvider`] installs a store for the current (UI) thread. While the
//! returned [`ThemeScope`] guard is alive, any code on that thread can reach
//! the store through [`use_theme`]. Scopes nest: dropping an inner scope makes
//! the outer store visible again.

use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::rc::Rc;

use tracing::warn;

use super::preference::ThemePreference;
use super::store::{SubscriptionId, ThemeStore};
use crate::error::ThemeError;

thread_local! {
    static SCOPES: RefCell<Vec<(u64, ThemeStore)>> = RefCell::new(Vec::new());
    static NEXT_SCOPE: Cell<u64> = const { Cell::new(0) };
}

/// Installs theme stores for consumers.
pub struct ThemeProvider;

impl ThemeProvider {
    /// Makes `store` the active store until the returned guard is dropped.
    #[must_use = "the store is only provided while the scope guard is alive"]
    pub fn provide(store: ThemeStore) -> ThemeScope {
        let id = NEXT_SCOPE.with(|next| {
            next.set(next.get() + 1);
            next.get()
        });
        SCOPES.with(|scopes| scopes.borrow_mut().push((id, store)));
        ThemeScope {
            id,
            _not_send: PhantomData,
        }
    }

    /// Runs `f` with `store` provided, uninstalling it afterwards.
    pub fn with<R>(store: ThemeStore, f: impl FnOnce() -> R) -> R {
        let _scope = Self::provide(store);
        f()
    }
}

/// Guard keeping a provided store active. Bound to the thread that created it.
#[derive(Debug)]
pub struct ThemeScope {
    id: u64,
    _not_send: PhantomData<Rc<()>>,
}

impl Drop for ThemeScope {
    fn drop(&mut self) {
        let id = self.id;
        // The thread-local may already be gone during thread teardown. The
        // removed store is dropped only after the borrow ends, since its
        // subscribers may own scopes of their own.
        let removed = SCOPES.try_with(|scopes| match scopes.try_borrow_mut() {
            Ok(mut scopes) => scopes
                .iter()
                .position(|(scope, _)| *scope == id)
                .map(|index| scopes.remove(index)),
            Err(_) => {
                warn!(scope = id, "theme scopes busy on drop; provider left installed");
                None
            }
        });
        drop(removed);
    }
}

/// Returns the consumer handle for the innermost provided store.
///
/// # Errors
///
/// Returns [`ThemeError::OutsideProvider`] when no provider scope is active on
/// this thread.
///
/// ```rust
/// use etf_mts_view::{use_theme, ThemeError, ThemeProvider, ThemeStore};
///
/// assert_eq!(use_theme().unwrap_err(), ThemeError::OutsideProvider);
///
/// let _scope = ThemeProvider::provide(ThemeStore::in_memory());
/// assert!(use_theme().unwrap().is_dark_mode());
/// ```
pub fn use_theme() -> Result<ThemeContext, ThemeError> {
    SCOPES
        .with(|scopes| scopes.borrow().last().map(|(_, store)| store.clone()))
        .map(|store| ThemeContext { store })
        .ok_or(ThemeError::OutsideProvider)
}

/// What a consumer sees of the theme: the current value and a way to flip it.
#[derive(Debug, Clone)]
pub struct ThemeContext {
    store: ThemeStore,
}

impl ThemeContext {
    pub fn is_dark_mode(&self) -> bool {
        self.store.is_dark_mode()
    }

    pub fn preference(&self) -> ThemePreference {
        self.store.current()
    }

    pub fn toggle(&self) {
        self.store.toggle();
    }

    /// Re-renders on change: `f` is called after every toggle.
    pub fn subscribe<F>(&self, f: F) -> SubscriptionId
    where
        F: Fn(ThemePreference) + 'static,
    {
        self.store.subscribe(f)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    pub fn store(&self) -> &ThemeStore {
        &self.store
    }
}
