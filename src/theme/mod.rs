//! Theme preference state and style themes.
//!
//! This module provides:
//!
//! - [`ThemePreference`]: the `Dark` / `Light` display mode
//! - [`ThemeStore`]: the persisted, observable preference
//! - [`ThemeProvider`] / [`use_theme`]: scoped access for consumers
//! - [`Theme`] and [`AdaptiveTheme`]: style collections picked by preference

mod adaptive;
mod choice;
mod preference;
mod scope;
mod store;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{default_theme, AdaptiveTheme};
pub use choice::ThemeChoice;
pub use preference::ThemePreference;
pub use scope::{use_theme, ThemeContext, ThemeProvider, ThemeScope};
pub use store::{initialize, SubscriptionId, ThemeStore, ThemeStoreBuilder, THEME_STORAGE_KEY};
pub use theme::Theme;
