//! # etf-mts-view - presentation helpers for the ETF MTS dashboard
//!
//! This crate carries the small amount of state and formatting the dashboard
//! front-end needs:
//!
//! - A process-wide light/dark **theme preference** ([`ThemeStore`]) persisted
//!   to durable storage, reflected on the document root as a mode marker, and
//!   broadcast synchronously to subscribers.
//! - A scoped **provider/consumer** contract ([`ThemeProvider`], [`use_theme`])
//!   so view code can reach the store without threading it through every call.
//! - **Formatting** helpers for numbers, percentages and Korean currency units.
//! - A **toggle group** component whose variant and size are inherited from
//!   the container unless an item overrides them.
//!
//! ## Quick start
//!
//! ```rust
//! use etf_mts_view::{use_theme, MemoryStorage, ThemePreference, ThemeProvider, ThemeStore};
//!
//! let storage = MemoryStorage::new();
//! let store = ThemeStore::builder().storage(storage.clone()).open();
//! let _scope = ThemeProvider::provide(store);
//!
//! let theme = use_theme().unwrap();
//! assert_eq!(theme.preference(), ThemePreference::Dark);
//!
//! theme.toggle();
//! assert!(!theme.is_dark_mode());
//! assert_eq!(storage.value("etf-mts-theme").as_deref(), Some("light"));
//! ```
//!
//! ## Formatting
//!
//! ```rust
//! use etf_mts_view::{format_currency, format_number, format_percent};
//!
//! assert_eq!(format_number(1234567.0), "1,234,567");
//! assert_eq!(format_percent(3.456, 2), "+3.46%");
//! assert_eq!(format_currency(1_250_000_000_000.0), "1.3조");
//! ```

pub mod document;
pub mod error;
pub mod format;
mod output;
pub mod render;
pub mod storage;
pub mod style;
pub mod theme;
pub mod toggle_group;
mod util;

pub use document::{apply_mode, ClassList, DocumentRoot, DARK_MODE_CLASS, LIGHT_MODE_CLASS};
pub use error::{RenderError, ThemeError};
pub use format::{format_currency, format_number, format_percent, format_percent_default};
pub use output::OutputMode;
pub use render::{render_with_output, Renderer};
pub use storage::{FileStorage, MemoryStorage, ThemeStorage};
pub use style::{StyleValidationError, StyleValue, Styles};
pub use theme::{
    default_theme, initialize, use_theme, AdaptiveTheme, SubscriptionId, Theme, ThemeChoice,
    ThemeContext, ThemePreference, ThemeProvider, ThemeScope, ThemeStore, ThemeStoreBuilder,
    THEME_STORAGE_KEY,
};
pub use toggle_group::{
    ParseOptionError, SelectionKind, ToggleGroup, ToggleItem, ToggleOptions, ToggleSize,
    ToggleVariant,
};
pub use util::truncate_to_width;
