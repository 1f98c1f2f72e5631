//! Error types.

use thiserror::Error;

use crate::style::StyleValidationError;

/// Errors from the theme provider/consumer contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// A consumer asked for the theme with no provider scope installed.
    ///
    /// This is a wiring mistake in the application: the consumer runs
    /// outside the tree that [`ThemeProvider::provide`](crate::ThemeProvider::provide)
    /// covers.
    #[error("use_theme must be used within a ThemeProvider scope; call ThemeProvider::provide(store) first")]
    OutsideProvider,
}

/// Errors raised while rendering templates or components.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Style(#[from] StyleValidationError),
    #[error(transparent)]
    Template(#[from] minijinja::Error),
}
