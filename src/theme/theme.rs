//! Named style collections.

use crate::style::{StyleValidationError, StyleValue, Styles};

/// A named collection of styles used when rendering.
///
/// # Example
///
/// ```rust
/// use etf_mts_view::Theme;
/// use console::Style;
///
/// let theme = Theme::new()
///     // Palette
///     .add("accent", Style::new().cyan().bold())
///     .add("muted", Style::new().dim())
///     // Components alias the palette
///     .add("toggle.on", "accent")
///     .add("toggle.off", "muted");
///
/// assert!(theme.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub(crate) styles: Styles,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_styles(styles: Styles) -> Self {
        Self { styles }
    }

    /// Adds a concrete style or an alias, returning the theme for chaining.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.styles = self.styles.add(name, value);
        self
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    /// Checks that every alias resolves. Renderers call this on construction.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        self.styles.validate()
    }
}
