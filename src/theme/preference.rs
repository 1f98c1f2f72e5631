//! The light/dark display preference.

use std::fmt;

/// The user's preferred display mode.
///
/// Exactly one value is active at a time. The only transition is
/// [`ThemePreference::toggled`], which is total and symmetric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    /// Parses a persisted value.
    ///
    /// Only the literal `"light"` selects [`ThemePreference::Light`]; a missing
    /// value and anything else resolve to [`ThemePreference::Dark`].
    ///
    /// ```rust
    /// use etf_mts_view::ThemePreference;
    ///
    /// assert_eq!(ThemePreference::from_stored(Some("light")), ThemePreference::Light);
    /// assert_eq!(ThemePreference::from_stored(Some("LIGHT")), ThemePreference::Dark);
    /// assert_eq!(ThemePreference::from_stored(None), ThemePreference::Dark);
    /// ```
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => ThemePreference::Light,
            _ => ThemePreference::Dark,
        }
    }

    /// The string written to durable storage.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    /// Returns the opposite preference.
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
