//! Theme selection for rendering.

use super::adaptive::AdaptiveTheme;
use super::preference::ThemePreference;
use super::theme::Theme;

/// Either a fixed theme or a light/dark pair.
#[derive(Debug, Clone, Copy)]
pub enum ThemeChoice<'a> {
    /// Used regardless of the preference.
    Theme(&'a Theme),
    /// Picks its light or dark variant from the preference.
    Adaptive(&'a AdaptiveTheme),
}

impl<'a> ThemeChoice<'a> {
    /// Resolves to the concrete theme for `preference`.
    pub fn resolve(&self, preference: ThemePreference) -> &'a Theme {
        match *self {
            ThemeChoice::Theme(theme) => theme,
            ThemeChoice::Adaptive(adaptive) => adaptive.resolve(preference),
        }
    }
}

impl<'a> From<&'a Theme> for ThemeChoice<'a> {
    fn from(theme: &'a Theme) -> Self {
        ThemeChoice::Theme(theme)
    }
}

impl<'a> From<&'a AdaptiveTheme> for ThemeChoice<'a> {
    fn from(adaptive: &'a AdaptiveTheme) -> Self {
        ThemeChoice::Adaptive(adaptive)
    }
}
