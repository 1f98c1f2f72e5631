//! Light/dark theme pairs.

use console::Style;
use once_cell::sync::Lazy;

use super::preference::ThemePreference;
use super::theme::Theme;

/// A pair of themes, one per display mode.
///
/// # Example
///
/// ```rust
/// use etf_mts_view::{AdaptiveTheme, Theme, ThemePreference};
/// use console::Style;
///
/// let light = Theme::new().add("tone", Style::new().blue());
/// let dark = Theme::new().add("tone", Style::new().yellow());
/// let adaptive = AdaptiveTheme::new(light, dark);
///
/// assert!(adaptive.resolve(ThemePreference::Dark).styles().has("tone"));
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// Returns the variant for `preference`.
    pub fn resolve(&self, preference: ThemePreference) -> &Theme {
        match preference {
            ThemePreference::Light => &self.light,
            ThemePreference::Dark => &self.dark,
        }
    }

    pub fn light(&self) -> &Theme {
        &self.light
    }

    pub fn dark(&self) -> &Theme {
        &self.dark
    }
}

static DEFAULT_THEME: Lazy<AdaptiveTheme> = Lazy::new(|| {
    let light = components(
        Theme::new()
            .add("accent", Style::new().white().on_blue().bold())
            .add("surface", Style::new().black())
            .add("muted", Style::new().black().dim())
            .add("border", Style::new().blue()),
    );
    let dark = components(
        Theme::new()
            .add("accent", Style::new().black().on_cyan().bold())
            .add("surface", Style::new().white())
            .add("muted", Style::new().white().dim())
            .add("border", Style::new().cyan()),
    );
    AdaptiveTheme::new(light, dark)
});

/// Component styles shared by both palettes.
fn components(palette: Theme) -> Theme {
    palette
        .add("toggle.on", "accent")
        .add("toggle.off", "surface")
        .add("toggle.disabled", "muted")
        .add("toggle.border", "border")
}

/// The stock dashboard palette, used by the toggle group and the CLI.
pub fn default_theme() -> &'static AdaptiveTheme {
    &DEFAULT_THEME
}
