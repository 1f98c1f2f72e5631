//! Template rendering with theme styles and dashboard formatting filters.
//!
//! Templates are MiniJinja. Registered filters:
//!
//! | Filter | Example | Output |
//! |---|---|---|
//! | `style(name)` | `{{ label \| style("toggle.on") }}` | text in the named theme style |
//! | `number` | `{{ 1234567 \| number }}` | `1,234,567` |
//! | `percent(decimals=2)` | `{{ 3.456 \| percent }}` | `+3.46%` |
//! | `currency` | `{{ 12000 \| currency }}` | `1.2만` |
//! | `nl` | `{{ title \| nl }}` | value followed by a newline |

mod filters;
mod renderer;

pub use renderer::Renderer;

use serde::Serialize;

use crate::error::RenderError;
use crate::output::OutputMode;
use crate::theme::{ThemeChoice, ThemePreference};

/// Renders a one-off template.
///
/// Adaptive themes are resolved against `preference`.
///
/// ```rust
/// use etf_mts_view::{default_theme, render_with_output, OutputMode, ThemePreference};
/// use etf_mts_view::theme::ThemeChoice;
///
/// let out = render_with_output(
///     "{{ nav | currency }} ({{ change | percent }})",
///     &serde_json::json!({ "nav": 350000000.0, "change": -0.42 }),
///     ThemeChoice::Adaptive(default_theme()),
///     ThemePreference::Dark,
///     OutputMode::Text,
/// )
/// .unwrap();
/// assert_eq!(out, "3.5억 (-0.42%)");
/// ```
pub fn render_with_output<T: Serialize>(
    template: &str,
    data: &T,
    theme: ThemeChoice<'_>,
    preference: ThemePreference,
    mode: OutputMode,
) -> Result<String, RenderError> {
    let mut renderer = Renderer::with_output(theme.resolve(preference).clone(), mode)?;
    renderer.add_template("inline", template)?;
    renderer.render("inline", data)
}
