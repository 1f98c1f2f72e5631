//! Pre-compiled template renderer.

use minijinja::Environment;
use serde::Serialize;

use super::filters::register_filters;
use crate::error::RenderError;
use crate::output::OutputMode;
use crate::theme::Theme;

/// A renderer with pre-registered templates.
///
/// Templates are compiled once when added and reused on every render.
///
/// # Example
///
/// ```rust
/// use etf_mts_view::{OutputMode, Renderer, Theme};
/// use console::Style;
/// use serde::Serialize;
///
/// let theme = Theme::new().add("title", Style::new().bold());
///
/// let mut renderer = Renderer::with_output(theme, OutputMode::Text).unwrap();
/// renderer
///     .add_template("row", r#"{{ name | style("title") }} {{ aum | currency }}"#)
///     .unwrap();
///
/// #[derive(Serialize)]
/// struct Row { name: String, aum: f64 }
///
/// let out = renderer
///     .render("row", &Row { name: "KODEX 200".into(), aum: 5_800_000_000_000.0 })
///     .unwrap();
/// assert_eq!(out, "KODEX 200 5.8조");
/// ```
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer that styles output when stdout supports colour.
    ///
    /// # Errors
    ///
    /// Returns an error if any style aliases are dangling or cyclic.
    pub fn new(theme: Theme) -> Result<Self, RenderError> {
        Self::with_output(theme, OutputMode::Auto)
    }

    /// Creates a renderer with an explicit output mode.
    ///
    /// # Errors
    ///
    /// Returns an error if any style aliases are dangling or cyclic.
    pub fn with_output(theme: Theme, mode: OutputMode) -> Result<Self, RenderError> {
        theme.validate()?;

        let mut env = Environment::new();
        register_filters(&mut env, theme, mode);
        Ok(Self { env })
    }

    /// Registers and compiles a named template.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    /// Renders a registered template with the given data.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }
}
