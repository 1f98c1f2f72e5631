//! MiniJinja filter registration.

use minijinja::{Environment, Value};

use crate::format::{format_currency, format_number, format_percent};
use crate::output::OutputMode;
use crate::theme::Theme;

/// Registers the built-in filters on an environment.
pub(crate) fn register_filters(env: &mut Environment<'static>, theme: Theme, mode: OutputMode) {
    let styles = theme.styles;
    let use_color = mode.should_use_color();

    env.add_filter("style", move |value: Value, name: String| -> String {
        styles.apply_with_mode(&name, &value.to_string(), use_color)
    });

    // {{ "" | nl }} emits a blank line.
    env.add_filter("nl", |value: Value| -> String { format!("{}\n", value) });

    env.add_filter("number", |value: f64| -> String { format_number(value) });
    env.add_filter("percent", |value: f64, decimals: Option<usize>| -> String {
        format_percent(value, decimals.unwrap_or(2))
    });
    env.add_filter("currency", |value: f64| -> String { format_currency(value) });
}
