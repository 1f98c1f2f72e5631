//! Toggle group state and rendering.

use serde::Serialize;

use super::options::{ToggleOptions, ToggleSize, ToggleVariant};
use crate::error::RenderError;
use crate::output::OutputMode;
use crate::render::Renderer;
use crate::theme::{default_theme, Theme, ThemePreference};
use crate::util::truncate_to_width;

const ROW_TEMPLATE: &str = concat!(
    "{% for cell in cells %}",
    "{% if not loop.first %} {% endif %}",
    r#"{% if cell.outline %}{{ "[" | style("toggle.border") }}{% endif %}"#,
    "{{ cell.text | style(cell.style) }}",
    r#"{% if cell.outline %}{{ "]" | style("toggle.border") }}{% endif %}"#,
    "{% endfor %}",
);

/// How many items may be pressed at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// At most one item; pressing the pressed item clears it.
    Single,
    /// Any subset of items.
    Multiple,
}

/// One pressable entry in a [`ToggleGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleItem {
    value: String,
    label: String,
    options: ToggleOptions,
    disabled: bool,
}

impl ToggleItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            options: ToggleOptions::default(),
            disabled: false,
        }
    }

    /// Overrides the group's variant for this item.
    pub fn variant(mut self, variant: ToggleVariant) -> Self {
        self.options.variant = Some(variant);
        self
    }

    /// Overrides the group's size for this item.
    pub fn size(mut self, size: ToggleSize) -> Self {
        self.options.size = Some(size);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

#[derive(Serialize)]
struct Cell {
    text: String,
    style: &'static str,
    outline: bool,
}

#[derive(Serialize)]
struct Row {
    cells: Vec<Cell>,
}

/// A row of toggle items with shared variant and size.
#[derive(Debug, Clone)]
pub struct ToggleGroup {
    kind: SelectionKind,
    options: ToggleOptions,
    items: Vec<ToggleItem>,
    pressed: Vec<String>,
}

impl ToggleGroup {
    pub fn new(kind: SelectionKind) -> Self {
        Self {
            kind,
            options: ToggleOptions::default(),
            items: Vec::new(),
            pressed: Vec::new(),
        }
    }

    pub fn single() -> Self {
        Self::new(SelectionKind::Single)
    }

    pub fn multiple() -> Self {
        Self::new(SelectionKind::Multiple)
    }

    /// Sets the variant items inherit.
    pub fn variant(mut self, variant: ToggleVariant) -> Self {
        self.options.variant = Some(variant);
        self
    }

    /// Sets the size items inherit.
    pub fn size(mut self, size: ToggleSize) -> Self {
        self.options.size = Some(size);
        self
    }

    pub fn options(mut self, options: ToggleOptions) -> Self {
        self.options = options;
        self
    }

    pub fn item(mut self, item: ToggleItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn kind(&self) -> SelectionKind {
        self.kind
    }

    pub fn items(&self) -> &[ToggleItem] {
        &self.items
    }

    /// Pressed item values, in the order they were pressed.
    pub fn selected(&self) -> &[String] {
        &self.pressed
    }

    pub fn is_pressed(&self, value: &str) -> bool {
        self.pressed.iter().any(|v| v == value)
    }

    /// Presses the item with `value`.
    ///
    /// In a single group the item becomes the only pressed one, or is
    /// released if it already was. In a multiple group its membership flips.
    /// Returns `false` when nothing changed (unknown or disabled item).
    pub fn press(&mut self, value: &str) -> bool {
        let Some(item) = self.items.iter().find(|i| i.value == value) else {
            return false;
        };
        if item.disabled {
            return false;
        }

        if self.is_pressed(value) {
            self.pressed.retain(|v| v != value);
        } else {
            if self.kind == SelectionKind::Single {
                self.pressed.clear();
            }
            self.pressed.push(value.to_string());
        }
        true
    }

    /// The fully resolved look of an item: its own options, else the
    /// group's, else the defaults.
    pub fn resolved_options(&self, value: &str) -> Option<ToggleOptions> {
        self.items
            .iter()
            .find(|i| i.value == value)
            .map(|item| self.resolve(item))
    }

    fn resolve(&self, item: &ToggleItem) -> ToggleOptions {
        let merged = item.options.merge(self.options);
        ToggleOptions {
            variant: Some(merged.resolved_variant()),
            size: Some(merged.resolved_size()),
        }
    }

    /// Renders the row using the stock palette for `preference`.
    pub fn render(
        &self,
        preference: ThemePreference,
        mode: OutputMode,
    ) -> Result<String, RenderError> {
        self.render_with_theme(default_theme().resolve(preference), mode)
    }

    /// Renders the row with a custom theme.
    ///
    /// The theme must define `toggle.on`, `toggle.off`, `toggle.disabled` and
    /// `toggle.border`; missing names are flagged in the output.
    pub fn render_with_theme(
        &self,
        theme: &Theme,
        mode: OutputMode,
    ) -> Result<String, RenderError> {
        let cells = self
            .items
            .iter()
            .map(|item| {
                let opts = self.resolve(item);
                let size = opts.resolved_size();
                let pad = " ".repeat(size.padding());
                let label = truncate_to_width(&item.label, size.max_label_width());
                let style = if item.disabled {
                    "toggle.disabled"
                } else if self.is_pressed(&item.value) {
                    "toggle.on"
                } else {
                    "toggle.off"
                };
                Cell {
                    text: format!("{pad}{label}{pad}"),
                    style,
                    outline: opts.resolved_variant() == ToggleVariant::Outline,
                }
            })
            .collect();

        let mut renderer = Renderer::with_output(theme.clone(), mode)?;
        renderer.add_template("toggle_group", ROW_TEMPLATE)?;
        renderer.render("toggle_group", &Row { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::Style;

    fn periods(kind: SelectionKind) -> ToggleGroup {
        ToggleGroup::new(kind)
            .item(ToggleItem::new("1m", "1M"))
            .item(ToggleItem::new("3m", "3M"))
            .item(ToggleItem::new("1y", "1Y"))
    }

    #[test]
    fn test_single_press_replaces_selection() {
        let mut group = periods(SelectionKind::Single);
        assert!(group.press("1m"));
        assert!(group.press("3m"));
        assert_eq!(group.selected(), ["3m"]);
        assert!(!group.is_pressed("1m"));
    }

    #[test]
    fn test_single_press_again_releases() {
        let mut group = periods(SelectionKind::Single);
        group.press("1y");
        group.press("1y");
        assert!(group.selected().is_empty());
    }

    #[test]
    fn test_multiple_press_toggles_membership() {
        let mut group = periods(SelectionKind::Multiple);
        group.press("1m");
        group.press("1y");
        assert_eq!(group.selected(), ["1m", "1y"]);

        group.press("1m");
        assert_eq!(group.selected(), ["1y"]);
    }

    #[test]
    fn test_press_unknown_or_disabled_is_ignored() {
        let mut group = periods(SelectionKind::Single)
            .item(ToggleItem::new("5y", "5Y").disabled(true));
        assert!(!group.press("10y"));
        assert!(!group.press("5y"));
        assert!(group.selected().is_empty());
        assert!(group.items()[3].is_disabled());
    }

    #[test]
    fn test_items_inherit_group_options() {
        let group = periods(SelectionKind::Single)
            .variant(ToggleVariant::Outline)
            .size(ToggleSize::Sm)
            .item(ToggleItem::new("ytd", "YTD").size(ToggleSize::Lg));

        assert_eq!(
            group.resolved_options("1m"),
            Some(
                ToggleOptions::new()
                    .variant(ToggleVariant::Outline)
                    .size(ToggleSize::Sm)
            )
        );
        assert_eq!(
            group.resolved_options("ytd"),
            Some(
                ToggleOptions::new()
                    .variant(ToggleVariant::Outline)
                    .size(ToggleSize::Lg)
            )
        );
        assert_eq!(group.resolved_options("nope"), None);
    }

    #[test]
    fn test_unset_options_resolve_to_defaults() {
        let group = periods(SelectionKind::Single);
        assert_eq!(
            group.resolved_options("1m"),
            Some(
                ToggleOptions::new()
                    .variant(ToggleVariant::Default)
                    .size(ToggleSize::Default)
            )
        );
    }

    #[test]
    fn test_render_text_layout() {
        let group = periods(SelectionKind::Single)
            .size(ToggleSize::Sm)
            .item(ToggleItem::new("ytd", "YTD").variant(ToggleVariant::Outline));
        let row = group
            .render(ThemePreference::Light, OutputMode::Text)
            .unwrap();
        assert_eq!(row, " 1M   3M   1Y  [ YTD ]");
    }

    #[test]
    fn test_render_truncates_long_labels() {
        let group = ToggleGroup::single()
            .size(ToggleSize::Sm)
            .item(ToggleItem::new("all", "Every listed fund"));
        let row = group.render(ThemePreference::Dark, OutputMode::Text).unwrap();
        assert_eq!(row, " Every liste… ");
    }

    #[test]
    fn test_render_styles_follow_state() {
        let theme = Theme::new()
            .add("toggle.on", Style::new().red())
            .add("toggle.off", Style::new().green())
            .add("toggle.disabled", Style::new().blue())
            .add("toggle.border", Style::new().yellow());
        let mut group = periods(SelectionKind::Single)
            .item(ToggleItem::new("5y", "5Y").disabled(true));
        group.press("3m");

        let row = group.render_with_theme(&theme, OutputMode::Term).unwrap();
        assert_eq!(row.matches("\x1b[31m").count(), 1);
        assert_eq!(row.matches("\x1b[32m").count(), 2);
        assert_eq!(row.matches("\x1b[34m").count(), 1);
        assert!(!row.contains("\x1b[33m"));
    }

    #[test]
    fn test_render_rejects_invalid_theme() {
        let theme = Theme::new().add("toggle.on", "missing");
        let group = periods(SelectionKind::Single);
        assert!(matches!(
            group.render_with_theme(&theme, OutputMode::Text),
            Err(RenderError::Style(_))
        ));
    }
}
