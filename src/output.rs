//! Output mode selection.

use console::Term;

/// Whether rendered output carries ANSI styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Style when stdout is a colour-capable terminal.
    #[default]
    Auto,
    /// Always emit styling.
    Term,
    /// Never emit styling.
    Text,
}

impl OutputMode {
    pub fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => Term::stdout().features().colors_supported(),
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }
}
