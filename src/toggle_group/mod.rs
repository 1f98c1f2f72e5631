//! Toggle groups: a row of pressable items sharing a look.
//!
//! A group carries container-level [`ToggleOptions`] (variant and size).
//! Each item inherits them unless it sets its own; the item's setting wins.
//!
//! ```rust
//! use etf_mts_view::{OutputMode, ThemePreference, ToggleGroup, ToggleItem, ToggleSize, ToggleVariant};
//!
//! let mut periods = ToggleGroup::single()
//!     .variant(ToggleVariant::Outline)
//!     .size(ToggleSize::Sm)
//!     .item(ToggleItem::new("1m", "1M"))
//!     .item(ToggleItem::new("1y", "1Y").size(ToggleSize::Lg));
//!
//! periods.press("1y");
//! assert!(periods.is_pressed("1y"));
//!
//! let row = periods.render(ThemePreference::Dark, OutputMode::Text).unwrap();
//! assert_eq!(row, "[ 1M ] [   1Y   ]");
//! ```

mod group;
mod options;

pub use group::{SelectionKind, ToggleGroup, ToggleItem};
pub use options::{ParseOptionError, ToggleOptions, ToggleSize, ToggleVariant};
