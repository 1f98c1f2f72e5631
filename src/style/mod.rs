//! Named styles and aliases.
//!
//! - [`StyleValue`]: a style that is either concrete or an alias
//! - [`Styles`]: a registry of named styles
//! - [`StyleValidationError`]: errors from alias validation
//!
//! Component styles (`toggle.on`, `toggle.off`, ...) are usually aliases
//! onto a small set of palette styles, so a light and a dark theme only
//! differ in the palette layer.

mod error;
mod registry;
mod value;

pub use error::StyleValidationError;
pub use registry::{Styles, DEFAULT_MISSING_STYLE_INDICATOR};
pub use value::StyleValue;
