//! Variant and size options with parent-to-child inheritance.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Visual treatment of a toggle item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleVariant {
    #[default]
    Default,
    /// Items are drawn with a border.
    Outline,
}

/// Item size, which sets the horizontal padding and label width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleSize {
    #[default]
    Default,
    Sm,
    Lg,
}

impl ToggleSize {
    /// Spaces on each side of the label.
    pub fn padding(self) -> usize {
        match self {
            ToggleSize::Sm => 1,
            ToggleSize::Default => 2,
            ToggleSize::Lg => 3,
        }
    }

    /// Widest label, in columns, before it is truncated.
    pub fn max_label_width(self) -> usize {
        match self {
            ToggleSize::Sm => 12,
            ToggleSize::Default => 16,
            ToggleSize::Lg => 24,
        }
    }
}

/// Error for an unrecognized variant or size name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown toggle {kind} '{value}'")]
pub struct ParseOptionError {
    kind: &'static str,
    value: String,
}

impl FromStr for ToggleVariant {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(ToggleVariant::Default),
            "outline" => Ok(ToggleVariant::Outline),
            _ => Err(ParseOptionError {
                kind: "variant",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for ToggleSize {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(ToggleSize::Default),
            "sm" => Ok(ToggleSize::Sm),
            "lg" => Ok(ToggleSize::Lg),
            _ => Err(ParseOptionError {
                kind: "size",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ToggleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ToggleVariant::Default => "default",
            ToggleVariant::Outline => "outline",
        })
    }
}

impl fmt::Display for ToggleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ToggleSize::Default => "default",
            ToggleSize::Sm => "sm",
            ToggleSize::Lg => "lg",
        })
    }
}

/// Partially specified look; unset fields are inherited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ToggleVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ToggleSize>,
}

impl ToggleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: ToggleVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn size(mut self, size: ToggleSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Fills unset fields from `parent`. Fields set on `self` win.
    ///
    /// ```rust
    /// use etf_mts_view::{ToggleOptions, ToggleSize, ToggleVariant};
    ///
    /// let group = ToggleOptions::new().variant(ToggleVariant::Outline).size(ToggleSize::Sm);
    /// let item = ToggleOptions::new().size(ToggleSize::Lg);
    ///
    /// let merged = item.merge(group);
    /// assert_eq!(merged.variant, Some(ToggleVariant::Outline));
    /// assert_eq!(merged.size, Some(ToggleSize::Lg));
    /// ```
    pub fn merge(self, parent: ToggleOptions) -> ToggleOptions {
        ToggleOptions {
            variant: self.variant.or(parent.variant),
            size: self.size.or(parent.size),
        }
    }

    /// The variant in effect, falling back to the default.
    pub fn resolved_variant(&self) -> ToggleVariant {
        self.variant.unwrap_or_default()
    }

    /// The size in effect, falling back to the default.
    pub fn resolved_size(&self) -> ToggleSize {
        self.size.unwrap_or_default()
    }
}
