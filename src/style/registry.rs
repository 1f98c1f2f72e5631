//! Style registry with alias resolution.

use std::collections::{HashMap, HashSet};

use console::Style;

use super::error::StyleValidationError;
use super::value::StyleValue;

/// Prefix written before text whose style name is not registered.
pub const DEFAULT_MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A collection of named styles.
///
/// Names map to either a concrete [`Style`] or an alias to another name.
/// Aliases are followed at lookup time; [`Styles::validate`] checks every
/// chain ends in a concrete style.
#[derive(Debug, Clone)]
pub struct Styles {
    styles: HashMap<String, StyleValue>,
    missing_indicator: String,
}

impl Styles {
    pub fn new() -> Self {
        Self {
            styles: HashMap::new(),
            missing_indicator: DEFAULT_MISSING_STYLE_INDICATOR.to_string(),
        }
    }

    /// Replaces the marker prepended to text with an unknown style.
    pub fn missing_indicator(mut self, indicator: &str) -> Self {
        self.missing_indicator = indicator.to_string();
        self
    }

    /// Adds (or replaces) a named style.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.styles.insert(name.to_string(), value.into());
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Follows aliases from `name` to a concrete style.
    ///
    /// Returns `None` for unknown names, dangling aliases and cycles.
    pub fn resolve(&self, name: &str) -> Option<&Style> {
        let mut current = name;
        let mut seen = HashSet::new();
        loop {
            if !seen.insert(current) {
                return None;
            }
            match self.styles.get(current)? {
                StyleValue::Concrete(style) => return Some(style),
                StyleValue::Alias(target) => current = target.as_str(),
            }
        }
    }

    /// Checks that every alias chain ends in a concrete style.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        let mut names: Vec<&String> = self.styles.keys().collect();
        names.sort();

        for name in names {
            let mut path = vec![name.clone()];
            let mut current = name.as_str();
            while let Some(StyleValue::Alias(target)) = self.styles.get(current) {
                if !self.styles.contains_key(target) {
                    return Err(StyleValidationError::UnresolvedAlias {
                        from: current.to_string(),
                        to: target.clone(),
                    });
                }
                if path.iter().any(|p| p == target) {
                    path.push(target.clone());
                    return Err(StyleValidationError::CycleDetected { path });
                }
                path.push(target.clone());
                current = target.as_str();
            }
        }
        Ok(())
    }

    /// Applies the named style to `text`.
    ///
    /// With `use_color` false the text is returned unstyled. Unknown names
    /// are flagged with the missing-style indicator so they show up in
    /// output instead of failing the render.
    pub fn apply_with_mode(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.resolve(name) {
            Some(_) if !use_color => text.to_string(),
            Some(style) => style.clone().force_styling(true).apply_to(text).to_string(),
            None => format!("{} {}", self.missing_indicator, text),
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::new()
    }
}
