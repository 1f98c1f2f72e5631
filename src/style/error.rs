//! Style validation errors.

use thiserror::Error;

/// Error returned when alias validation fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleValidationError {
    /// An alias points at a style that is not registered.
    #[error("style '{from}' aliases non-existent style '{to}'")]
    UnresolvedAlias { from: String, to: String },
    /// Following aliases leads back to a style already visited.
    #[error("cycle detected in style aliases: {}", path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_alias_names_both_styles() {
        let err = StyleValidationError::UnresolvedAlias {
            from: "toggle.on".to_string(),
            to: "accent".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "style 'toggle.on' aliases non-existent style 'accent'"
        );
    }

    #[test]
    fn test_cycle_lists_path() {
        let err = StyleValidationError::CycleDetected {
            path: vec!["a".into(), "b".into(), "a".into()],
        };
        assert!(err.to_string().ends_with("a -> b -> a"));
    }
}
