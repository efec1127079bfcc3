use thiserror::Error;

use crate::types::Category;

/// Errors that can occur while building a pattern catalog.
///
/// Parsing itself never fails; every variant here is a catalog
/// construction problem and should stop the process from starting.
#[derive(Debug, Error)]
pub enum TnpError {
    /// A configured rule is not a valid pattern.
    #[error("invalid {family} rule {pattern:?}: {source}")]
    InvalidRule {
        /// The family or category the rule belongs to.
        family: String,
        /// The offending pattern text, after composition.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// A composed family depends on a family that was never supplied.
    #[error("family {family} depends on {dependency}, which is not defined")]
    MissingDependency {
        /// The composed family.
        family: String,
        /// The dependency that could not be found.
        dependency: String,
    },

    /// Composed families depend on each other in a loop.
    #[error("dependency cycle involving family {family}")]
    DependencyCycle {
        /// A family that is part of the cycle.
        family: String,
    },

    /// A finished catalog has no rule list for a category.
    #[error("no rules defined for category {0}")]
    MissingCategory(Category),

    /// A category name that is not one of the known categories.
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),

    /// A catalog override document could not be read.
    #[error("malformed catalog document: {0}")]
    CatalogSpec(#[from] serde_json::Error),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, TnpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = TnpError::MissingCategory(Category::BitDepth);
        assert_eq!(err.to_string(), "no rules defined for category bit_depth");

        let err = TnpError::MissingDependency {
            family: "season".into(),
            dependency: "episode".into(),
        };
        assert!(err.to_string().contains("depends on episode"));

        let err = TnpError::UnknownCategory("subs".into());
        assert!(err.to_string().contains("subs"));
    }

    #[test]
    fn invalid_rule_keeps_source() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let err = TnpError::InvalidRule {
            family: "codec".into(),
            pattern: "(unclosed".into(),
            source,
        };
        assert!(err.to_string().starts_with("invalid codec rule"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TnpError>();
    }
}
