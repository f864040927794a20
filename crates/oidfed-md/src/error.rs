//! Error types for metadata serialization and parsing.
//!
//! The flattening and partitioning transforms never fail. Errors come from
//! the typed edges: binding a consolidated object into a schema type, turning
//! a schema value into JSON, or a configured policy refusing a merge.

use thiserror::Error;

/// Result type for metadata operations.
pub type MetadataResult<T> = Result<T, MetadataError>;

/// Metadata error types.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// Structural binding into a schema type failed.
    ///
    /// This is also where a declared-name mismatch surfaces: a member the
    /// schema expects as a language object arrived as a plain value.
    #[error("Failed to bind metadata: {0}")]
    Binding(#[from] serde_json::Error),

    /// A schema value could not be represented as JSON.
    #[error("Failed to serialize metadata: {0}")]
    Serialization(String),

    /// A JSON value that must be an object was something else.
    #[error("Expected a JSON object for {context}")]
    NotAnObject {
        /// What was being processed.
        context: String,
    },

    /// An extension parameter names a member of the base metadata.
    #[error("Extension parameter collides with base metadata member: {0}")]
    ExtensionCollision(String),
}

impl MetadataError {
    /// Check if this error is a binding failure caused by a value of the wrong shape.
    #[must_use]
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, MetadataError::Binding(e) if e.is_data())
    }

    /// Check if this error was raised by the extension collision policy.
    #[must_use]
    pub fn is_collision(&self) -> bool {
        matches!(self, MetadataError::ExtensionCollision(_))
    }

    pub(crate) fn not_an_object(context: impl Into<String>) -> Self {
        MetadataError::NotAnObject {
            context: context.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::LanguageValue;

    #[test]
    fn test_error_display() {
        let err = MetadataError::ExtensionCollision("issuer".to_string());
        assert_eq!(
            err.to_string(),
            "Extension parameter collides with base metadata member: issuer"
        );

        let err = MetadataError::not_an_object("reference data object");
        assert_eq!(err.to_string(), "Expected a JSON object for reference data object");
    }

    #[test]
    fn test_is_shape_mismatch() {
        let err: MetadataError = serde_json::from_value::<LanguageValue<String>>(
            serde_json::json!("plain scalar"),
        )
        .unwrap_err()
        .into();
        assert!(err.is_shape_mismatch());
        assert!(!err.is_collision());

        let syntax: MetadataError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(!syntax.is_shape_mismatch());
    }

    #[test]
    fn test_is_collision() {
        assert!(MetadataError::ExtensionCollision("x".to_string()).is_collision());
        assert!(!MetadataError::Serialization("x".to_string()).is_collision());
    }
}
