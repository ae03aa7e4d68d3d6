//! Error types for client generation.

use thiserror::Error;

/// Errors that abort a generation run.
///
/// Every variant is fatal: generation either produces a complete file or
/// one of these, never partial output.
#[derive(Debug, Error)]
pub enum GenError {
    /// The schema document is not valid JSON or does not match the section shape.
    #[error("parsing schema json: {0}")]
    SchemaDecode(#[from] serde_json::Error),

    /// The schema document declares a format version this generator does not support.
    #[error("unexpected schema version {found}, expected {expected}")]
    SchemaVersionMismatch {
        /// Version found in the document.
        found: i64,
        /// The one supported version.
        expected: i64,
    },

    /// The schema decoded but is structurally invalid.
    #[error("invalid schema: {context}: {message}")]
    SchemaValidation {
        /// Declaration that failed validation, e.g. `struct Item`.
        context: String,
        /// What is wrong with it.
        message: String,
    },

    /// A type token sequence does not follow the type grammar.
    #[error("invalid type for {context}: {reason}, saw {tokens:?}")]
    MalformedType {
        /// Declaration the type belongs to, e.g. `field id of struct Item`.
        context: String,
        /// Grammar rule that was violated.
        reason: &'static str,
        /// The offending (sub)sequence of tokens.
        tokens: Vec<String>,
    },

    /// Two schema names map to the same Go identifier within one scope.
    #[error("duplicate identifier {identifier} in {scope}: from {first:?} and {second:?}")]
    DuplicateIdentifier {
        /// Scope in which the collision happened, e.g. `struct Item`.
        scope: String,
        /// The colliding Go identifier.
        identifier: String,
        /// Schema name that claimed the identifier first.
        first: String,
        /// Schema name that collided with it.
        second: String,
    },

    /// The package name is not usable as a Go package clause.
    #[error("invalid package name {name:?}: {reason}")]
    InvalidPackageName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The base URL is not an absolute URL ending in `/`.
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl GenError {
    /// Returns `true` for errors caused by the caller's options rather than the schema.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPackageName { .. } | Self::InvalidBaseUrl { .. }
        )
    }

    /// Shorthand for [`GenError::SchemaValidation`].
    pub fn validation(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaValidation {
            context: context.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_type_message_names_context() {
        let err = GenError::MalformedType {
            context: "field id of struct Item".into(),
            reason: "leftover tokens after base type",
            tokens: vec!["string".into()],
        };
        assert_eq!(
            err.to_string(),
            r#"invalid type for field id of struct Item: leftover tokens after base type, saw ["string"]"#
        );
    }

    #[test]
    fn test_usage_errors() {
        let err = GenError::InvalidPackageName {
            name: String::new(),
            reason: "must not be empty",
        };
        assert!(err.is_usage_error());
        assert!(!GenError::validation("struct Item", "bad").is_usage_error());
    }
}
