//! Error handling for the transaction graph builder.
//!
//! Only contract violations by the upstream transaction loader are errors.
//! A participant that cannot be matched to any discovered vertical is not an
//! error at all: it is carried structurally as [`FromTo::Fallback`] and ends up
//! as a `point` edge, so the rest of the diagram still renders.
//!
//! [`FromTo::Fallback`]: crate::models::FromTo::Fallback

use thiserror::Error;
use std::fmt;

/// Main error type for the graph builder.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A transaction carries a kind tag but its kind-specific data is missing
    /// or contradictory (e.g. an asset config without any asset id).
    #[error("Malformed transaction: {0}")]
    MalformedTransaction(String),

    /// An inner transaction was anchored to a parent row that is not an
    /// application call.
    #[error("Inconsistent nesting: {0}")]
    InconsistentNesting(String),

    /// Errors related to file I/O while loading transactions or saving a graph.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failures outside of transaction decoding.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Prefix the error message with where it happened.
    ///
    /// JSON errors raised while decoding transactions mean the upstream shape
    /// was violated, so they are reported as malformed transactions.
    fn in_context(self, context: &ErrorContext) -> Self {
        match self {
            GraphError::MalformedTransaction(msg) => {
                GraphError::MalformedTransaction(format!("{}: {}", context, msg))
            },
            GraphError::InconsistentNesting(msg) => {
                GraphError::InconsistentNesting(format!("{}: {}", context, msg))
            },
            GraphError::Json(e) => GraphError::MalformedTransaction(format!("{}: {}", context, e)),
            GraphError::Io(e) => GraphError::Io(std::io::Error::new(e.kind(), format!("{}: {}", context, e))),
        }
    }
}

/// Result type alias for the graph builder.
pub type GraphResult<T> = Result<T, GraphError>;

/// Context information for errors.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Transaction being processed, if applicable.
    pub transaction_id: Option<String>,

    /// Component where the error occurred (e.g., "edge_deriver").
    pub component: String,

    /// Operation being performed when the error occurred (e.g., "derive_edges").
    pub operation: String,

    /// Additional context details.
    pub details: Option<String>,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "In {} while {}", self.component, self.operation)?;
        if let Some(transaction_id) = &self.transaction_id {
            write!(f, " for transaction {}", transaction_id)?;
        }
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

/// Extension trait for adding context to errors.
pub trait ErrorExt<T> {
    /// Add detailed context to an error.
    fn with_context(self, context: ErrorContext) -> GraphResult<T>;

    /// Add the component and operation to an error.
    fn with_simple_context(self, component: &str, operation: &str) -> GraphResult<T>;
}

impl<T, E: Into<GraphError>> ErrorExt<T> for Result<T, E> {
    fn with_context(self, context: ErrorContext) -> GraphResult<T> {
        self.map_err(|e| e.into().in_context(&context))
    }

    fn with_simple_context(self, component: &str, operation: &str) -> GraphResult<T> {
        self.with_context(ErrorContext {
            transaction_id: None,
            component: component.to_string(),
            operation: operation.to_string(),
            details: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_prefixed() {
        let result: GraphResult<()> = Err(GraphError::MalformedTransaction("missing asset id".to_string()));
        let err = result
            .with_context(ErrorContext {
                transaction_id: Some("TX1".to_string()),
                component: "participants".to_string(),
                operation: "resolve_asset".to_string(),
                details: None,
            })
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Malformed transaction: In participants while resolve_asset for transaction TX1: missing asset id"
        );
    }

    #[test]
    fn test_json_error_becomes_malformed() {
        let result: Result<serde_json::Value, serde_json::Error> = serde_json::from_str("{");
        let err = result.with_simple_context("transaction_parser", "parse_json").unwrap_err();
        assert!(matches!(err, GraphError::MalformedTransaction(_)));
    }
}
