//! Transaction loading utilities.
//!
//! The graph builder consumes transactions already fetched by an upstream
//! loader. This module decodes that loader's JSON output, accepting a single
//! transaction, an array of transactions (a group), an object wrapping a
//! `transactions` array, or any of those encoded as base64.

use std::fs;
use std::path::Path;
use log::{debug, warn};
use serde_json::Value;
use crate::errors::{GraphError, GraphResult, ErrorExt, ErrorContext};
use crate::models::Transaction;

/// Parse top-level transactions from raw loader output.
///
/// # Arguments
///
/// * `data` - JSON (or base64-encoded JSON) bytes.
///
/// # Returns
///
/// The top-level transactions in document order, or a malformed-transaction
/// error if the data does not match the expected shape.
pub fn parse_transactions(data: &[u8]) -> GraphResult<Vec<Transaction>> {
    let context = ErrorContext {
        transaction_id: None,
        component: "transaction_parser".to_string(),
        operation: "parse_transactions".to_string(),
        details: Some(format!("data_len={}", data.len())),
    };

    // Only fall back to base64 when the data is not JSON at all, so shape
    // errors inside valid JSON are reported as-is
    let result = match serde_json::from_slice::<Value>(data) {
        Ok(value) => transactions_from_value(value),
        Err(e) => {
            debug!("JSON parsing failed: {}", e);
            try_parse_base64(data)
        },
    };

    match &result {
        Ok(transactions) => debug!("Parsed {} top-level transactions", transactions.len()),
        Err(e) => warn!("All parsing methods failed: {}", e),
    }

    result.with_context(context)
}

/// Read and parse transactions from a file.
pub fn read_transactions(path: &Path) -> GraphResult<Vec<Transaction>> {
    let data = fs::read(path).with_context(ErrorContext {
        transaction_id: None,
        component: "transaction_parser".to_string(),
        operation: "read_transactions".to_string(),
        details: Some(path.display().to_string()),
    })?;
    parse_transactions(&data)
}

fn try_parse_json(data: &[u8]) -> GraphResult<Vec<Transaction>> {
    let value: Value = serde_json::from_slice(data)?;
    transactions_from_value(value)
}

fn try_parse_base64(data: &[u8]) -> GraphResult<Vec<Transaction>> {
    let text = std::str::from_utf8(data)
        .map_err(|_| GraphError::MalformedTransaction("Not a valid UTF-8 string for base64 decoding".to_string()))?;
    let decoded = base64::decode(text.trim())
        .map_err(|_| GraphError::MalformedTransaction("Not valid JSON or base64 encoded JSON".to_string()))?;
    try_parse_json(&decoded)
}

fn transactions_from_value(value: Value) -> GraphResult<Vec<Transaction>> {
    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(mut object) => match object.remove("transactions") {
            Some(transactions @ Value::Array(_)) => Ok(serde_json::from_value(transactions)?),
            Some(_) => Err(GraphError::MalformedTransaction(
                "`transactions` must be an array".to_string()
            )),
            None => Ok(vec![serde_json::from_value(Value::Object(object))?]),
        },
        _ => Err(GraphError::MalformedTransaction(
            "Expected a transaction object or an array of transactions".to_string()
        )),
    }
}
