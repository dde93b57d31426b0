//! Row composition

use crate::errors::{ErrorContext, ErrorExt, GraphResult};
use crate::graph::edges::transaction_visualizations;
use crate::graph::verticals::Verticals;
use crate::models::{Horizontal, Transaction, TransactionKind};

/// One row per transaction in document order, inner transactions right after their parent
pub fn compose<'a>(transactions: &'a [Transaction], verticals: &Verticals) -> GraphResult<Vec<Horizontal<'a>>> {
    let mut horizontals = Vec::with_capacity(transactions.len());
    for (index, transaction) in transactions.iter().enumerate() {
        let has_next_sibling = index + 1 < transactions.len();
        horizontals.extend(rows_for(transaction, verticals, None, 0, has_next_sibling)?);
    }
    Ok(horizontals)
}

fn rows_for<'a>(
    transaction: &'a Transaction,
    verticals: &Verticals,
    parent: Option<&Horizontal<'a>>,
    nesting_level: usize,
    has_next_sibling: bool,
) -> GraphResult<Vec<Horizontal<'a>>> {
    let edges = transaction_visualizations(transaction, verticals, parent).with_context(ErrorContext {
        transaction_id: Some(transaction.id.clone()),
        component: "horizontal_composer".to_string(),
        operation: "derive_edges".to_string(),
        details: Some(format!("nesting_level={}", nesting_level)),
    })?;

    let row = Horizontal {
        transaction,
        nesting_level,
        edges,
        parent_id: parent.map(|parent| parent.transaction.id.as_str()),
        has_next_sibling,
    };

    let mut children = Vec::new();
    if let TransactionKind::AppCall(call) = &transaction.kind {
        let count = call.inner_transactions.len();
        for (index, inner) in call.inner_transactions.iter().enumerate() {
            children.extend(rows_for(inner, verticals, Some(&row), nesting_level + 1, index + 1 < count)?);
        }
    }

    let mut rows = Vec::with_capacity(1 + children.len());
    rows.push(row);
    rows.extend(children);
    Ok(rows)
}
