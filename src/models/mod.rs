//! Data models for transaction graphs

pub mod transaction;
pub mod vertical;
pub mod horizontal;
#[cfg(test)]
mod tests;

use serde::Serialize;

pub use self::transaction::{Address, AppId, AssetId, Transaction, TransactionKind, TransactionType};
pub use self::vertical::{LinkedAccount, ParticipantKey, Vertical, VerticalKind};
pub use self::horizontal::{Description, Direction, FromTo, Horizontal, Shape, Visualization};

/// Diagram model for a transaction or a group of transactions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionsGraph<'a> {
    /// Columns, ordered by id
    pub verticals: Vec<Vertical>,
    /// Rows in document order
    pub horizontals: Vec<Horizontal<'a>>,
}

impl<'a> TransactionsGraph<'a> {
    /// Look up a column by its id
    pub fn vertical(&self, id: usize) -> Option<&Vertical> {
        self.verticals.iter().find(|vertical| vertical.id == id)
    }

    /// Total number of edges across all rows
    pub fn edge_count(&self) -> usize {
        self.horizontals.iter().map(|horizontal| horizontal.edges.len()).sum()
    }
}
