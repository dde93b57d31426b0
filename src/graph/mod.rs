//! Transaction graph construction
//!
//! Building a graph runs in one direction: participants are resolved and
//! every column is discovered in a single pre-order walk, then each
//! transaction is anchored, turned into edges and classified into a row.
//! The result is a pure function of the input tree.

pub mod participants;
pub mod verticals;
pub mod anchors;
pub mod edges;
pub mod shape;
pub mod horizontals;

use log::info;

use crate::errors::GraphResult;
use crate::models::{Transaction, TransactionsGraph};

pub use self::anchors::{calculate_from_no_parent, calculate_from_with_parent, resolve_address, resolve_from};
pub use self::edges::transaction_visualizations;
pub use self::horizontals::compose;
pub use self::participants::{Participant, ParticipantResolver};
pub use self::shape::classify;
pub use self::verticals::{assign_verticals, VerticalAssigner, Verticals};

/// Options for building a graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphOptions {
    /// Append an empty trailing column after the discovered ones
    pub include_placeholder: bool,
}

/// Builds transaction graphs
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    options: GraphOptions,
}

impl GraphBuilder {
    /// Create a new builder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with the given options
    pub fn with_options(options: GraphOptions) -> Self {
        Self { options }
    }

    /// Build the graph of a transaction or a group of top-level transactions
    pub fn build<'a>(&self, transactions: &'a [Transaction]) -> GraphResult<TransactionsGraph<'a>> {
        let mut verticals = assign_verticals(transactions)?;
        let horizontals = compose(transactions, &verticals)?;

        if self.options.include_placeholder {
            verticals.push_placeholder();
        }

        let graph = TransactionsGraph {
            verticals: verticals.into_vec(),
            horizontals,
        };
        info!(
            "Built graph with {} verticals, {} horizontals and {} edges",
            graph.verticals.len(),
            graph.horizontals.len(),
            graph.edge_count()
        );
        Ok(graph)
    }
}
