//! A library for turning Algorand transaction trees into diagram models
//!
//! Given a transaction (or a group of top-level transactions), possibly with
//! deeply nested inner transactions spawned by application calls, this crate
//! derives an ordered list of lifelines ("verticals", one per account,
//! application, asset or fee-bump participant) and one row ("horizontal") per
//! transaction holding the directed edges that describe its effect.

pub mod constants;
pub mod errors;
pub mod generator;
pub mod graph;
pub mod models;
pub mod utils;

use std::path::Path;
use anyhow::Result;

pub use crate::errors::{GraphError, GraphResult};
pub use crate::graph::{GraphBuilder, GraphOptions};
pub use crate::models::{Transaction, TransactionsGraph};

/// Main entry point for building the graph of a transaction or group
pub fn build_transactions_graph(transactions: &[Transaction]) -> GraphResult<TransactionsGraph<'_>> {
    GraphBuilder::new().build(transactions)
}

/// Load transactions from a file, build their graph and optionally save it
pub fn build_graph_from_file(
    input_path: &Path,
    output_path: Option<&Path>,
    options: GraphOptions,
) -> Result<String> {
    let transactions = utils::transaction_parser::read_transactions(input_path)?;
    let graph = GraphBuilder::with_options(options).build(&transactions)?;

    if let Some(path) = output_path {
        generator::save_graph(&graph, path)?;
    }

    generator::to_json(&graph)
}

/// Version of the graph builder
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
