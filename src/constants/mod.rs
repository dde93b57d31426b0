//! Constants used throughout the graph builder

pub mod programs;
pub mod address;
