//! Utility functions and helpers

pub mod hash;
pub mod address;
pub mod transaction_parser;

pub use self::address::application_address;
