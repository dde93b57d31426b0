//! Anchor resolution for edge ends

use log::debug;

use crate::errors::{GraphError, GraphResult};
use crate::graph::participants::resolve_application_id;
use crate::graph::verticals::Verticals;
use crate::models::{Address, FromTo, Horizontal, TransactionKind};

/// Resolve where an edge sent by `sender` starts
///
/// Top-level transactions anchor on the sender's own column. Inner
/// transactions anchor on the column of the application whose call spawned
/// them, since they are signed by that application.
pub fn resolve_from(sender: &Address, verticals: &Verticals, parent: Option<&Horizontal<'_>>) -> GraphResult<FromTo> {
    match parent {
        Some(parent) => calculate_from_with_parent(sender, verticals, parent),
        None => Ok(calculate_from_no_parent(sender, verticals)),
    }
}

/// Anchor of a transaction with no parent
pub fn calculate_from_no_parent(sender: &Address, verticals: &Verticals) -> FromTo {
    if let Some(vertical) = verticals.account(sender) {
        return FromTo::vertical(vertical.id);
    }
    if let Some(vertical) = verticals.application_by_linked_address(sender) {
        if let Some(account_number) = vertical.application_account_number(sender) {
            return FromTo::account(vertical.id, account_number);
        }
    }
    // Accounts rekeyed to an application sign on the application's column
    if let Some((vertical, account_number)) = verticals.application_by_rekeyed_address(sender) {
        return FromTo::account(vertical.id, account_number);
    }

    debug!("No vertical for sender {}", sender);
    FromTo::Fallback
}

/// Anchor of an inner transaction, on its parent application's column
///
/// A sender that is neither the application's own account nor one of its
/// rekeyed accounts still anchors on the application, without an account number.
pub fn calculate_from_with_parent(sender: &Address, verticals: &Verticals, parent: &Horizontal<'_>) -> GraphResult<FromTo> {
    let call = match &parent.transaction.kind {
        TransactionKind::AppCall(call) => call,
        other => {
            return Err(GraphError::InconsistentNesting(format!(
                "parent {} of an inner transaction is a {} transaction, not an application call",
                parent.transaction.id,
                other.transaction_type()
            )));
        },
    };

    if call.is_op_up() {
        debug!("Parent {} is a fee-bump call without an application vertical", parent.transaction.id);
        return Ok(FromTo::Fallback);
    }

    let application_id = resolve_application_id(parent.transaction, call)?;
    match verticals.application(application_id) {
        Some(vertical) => Ok(FromTo::Resolved {
            vertical_id: vertical.id,
            account_number: vertical.application_account_number(sender),
        }),
        None => {
            debug!("No vertical for parent application {}", application_id);
            Ok(FromTo::Fallback)
        },
    }
}

/// Resolve where an edge to `address` ends: its account column, else the
/// application column it is the own account of or is rekeyed to
pub fn resolve_address(address: &Address, verticals: &Verticals) -> FromTo {
    if let Some(vertical) = verticals.account(address) {
        return FromTo::vertical(vertical.id);
    }
    if let Some(vertical) = verticals.application_by_linked_address(address) {
        if let Some(account_number) = vertical.application_account_number(address) {
            return FromTo::account(vertical.id, account_number);
        }
    }
    if let Some((vertical, account_number)) = verticals.application_by_rekeyed_address(address) {
        return FromTo::account(vertical.id, account_number);
    }

    debug!("No vertical for address {}", address);
    FromTo::Fallback
}
