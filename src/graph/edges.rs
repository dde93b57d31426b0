//! Per-kind edge derivation
//!
//! One rule per transaction kind. Every rule anchors its start with
//! [`resolve_from`], looks up its target by kind, and hands both to
//! [`classify`]. Unresolved participants degrade to points; only contract
//! violations are errors.

use crate::errors::GraphResult;
use crate::graph::anchors::{resolve_address, resolve_from};
use crate::graph::participants::{clawback_source, resolve_asset_id};
use crate::graph::shape::classify;
use crate::graph::verticals::Verticals;
use crate::models::transaction::{AppCall, AssetConfig, AssetFreeze, AssetTransfer, KeyReg, Payment};
use crate::models::{Description, FromTo, Horizontal, Transaction, TransactionKind, Visualization};

/// Edges of any transaction
pub fn transaction_visualizations(
    transaction: &Transaction,
    verticals: &Verticals,
    parent: Option<&Horizontal<'_>>,
) -> GraphResult<Vec<Visualization>> {
    match &transaction.kind {
        TransactionKind::Payment(payment) => payment_visualizations(transaction, payment, verticals, parent),
        TransactionKind::AssetTransfer(transfer) => asset_transfer_visualizations(transaction, transfer, verticals, parent),
        TransactionKind::AssetConfig(config) => asset_config_visualizations(transaction, config, verticals, parent),
        TransactionKind::AssetFreeze(freeze) => asset_freeze_visualizations(transaction, freeze, verticals, parent),
        TransactionKind::KeyReg(key_reg) => key_reg_visualizations(transaction, key_reg, verticals, parent),
        TransactionKind::AppCall(call) => app_call_visualizations(transaction, call, verticals, parent),
        TransactionKind::StateProof => state_proof_visualizations(transaction, verticals, parent),
    }
}

/// A payment, plus a second edge to the close-out receiver when the sender closes its account
pub fn payment_visualizations(
    transaction: &Transaction,
    payment: &Payment,
    verticals: &Verticals,
    parent: Option<&Horizontal<'_>>,
) -> GraphResult<Vec<Visualization>> {
    let from = resolve_from(&transaction.sender, verticals, parent)?;

    let mut visualizations = vec![classify(
        from,
        Some(resolve_address(&payment.receiver, verticals)),
        Description::Payment { amount: payment.amount },
    )];

    if let Some(close) = &payment.close_remainder {
        visualizations.push(classify(
            from,
            Some(resolve_address(&close.to, verticals)),
            Description::PaymentCloseOut { amount: close.amount },
        ));
    }

    Ok(visualizations)
}

/// An asset transfer
///
/// A clawback is drawn as two edges: the clawback authority reaching into the
/// source account, then the asset moving from the source to the receiver.
/// A close-out adds an edge to the close-out receiver.
pub fn asset_transfer_visualizations(
    transaction: &Transaction,
    transfer: &AssetTransfer,
    verticals: &Verticals,
    parent: Option<&Horizontal<'_>>,
) -> GraphResult<Vec<Visualization>> {
    let from = resolve_from(&transaction.sender, verticals, parent)?;
    let to = resolve_address(&transfer.receiver, verticals);
    let transfer_description = Description::AssetTransfer {
        amount: transfer.amount,
        asset_id: transfer.asset_id,
    };

    let mut visualizations = if transfer.is_clawback() {
        let source = resolve_address(clawback_source(transaction, transfer)?, verticals);
        vec![
            classify(from, Some(source), Description::Clawback { asset_id: transfer.asset_id }),
            classify(source, Some(to), transfer_description),
        ]
    } else {
        vec![classify(from, Some(to), transfer_description)]
    };

    if let Some(close) = &transfer.close_remainder {
        visualizations.push(classify(
            from,
            Some(resolve_address(&close.to, verticals)),
            Description::AssetCloseOut {
                amount: close.amount,
                asset_id: transfer.asset_id,
            },
        ));
    }

    Ok(visualizations)
}

/// Creating, reconfiguring or destroying an asset, drawn towards the asset's column
pub fn asset_config_visualizations(
    transaction: &Transaction,
    config: &AssetConfig,
    verticals: &Verticals,
    parent: Option<&Horizontal<'_>>,
) -> GraphResult<Vec<Visualization>> {
    let from = resolve_from(&transaction.sender, verticals, parent)?;
    let asset_id = resolve_asset_id(transaction, config)?;
    let to = match verticals.asset(asset_id) {
        Some(vertical) => FromTo::vertical(vertical.id),
        None => FromTo::Fallback,
    };

    Ok(vec![classify(
        from,
        Some(to),
        Description::AssetConfig {
            asset_id,
            sub_type: config.sub_type(),
        },
    )])
}

/// Freezing or unfreezing an account's holding, drawn towards the frozen account
pub fn asset_freeze_visualizations(
    transaction: &Transaction,
    freeze: &AssetFreeze,
    verticals: &Verticals,
    parent: Option<&Horizontal<'_>>,
) -> GraphResult<Vec<Visualization>> {
    let from = resolve_from(&transaction.sender, verticals, parent)?;
    let to = resolve_address(&freeze.address, verticals);

    Ok(vec![classify(
        from,
        Some(to),
        Description::AssetFreeze {
            asset_id: freeze.asset_id,
            status: freeze.freeze_status,
        },
    )])
}

pub fn key_reg_visualizations(
    transaction: &Transaction,
    key_reg: &KeyReg,
    verticals: &Verticals,
    parent: Option<&Horizontal<'_>>,
) -> GraphResult<Vec<Visualization>> {
    let from = resolve_from(&transaction.sender, verticals, parent)?;
    Ok(vec![classify(from, None, Description::KeyReg { sub_type: key_reg.sub_type() })])
}

/// An application call, drawn towards the application (or the shared fee-bump column)
pub fn app_call_visualizations(
    transaction: &Transaction,
    call: &AppCall,
    verticals: &Verticals,
    parent: Option<&Horizontal<'_>>,
) -> GraphResult<Vec<Visualization>> {
    let from = resolve_from(&transaction.sender, verticals, parent)?;
    let target = if call.is_op_up() {
        verticals.fee_participant()
    } else {
        call.resolved_application_id()
            .and_then(|application_id| verticals.application(application_id))
    };
    let to = match target {
        Some(vertical) => FromTo::vertical(vertical.id),
        None => FromTo::Fallback,
    };

    Ok(vec![classify(from, Some(to), Description::AppCall { sub_type: call.sub_type() })])
}

pub fn state_proof_visualizations(
    transaction: &Transaction,
    verticals: &Verticals,
    parent: Option<&Horizontal<'_>>,
) -> GraphResult<Vec<Visualization>> {
    let from = resolve_from(&transaction.sender, verticals, parent)?;
    Ok(vec![classify(from, None, Description::StateProof)])
}
