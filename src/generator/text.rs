//! Plain text rendering, for inspecting graphs from the command line

use std::fmt::Write;
use crate::models::{Description, Direction, Shape, TransactionsGraph, Vertical, VerticalKind, Visualization};

pub fn render(graph: &TransactionsGraph<'_>) -> String {
    let mut out = String::new();

    out.push_str("Verticals:\n");
    for vertical in &graph.verticals {
        let _ = writeln!(out, "  {:>3}  {}", vertical.id, vertical_label(vertical));
    }

    out.push_str("Horizontals:\n");
    for horizontal in &graph.horizontals {
        let indent = "  ".repeat(horizontal.nesting_level);
        let _ = writeln!(
            out,
            "  {}{} ({})",
            indent,
            horizontal.transaction.id,
            horizontal.transaction.kind.transaction_type()
        );
        for edge in &horizontal.edges {
            let _ = writeln!(out, "  {}  {}  {}", indent, edge_label(edge), description_label(&edge.description));
        }
    }

    out
}

fn vertical_label(vertical: &Vertical) -> String {
    match &vertical.kind {
        VerticalKind::Account { account_address } => format!("Account {}", account_address),
        VerticalKind::Application { application_id, linked_account, rekeyed_accounts } => {
            let mut label = format!("Application {} [{}]", application_id, linked_account.account_address);
            for account in rekeyed_accounts {
                let _ = write!(label, " +{}:{}", account.account_number, account.account_address);
            }
            label
        },
        VerticalKind::Asset { asset_id } => format!("Asset {}", asset_id),
        VerticalKind::SyntheticFeeParticipant => "OpUp".to_string(),
        VerticalKind::Placeholder => String::new(),
    }
}

fn anchor(vertical: Option<usize>, account: Option<usize>) -> String {
    match (vertical, account) {
        (Some(vertical), Some(account)) => format!("{}.{}", vertical, account),
        (Some(vertical), None) => vertical.to_string(),
        (None, _) => "?".to_string(),
    }
}

fn edge_label(edge: &Visualization) -> String {
    let from = anchor(edge.from_vertical_index, edge.from_account_index);
    match edge.shape {
        Shape::Point => format!("* {}", from),
        Shape::SelfLoop => format!("@ {}", from),
        Shape::Vector => {
            let to = anchor(edge.to_vertical_index, edge.to_account_index);
            match edge.direction {
                Some(Direction::RightToLeft) => format!("{} <- {}", from, to),
                _ => format!("{} -> {}", from, to),
            }
        },
    }
}

fn description_label(description: &Description) -> String {
    match description {
        Description::Payment { amount } => format!("payment {}", amount),
        Description::PaymentCloseOut { amount } => format!("close out {}", amount),
        Description::AssetTransfer { amount, asset_id } => format!("transfer {} of asset {}", amount, asset_id),
        Description::AssetCloseOut { amount, asset_id } => format!("close out {} of asset {}", amount, asset_id),
        Description::Clawback { asset_id } => format!("clawback of asset {}", asset_id),
        Description::AssetConfig { asset_id, sub_type } => format!("{:?} asset {}", sub_type, asset_id),
        Description::AssetFreeze { asset_id, status } => format!("{:?} asset {}", status, asset_id),
        Description::KeyReg { sub_type } => format!("key registration ({:?})", sub_type),
        Description::AppCall { sub_type } => format!("app call ({:?})", sub_type),
        Description::StateProof => "state proof".to_string(),
    }
}
