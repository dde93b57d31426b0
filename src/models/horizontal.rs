//! Rows and edges of the transaction graph

use serde::{Serialize, Serializer, Deserialize};

use crate::models::transaction::{
    AppCallSubType, AssetConfigSubType, AssetFreezeStatus, AssetId, KeyRegSubType, Transaction,
};

/// One row per transaction node, top-level or inner
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Horizontal<'a> {
    /// Source transaction, serialized as its id
    #[serde(rename = "transactionId", serialize_with = "serialize_transaction_id")]
    pub transaction: &'a Transaction,
    /// 0 for top-level transactions, parent level + 1 for inner ones
    pub nesting_level: usize,
    /// Edges of this row, usually one
    pub edges: Vec<Visualization>,
    /// Id of the enclosing application call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<&'a str>,
    /// Whether another transaction follows under the same parent
    pub has_next_sibling: bool,
}

fn serialize_transaction_id<S: Serializer>(transaction: &&Transaction, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&transaction.id)
}

/// Anchor of an edge end before shape classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FromTo {
    Resolved {
        vertical_id: usize,
        account_number: Option<usize>,
    },
    /// No discovered vertical matches the participant
    Fallback,
}

impl FromTo {
    pub fn vertical(vertical_id: usize) -> Self {
        FromTo::Resolved { vertical_id, account_number: None }
    }

    pub fn account(vertical_id: usize, account_number: usize) -> Self {
        FromTo::Resolved { vertical_id, account_number: Some(account_number) }
    }

    pub fn vertical_id(&self) -> Option<usize> {
        match self {
            FromTo::Resolved { vertical_id, .. } => Some(*vertical_id),
            FromTo::Fallback => None,
        }
    }

    pub fn account_number(&self) -> Option<usize> {
        match self {
            FromTo::Resolved { account_number, .. } => *account_number,
            FromTo::Fallback => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FromTo::Fallback)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Shape {
    /// No resolvable target
    Point,
    /// Source and target share a column
    SelfLoop,
    /// Distinct columns, `from` is always the lower index
    Vector,
}

/// Typed label of an edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Description {
    Payment {
        amount: u64,
    },
    PaymentCloseOut {
        amount: u64,
    },
    AssetTransfer {
        amount: u64,
        asset_id: AssetId,
    },
    AssetCloseOut {
        amount: u64,
        asset_id: AssetId,
    },
    Clawback {
        asset_id: AssetId,
    },
    AssetConfig {
        asset_id: AssetId,
        sub_type: AssetConfigSubType,
    },
    AssetFreeze {
        asset_id: AssetId,
        status: AssetFreezeStatus,
    },
    KeyReg {
        sub_type: KeyRegSubType,
    },
    AppCall {
        sub_type: AppCallSubType,
    },
    StateProof,
}

/// The rendered effect of one transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visualization {
    /// Column of the edge's start, `None` for an unanchored marker
    pub from_vertical_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_account_index: Option<usize>,
    /// Only set for vectors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_vertical_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_account_index: Option<usize>,
    /// Arrowhead orientation, only set for vectors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    pub shape: Shape,
    pub description: Description,
}
