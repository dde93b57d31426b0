//! Transaction tree consumed by the graph builder
//!
//! Transactions arrive fully loaded from an upstream collaborator. Each kind
//! carries only the fields the graph needs; inner transactions only exist
//! under application calls.

use serde::{Serialize, Deserialize};
use std::fmt;

use crate::constants::programs;

/// Application identifier
pub type AppId = u64;

/// Asset identifier
pub type AssetId = u64;

/// An account address, opaque to the graph builder
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Create an address from its encoded form
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// The encoded address
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

/// A top-level or inner transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction id (inner transactions use `<root id>/inner/<n>`)
    pub id: String,
    /// Sender address
    pub sender: Address,
    /// Address the sender rekeyed to with this transaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rekey_to: Option<Address>,
    /// Group id, resolved upstream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Kind-specific payload
    #[serde(flatten)]
    pub kind: TransactionKind,
}

/// Closed set of transaction kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TransactionKind {
    Payment(Payment),
    AssetTransfer(AssetTransfer),
    AssetConfig(AssetConfig),
    AssetFreeze(AssetFreeze),
    KeyReg(KeyReg),
    AppCall(AppCall),
    StateProof,
}

impl TransactionKind {
    /// Kind tag without payload
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            TransactionKind::Payment(_) => TransactionType::Payment,
            TransactionKind::AssetTransfer(_) => TransactionType::AssetTransfer,
            TransactionKind::AssetConfig(_) => TransactionType::AssetConfig,
            TransactionKind::AssetFreeze(_) => TransactionType::AssetFreeze,
            TransactionKind::KeyReg(_) => TransactionType::KeyReg,
            TransactionKind::AppCall(_) => TransactionType::AppCall,
            TransactionKind::StateProof => TransactionType::StateProof,
        }
    }
}

/// Kind tag of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionType {
    Payment,
    AssetTransfer,
    AssetConfig,
    AssetFreeze,
    KeyReg,
    AppCall,
    StateProof,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransactionType::Payment => "Payment",
            TransactionType::AssetTransfer => "Asset Transfer",
            TransactionType::AssetConfig => "Asset Config",
            TransactionType::AssetFreeze => "Asset Freeze",
            TransactionType::KeyReg => "Key Registration",
            TransactionType::AppCall => "Application Call",
            TransactionType::StateProof => "State Proof",
        };
        f.write_str(name)
    }
}

/// Remainder sent to a close-out account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseRemainder {
    /// Close-out receiver
    pub to: Address,
    /// Amount closed out
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub receiver: Address,
    /// Amount in micro-units
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_remainder: Option<CloseRemainder>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetTransferSubType {
    OptIn,
    OptOut,
    Clawback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetTransfer {
    pub asset_id: AssetId,
    pub receiver: Address,
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_remainder: Option<CloseRemainder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<AssetTransferSubType>,
    /// Account the asset is clawed back from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clawback_from: Option<Address>,
}

impl AssetTransfer {
    pub fn is_clawback(&self) -> bool {
        self.sub_type == Some(AssetTransferSubType::Clawback)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetConfigSubType {
    Create,
    Reconfigure,
    Destroy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetConfig {
    /// Configured asset, absent (or zero) when the transaction creates one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<AssetId>,
    /// Asset created by this transaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_asset_id: Option<AssetId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<AssetConfigSubType>,
}

impl AssetConfig {
    /// The configured asset, falling back to the created asset
    pub fn resolved_asset_id(&self) -> Option<AssetId> {
        self.asset_id
            .filter(|id| *id != 0)
            .or(self.created_asset_id)
    }

    pub fn sub_type(&self) -> AssetConfigSubType {
        match self.sub_type {
            Some(sub_type) => sub_type,
            None if self.asset_id.filter(|id| *id != 0).is_none() => AssetConfigSubType::Create,
            None => AssetConfigSubType::Reconfigure,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetFreezeStatus {
    Frozen,
    Unfrozen,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFreeze {
    pub asset_id: AssetId,
    /// Account whose holding is frozen or unfrozen
    pub address: Address,
    pub freeze_status: AssetFreezeStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyRegSubType {
    Online,
    Offline,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyReg {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_participation_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_participation_key: Option<String>,
}

impl KeyReg {
    /// Registering participation keys brings the account online
    pub fn sub_type(&self) -> KeyRegSubType {
        if self.vote_participation_key.is_some() {
            KeyRegSubType::Online
        } else {
            KeyRegSubType::Offline
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OnCompletion {
    #[default]
    NoOp,
    OptIn,
    CloseOut,
    ClearState,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AppCallSubType {
    Create,
    Update,
    Call,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppCall {
    /// Called application, absent (or zero) for create calls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<AppId>,
    /// Application created by this call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_application_id: Option<AppId>,
    #[serde(default)]
    pub on_completion: OnCompletion,
    /// Base64 approval program, only sent with create and update calls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_program: Option<String>,
    /// Base64 clear state program, only sent with create and update calls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clear_state_program: Option<String>,
    /// Set upstream when the call is already known to be a fee bump
    #[serde(default)]
    pub op_up: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inner_transactions: Vec<Transaction>,
}

impl AppCall {
    pub fn is_create(&self) -> bool {
        self.application_id.filter(|id| *id != 0).is_none()
    }

    /// The called application, falling back to the created application
    pub fn resolved_application_id(&self) -> Option<AppId> {
        self.application_id
            .filter(|id| *id != 0)
            .or(self.created_application_id)
    }

    pub fn sub_type(&self) -> AppCallSubType {
        if self.is_create() {
            AppCallSubType::Create
        } else if self.on_completion == OnCompletion::Update {
            AppCallSubType::Update
        } else {
            AppCallSubType::Call
        }
    }

    /// Whether this is a throwaway application created only to pool fees
    /// (create, delete on completion, trivial approve-everything programs)
    pub fn is_op_up(&self) -> bool {
        if self.op_up {
            return true;
        }
        if !self.is_create() || self.on_completion != OnCompletion::Delete {
            return false;
        }
        match (&self.approval_program, &self.clear_state_program) {
            (Some(approval), Some(clear)) => {
                programs::is_op_up_program(approval) && programs::is_op_up_program(clear)
            },
            _ => false,
        }
    }
}
