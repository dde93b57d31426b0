//! Lifelines (columns) of the transaction graph

use serde::{Serialize, Deserialize};

use crate::models::transaction::{Address, AppId, AssetId};

/// Natural key of a participant; verticals are unique by this key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParticipantKey {
    Account(Address),
    Application(AppId),
    Asset(AssetId),
    FeeParticipant,
}

/// An address rendered under an application column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedAccount {
    pub account_address: Address,
    /// Secondary index within the column, 0 for the application's own account
    pub account_number: usize,
}

/// A column of the diagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vertical {
    /// Stable column index, assigned once at first discovery
    pub id: usize,
    #[serde(flatten)]
    pub kind: VerticalKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum VerticalKind {
    Account {
        account_address: Address,
    },
    Application {
        application_id: AppId,
        /// The application's own account
        linked_account: LinkedAccount,
        /// Other addresses observed acting as this application, in discovery order
        rekeyed_accounts: Vec<LinkedAccount>,
    },
    Asset {
        asset_id: AssetId,
    },
    /// Shared column for fee-bump (OpUp) application calls
    SyntheticFeeParticipant,
    /// Empty trailing column reserved for renderers
    Placeholder,
}

impl Vertical {
    /// Natural key, `None` for placeholder columns
    pub fn key(&self) -> Option<ParticipantKey> {
        match &self.kind {
            VerticalKind::Account { account_address } => Some(ParticipantKey::Account(account_address.clone())),
            VerticalKind::Application { application_id, .. } => Some(ParticipantKey::Application(*application_id)),
            VerticalKind::Asset { asset_id } => Some(ParticipantKey::Asset(*asset_id)),
            VerticalKind::SyntheticFeeParticipant => Some(ParticipantKey::FeeParticipant),
            VerticalKind::Placeholder => None,
        }
    }

    /// Account number of `address` when it is rendered under this application column
    pub fn application_account_number(&self, address: &Address) -> Option<usize> {
        match &self.kind {
            VerticalKind::Application { linked_account, rekeyed_accounts, .. } => {
                if &linked_account.account_address == address {
                    return Some(linked_account.account_number);
                }
                rekeyed_accounts
                    .iter()
                    .find(|account| &account.account_address == address)
                    .map(|account| account.account_number)
            },
            _ => None,
        }
    }
}
