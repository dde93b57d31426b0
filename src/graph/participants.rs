//! Participant identity resolution
//!
//! Maps the references a transaction makes (sender, receivers, assets,
//! applications) to canonical participants, and recognizes addresses that
//! act as an application: the application's own account, inner transaction
//! senders of an application call, and accounts rekeyed to an application.

use std::collections::HashMap;
use log::debug;

use crate::errors::{GraphError, GraphResult};
use crate::models::transaction::{AppCall, AssetConfig, AssetTransfer};
use crate::models::{Address, AppId, AssetId, Transaction, TransactionKind};
use crate::utils::application_address;

/// A participant referenced by a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Participant {
    /// A plain address, which may turn out to be an application's own account
    Address(Address),
    /// An address signing as an application
    ActingAs {
        application_id: AppId,
        address: Address,
    },
    Application(AppId),
    Asset(AssetId),
    FeeParticipant,
}

/// Application id of a call, the created application for create calls
pub fn resolve_application_id(transaction: &Transaction, call: &AppCall) -> GraphResult<AppId> {
    call.resolved_application_id().ok_or_else(|| {
        GraphError::MalformedTransaction(format!(
            "application call {} has neither an application id nor a created application id",
            transaction.id
        ))
    })
}

/// Asset id of an asset config, the created asset for create transactions
pub fn resolve_asset_id(transaction: &Transaction, config: &AssetConfig) -> GraphResult<AssetId> {
    config.resolved_asset_id().ok_or_else(|| {
        GraphError::MalformedTransaction(format!(
            "asset config {} has neither an asset id nor a created asset id",
            transaction.id
        ))
    })
}

/// Account a clawback takes the asset from
pub fn clawback_source<'a>(transaction: &Transaction, transfer: &'a AssetTransfer) -> GraphResult<&'a Address> {
    transfer.clawback_from.as_ref().ok_or_else(|| {
        GraphError::MalformedTransaction(format!(
            "clawback {} has no clawback source",
            transaction.id
        ))
    })
}

/// Resolves participants against the applications present in a transaction tree
#[derive(Debug, Clone, Default)]
pub struct ParticipantResolver {
    /// Own account of every application called in the tree
    application_addresses: HashMap<AppId, Address>,
    /// Reverse of `application_addresses`
    address_owners: HashMap<Address, AppId>,
    /// Senders rekeyed to an application in the tree, first rekey wins
    rekeyed_addresses: HashMap<Address, AppId>,
}

impl ParticipantResolver {
    /// Collect every application called anywhere in the tree
    pub fn new(transactions: &[Transaction]) -> GraphResult<Self> {
        let mut resolver = Self::default();
        for transaction in transactions {
            resolver.collect_applications(transaction)?;
        }
        for transaction in transactions {
            resolver.collect_rekeys(transaction);
        }
        debug!(
            "Resolved {} application accounts and {} rekeyed accounts",
            resolver.application_addresses.len(),
            resolver.rekeyed_addresses.len()
        );
        Ok(resolver)
    }

    fn collect_rekeys(&mut self, transaction: &Transaction) {
        if let Some(application_id) = self.rekey_target(transaction) {
            self.rekeyed_addresses
                .entry(transaction.sender.clone())
                .or_insert(application_id);
        }
        if let TransactionKind::AppCall(call) = &transaction.kind {
            for inner in &call.inner_transactions {
                self.collect_rekeys(inner);
            }
        }
    }

    fn collect_applications(&mut self, transaction: &Transaction) -> GraphResult<()> {
        if let TransactionKind::AppCall(call) = &transaction.kind {
            if !call.is_op_up() {
                let application_id = resolve_application_id(transaction, call)?;
                if !self.application_addresses.contains_key(&application_id) {
                    let address = application_address(application_id);
                    self.address_owners.entry(address.clone()).or_insert(application_id);
                    self.application_addresses.insert(application_id, address);
                }
            }
            for inner in &call.inner_transactions {
                self.collect_applications(inner)?;
            }
        }
        Ok(())
    }

    /// Own account of an application
    pub fn application_address(&self, application_id: AppId) -> Address {
        self.application_addresses
            .get(&application_id)
            .cloned()
            .unwrap_or_else(|| application_address(application_id))
    }

    /// Application owning `address`, if it is the account of an application in the tree
    pub fn application_for_address(&self, address: &Address) -> Option<AppId> {
        self.address_owners.get(address).copied()
    }

    /// Application `address` is rekeyed to anywhere in the tree
    pub fn rekeyed_application(&self, address: &Address) -> Option<AppId> {
        self.rekeyed_addresses.get(address).copied()
    }

    /// Application the transaction rekeys its sender to, if any
    pub fn rekey_target(&self, transaction: &Transaction) -> Option<AppId> {
        transaction
            .rekey_to
            .as_ref()
            .and_then(|address| self.application_for_address(address))
    }

    /// Participants referenced by a transaction, in discovery order
    ///
    /// `acting_for` is the application whose call spawned this transaction;
    /// the sender of an inner transaction signs as that application.
    pub fn participants(&self, transaction: &Transaction, acting_for: Option<AppId>) -> GraphResult<Vec<Participant>> {
        let mut participants = Vec::with_capacity(4);

        let sender = transaction.sender.clone();
        match acting_for.or_else(|| self.rekey_target(transaction)) {
            Some(application_id) => participants.push(Participant::ActingAs { application_id, address: sender }),
            None => participants.push(Participant::Address(sender)),
        }

        match &transaction.kind {
            TransactionKind::Payment(payment) => {
                participants.push(Participant::Address(payment.receiver.clone()));
                if let Some(close) = &payment.close_remainder {
                    participants.push(Participant::Address(close.to.clone()));
                }
            },
            TransactionKind::AssetTransfer(transfer) => {
                if transfer.is_clawback() {
                    participants.push(Participant::Address(clawback_source(transaction, transfer)?.clone()));
                }
                participants.push(Participant::Address(transfer.receiver.clone()));
                if let Some(close) = &transfer.close_remainder {
                    participants.push(Participant::Address(close.to.clone()));
                }
                participants.push(Participant::Asset(transfer.asset_id));
            },
            TransactionKind::AssetConfig(config) => {
                participants.push(Participant::Asset(resolve_asset_id(transaction, config)?));
            },
            TransactionKind::AssetFreeze(freeze) => {
                participants.push(Participant::Address(freeze.address.clone()));
            },
            TransactionKind::AppCall(call) => {
                if call.is_op_up() {
                    participants.push(Participant::FeeParticipant);
                } else {
                    participants.push(Participant::Application(resolve_application_id(transaction, call)?));
                }
            },
            TransactionKind::KeyReg(_) | TransactionKind::StateProof => {},
        }

        Ok(participants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::{AssetTransferSubType, Payment, CloseRemainder};

    fn payment(id: &str, sender: &str, receiver: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            sender: Address::from(sender),
            rekey_to: None,
            group: None,
            kind: TransactionKind::Payment(Payment {
                receiver: Address::from(receiver),
                amount: 1,
                close_remainder: Some(CloseRemainder { to: Address::from("C"), amount: 2 }),
            }),
        }
    }

    #[test]
    fn test_payment_participants_in_order() {
        let resolver = ParticipantResolver::default();
        let participants = resolver.participants(&payment("TX1", "A", "B"), None).unwrap();
        assert_eq!(participants, vec![
            Participant::Address(Address::from("A")),
            Participant::Address(Address::from("B")),
            Participant::Address(Address::from("C")),
        ]);
    }

    #[test]
    fn test_inner_sender_acts_as_application() {
        let resolver = ParticipantResolver::default();
        let participants = resolver.participants(&payment("TX1/inner/1", "A", "B"), Some(7)).unwrap();
        assert_eq!(participants[0], Participant::ActingAs { application_id: 7, address: Address::from("A") });
    }

    #[test]
    fn test_rekey_to_application_account() {
        let call = Transaction {
            id: "TX1".to_string(),
            sender: Address::from("A"),
            rekey_to: None,
            group: None,
            kind: TransactionKind::AppCall(AppCall { application_id: Some(42), ..Default::default() }),
        };
        let mut rekey = payment("TX2", "B", "A");
        rekey.rekey_to = Some(application_address(42));

        let resolver = ParticipantResolver::new(&[call, rekey.clone()]).unwrap();
        assert_eq!(resolver.rekey_target(&rekey), Some(42));
        assert_eq!(resolver.rekeyed_application(&Address::from("B")), Some(42));
        assert_eq!(resolver.rekeyed_application(&Address::from("A")), None);
        assert_eq!(resolver.application_for_address(&application_address(42)), Some(42));
    }

    #[test]
    fn test_clawback_without_source_is_malformed() {
        let transfer = Transaction {
            id: "TX1".to_string(),
            sender: Address::from("A"),
            rekey_to: None,
            group: None,
            kind: TransactionKind::AssetTransfer(AssetTransfer {
                asset_id: 9,
                receiver: Address::from("B"),
                amount: 1,
                close_remainder: None,
                sub_type: Some(AssetTransferSubType::Clawback),
                clawback_from: None,
            }),
        };
        let err = ParticipantResolver::default().participants(&transfer, None).unwrap_err();
        assert!(matches!(err, GraphError::MalformedTransaction(_)));
    }

    #[test]
    fn test_app_call_without_id_is_malformed() {
        let call = Transaction {
            id: "TX1".to_string(),
            sender: Address::from("A"),
            rekey_to: None,
            group: None,
            kind: TransactionKind::AppCall(AppCall::default()),
        };
        assert!(ParticipantResolver::new(&[call]).is_err());
    }
}
