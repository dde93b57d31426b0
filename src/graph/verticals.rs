//! Lifeline assignment
//!
//! Walks the transaction tree pre-order and gives every distinct participant
//! a column. Column ids follow first discovery and are never reassigned;
//! lookups go through hash indexes over the column arena, iteration order
//! always comes from the arena.

use std::collections::HashMap;
use log::{debug, info};

use crate::errors::GraphResult;
use crate::graph::participants::{resolve_application_id, Participant, ParticipantResolver};
use crate::models::{
    Address, AppId, AssetId, LinkedAccount, ParticipantKey, Transaction, TransactionKind, Vertical, VerticalKind,
};

/// Columns of a graph with indexes by natural key and by address
#[derive(Debug, Clone, Default)]
pub struct Verticals {
    verticals: Vec<Vertical>,
    by_key: HashMap<ParticipantKey, usize>,
    /// Application own accounts
    by_linked_address: HashMap<Address, usize>,
    /// First application each rekeyed address was seen acting as, with its account number
    by_rekeyed_address: HashMap<Address, (usize, usize)>,
}

impl Verticals {
    pub fn as_slice(&self) -> &[Vertical] {
        &self.verticals
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vertical> {
        self.verticals.iter()
    }

    pub fn len(&self) -> usize {
        self.verticals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verticals.is_empty()
    }

    pub fn into_vec(self) -> Vec<Vertical> {
        self.verticals
    }

    pub fn get(&self, key: &ParticipantKey) -> Option<&Vertical> {
        self.by_key.get(key).map(|&position| &self.verticals[position])
    }

    /// Account column of `address`
    pub fn account(&self, address: &Address) -> Option<&Vertical> {
        self.get(&ParticipantKey::Account(address.clone()))
    }

    pub fn application(&self, application_id: AppId) -> Option<&Vertical> {
        self.get(&ParticipantKey::Application(application_id))
    }

    /// Application column whose own account is `address`
    pub fn application_by_linked_address(&self, address: &Address) -> Option<&Vertical> {
        self.by_linked_address.get(address).map(|&position| &self.verticals[position])
    }

    /// Application column `address` was first seen acting as, with its account number
    pub fn application_by_rekeyed_address(&self, address: &Address) -> Option<(&Vertical, usize)> {
        self.by_rekeyed_address
            .get(address)
            .map(|&(position, account_number)| (&self.verticals[position], account_number))
    }

    pub fn asset(&self, asset_id: AssetId) -> Option<&Vertical> {
        self.get(&ParticipantKey::Asset(asset_id))
    }

    pub fn fee_participant(&self) -> Option<&Vertical> {
        self.get(&ParticipantKey::FeeParticipant)
    }

    fn insert(&mut self, kind: VerticalKind) -> usize {
        let position = self.verticals.len();
        let vertical = Vertical { id: position, kind };
        if let Some(key) = vertical.key() {
            self.by_key.insert(key, position);
        }
        if let VerticalKind::Application { linked_account, .. } = &vertical.kind {
            self.by_linked_address.insert(linked_account.account_address.clone(), position);
        }
        debug!("New vertical {}: {:?}", position, vertical.kind);
        self.verticals.push(vertical);
        position
    }

    /// Append an empty trailing column
    pub(crate) fn push_placeholder(&mut self) -> usize {
        self.insert(VerticalKind::Placeholder)
    }
}

/// Builds the column list for a transaction tree
pub struct VerticalAssigner<'r> {
    resolver: &'r ParticipantResolver,
    verticals: Verticals,
}

impl<'r> VerticalAssigner<'r> {
    pub fn new(resolver: &'r ParticipantResolver) -> Self {
        Self {
            resolver,
            verticals: Verticals::default(),
        }
    }

    /// Assign columns to every participant of the given top-level transactions
    pub fn assign(mut self, transactions: &[Transaction]) -> GraphResult<Verticals> {
        for transaction in transactions {
            self.visit(transaction, None)?;
        }
        info!("Assigned {} verticals", self.verticals.len());
        Ok(self.verticals)
    }

    fn visit(&mut self, transaction: &Transaction, acting_for: Option<AppId>) -> GraphResult<()> {
        for participant in self.resolver.participants(transaction, acting_for)? {
            self.register(participant);
        }

        if let TransactionKind::AppCall(call) = &transaction.kind {
            // Fee-bump applications never get their own column, so nothing signs as them
            let inner_acting_for = if call.is_op_up() {
                None
            } else {
                Some(resolve_application_id(transaction, call)?)
            };
            for inner in &call.inner_transactions {
                self.visit(inner, inner_acting_for)?;
            }
        }
        Ok(())
    }

    fn register(&mut self, participant: Participant) -> usize {
        match participant {
            Participant::Address(address) => self.register_address(&address),
            Participant::ActingAs { application_id, address } => self.register_acting_as(application_id, &address),
            Participant::Application(application_id) => self.register_application(application_id),
            Participant::Asset(asset_id) => self.register_key(ParticipantKey::Asset(asset_id), VerticalKind::Asset { asset_id }),
            Participant::FeeParticipant => self.register_key(ParticipantKey::FeeParticipant, VerticalKind::SyntheticFeeParticipant),
        }
    }

    fn register_key(&mut self, key: ParticipantKey, kind: VerticalKind) -> usize {
        match self.verticals.by_key.get(&key) {
            Some(&position) => position,
            None => self.verticals.insert(kind),
        }
    }

    /// An application's own account, and any account rekeyed to an
    /// application, is drawn on the application's column
    fn register_address(&mut self, address: &Address) -> usize {
        if let Some(&position) = self.verticals.by_key.get(&ParticipantKey::Account(address.clone())) {
            return position;
        }
        if let Some(&position) = self.verticals.by_linked_address.get(address) {
            return position;
        }
        if let Some(&(position, _)) = self.verticals.by_rekeyed_address.get(address) {
            return position;
        }
        if let Some(application_id) = self.resolver.application_for_address(address) {
            return self.register_application(application_id);
        }
        match self.resolver.rekeyed_application(address) {
            Some(application_id) => self.register_acting_as(application_id, address),
            None => self.verticals.insert(VerticalKind::Account { account_address: address.clone() }),
        }
    }

    fn register_application(&mut self, application_id: AppId) -> usize {
        if let Some(&position) = self.verticals.by_key.get(&ParticipantKey::Application(application_id)) {
            return position;
        }
        self.verticals.insert(VerticalKind::Application {
            application_id,
            linked_account: LinkedAccount {
                account_address: self.resolver.application_address(application_id),
                account_number: 0,
            },
            rekeyed_accounts: Vec::new(),
        })
    }

    fn register_acting_as(&mut self, application_id: AppId, address: &Address) -> usize {
        let position = self.register_application(application_id);
        if self.verticals.verticals[position].application_account_number(address).is_some() {
            return position;
        }

        if let VerticalKind::Application { rekeyed_accounts, .. } = &mut self.verticals.verticals[position].kind {
            // Linked account is always 0, rekeyed accounts count up from 1
            let account_number = rekeyed_accounts.len() + 1;
            rekeyed_accounts.push(LinkedAccount {
                account_address: address.clone(),
                account_number,
            });
            self.verticals
                .by_rekeyed_address
                .entry(address.clone())
                .or_insert((position, account_number));
            debug!("Address {} acts as application {} (account {})", address, application_id, account_number);
        }
        position
    }
}

/// Discover the columns of a transaction tree
pub fn assign_verticals(transactions: &[Transaction]) -> GraphResult<Verticals> {
    let resolver = ParticipantResolver::new(transactions)?;
    VerticalAssigner::new(&resolver).assign(transactions)
}
