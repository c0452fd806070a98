use std::collections::VecDeque;

use uuid::Uuid;

use crate::models::{NewTransaction, Transaction, TransactionPatch, TransactionType};
use crate::types::{DateRange, Monetary, TransactionId};

/// The ordered collection of transactions.
///
/// Read order is insertion order with the newest first; it is unrelated to
/// `Transaction::date`.
#[derive(Debug, Default)]
pub struct TransactionStore {
    transactions: VecDeque<Transaction>
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a fresh id and places the record at the head. Does not validate.
    pub fn add(&mut self, transaction: NewTransaction) -> Transaction {
        let transaction = transaction.into_transaction(Uuid::new_v4());
        self.transactions.push_front(transaction.clone());
        transaction
    }

    pub(crate) fn insert(&mut self, transaction: Transaction) {
        self.transactions.push_front(transaction);
    }

    pub(crate) fn restore(&mut self, transactions: Vec<Transaction>) {
        self.transactions.extend(transactions);
    }

    /// Returns the updated record, or `None` if no transaction has this id.
    pub fn update(&mut self, id: TransactionId, patch: TransactionPatch) -> Option<Transaction> {
        let transaction = self.transactions.iter_mut().find(|transaction| transaction.id == id)?;
        transaction.merge(patch);
        Some(transaction.clone())
    }

    /// Returns the removed record, or `None` if no transaction has this id.
    pub fn delete(&mut self, id: TransactionId) -> Option<Transaction> {
        let position = self.transactions.iter().position(|transaction| transaction.id == id)?;
        self.transactions.remove(position)
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|transaction| transaction.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn recent(&self, count: usize) -> Vec<&Transaction> {
        self.transactions.iter().take(count).collect()
    }

    pub fn filter_by_date_range(&self, range: &DateRange) -> Vec<&Transaction> {
        self.filter(|transaction| range.contains(transaction.date))
    }

    pub fn filter_by_category(&self, category: &str) -> Vec<&Transaction> {
        self.filter(|transaction| transaction.category == category)
    }

    pub fn filter_by_bank_name(&self, bank_name: &str) -> Vec<&Transaction> {
        self.filter(|transaction| transaction.bank_name.as_deref() == Some(bank_name))
    }

    pub fn filter_by_tag(&self, tag: &str) -> Vec<&Transaction> {
        self.filter(|transaction| transaction.tags.iter().any(|candidate| candidate == tag))
    }

    /// Sums the amounts of one type, optionally within an inclusive date range.
    pub fn total_by_type(&self, transaction_type: TransactionType, range: Option<&DateRange>) -> Monetary {
        self.transactions
            .iter()
            .filter(|transaction| transaction.transaction_type == transaction_type)
            .filter(|transaction| range.is_none_or(|range| range.contains(transaction.date)))
            .map(|transaction| transaction.amount)
            .sum()
    }

    fn filter<P>(&self, predicate: P) -> Vec<&Transaction>
    where
        P: Fn(&Transaction) -> bool
    {
        self.transactions.iter().filter(|transaction| predicate(*transaction)).collect()
    }
}
