mod account_store;
mod memory_storage;
#[cfg(test)]
mod tests;
mod transaction_store;

use thiserror::Error;

use crate::models::{Account, Transaction};

pub use account_store::AccountStore;
pub use memory_storage::MemoryStorage;
pub use transaction_store::TransactionStore;

/// Everything a ledger needs to start from.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Transactions in read order, most recent first.
    pub transactions: Vec<Transaction>,
    pub accounts: Vec<Account>
}

/// A single committed change, handed to the backend before it becomes visible.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Mutation {
    /// A reconciled submission: the new transaction and the account state after it.
    Submission {
        transaction: Transaction,
        account: Account
    },
    AccountCreated(Account)
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage is unavailable: {0}")]
    Unavailable(String)
}

pub trait Storage: Send + Sync + 'static {
    fn load(&self) -> Result<Snapshot, StorageError>;
    fn save(&self, mutation: &Mutation) -> Result<(), StorageError>;
}
