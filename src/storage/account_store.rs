use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::models::{Account, AccountError, TransactionType};
use crate::types::{AccountId, Monetary};

/// Accounts keyed by id, with a unique name index used as the join key.
///
/// Every write takes `&mut self`, so a shared borrow can only read.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: DashMap<AccountId, Account>,
    names: DashMap<String, AccountId>
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a zero-balance account. Names are unique.
    pub fn create(&mut self, name: &str) -> Result<Account, AccountError> {
        self.restore(Account::new(name))
    }

    /// Applies an income or expense delta to the account with this exact name.
    ///
    /// Nothing changes when no account matches; the caller gets `NotFound`.
    pub fn apply_transaction(&mut self, name: &str, amount: Monetary, transaction_type: TransactionType) -> Result<Account, AccountError> {
        let account_id = self.names.get(name)
            .map(|entry| *entry.value())
            .ok_or_else(|| AccountError::not_found(name))?;

        let mut account = self.accounts.get_mut(&account_id)
            .ok_or_else(|| AccountError::not_found(name))?;

        account.apply(transaction_type, amount)?;

        Ok(account.value().clone())
    }

    pub fn find_by_name(&self, name: &str) -> Option<Account> {
        let account_id = self.names.get(name).map(|entry| *entry.value())?;
        self.get(account_id)
    }

    pub fn get(&self, account_id: AccountId) -> Option<Account> {
        self.accounts.get(&account_id).map(|entry| entry.value().clone())
    }

    /// All accounts, oldest first.
    pub fn accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self.accounts.iter().map(|entry| entry.value().clone()).collect();
        accounts.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.name.cmp(&b.name)));
        accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn total_balance(&self) -> Monetary {
        self.accounts.iter().map(|entry| entry.value().balance).sum()
    }

    /// Adds an account built elsewhere, rejecting a name that is already taken.
    pub(crate) fn restore(&mut self, account: Account) -> Result<Account, AccountError> {
        match self.names.entry(account.name.clone()) {
            Entry::Occupied(_) => Err(AccountError::duplicate_name(&account.name)),
            Entry::Vacant(entry) => {
                entry.insert(account.id);
                self.accounts.insert(account.id, account.clone());
                Ok(account)
            }
        }
    }

    /// Stores the new state of an account, indexing its name if it is new.
    pub(crate) fn save(&mut self, account: Account) {
        self.names.insert(account.name.clone(), account.id);
        self.accounts.insert(account.id, account);
    }
}
