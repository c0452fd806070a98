use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::models::{Account, AccountError, NewTransaction, Transaction, TransactionType};
use crate::reconciliation::errors::{Field, LedgerError, SubmissionError, ValidationErrors};
use crate::reconciliation::forms::{BalanceCheck, ExpenseForm, IncomeForm};
use crate::storage::{AccountStore, Mutation, Storage, TransactionStore};

/// The single owner of a session's transactions and accounts.
///
/// Every screen reads from and writes to the same `Ledger`; submissions
/// update both stores together or not at all.
pub struct Ledger<S: Storage> {
    transactions: TransactionStore,
    accounts: AccountStore,
    storage: Arc<S>
}

impl<S: Storage> Ledger<S> {
    /// Creates a ledger from whatever the storage currently holds.
    ///
    /// # Errors
    /// Returns `LedgerError` if the storage cannot be read or holds two
    /// accounts with the same name.
    pub fn load(storage: Arc<S>) -> Result<Self, LedgerError> {
        let snapshot = storage.load()?;
        let mut accounts = AccountStore::new();

        for account in snapshot.accounts {
            accounts.restore(account)?;
        }

        let mut transactions = TransactionStore::new();
        transactions.restore(snapshot.transactions);

        debug!("Ledger loaded with [{}] transactions and [{}] accounts", transactions.len(), accounts.len());

        Ok(Self { transactions, accounts, storage })
    }

    pub fn transactions(&self) -> &TransactionStore {
        &self.transactions
    }

    /// Direct access to the transaction list, bypassing reconciliation.
    pub fn transactions_mut(&mut self) -> &mut TransactionStore {
        &mut self.transactions
    }

    pub fn accounts(&self) -> &AccountStore {
        &self.accounts
    }

    /// Direct access to the accounts, bypassing reconciliation and storage.
    pub fn accounts_mut(&mut self) -> &mut AccountStore {
        &mut self.accounts
    }

    /// Opens a new zero-balance account.
    pub fn create_account(&mut self, name: &str) -> Result<Account, SubmissionError> {
        let name = name.trim();

        if name.is_empty() {
            let mut errors = ValidationErrors::new();
            errors.insert(Field::BankName, "Bank name is required");
            return Err(errors.into());
        }

        if self.accounts.find_by_name(name).is_some() {
            return Err(AccountError::duplicate_name(name).into());
        }

        let account = Account::new(name);
        self.storage.save(&Mutation::AccountCreated(account.clone()))?;

        Ok(self.accounts.restore(account)?)
    }

    /// Records an income and credits the named account, opening it if needed.
    pub fn submit_income(&mut self, form: &IncomeForm) -> Result<Transaction, SubmissionError> {
        let submission = form.validate()?;

        let account = self.accounts.find_by_name(&submission.bank_name)
            .unwrap_or_else(|| Account::new(submission.bank_name.as_str()));

        self.commit(account, submission.into_new_transaction(TransactionType::Income))
    }

    /// Records an expense and debits an existing account.
    pub fn submit_expense(&mut self, form: &ExpenseForm, balance_check: BalanceCheck) -> Result<Transaction, SubmissionError> {
        let (account, submission) = form.validate(&self.accounts, balance_check)?;

        self.commit(account, submission.into_new_transaction(TransactionType::Expense))
    }

    /// Transactions naming a bank that has no account.
    ///
    /// Validated submissions never produce these; they only appear when the
    /// stores were written to directly.
    pub fn unreconciled(&self) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|transaction| {
                transaction.bank_name.as_deref()
                    .is_some_and(|name| self.accounts.find_by_name(name).is_none())
            })
            .collect()
    }

    // Both new states are computed and persisted before either store changes.
    fn commit(&mut self, mut account: Account, transaction: NewTransaction) -> Result<Transaction, SubmissionError> {
        account.apply(transaction.transaction_type, transaction.amount)?;

        let transaction = transaction.into_transaction(Uuid::new_v4());

        self.storage.save(&Mutation::Submission {
            transaction: transaction.clone(),
            account: account.clone()
        })?;

        debug!(
            "Transaction [{}]:[{}] of [{}] applied to account [{}], balance now [{}]",
            transaction.id, transaction.transaction_type, transaction.amount, account.name, account.balance
        );

        self.accounts.save(account);
        self.transactions.insert(transaction.clone());

        Ok(transaction)
    }
}
