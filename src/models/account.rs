use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{AccountError, TransactionType};
use crate::types::{AccountId, Monetary, CURRENCY};

/// A named bank account and its running totals.
///
/// `balance` is signed and may go negative. `total_income` and
/// `total_expense` only ever grow and describe the flow since the account
/// was first tracked, so a seeded balance need not equal their difference.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    /// Display name, also the key transactions use to refer to the account.
    pub name: String,
    pub balance: Monetary,
    pub total_income: Monetary,
    pub total_expense: Monetary,
    pub currency: String,
    pub created_at: DateTime<Utc>
}

impl Account {
    /// Creates an empty account created now.
    pub fn new(name: impl Into<String>) -> Self {
        Self::seeded(name, Monetary::ZERO, Monetary::ZERO, Monetary::ZERO, Utc::now())
    }

    /// Creates an account whose balance and totals were tracked elsewhere.
    pub fn seeded(
        name: impl Into<String>,
        balance: Monetary,
        total_income: Monetary,
        total_expense: Monetary,
        created_at: DateTime<Utc>
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            balance,
            total_income,
            total_expense,
            currency: CURRENCY.to_string(),
            created_at
        }
    }

    /// Applies the balance delta of a single income or expense.
    ///
    /// Income adds `amount` to both `balance` and `total_income`; expense
    /// subtracts it from `balance` and adds it to `total_expense`. Either
    /// both fields change or neither does.
    ///
    /// # Errors
    /// Returns `AccountError` if:
    /// - The amount is negative.
    /// - The new balance or total does not fit.
    pub fn apply(&mut self, transaction_type: TransactionType, amount: Monetary) -> Result<(), AccountError> {
        if amount.is_negative() {
            return Err(AccountError::negative_amount(self, transaction_type))
        }

        match transaction_type {
            TransactionType::Income => {
                let balance = self.balance.checked_add(amount)
                    .ok_or_else(|| AccountError::overflow(self, transaction_type))?;
                let total_income = self.total_income.checked_add(amount)
                    .ok_or_else(|| AccountError::overflow(self, transaction_type))?;

                self.balance = balance;
                self.total_income = total_income;
            }
            TransactionType::Expense => {
                let balance = self.balance.checked_sub(amount)
                    .ok_or_else(|| AccountError::overflow(self, transaction_type))?;
                let total_expense = self.total_expense.checked_add(amount)
                    .ok_or_else(|| AccountError::overflow(self, transaction_type))?;

                self.balance = balance;
                self.total_expense = total_expense;
            }
        }

        Ok(())
    }
}
