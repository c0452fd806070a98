mod account;
mod category;
mod errors;
mod transaction;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use account::Account;
pub use category::{ExpenseCategory, INCOME_CATEGORY};
pub use errors::AccountError;
pub use transaction::{NewTransaction, Transaction, TransactionPatch};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense
}

impl fmt::Display for TransactionType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => write!(formatter, "income"),
            TransactionType::Expense => write!(formatter, "expense")
        }
    }
}
