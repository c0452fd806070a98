use crate::models::{Account, TransactionType};
use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum AccountError {
    #[error("Account [{name}] was not found")]
    NotFound {
        name: String
    },
    #[error("Account [{name}] already exists")]
    DuplicateName {
        name: String
    },
    #[error("Amount must not be negative for [{transaction_type}] on account [{name}]")]
    NegativeAmount {
        name: String,
        transaction_type: TransactionType
    },
    #[error("Numeric overflow occurred for [{transaction_type}] on account [{name}]")]
    Overflow {
        name: String,
        transaction_type: TransactionType
    }
}

impl AccountError {
    pub fn not_found(name: &str) -> Self {
        Self::NotFound { name: name.to_string() }
    }

    pub fn duplicate_name(name: &str) -> Self {
        Self::DuplicateName { name: name.to_string() }
    }

    pub fn negative_amount(account: &Account, transaction_type: TransactionType) -> Self {
        Self::NegativeAmount {
            name: account.name.clone(),
            transaction_type
        }
    }

    pub fn overflow(account: &Account, transaction_type: TransactionType) -> Self {
        Self::Overflow {
            name: account.name.clone(),
            transaction_type
        }
    }
}
