use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::models::{AccountError, TransactionType};
use crate::storage::StorageError;

/// Form fields a validation message can be attached to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Field {
    BankName,
    Amount,
    Category,
    Description
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::BankName => "bankName",
            Field::Amount => "amount",
            Field::Category => "category",
            Field::Description => "description"
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Every problem found in one submission, keyed by field.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field`; the first message per field wins.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        for (field, message) in self.iter() {
            if !first {
                formatter.write_str("; ")?;
            }
            write!(formatter, "{field}: {message}")?;
            first = false;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Submission rejected: {0}")]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error(transparent)]
    Storage(#[from] StorageError)
}

impl SubmissionError {
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            SubmissionError::Validation(errors) => Some(errors),
            _ => None
        }
    }

    /// The single message shown to the user when a submission does not go through.
    pub fn user_message(&self, transaction_type: TransactionType) -> String {
        match self {
            SubmissionError::Validation(_) => "Please fix the highlighted fields.".to_string(),
            _ => format!("Failed to add {transaction_type}. Please try again.")
        }
    }
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Account(#[from] AccountError)
}
