use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::TransactionType;
use crate::types::{Monetary, TransactionId};

/// A recorded income or expense.
///
/// `amount` is always a magnitude; the direction comes from
/// `transaction_type`. `bank_name` joins to `Account::name`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Monetary,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    pub bank_name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Reference to a scanned receipt, if the transaction came from one.
    pub receipt_image: Option<String>
}

/// A transaction that has not been assigned an id yet.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Monetary,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    pub bank_name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub receipt_image: Option<String>
}

impl NewTransaction {
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            transaction_type: self.transaction_type,
            amount: self.amount,
            category: self.category,
            description: self.description,
            date: self.date,
            bank_name: self.bank_name,
            tags: self.tags,
            receipt_image: self.receipt_image
        }
    }
}

/// Fields to overwrite on an existing transaction; `None` leaves a field as is.
/// The optional fields take `Some(None)` to clear them.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TransactionPatch {
    pub transaction_type: Option<TransactionType>,
    pub amount: Option<Monetary>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub bank_name: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub receipt_image: Option<Option<String>>
}

impl Transaction {
    /// Merges the present fields of `patch` into this record. The id never changes.
    pub fn merge(&mut self, patch: TransactionPatch) {
        if let Some(transaction_type) = patch.transaction_type {
            self.transaction_type = transaction_type;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(bank_name) = patch.bank_name {
            self.bank_name = bank_name;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(receipt_image) = patch.receipt_image {
            self.receipt_image = receipt_image;
        }
    }
}
