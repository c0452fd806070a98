use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::TransactionType;
use crate::reconciliation::{ExpenseForm, IncomeForm};

/// One row of a submissions CSV: `type,bank,amount,date,category,description`.
///
/// The amount stays a string so that malformed values reach form validation
/// instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionRecord {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub bank: String,
    pub amount: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub category: Option<String>,
    pub description: String
}

impl SubmissionRecord {
    pub fn income_form(&self) -> IncomeForm {
        IncomeForm {
            bank_name: self.bank.clone(),
            amount: self.amount.clone(),
            date: self.date,
            description: self.description.clone()
        }
    }

    pub fn expense_form(&self) -> ExpenseForm {
        ExpenseForm {
            bank_name: self.bank.clone(),
            amount: self.amount.clone(),
            category: self.category.clone().unwrap_or_default(),
            date: self.date,
            description: self.description.clone(),
            receipt_image: None
        }
    }
}
