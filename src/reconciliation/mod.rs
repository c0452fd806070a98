mod errors;
mod forms;
mod ledger;

use crate::models::TransactionType;

pub use errors::{Field, LedgerError, SubmissionError, ValidationErrors};
pub use forms::{BalanceCheck, ExpenseForm, IncomeForm};
pub use ledger::Ledger;

/// The acknowledgment shown after a submission is recorded.
pub fn success_message(transaction_type: TransactionType) -> &'static str {
    match transaction_type {
        TransactionType::Income => "Income added successfully!",
        TransactionType::Expense => "Expense added successfully!"
    }
}
