//! In-memory personal-finance ledger: transactions, bank accounts, and the
//! reconciliation that keeps account balances in step with recorded income
//! and expenses.

pub mod engine;
pub mod models;
pub mod reconciliation;
pub mod reports;
pub mod storage;
pub mod types;
