mod filter;
mod period;

pub use filter::{Summary, TransactionFilter};
pub use period::{change_percent, CategoryShare, PeriodReport};
