mod date_range;
mod errors;
mod monetary;

use uuid::Uuid;

pub use date_range::DateRange;
pub use errors::MonetaryError;
pub use monetary::Monetary;

pub type AccountId = Uuid;
pub type TransactionId = Uuid;

/// Every account in the ledger is denominated in Indonesian rupiah.
pub const CURRENCY: &str = "IDR";
