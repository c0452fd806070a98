use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonetaryError {
    #[error("Monetary error: {0}")]
    InvalidFormat(String),
    #[error("Monetary error: Value has more than {0} decimal places")]
    TooManyDecimalPlaces(u32)
}
