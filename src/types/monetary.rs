use crate::types::errors::MonetaryError;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::{AddAssign, SubAssign};
use std::str::FromStr;
use tracing::error;

const DECIMAL_PLACES: u32 = 2;

/// A signed IDR quantity with at most two decimal places.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Monetary(Decimal);

impl Monetary {
    pub const ZERO: Monetary = Monetary(Decimal::ZERO);

    pub fn new() -> Self {
        Self::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_add(self, rhs: Monetary) -> Option<Monetary> {
        self.0.checked_add(rhs.0).map(Monetary)
    }

    pub fn checked_sub(self, rhs: Monetary) -> Option<Monetary> {
        self.0.checked_sub(rhs.0).map(Monetary)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl From<i64> for Monetary {
    fn from(value: i64) -> Self {
        Monetary(Decimal::from(value))
    }
}

impl AddAssign<Monetary> for Monetary {
    fn add_assign(&mut self, rhs: Monetary) {
        if let Some(new_val) = self.checked_add(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Monetary AddAssign error: Overflow")
        }
    }
}

impl SubAssign<Monetary> for Monetary {
    fn sub_assign(&mut self, rhs: Monetary) {
        if let Some(new_val) = self.checked_sub(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Monetary SubAssign error: Overflow")
        }
    }
}

impl Sum for Monetary {
    fn sum<I: Iterator<Item = Monetary>>(iter: I) -> Self {
        iter.fold(Monetary::ZERO, |mut total, value| {
            total += value;
            total
        })
    }
}

impl<'a> Sum<&'a Monetary> for Monetary {
    fn sum<I: Iterator<Item = &'a Monetary>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Display for Monetary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:.prec$}", self.0, prec = DECIMAL_PLACES as usize)
    }
}

impl FromStr for Monetary {
    type Err = MonetaryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(MonetaryError::InvalidFormat("Value is an empty string".to_string()));
        }

        // Trailing zeros do not count as precision: "1.100" is 1.1.
        let parsed = Decimal::from_str(value)
            .map_err(|error| MonetaryError::InvalidFormat(format!("Value is not a decimal number: {error}")))?
            .normalize();

        if parsed.scale() > DECIMAL_PLACES {
            return Err(MonetaryError::TooManyDecimalPlaces(DECIMAL_PLACES));
        }

        Ok(Monetary(parsed))
    }
}

impl Serialize for Monetary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Monetary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Monetary::from_str(&value).map_err(de::Error::custom)
    }
}
