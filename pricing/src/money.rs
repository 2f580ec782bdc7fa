//! Money amounts
//!
//! Wraps an exact base-10 [`Decimal`] that always carries exactly two
//! fraction digits.
//!
//! CRITICAL: Money is never represented as binary floating point.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of fraction digits carried by every money amount
pub const MONEY_SCALE: u32 = 2;

/// Errors converting an exact decimal into money
#[derive(Debug, Error, PartialEq)]
pub enum MoneyError {
    #[error("money amount {0} has more than 2 fraction digits")]
    TooPrecise(Decimal),
}

/// A monetary amount with exactly two fraction digits
///
/// # Example
/// ```
/// use delivery_pricing_core::Money;
/// use rust_decimal_macros::dec;
///
/// let amount = Money::from_decimal(dec!(1119.995));
/// assert_eq!(amount.to_string(), "1120.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Round `value` half-up (midpoint away from zero) to two fraction digits
    pub fn from_decimal(value: Decimal) -> Self {
        let mut rounded =
            value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        // round_dp never widens the scale, so "500" must be padded to "500.00"
        rounded.rescale(MONEY_SCALE);
        Self(rounded)
    }

    /// The underlying decimal amount
    pub fn amount(&self) -> Decimal {
        self.0
    }
}

/// Exact conversion: amounts that would need rounding are rejected
impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.round_dp(MONEY_SCALE) != value {
            return Err(MoneyError::TooPrecise(value));
        }
        Ok(Self::from_decimal(value))
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
