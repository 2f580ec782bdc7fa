//! Cargo size model
//!
//! Each size category carries a fixed additive surcharge.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Size category of the delivered cargo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CargoSize {
    /// Fits a courier bag
    Small,
    /// Needs a vehicle
    Large,
}

impl CargoSize {
    /// All size categories, in ascending surcharge order
    pub const ALL: [CargoSize; 2] = [CargoSize::Small, CargoSize::Large];

    /// Surcharge added to the distance base cost
    pub fn surcharge(self) -> Decimal {
        match self {
            CargoSize::Small => dec!(100.00),
            CargoSize::Large => dec!(200.00),
        }
    }

    /// Wire name of the category (e.g., "SMALL")
    pub fn as_str(self) -> &'static str {
        match self {
            CargoSize::Small => "SMALL",
            CargoSize::Large => "LARGE",
        }
    }
}
