//! Workload model
//!
//! Current load of the delivery service. Each level carries a coefficient
//! that multiplies the whole pre-floor cost.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Workload level of the delivery service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkloadLevel {
    /// Coefficient 1.00
    Normal,
    /// Coefficient 1.20
    Increased,
    /// Coefficient 1.40
    High,
    /// Coefficient 1.60
    VeryHigh,
}

impl WorkloadLevel {
    /// All levels, from least to most loaded
    pub const ALL: [WorkloadLevel; 4] = [
        WorkloadLevel::Normal,
        WorkloadLevel::Increased,
        WorkloadLevel::High,
        WorkloadLevel::VeryHigh,
    ];

    /// Multiplicative coefficient applied to the pre-floor cost
    pub fn coefficient(self) -> Decimal {
        match self {
            WorkloadLevel::Normal => dec!(1.00),
            WorkloadLevel::Increased => dec!(1.20),
            WorkloadLevel::High => dec!(1.40),
            WorkloadLevel::VeryHigh => dec!(1.60),
        }
    }

    /// Wire name of the level (e.g., "VERY_HIGH")
    pub fn as_str(self) -> &'static str {
        match self {
            WorkloadLevel::Normal => "NORMAL",
            WorkloadLevel::Increased => "INCREASED",
            WorkloadLevel::High => "HIGH",
            WorkloadLevel::VeryHigh => "VERY_HIGH",
        }
    }
}
