//! Tariff Constants and Distance Tiers
//!
//! All amounts are exact decimals with two fraction digits.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Lowest price any valid delivery can be quoted at
pub const MIN_DELIVERY_COST: Decimal = dec!(400.00);

/// Added once when the cargo is fragile
pub const FRAGILE_SURCHARGE: Decimal = dec!(300.00);

/// Fragile cargo is not carried beyond this distance (inclusive)
pub const MAX_FRAGILE_DISTANCE_KM: Decimal = dec!(30.00);

/// Inclusive upper bound of [`DistanceTier::UpTo2Km`]
pub const DISTANCE_THRESHOLD_2KM: Decimal = dec!(2.00);

/// Inclusive upper bound of [`DistanceTier::UpTo10Km`]
pub const DISTANCE_THRESHOLD_10KM: Decimal = dec!(10.00);

/// Inclusive upper bound of [`DistanceTier::UpTo30Km`]
pub const DISTANCE_THRESHOLD_30KM: Decimal = dec!(30.00);

/// Distance range with a flat base cost
///
/// Upper bounds are inclusive: a distance exactly on a threshold belongs to
/// the cheaper tier (10.00 km costs the same as 5.00 km).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceTier {
    /// (0, 2] km
    UpTo2Km,
    /// (2, 10] km
    UpTo10Km,
    /// (10, 30] km
    UpTo30Km,
    /// Beyond 30 km
    Over30Km,
}

impl DistanceTier {
    /// All tiers, nearest first
    pub const ALL: [DistanceTier; 4] = [
        DistanceTier::UpTo2Km,
        DistanceTier::UpTo10Km,
        DistanceTier::UpTo30Km,
        DistanceTier::Over30Km,
    ];

    /// Classify a distance in kilometers
    ///
    /// Thresholds are checked from the top with strict `>`, so boundary
    /// values fall through to the lower tier.
    pub fn for_distance(distance_km: Decimal) -> Self {
        if distance_km > DISTANCE_THRESHOLD_30KM {
            DistanceTier::Over30Km
        } else if distance_km > DISTANCE_THRESHOLD_10KM {
            DistanceTier::UpTo30Km
        } else if distance_km > DISTANCE_THRESHOLD_2KM {
            DistanceTier::UpTo10Km
        } else {
            DistanceTier::UpTo2Km
        }
    }

    /// Flat base cost of the tier
    pub fn base_cost(self) -> Decimal {
        match self {
            DistanceTier::UpTo2Km => dec!(50.00),
            DistanceTier::UpTo10Km => dec!(100.00),
            DistanceTier::UpTo30Km => dec!(200.00),
            DistanceTier::Over30Km => dec!(300.00),
        }
    }

    /// Inclusive upper bound in kilometers, `None` for the open top tier
    pub fn upper_bound_km(self) -> Option<Decimal> {
        match self {
            DistanceTier::UpTo2Km => Some(DISTANCE_THRESHOLD_2KM),
            DistanceTier::UpTo10Km => Some(DISTANCE_THRESHOLD_10KM),
            DistanceTier::UpTo30Km => Some(DISTANCE_THRESHOLD_30KM),
            DistanceTier::Over30Km => None,
        }
    }
}
