//! Delivery pricer
//!
//! Turns a [`PricingRequest`] into a delivery cost:
//!
//! 1. Validate (first failure wins): presence of distance, cargo size and
//!    workload, then distance > 0, then the fragile distance limit
//! 2. Base cost from the distance tier
//! 3. Add the cargo size surcharge
//! 4. Add the fragile surcharge if the cargo is fragile
//! 5. Multiply by the workload coefficient
//! 6. Clamp to the minimum delivery cost
//! 7. Round half-up to two fraction digits
//!
//! Intermediate values are never rounded; only step 7 rounds.

use crate::models::{CargoSize, PricingRequest, WorkloadLevel};
use crate::money::Money;
use crate::tariff::{DistanceTier, FRAGILE_SURCHARGE, MAX_FRAGILE_DISTANCE_KM, MIN_DELIVERY_COST};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that reject a pricing request
///
/// All variants are caller-input errors; retrying the same request fails
/// the same way.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("invalid distance {distance} km: must be > 0")]
    InvalidDistance { distance: Decimal },

    #[error("fragile cargo limited to {limit} km, requested {distance} km")]
    FragileDistanceExceeded { distance: Decimal, limit: Decimal },
}

/// Intermediate values of a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Tier the distance fell into
    pub tier: DistanceTier,

    /// Flat base cost of the tier
    pub distance_cost: Decimal,

    /// Cargo size surcharge
    pub cargo_surcharge: Decimal,

    /// Fragile surcharge (zero for non-fragile cargo)
    pub fragile_surcharge: Decimal,

    /// Workload coefficient
    pub coefficient: Decimal,

    /// (distance + cargo + fragile) × coefficient, before floor and rounding
    pub subtotal: Decimal,

    /// Whether the subtotal was raised to the minimum delivery cost
    pub floor_applied: bool,

    /// Final quoted cost
    pub total: Money,
}

/// Request whose fields are known to be present and within limits
struct ValidatedRequest {
    distance: Decimal,
    cargo_size: CargoSize,
    fragile: bool,
    workload: WorkloadLevel,
}

/// Stateless delivery cost calculator
///
/// Holds no data; every call reads only the compiled-in tariff tables, so a
/// single pricer can be shared freely across threads.
///
/// # Example
/// ```
/// use delivery_pricing_core::{CargoSize, DeliveryPricer, WorkloadLevel};
/// use rust_decimal_macros::dec;
///
/// let pricer = DeliveryPricer::new();
/// let cost = pricer
///     .compute_cost(dec!(30.00), CargoSize::Large, true, WorkloadLevel::VeryHigh)
///     .unwrap();
/// assert_eq!(cost.to_string(), "1120.00");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DeliveryPricer;

impl DeliveryPricer {
    pub fn new() -> Self {
        Self
    }

    /// Compute the delivery cost from typed inputs
    ///
    /// # Errors
    /// - [`PricingError::InvalidDistance`] if `distance` is zero or negative
    /// - [`PricingError::FragileDistanceExceeded`] if `fragile` and
    ///   `distance` is beyond 30 km
    pub fn compute_cost(
        &self,
        distance: Decimal,
        cargo_size: CargoSize,
        fragile: bool,
        workload: WorkloadLevel,
    ) -> Result<Money, PricingError> {
        self.price(&PricingRequest::new(distance, cargo_size, fragile, workload))
    }

    /// Compute the delivery cost of a request whose fields may be absent
    ///
    /// # Errors
    /// [`PricingError::MissingArgument`] naming the first absent field
    /// (`distance`, `cargoSize`, `workload`, in that order), then the same
    /// errors as [`DeliveryPricer::compute_cost`].
    pub fn price(&self, request: &PricingRequest) -> Result<Money, PricingError> {
        self.breakdown(request).map(|breakdown| breakdown.total)
    }

    /// Compute the delivery cost along with every intermediate value
    pub fn breakdown(&self, request: &PricingRequest) -> Result<CostBreakdown, PricingError> {
        let validated = validate(request).map_err(|err| {
            debug!(error = %err, "delivery pricing request rejected");
            err
        })?;

        let tier = DistanceTier::for_distance(validated.distance);
        let distance_cost = tier.base_cost();
        let cargo_surcharge = validated.cargo_size.surcharge();
        let fragile_surcharge = if validated.fragile {
            FRAGILE_SURCHARGE
        } else {
            Decimal::ZERO
        };
        let coefficient = validated.workload.coefficient();

        let subtotal = (distance_cost + cargo_surcharge + fragile_surcharge) * coefficient;
        let floor_applied = subtotal < MIN_DELIVERY_COST;
        let total = Money::from_decimal(subtotal.max(MIN_DELIVERY_COST));

        debug!(
            distance = %validated.distance,
            cargo_size = validated.cargo_size.as_str(),
            fragile = validated.fragile,
            workload = validated.workload.as_str(),
            tier = ?tier,
            floor_applied,
            total = %total,
            "delivery cost computed"
        );

        Ok(CostBreakdown {
            tier,
            distance_cost,
            cargo_surcharge,
            fragile_surcharge,
            coefficient,
            subtotal,
            floor_applied,
            total,
        })
    }
}

fn validate(request: &PricingRequest) -> Result<ValidatedRequest, PricingError> {
    let distance = request
        .distance
        .ok_or(PricingError::MissingArgument("distance"))?;
    let cargo_size = request
        .cargo_size
        .ok_or(PricingError::MissingArgument("cargoSize"))?;
    let workload = request
        .workload
        .ok_or(PricingError::MissingArgument("workload"))?;

    if distance <= Decimal::ZERO {
        return Err(PricingError::InvalidDistance { distance });
    }

    if request.fragile && distance > MAX_FRAGILE_DISTANCE_KM {
        return Err(PricingError::FragileDistanceExceeded {
            distance,
            limit: MAX_FRAGILE_DISTANCE_KM,
        });
    }

    Ok(ValidatedRequest {
        distance,
        cargo_size,
        fragile: request.fragile,
        workload,
    })
}
