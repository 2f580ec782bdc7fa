//! Pricing request model
//!
//! A request as it arrives from a caller boundary. Distance, cargo size and
//! workload may be absent when the request was decoded from an untrusted
//! payload; the pricer reports the first absent field. The fragile flag is a
//! plain boolean and is never absent.
//!
//! JSON shape:
//! ```json
//! { "distance": "25.00", "cargoSize": "SMALL", "fragile": true, "workload": "INCREASED" }
//! ```

use crate::models::{CargoSize, WorkloadLevel};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inputs of a single delivery quote
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    /// Travel distance in kilometers
    ///
    /// JSON numbers are decoded digit-for-digit, never through `f64`.
    #[serde(
        default,
        deserialize_with = "rust_decimal::serde::arbitrary_precision_option::deserialize"
    )]
    pub distance: Option<Decimal>,

    /// Cargo size category
    #[serde(default)]
    pub cargo_size: Option<CargoSize>,

    /// Whether the cargo is fragile
    #[serde(default)]
    pub fragile: bool,

    /// Delivery service workload level
    #[serde(default)]
    pub workload: Option<WorkloadLevel>,
}

impl PricingRequest {
    /// Build a request with every field present
    ///
    /// # Example
    /// ```
    /// use delivery_pricing_core::{CargoSize, PricingRequest, WorkloadLevel};
    /// use rust_decimal_macros::dec;
    ///
    /// let request = PricingRequest::new(dec!(12.5), CargoSize::Large, false, WorkloadLevel::High);
    /// assert_eq!(request.distance, Some(dec!(12.5)));
    /// ```
    pub fn new(
        distance: Decimal,
        cargo_size: CargoSize,
        fragile: bool,
        workload: WorkloadLevel,
    ) -> Self {
        Self {
            distance: Some(distance),
            cargo_size: Some(cargo_size),
            fragile,
            workload: Some(workload),
        }
    }
}
