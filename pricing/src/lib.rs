//! Delivery Pricing Core
//!
//! Computes the cost of a courier delivery from distance, cargo size,
//! fragility and the current workload of the delivery service.
//!
//! # Architecture
//!
//! - **models**: Domain types (CargoSize, WorkloadLevel, PricingRequest)
//! - **tariff**: Compiled-in tariff tables and their schema documentation
//! - **money**: Two-digit decimal money amounts
//! - **pricer**: Validation and the cost calculation
//!
//! # Critical Invariants
//!
//! 1. All money values are exact decimals, never floating point
//! 2. Every quote is at least the minimum delivery cost (400.00)
//! 3. Fragile cargo is never priced beyond 30 km
//! 4. Pricing is a pure function of its inputs

// Module declarations
pub mod models;
pub mod money;
pub mod pricer;
pub mod tariff;

// Re-exports for convenience
pub use models::{CargoSize, PricingRequest, WorkloadLevel};
pub use money::{Money, MoneyError};
pub use pricer::{CostBreakdown, DeliveryPricer, PricingError};
pub use tariff::{get_tariff_schema, DistanceTier, TariffSchemaDoc};
