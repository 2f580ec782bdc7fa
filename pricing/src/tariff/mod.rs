//! Tariff Tables and Schema Documentation
//!
//! This module provides:
//! - Fixed tariff constants and distance tiers (`rates`)
//! - Self-documenting schema of the tariff (`schema_docs`)
//!
//! The tables are compiled in and never change at runtime.

pub mod rates;
pub mod schema_docs;

// Re-exports
pub use rates::{
    DistanceTier, DISTANCE_THRESHOLD_10KM, DISTANCE_THRESHOLD_2KM, DISTANCE_THRESHOLD_30KM,
    FRAGILE_SURCHARGE, MAX_FRAGILE_DISTANCE_KM, MIN_DELIVERY_COST,
};
pub use schema_docs::{get_tariff_schema, TariffEntry, TariffSchemaDoc, TariffSection};
