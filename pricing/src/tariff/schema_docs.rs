//! Tariff Schema Documentation
//!
//! Self-documenting view of the compiled-in tariff tables, generated from
//! the same constants the pricer uses so the two never drift apart.

use crate::models::{CargoSize, WorkloadLevel};
use crate::tariff::rates::{
    DistanceTier, FRAGILE_SURCHARGE, MAX_FRAGILE_DISTANCE_KM, MIN_DELIVERY_COST,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// How a tariff section participates in the price
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TariffSection {
    /// Flat base cost chosen by distance
    DistanceTier,
    /// Amounts added to the base cost
    Surcharge,
    /// Factors multiplying the subtotal
    Coefficient,
    /// Limits applied around the calculation
    Limit,
}

/// A single tariff value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TariffEntry {
    /// Entry key (e.g., "cargo_size.LARGE")
    pub name: String,

    /// Section the entry belongs to
    pub section: TariffSection,

    /// Decimal value rendered as a string (e.g., "200.00")
    pub value: String,

    /// What the value means
    pub description: String,
}

/// Complete tariff documentation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TariffSchemaDoc {
    /// Schema format version
    pub version: String,

    /// Entries in calculation order
    pub entries: Vec<TariffEntry>,
}

fn entry(name: String, section: TariffSection, value: String, description: String) -> TariffEntry {
    TariffEntry {
        name,
        section,
        value,
        description,
    }
}

impl TariffSchemaDoc {
    /// Build the documentation for the compiled-in tariff
    pub fn current() -> Self {
        let mut entries = Vec::new();

        for tier in DistanceTier::ALL {
            let description = match tier.upper_bound_km() {
                Some(bound) => format!("Base cost for distances up to and including {bound} km"),
                None => "Base cost for distances beyond the last threshold".to_string(),
            };
            entries.push(entry(
                format!("distance_tier.{tier:?}"),
                TariffSection::DistanceTier,
                tier.base_cost().to_string(),
                description,
            ));
        }

        for size in CargoSize::ALL {
            entries.push(entry(
                format!("cargo_size.{}", size.as_str()),
                TariffSection::Surcharge,
                size.surcharge().to_string(),
                format!("Added for {} cargo", size.as_str()),
            ));
        }

        entries.push(entry(
            "fragile".to_string(),
            TariffSection::Surcharge,
            FRAGILE_SURCHARGE.to_string(),
            "Added once when the cargo is fragile".to_string(),
        ));

        for level in WorkloadLevel::ALL {
            entries.push(entry(
                format!("workload.{}", level.as_str()),
                TariffSection::Coefficient,
                level.coefficient().to_string(),
                format!("Multiplies the subtotal under {} workload", level.as_str()),
            ));
        }

        entries.push(entry(
            "max_fragile_distance_km".to_string(),
            TariffSection::Limit,
            MAX_FRAGILE_DISTANCE_KM.to_string(),
            "Fragile cargo beyond this distance is rejected".to_string(),
        ));
        entries.push(entry(
            "min_delivery_cost".to_string(),
            TariffSection::Limit,
            MIN_DELIVERY_COST.to_string(),
            "Floor applied after the workload coefficient".to_string(),
        ));

        Self {
            version: "1.0".to_string(),
            entries,
        }
    }
}

/// Get the tariff documentation as a pretty-printed JSON string
pub fn get_tariff_schema() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&TariffSchemaDoc::current())
}
