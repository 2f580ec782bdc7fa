//! End-to-end pricing scenarios
//!
//! Each case lists the expected calculation as
//! (tier + cargo + fragile) × coefficient, floored at 400.00.

use delivery_pricing_core::{CargoSize, DeliveryPricer, WorkloadLevel};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn quote(distance: Decimal, cargo: CargoSize, fragile: bool, workload: WorkloadLevel) -> String {
    DeliveryPricer::new()
        .compute_cost(distance, cargo, fragile, workload)
        .unwrap()
        .to_string()
}

// ============================================================================
// Workload coefficients
// ============================================================================

#[test]
fn test_workload_coefficients_over_30km_large() {
    // 300 + 200 = 500
    let cases = [
        (WorkloadLevel::Normal, "500.00"),
        (WorkloadLevel::Increased, "600.00"),
        (WorkloadLevel::High, "700.00"),
        (WorkloadLevel::VeryHigh, "800.00"),
    ];

    for (workload, expected) in cases {
        assert_eq!(
            quote(dec!(50.00), CargoSize::Large, false, workload),
            expected,
            "workload {workload:?}"
        );
    }
}

// ============================================================================
// Mixed scenarios
// ============================================================================

#[test]
fn test_scenario_table() {
    let cases = [
        (dec!(1.00), CargoSize::Small, false, WorkloadLevel::Normal, "400.00"),
        (dec!(5.00), CargoSize::Small, false, WorkloadLevel::Normal, "400.00"),
        // (200 + 200) × 1.4
        (dec!(15.00), CargoSize::Large, false, WorkloadLevel::High, "560.00"),
        // (200 + 100 + 300) × 1.2
        (dec!(25.00), CargoSize::Small, true, WorkloadLevel::Increased, "720.00"),
        (dec!(50.00), CargoSize::Large, false, WorkloadLevel::VeryHigh, "800.00"),
        (dec!(30.00), CargoSize::Large, true, WorkloadLevel::VeryHigh, "1120.00"),
        // (50 + 200) × 1.6 lands exactly on the floor
        (dec!(2.00), CargoSize::Large, false, WorkloadLevel::VeryHigh, "400.00"),
        // (100 + 100) × 1.6 = 320, floored
        (dec!(10.00), CargoSize::Small, false, WorkloadLevel::VeryHigh, "400.00"),
        // (200 + 100) × 1.6
        (dec!(30.00), CargoSize::Small, false, WorkloadLevel::VeryHigh, "480.00"),
    ];

    for (distance, cargo, fragile, workload, expected) in cases {
        assert_eq!(
            quote(distance, cargo, fragile, workload),
            expected,
            "{distance} km, {cargo:?}, fragile={fragile}, {workload:?}"
        );
    }
}

#[test]
fn test_large_over_30km_normal() {
    assert_eq!(quote(dec!(50.00), CargoSize::Large, false, WorkloadLevel::Normal), "500.00");
}

#[test]
fn test_fragile_small_20km_normal() {
    assert_eq!(quote(dec!(20.00), CargoSize::Small, true, WorkloadLevel::Normal), "600.00");
}

#[test]
fn test_maximum_possible_cost() {
    // Longest fragile distance, large cargo, highest workload
    assert_eq!(quote(dec!(30.00), CargoSize::Large, true, WorkloadLevel::VeryHigh), "1120.00");
}

#[test]
fn test_fragile_short_distance() {
    // (50 + 100 + 300) × 1.0
    assert_eq!(quote(dec!(1.50), CargoSize::Small, true, WorkloadLevel::Normal), "450.00");
}

#[test]
fn test_cost_above_floor_is_unchanged() {
    let cost = DeliveryPricer::new()
        .compute_cost(dec!(30.00), CargoSize::Large, true, WorkloadLevel::VeryHigh)
        .unwrap();
    assert_eq!(cost.amount(), dec!(1120.00));
    assert_eq!(cost.amount().scale(), 2);
}
