//! Domain types
//!
//! - **cargo**: Cargo size categories and their surcharges
//! - **workload**: Courier-service workload levels and their coefficients
//! - **request**: Pricing request as received from callers

pub mod cargo;
pub mod request;
pub mod workload;

pub use cargo::CargoSize;
pub use request::PricingRequest;
pub use workload::WorkloadLevel;
