//! # Stowage
//!
//! Deterministic 3D load planning for road cargo.
//!
//! This crate assigns catalog items to non-overlapping positions inside a
//! vehicle's cargo box, under weight, stacking-support, and fragility
//! rules, and derives utilization, weight distribution, and step-ordered
//! loading instructions.
//!
//! ## Quick Start
//!
//! ```rust
//! use stowage::{CargoVolume, CatalogItem, Fragility, LoadPlanner};
//!
//! let volume = CargoVolume::new(240.0, 240.0, 600.0, 10000.0);
//! let items = vec![
//!     CatalogItem::new("pallet", 120.0, 100.0, 80.0, 350.0)
//!         .with_fragility(Fragility::Low)
//!         .with_quantity(4),
//! ];
//!
//! let planner = LoadPlanner::default_config();
//! let plan = planner.plan_items(&items, &volume).unwrap();
//! assert!(plan.all_placed());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support for all public value types

/// Core value types.
pub use stowage_core as core;

/// Packing engine.
pub use stowage_pack as pack;

// Re-export commonly used types at root level
pub use stowage_core::{
    CargoPosition, CargoVolume, CatalogItem, Category, Error, Fragility, LoadPlan, LoadingStep,
    PackingUnit, PlacedUnit, Result, TemperatureRequirement, UnplacedReason, UnplacedUnit,
    WeightDistribution,
};
pub use stowage_pack::{verify_plan, LoadPlanner, PlanViolation, PlannerConfig};
