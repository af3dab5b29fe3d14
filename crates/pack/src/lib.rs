//! # Stowage Pack
//!
//! Deterministic 3D packing engine for the stowage load planner.
//!
//! This crate turns a set of packing units and a cargo volume into a
//! reproducible load plan: non-overlapping positions under stacking,
//! fragility, and payload-weight rules, plus the derived metrics and
//! loading instructions.

pub mod evaluate;
pub mod grid;
pub mod planner;
pub mod report;
pub mod rotation;
pub mod search;
pub mod verify;

// Re-exports
pub use evaluate::{PlacedSlot, PlacementCandidate};
pub use grid::{GridBounds, OccupancyGrid};
pub use planner::{LoadPlanner, PlannerConfig};
pub use rotation::{upright_rotations, RotationVariant};
pub use verify::{verify_plan, PlanViolation};
pub use stowage_core::{
    CargoPosition, CargoVolume, CatalogItem, Error, Fragility, LoadPlan, PackingUnit, Result,
};
