//! # Stowage Core
//!
//! Core value types for the stowage load-planning engine.
//!
//! This crate provides the data model shared by the packing engine and its
//! callers: catalog items, cargo volumes, the fragility model, and the
//! load-plan result types.
//!
//! ## Core Components
//!
//! - **Catalog types**: [`CatalogItem`], [`PackingUnit`], [`Fragility`]
//! - **Cargo space**: [`CargoVolume`], [`CargoPosition`]
//! - **Plan results**: [`LoadPlan`], [`PlacedUnit`], [`UnplacedUnit`]
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod fragility;
pub mod item;
pub mod placement;
pub mod plan;
pub mod position;
pub mod volume;

// Re-exports
pub use error::{Error, Result};
pub use fragility::Fragility;
pub use item::{CatalogItem, Category, PackingUnit, TemperatureRequirement};
pub use placement::{PlacedUnit, UnplacedReason, UnplacedUnit};
pub use plan::{LoadPlan, LoadingStep, WeightDistribution};
pub use position::CargoPosition;
pub use volume::CargoVolume;
