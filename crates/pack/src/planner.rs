//! Packing orchestration: ordering, placement, and plan synthesis.

use std::time::Instant;

use stowage_core::{
    CargoVolume, CatalogItem, Error, LoadPlan, PackingUnit, PlacedUnit, Result, UnplacedReason,
    UnplacedUnit,
};

use crate::evaluate::PlacedSlot;
use crate::grid::OccupancyGrid;
use crate::report;
use crate::search::find_best_placement;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the load planner.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlannerConfig {
    /// Grid resolution in centimetres per voxel.
    pub resolution: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { resolution: 10.0 }
    }
}

impl PlannerConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the grid resolution.
    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.resolution <= 0.0 {
            return Err(Error::ConfigError(
                "Grid resolution must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Deterministic greedy load planner.
///
/// A run is a pure function of its inputs: identical units and cargo
/// volume always yield an identical plan.
pub struct LoadPlanner {
    config: PlannerConfig,
}

impl LoadPlanner {
    /// Creates a new planner with the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Creates a planner with default configuration.
    pub fn default_config() -> Self {
        Self::new(PlannerConfig::default())
    }

    /// Plans a load for pre-expanded packing units.
    ///
    /// Units are sorted sturdy-and-large first, then placed one at a time
    /// with no backtracking. Units that would exceed the payload limit or
    /// have no legal position are reported in the plan's unplaced list.
    pub fn plan(&self, units: &[PackingUnit], volume: &CargoVolume) -> Result<LoadPlan> {
        let start = Instant::now();

        self.config.validate()?;
        volume.validate()?;
        for unit in units {
            unit.item.validate()?;
        }

        let order = placement_order(units);

        let mut grid = OccupancyGrid::new(volume, self.config.resolution);
        let mut slots: Vec<PlacedSlot> = Vec::new();
        let mut unplaced: Vec<UnplacedUnit> = Vec::new();
        let mut running_weight = 0.0;

        for unit_index in order {
            let unit = &units[unit_index];
            let item = &unit.item;

            if running_weight + item.weight() > volume.max_weight() {
                log::debug!(
                    "unit {} would exceed the payload limit, leaving unplaced",
                    unit.unit_id()
                );
                unplaced.push(unplaced_unit(unit, UnplacedReason::ExceedsWeightCapacity));
                continue;
            }

            let Some(candidate) = find_best_placement(item, volume, &grid, &slots) else {
                log::debug!("no legal position for unit {}", unit.unit_id());
                unplaced.push(unplaced_unit(unit, UnplacedReason::NoFeasiblePlacement));
                continue;
            };

            let owner = slots.len();
            grid.occupy(&candidate.bounds, owner);
            running_weight += item.weight();

            if !candidate.supporters.is_empty() {
                let split_load = item.weight() / candidate.supporters.len() as f64;
                for &supporter_index in &candidate.supporters {
                    slots[supporter_index].load_above_weight += split_load;
                }
            }

            slots.push(PlacedSlot {
                unit_index,
                position: candidate.position,
                rotation: candidate.rotation,
                stack_level: candidate.stack_level,
                load_above_weight: 0.0,
                weight: item.weight(),
                fragility: item.fragility(),
                stackable: item.is_stackable(),
                max_stack_height: item.effective_max_stack_height(),
            });
        }

        if !unplaced.is_empty() {
            log::warn!(
                "{} of {} units could not be placed",
                unplaced.len(),
                units.len()
            );
        }

        let placements: Vec<PlacedUnit> = slots
            .iter()
            .map(|slot| {
                let unit = &units[slot.unit_index];
                PlacedUnit {
                    item_id: unit.item.id().to_string(),
                    item_name: unit.item.name().to_string(),
                    instance: unit.instance,
                    position: slot.position,
                    placed_dimensions: slot.rotation.dimensions(),
                    yaw_degrees: slot.rotation.yaw_degrees,
                    rotation_index: slot.rotation.index,
                    stack_level: slot.stack_level,
                    load_above_weight: slot.load_above_weight,
                    weight: slot.weight,
                    category: unit.item.category(),
                }
            })
            .collect();

        let mut plan = LoadPlan::new();
        plan.utilization = report::utilization(&placements, volume);
        plan.weight_distribution = report::weight_distribution(&placements, volume);
        plan.steps = report::loading_steps(&placements);
        plan.placements = placements;
        plan.unplaced = unplaced;
        plan.total_weight = running_weight;
        plan.computation_time_ms = start.elapsed().as_millis() as u64;

        Ok(plan)
    }

    /// Convenience entry point: expands catalog items by quantity, then
    /// plans the resulting units.
    pub fn plan_items(&self, items: &[CatalogItem], volume: &CargoVolume) -> Result<LoadPlan> {
        let units = PackingUnit::expand(items);
        self.plan(&units, volume)
    }
}

fn unplaced_unit(unit: &PackingUnit, reason: UnplacedReason) -> UnplacedUnit {
    UnplacedUnit {
        item_id: unit.item.id().to_string(),
        item_name: unit.item.name().to_string(),
        instance: unit.instance,
        reason,
    }
}

/// Placement priority: fragility rank ascending (sturdier first), then
/// stackable before non-stackable, then footprint volume descending, then
/// weight descending. The stable sort keeps expansion order for ties.
fn placement_order(units: &[PackingUnit]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..units.len()).collect();
    order.sort_by(|&a, &b| {
        let item_a = &units[a].item;
        let item_b = &units[b].item;

        item_a
            .fragility()
            .rank()
            .cmp(&item_b.fragility().rank())
            .then_with(|| item_b.is_stackable().cmp(&item_a.is_stackable()))
            .then_with(|| item_b.volume().total_cmp(&item_a.volume()))
            .then_with(|| item_b.weight().total_cmp(&item_a.weight()))
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowage_core::{CatalogItem, Fragility};

    #[test]
    fn test_placement_order() {
        let items = vec![
            CatalogItem::new("fragile", 50.0, 50.0, 50.0, 10.0).with_fragility(Fragility::High),
            CatalogItem::new("small", 50.0, 50.0, 50.0, 10.0).with_fragility(Fragility::Low),
            CatalogItem::new("big", 100.0, 100.0, 100.0, 10.0).with_fragility(Fragility::Low),
            CatalogItem::new("rigid", 100.0, 100.0, 100.0, 10.0)
                .with_fragility(Fragility::Low)
                .with_stackable(false),
        ];
        let units = PackingUnit::expand(&items);

        let order = placement_order(&units);
        let ids: Vec<&str> = order.iter().map(|&i| units[i].item.id()).collect();
        assert_eq!(ids, vec!["big", "small", "rigid", "fragile"]);
    }

    #[test]
    fn test_config_validation() {
        assert!(PlannerConfig::default().validate().is_ok());
        assert!(PlannerConfig::new()
            .with_resolution(0.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_invalid_volume_is_a_typed_error() {
        let planner = LoadPlanner::default_config();
        let volume = CargoVolume::new(0.0, 240.0, 600.0, 10000.0);
        let items = vec![CatalogItem::new("P1", 100.0, 100.0, 100.0, 500.0)];

        assert!(matches!(
            planner.plan_items(&items, &volume),
            Err(Error::InvalidVolume(_))
        ));
    }

    #[test]
    fn test_invalid_item_is_a_typed_error() {
        let planner = LoadPlanner::default_config();
        let volume = CargoVolume::new(240.0, 240.0, 600.0, 10000.0);
        let items = vec![CatalogItem::new("P1", -100.0, 100.0, 100.0, 500.0)];

        assert!(matches!(
            planner.plan_items(&items, &volume),
            Err(Error::InvalidItem(_))
        ));
    }
}
