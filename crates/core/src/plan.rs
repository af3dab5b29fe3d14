//! Load plan representation.

use crate::placement::{PlacedUnit, UnplacedUnit};
use crate::position::CargoPosition;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Share of the placed weight in each longitudinal third of the cargo.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightDistribution {
    /// Percentage of placed weight in the front third.
    pub front: f64,
    /// Percentage of placed weight in the center third.
    pub center: f64,
    /// Percentage of placed weight in the rear third.
    pub rear: f64,
}

impl WeightDistribution {
    /// Sum of the three shares; ~100 when anything is placed, 0 otherwise.
    pub fn total(&self) -> f64 {
        self.front + self.center + self.rear
    }
}

/// One numbered instruction in the loading sequence.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadingStep {
    /// 1-based step number.
    pub step: usize,

    /// Human-readable instruction.
    pub description: String,

    /// Name of the product being loaded.
    pub product_name: String,

    /// Target position of the unit.
    pub position: CargoPosition,
}

/// Result of one load-planning run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadPlan {
    /// Successfully placed units.
    pub placements: Vec<PlacedUnit>,

    /// Units that could not be placed, with reasons.
    pub unplaced: Vec<UnplacedUnit>,

    /// Volumetric utilization of the cargo space, 0-100.
    pub utilization: f64,

    /// Total weight of the placed units.
    pub total_weight: f64,

    /// Longitudinal weight distribution of the placed units.
    pub weight_distribution: WeightDistribution,

    /// Step-ordered loading instructions.
    pub steps: Vec<LoadingStep>,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

impl LoadPlan {
    /// Creates a new empty plan.
    pub fn new() -> Self {
        Self {
            placements: Vec::new(),
            unplaced: Vec::new(),
            utilization: 0.0,
            total_weight: 0.0,
            weight_distribution: WeightDistribution::default(),
            steps: Vec::new(),
            computation_time_ms: 0,
        }
    }

    /// Returns true if every requested unit was placed.
    pub fn all_placed(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Returns the number of placed units.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns the number of unplaced units.
    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }

    /// Returns utilization as a formatted percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization)
    }
}

impl Default for LoadPlan {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::UnplacedReason;

    #[test]
    fn test_empty_plan() {
        let plan = LoadPlan::new();
        assert!(plan.all_placed());
        assert_eq!(plan.placed_count(), 0);
        assert_eq!(plan.utilization, 0.0);
        assert_eq!(plan.weight_distribution.total(), 0.0);
    }

    #[test]
    fn test_unplaced_accounting() {
        let mut plan = LoadPlan::new();
        plan.unplaced.push(UnplacedUnit {
            item_id: "P1".into(),
            item_name: "Pallet".into(),
            instance: 0,
            reason: UnplacedReason::ExceedsWeightCapacity,
        });

        assert!(!plan.all_placed());
        assert_eq!(plan.unplaced_count(), 1);
        assert_eq!(plan.unplaced[0].unit_id(), "P1-0");
    }

    #[test]
    fn test_utilization_percent_format() {
        let mut plan = LoadPlan::new();
        plan.utilization = 8.68;
        assert_eq!(plan.utilization_percent(), "8.7%");
    }
}
