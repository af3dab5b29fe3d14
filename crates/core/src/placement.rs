//! Placement outcomes for individual units.

use nalgebra::Vector3;

use crate::item::Category;
use crate::position::CargoPosition;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unit bound to its final position inside the cargo volume.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedUnit {
    /// Id of the source catalog item.
    pub item_id: String,

    /// Display name of the source catalog item.
    pub item_name: String,

    /// Instance ordinal within the item's quantity (0-based).
    pub instance: usize,

    /// Final position (minimum corner).
    pub position: CargoPosition,

    /// Dimensions as placed (width, height, depth after rotation).
    pub placed_dimensions: Vector3<f64>,

    /// Rotation about the vertical axis, in degrees.
    pub yaw_degrees: f64,

    /// Index of the rotation variant that was applied.
    pub rotation_index: usize,

    /// Stack level, 1 = resting on the floor.
    pub stack_level: u32,

    /// Weight transmitted downward by everything resting on this unit.
    pub load_above_weight: f64,

    /// Weight of this unit.
    pub weight: f64,

    /// Display category of the source item.
    pub category: Category,
}

impl PlacedUnit {
    /// Unique id of this unit, `"{item id}-{instance}"`.
    pub fn unit_id(&self) -> String {
        format!("{}-{}", self.item_id, self.instance)
    }

    /// Returns the maximum corner of the placed bounding box.
    pub fn max_corner(&self) -> CargoPosition {
        CargoPosition::new(
            self.position.lateral + self.placed_dimensions.x,
            self.position.vertical + self.placed_dimensions.y,
            self.position.advance + self.placed_dimensions.z,
        )
    }

    /// Returns the volume occupied by this unit.
    pub fn placed_volume(&self) -> f64 {
        self.placed_dimensions.x * self.placed_dimensions.y * self.placed_dimensions.z
    }

    /// Checks whether this unit's bounding box overlaps another's.
    pub fn overlaps(&self, other: &PlacedUnit) -> bool {
        let self_max = self.max_corner();
        let other_max = other.max_corner();

        let apart_lateral = self.position.lateral >= other_max.lateral
            || other.position.lateral >= self_max.lateral;
        let apart_vertical = self.position.vertical >= other_max.vertical
            || other.position.vertical >= self_max.vertical;
        let apart_advance = self.position.advance >= other_max.advance
            || other.position.advance >= self_max.advance;

        !(apart_lateral || apart_vertical || apart_advance)
    }
}

/// Why a unit was left out of the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnplacedReason {
    /// Adding the unit would exceed the cargo's maximum payload weight.
    ExceedsWeightCapacity,
    /// No legal position/rotation combination exists for the unit.
    NoFeasiblePlacement,
}

/// A unit that could not be placed, with the reason.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnplacedUnit {
    /// Id of the source catalog item.
    pub item_id: String,

    /// Display name of the source catalog item.
    pub item_name: String,

    /// Instance ordinal within the item's quantity (0-based).
    pub instance: usize,

    /// Why the unit was not placed.
    pub reason: UnplacedReason,
}

impl UnplacedUnit {
    /// Unique id of this unit, `"{item id}-{instance}"`.
    pub fn unit_id(&self) -> String {
        format!("{}-{}", self.item_id, self.instance)
    }
}
