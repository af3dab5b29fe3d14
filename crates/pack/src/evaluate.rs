//! Placement legality evaluation.

use stowage_core::{CargoPosition, Fragility};

use crate::grid::{GridBounds, OccupancyGrid};
use crate::rotation::RotationVariant;

/// The engine's working record of a placed unit during a run.
///
/// Carries the attributes the stacking rules consult, denormalized from
/// the source item so evaluation never needs a catalog lookup.
#[derive(Debug, Clone)]
pub struct PlacedSlot {
    /// Index of the unit in the run's input list.
    pub unit_index: usize,
    /// Final position (minimum corner).
    pub position: CargoPosition,
    /// The rotation variant that was applied.
    pub rotation: RotationVariant,
    /// Stack level, 1 = resting on the floor.
    pub stack_level: u32,
    /// Weight transmitted downward by everything resting on this unit.
    pub load_above_weight: f64,
    /// Weight of the unit itself.
    pub weight: f64,
    /// Fragility of the source item.
    pub fragility: Fragility,
    /// Whether other units may rest on this one.
    pub stackable: bool,
    /// Effective maximum stack height of the source item.
    pub max_stack_height: u32,
}

/// An accepted candidate placement, prior to commitment.
#[derive(Debug, Clone)]
pub struct PlacementCandidate {
    /// Candidate position (minimum corner).
    pub position: CargoPosition,
    /// The rotation variant under evaluation.
    pub rotation: RotationVariant,
    /// Voxel region the placement would occupy.
    pub bounds: GridBounds,
    /// Stack level the unit would land on.
    pub stack_level: u32,
    /// Indices of the placed units that would carry this one.
    pub supporters: Vec<usize>,
}

/// Decides whether one unit may be placed at `position` under `rotation`.
///
/// Floor placements are structurally legal as soon as their voxels are
/// free. Anything higher must be fully supported: every column of the
/// footprint needs an owner directly beneath it, and every distinct
/// supporter must be stackable, have headroom in its stack, be at most as
/// fragile as the candidate, and have capacity left for its share of the
/// candidate's weight.
pub fn evaluate_placement(
    weight: f64,
    fragility: Fragility,
    position: CargoPosition,
    rotation: &RotationVariant,
    grid: &OccupancyGrid,
    placed: &[PlacedSlot],
) -> Option<PlacementCandidate> {
    let bounds = grid.bounds(&position, &rotation.dimensions())?;

    if !grid.is_free(&bounds) {
        return None;
    }

    if bounds.on_floor() {
        return Some(PlacementCandidate {
            position,
            rotation: *rotation,
            bounds,
            stack_level: 1,
            supporters: Vec::new(),
        });
    }

    let mut supporters: Vec<usize> = Vec::new();
    for lateral in bounds.lateral_range() {
        for advance in bounds.advance_range() {
            match grid.owner_below(lateral, advance, bounds.start_vertical()) {
                Some(owner) => {
                    if !supporters.contains(&owner) {
                        supporters.push(owner);
                    }
                }
                // A single unsupported column means the footprint would
                // float; partial support is not allowed.
                None => return None,
            }
        }
    }

    let split_load = weight / supporters.len() as f64;
    let mut stack_level = 1;

    for &supporter_index in &supporters {
        let supporter = &placed[supporter_index];

        if !supporter.stackable {
            return None;
        }

        let next_level = supporter.stack_level + 1;
        if next_level > supporter.max_stack_height {
            return None;
        }

        if !supporter.fragility.supports(fragility) {
            return None;
        }

        let capacity = supporter.weight * supporter.fragility.support_factor();
        if supporter.load_above_weight + split_load > capacity {
            return None;
        }

        stack_level = stack_level.max(next_level);
    }

    Some(PlacementCandidate {
        position,
        rotation: *rotation,
        bounds,
        stack_level,
        supporters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowage_core::CargoVolume;

    fn native_rotation(width: f64, height: f64, depth: f64) -> RotationVariant {
        RotationVariant {
            width,
            height,
            depth,
            yaw_degrees: 0.0,
            index: 0,
        }
    }

    fn slot(weight: f64, fragility: Fragility) -> PlacedSlot {
        PlacedSlot {
            unit_index: 0,
            position: CargoPosition::origin(),
            rotation: native_rotation(100.0, 100.0, 100.0),
            stack_level: 1,
            load_above_weight: 0.0,
            weight,
            fragility,
            stackable: true,
            max_stack_height: fragility.default_stack_height(),
        }
    }

    /// Grid with one 100x100x100 unit occupying the front-left floor
    /// corner, owned by slot 0.
    fn grid_with_base(volume: &CargoVolume) -> OccupancyGrid {
        let mut grid = OccupancyGrid::new(volume, 10.0);
        let bounds = grid
            .bounds(
                &CargoPosition::origin(),
                &nalgebra::Vector3::new(100.0, 100.0, 100.0),
            )
            .unwrap();
        grid.occupy(&bounds, 0);
        grid
    }

    #[test]
    fn test_floor_placement_accepted_without_supporters() {
        let volume = CargoVolume::new(200.0, 200.0, 200.0, 1000.0);
        let grid = OccupancyGrid::new(&volume, 10.0);

        let candidate = evaluate_placement(
            50.0,
            Fragility::Medium,
            CargoPosition::origin(),
            &native_rotation(100.0, 100.0, 100.0),
            &grid,
            &[],
        )
        .unwrap();

        assert_eq!(candidate.stack_level, 1);
        assert!(candidate.supporters.is_empty());
    }

    #[test]
    fn test_occupied_space_rejected() {
        let volume = CargoVolume::new(200.0, 200.0, 200.0, 1000.0);
        let grid = grid_with_base(&volume);
        let placed = vec![slot(100.0, Fragility::Low)];

        let candidate = evaluate_placement(
            50.0,
            Fragility::Medium,
            CargoPosition::origin(),
            &native_rotation(100.0, 100.0, 100.0),
            &grid,
            &placed,
        );

        assert!(candidate.is_none());
    }

    #[test]
    fn test_stacked_placement_collects_supporter() {
        let volume = CargoVolume::new(200.0, 200.0, 200.0, 1000.0);
        let grid = grid_with_base(&volume);
        let placed = vec![slot(100.0, Fragility::Low)];

        let candidate = evaluate_placement(
            50.0,
            Fragility::Medium,
            CargoPosition::new(0.0, 100.0, 0.0),
            &native_rotation(100.0, 100.0, 100.0),
            &grid,
            &placed,
        )
        .unwrap();

        assert_eq!(candidate.stack_level, 2);
        assert_eq!(candidate.supporters, vec![0]);
    }

    #[test]
    fn test_partial_support_rejected() {
        let volume = CargoVolume::new(400.0, 200.0, 400.0, 1000.0);
        let grid = grid_with_base(&volume);
        let placed = vec![slot(100.0, Fragility::Low)];

        // Footprint hangs past the supporter into empty air.
        let candidate = evaluate_placement(
            50.0,
            Fragility::Medium,
            CargoPosition::new(50.0, 100.0, 0.0),
            &native_rotation(100.0, 100.0, 100.0),
            &grid,
            &placed,
        );

        assert!(candidate.is_none());
    }

    #[test]
    fn test_non_stackable_supporter_rejected() {
        let volume = CargoVolume::new(200.0, 200.0, 200.0, 1000.0);
        let grid = grid_with_base(&volume);
        let mut base = slot(100.0, Fragility::Low);
        base.stackable = false;
        let placed = vec![base];

        let candidate = evaluate_placement(
            50.0,
            Fragility::Medium,
            CargoPosition::new(0.0, 100.0, 0.0),
            &native_rotation(100.0, 100.0, 100.0),
            &grid,
            &placed,
        );

        assert!(candidate.is_none());
    }

    #[test]
    fn test_sturdy_on_fragile_rejected() {
        let volume = CargoVolume::new(200.0, 200.0, 200.0, 1000.0);
        let grid = grid_with_base(&volume);
        let placed = vec![slot(100.0, Fragility::VeryHigh)];

        let candidate = evaluate_placement(
            50.0,
            Fragility::Low,
            CargoPosition::new(0.0, 100.0, 0.0),
            &native_rotation(100.0, 100.0, 100.0),
            &grid,
            &placed,
        );

        assert!(candidate.is_none());
    }

    #[test]
    fn test_stack_height_limit_rejected() {
        let volume = CargoVolume::new(200.0, 300.0, 200.0, 1000.0);
        let grid = grid_with_base(&volume);
        let mut base = slot(100.0, Fragility::Low);
        base.stack_level = 2;
        base.max_stack_height = 2;
        let placed = vec![base];

        let candidate = evaluate_placement(
            50.0,
            Fragility::Medium,
            CargoPosition::new(0.0, 100.0, 0.0),
            &native_rotation(100.0, 100.0, 100.0),
            &grid,
            &placed,
        );

        assert!(candidate.is_none());
    }

    #[test]
    fn test_supporter_capacity_rejected() {
        let volume = CargoVolume::new(200.0, 200.0, 200.0, 1000.0);
        let grid = grid_with_base(&volume);
        // VeryHigh carries only 0.25x its own weight: 100 * 0.25 = 25.
        // Stack headroom is granted explicitly so the capacity rule is the
        // one under test.
        let mut base = slot(100.0, Fragility::VeryHigh);
        base.max_stack_height = 3;
        let placed = vec![base];

        let candidate = evaluate_placement(
            30.0,
            Fragility::VeryHigh,
            CargoPosition::new(0.0, 100.0, 0.0),
            &native_rotation(100.0, 100.0, 100.0),
            &grid,
            &placed,
        );

        assert!(candidate.is_none());

        // Within capacity it passes.
        let candidate = evaluate_placement(
            20.0,
            Fragility::VeryHigh,
            CargoPosition::new(0.0, 100.0, 0.0),
            &native_rotation(100.0, 100.0, 100.0),
            &grid,
            &placed,
        );

        assert!(candidate.is_some());
    }
}
