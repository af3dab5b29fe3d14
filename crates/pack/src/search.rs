//! Candidate-position search for a single unit.

use stowage_core::{CargoPosition, CargoVolume, CatalogItem};

use crate::evaluate::{evaluate_placement, PlacedSlot, PlacementCandidate};
use crate::grid::OccupancyGrid;
use crate::rotation::upright_rotations;

/// Score weight of one vertical step; dominates the advance weight.
const VERTICAL_STEP_WEIGHT: u64 = 100_000;
/// Score weight of one advance step; dominates the lateral step.
const ADVANCE_STEP_WEIGHT: u64 = 100;

/// Number of valid grid steps for a footprint extent inside a cargo
/// extent, or `None` when the footprint cannot fit at all.
fn step_count(cargo_extent: f64, footprint_extent: f64, resolution: f64) -> Option<usize> {
    let steps = ((cargo_extent - footprint_extent) / resolution).floor() as i64 + 1;
    if steps <= 0 {
        None
    } else {
        Some(steps as usize)
    }
}

/// Finds the best legal placement for one unit across all rotations and
/// candidate corner positions.
///
/// Positions are scanned vertical-outermost, then advance, then lateral,
/// and ranked by `vertical * 100000 + advance * 100 + lateral`, a stable
/// lowest-first, most-recessed, most-lateral preference. Within a single
/// rotation the first accepted position already minimizes that score, so
/// the scan short-circuits per rotation; ties across rotations go to the
/// earlier variant.
pub fn find_best_placement(
    item: &CatalogItem,
    volume: &CargoVolume,
    grid: &OccupancyGrid,
    placed: &[PlacedSlot],
) -> Option<PlacementCandidate> {
    let resolution = grid.resolution();
    let mut best: Option<(u64, PlacementCandidate)> = None;

    for rotation in upright_rotations(item) {
        let Some(steps_lateral) = step_count(volume.width(), rotation.width, resolution) else {
            continue;
        };
        let Some(steps_vertical) = step_count(volume.height(), rotation.height, resolution) else {
            continue;
        };
        let Some(steps_advance) = step_count(volume.depth(), rotation.depth, resolution) else {
            continue;
        };

        'scan: for vertical in 0..steps_vertical {
            for advance in 0..steps_advance {
                for lateral in 0..steps_lateral {
                    let position = CargoPosition::new(
                        lateral as f64 * resolution,
                        vertical as f64 * resolution,
                        advance as f64 * resolution,
                    );

                    let Some(candidate) = evaluate_placement(
                        item.weight(),
                        item.fragility(),
                        position,
                        &rotation,
                        grid,
                        placed,
                    ) else {
                        continue;
                    };

                    let score = vertical as u64 * VERTICAL_STEP_WEIGHT
                        + advance as u64 * ADVANCE_STEP_WEIGHT
                        + lateral as u64;
                    if best.as_ref().map_or(true, |(best_score, _)| score < *best_score) {
                        best = Some((score, candidate));
                    }
                    break 'scan;
                }
            }
        }
    }

    best.map(|(_, candidate)| candidate)
}
