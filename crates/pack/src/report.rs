//! Plan metrics and loading instructions derived from a placement set.

use stowage_core::{CargoVolume, LoadingStep, PlacedUnit, WeightDistribution};

/// Volumetric utilization of the cargo space, as a percentage.
pub fn utilization(placements: &[PlacedUnit], volume: &CargoVolume) -> f64 {
    let placed_volume: f64 = placements.iter().map(PlacedUnit::placed_volume).sum();
    placed_volume / volume.measure() * 100.0
}

/// Longitudinal weight distribution of the placed units.
///
/// Each unit's weight is attributed to the front, center, or rear third
/// of the advance axis, then expressed as a percentage of the total
/// placed weight. All three shares are zero when nothing is placed.
pub fn weight_distribution(placements: &[PlacedUnit], volume: &CargoVolume) -> WeightDistribution {
    let mut front = 0.0;
    let mut center = 0.0;
    let mut rear = 0.0;

    for unit in placements {
        let relative_advance = unit.position.advance / volume.depth();
        if relative_advance < 1.0 / 3.0 {
            front += unit.weight;
        } else if relative_advance < 2.0 / 3.0 {
            center += unit.weight;
        } else {
            rear += unit.weight;
        }
    }

    let total = front + center + rear;
    if total <= 0.0 {
        return WeightDistribution::default();
    }

    WeightDistribution {
        front: front / total * 100.0,
        center: center / total * 100.0,
        rear: rear / total * 100.0,
    }
}

/// Step-ordered loading instructions for the placed units.
///
/// Units are loaded lowest first, then most recessed, then most lateral,
/// matching the preference used during placement, so the list reads
/// top-to-bottom as "load these first".
pub fn loading_steps(placements: &[PlacedUnit]) -> Vec<LoadingStep> {
    let mut ordered: Vec<&PlacedUnit> = placements.iter().collect();
    ordered.sort_by(|a, b| {
        a.position
            .vertical
            .total_cmp(&b.position.vertical)
            .then_with(|| a.position.advance.total_cmp(&b.position.advance))
            .then_with(|| a.position.lateral.total_cmp(&b.position.lateral))
    });

    ordered
        .into_iter()
        .enumerate()
        .map(|(index, unit)| LoadingStep {
            step: index + 1,
            description: format!(
                "Place {} at position ({:.0}, {:.0}, {:.0})",
                unit.item_name,
                unit.position.lateral,
                unit.position.vertical,
                unit.position.advance
            ),
            product_name: unit.item_name.clone(),
            position: unit.position,
        })
        .collect()
}
