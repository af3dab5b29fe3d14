//! Post-plan constraint verification.
//!
//! Audits a finished plan against rules that sit outside the placement
//! search: temperature compatibility across the whole cargo, and stack
//! heights. The engine enforces stacking limits during placement, but a
//! plan can also arrive from a manual-editing surface, so the audit
//! re-checks from the plan's own data.

use std::collections::HashMap;
use std::fmt;

use stowage_core::{CatalogItem, LoadPlan, TemperatureRequirement};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rule violation found in a load plan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PlanViolation {
    /// Frozen and hot goods share the cargo volume.
    IncompatibleTemperatures,
    /// A unit sits above its own item's maximum stack height.
    StackHeightExceeded {
        /// Unit id, `"{item id}-{instance}"`.
        unit_id: String,
        /// The unit's stack level in the plan.
        stack_level: u32,
        /// The item's effective maximum stack height.
        max_stack_height: u32,
    },
}

impl fmt::Display for PlanViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanViolation::IncompatibleTemperatures => {
                write!(f, "Frozen and hot goods cannot share a cargo volume")
            }
            PlanViolation::StackHeightExceeded {
                unit_id,
                stack_level,
                max_stack_height,
            } => write!(
                f,
                "Unit {} sits at stack level {} but allows at most {}",
                unit_id, stack_level, max_stack_height
            ),
        }
    }
}

/// Checks a plan against the catalog it was built from.
///
/// Returns every violation found; an empty list means the plan passes.
pub fn verify_plan(plan: &LoadPlan, items: &[CatalogItem]) -> Vec<PlanViolation> {
    let catalog: HashMap<&str, &CatalogItem> =
        items.iter().map(|item| (item.id(), item)).collect();

    let mut violations = Vec::new();

    let mut has_frozen = false;
    let mut has_hot = false;
    for placement in &plan.placements {
        let Some(item) = catalog.get(placement.item_id.as_str()) else {
            continue;
        };
        match item.temperature() {
            TemperatureRequirement::Frozen => has_frozen = true,
            TemperatureRequirement::Hot => has_hot = true,
            _ => {}
        }

        let max_stack_height = item.effective_max_stack_height();
        if placement.stack_level > max_stack_height {
            violations.push(PlanViolation::StackHeightExceeded {
                unit_id: placement.unit_id(),
                stack_level: placement.stack_level,
                max_stack_height,
            });
        }
    }

    if has_frozen && has_hot {
        violations.push(PlanViolation::IncompatibleTemperatures);
    }

    violations
}
