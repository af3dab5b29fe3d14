//! Fragility model used by the stacking rules.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fragility level of a catalog item.
///
/// Levels are ordered from sturdiest to most fragile. The ordering drives
/// the stacking rule: an item may only rest on items of equal or lower
/// fragility rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Fragility {
    /// Sturdy goods; can carry substantial load.
    Low,
    /// Standard goods.
    #[default]
    Medium,
    /// Fragile goods; limited load on top.
    High,
    /// Extremely fragile goods; effectively nothing on top.
    VeryHigh,
}

impl Fragility {
    /// Ordinal rank, 0 (sturdiest) to 3 (most fragile).
    pub fn rank(self) -> u8 {
        match self {
            Fragility::Low => 0,
            Fragility::Medium => 1,
            Fragility::High => 2,
            Fragility::VeryHigh => 3,
        }
    }

    /// Multiplier on an item's own weight giving the load it may carry.
    pub fn support_factor(self) -> f64 {
        match self {
            Fragility::Low => 2.5,
            Fragility::Medium => 1.5,
            Fragility::High => 0.8,
            Fragility::VeryHigh => 0.25,
        }
    }

    /// Default maximum stack height when the item carries no explicit
    /// override.
    pub fn default_stack_height(self) -> u32 {
        match self {
            Fragility::Low => 4,
            Fragility::Medium => 3,
            Fragility::High => 2,
            Fragility::VeryHigh => 1,
        }
    }

    /// Returns true if an item of fragility `top` may rest on an item of
    /// fragility `self`. Sturdier items never rest on more fragile ones.
    pub fn supports(self, top: Fragility) -> bool {
        top.rank() >= self.rank()
    }
}
