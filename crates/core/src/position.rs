//! Cargo-space coordinate convention.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position inside the cargo volume, in centimetres.
///
/// The three axes are named rather than exposed as bare x/y/z so that every
/// consumer agrees on the convention:
///
/// - `lateral` runs across the cargo width,
/// - `vertical` runs up the cargo height (0 is the floor),
/// - `advance` runs along the depth of travel (0 is the front wall).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CargoPosition {
    /// Offset across the cargo width.
    pub lateral: f64,
    /// Offset above the cargo floor.
    pub vertical: f64,
    /// Offset along the depth of travel.
    pub advance: f64,
}

impl CargoPosition {
    /// Creates a new position.
    pub fn new(lateral: f64, vertical: f64, advance: f64) -> Self {
        Self {
            lateral,
            vertical,
            advance,
        }
    }

    /// The floor position at the front-left corner.
    pub fn origin() -> Self {
        Self::default()
    }

    /// Returns true if the position rests on the cargo floor.
    pub fn is_on_floor(&self) -> bool {
        self.vertical == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_on_floor() {
        assert!(CargoPosition::origin().is_on_floor());
        assert!(!CargoPosition::new(0.0, 10.0, 0.0).is_on_floor());
    }
}
