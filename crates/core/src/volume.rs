//! Cargo volume (the rectangular cargo box of a vehicle).

use nalgebra::Vector3;

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The internal cargo space of a vehicle.
///
/// Dimensions are in centimetres (width = lateral, height = vertical,
/// depth = advance); the payload limit is in kilograms. Immutable for the
/// duration of one optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CargoVolume {
    /// Dimensions (width, height, depth).
    dimensions: Vector3<f64>,

    /// Maximum total payload weight.
    max_weight: f64,
}

impl CargoVolume {
    /// Creates a new cargo volume with the given dimensions and payload
    /// limit.
    pub fn new(width: f64, height: f64, depth: f64, max_weight: f64) -> Self {
        Self {
            dimensions: Vector3::new(width, height, depth),
            max_weight,
        }
    }

    /// Returns the dimensions (width, height, depth).
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Returns the lateral extent.
    pub fn width(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the vertical extent.
    pub fn height(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the advance extent.
    pub fn depth(&self) -> f64 {
        self.dimensions.z
    }

    /// Returns the maximum payload weight.
    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Returns the enclosed volume.
    pub fn measure(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Validates the volume, rejecting degenerate inputs before they
    /// reach the engine.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions.x <= 0.0 || self.dimensions.y <= 0.0 || self.dimensions.z <= 0.0 {
            return Err(Error::InvalidVolume(
                "All dimensions must be positive".into(),
            ));
        }

        if self.max_weight <= 0.0 {
            return Err(Error::InvalidVolume(
                "Maximum payload weight must be positive".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_measure() {
        let volume = CargoVolume::new(240.0, 240.0, 600.0, 10000.0);
        assert_relative_eq!(volume.measure(), 34_560_000.0, epsilon = 0.001);
    }

    #[test]
    fn test_validation() {
        let valid = CargoVolume::new(240.0, 240.0, 600.0, 10000.0);
        assert!(valid.validate().is_ok());

        let flat = CargoVolume::new(240.0, 0.0, 600.0, 10000.0);
        assert!(flat.validate().is_err());

        let weightless = CargoVolume::new(240.0, 240.0, 600.0, 0.0);
        assert!(weightless.validate().is_err());
    }
}
