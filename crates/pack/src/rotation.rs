//! Rotation variants for upright items.

use nalgebra::Vector3;
use stowage_core::CatalogItem;

/// One allowed orientation of an item's footprint.
///
/// Items stand upright, so rotation never alters the vertical extent; the
/// only variant besides the native orientation is a 90° turn about the
/// vertical axis swapping the lateral and advance extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationVariant {
    /// Lateral extent under this orientation.
    pub width: f64,
    /// Vertical extent (never altered by rotation).
    pub height: f64,
    /// Advance extent under this orientation.
    pub depth: f64,
    /// Rotation about the vertical axis, in degrees.
    pub yaw_degrees: f64,
    /// Ordinal of this variant in the generated set.
    pub index: usize,
}

impl RotationVariant {
    /// Returns the oriented dimensions as a vector (width, height, depth).
    pub fn dimensions(&self) -> Vector3<f64> {
        Vector3::new(self.width, self.height, self.depth)
    }
}

/// Enumerates the orientations an item may present.
///
/// Returns the native orientation, plus the 90° yaw when the lateral and
/// advance extents differ enough to make it distinct.
pub fn upright_rotations(item: &CatalogItem) -> Vec<RotationVariant> {
    let mut rotations = vec![RotationVariant {
        width: item.width(),
        height: item.height(),
        depth: item.depth(),
        yaw_degrees: 0.0,
        index: 0,
    }];

    if (item.width() - item.depth()).abs() > 1e-9 {
        rotations.push(RotationVariant {
            width: item.depth(),
            height: item.height(),
            depth: item.width(),
            yaw_degrees: 90.0,
            index: 1,
        });
    }

    rotations
}
