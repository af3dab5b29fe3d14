//! Voxel occupancy map of the cargo volume.

use nalgebra::Vector3;
use stowage_core::{CargoPosition, CargoVolume};

/// The voxel region a placement would occupy.
///
/// Bounds can only be obtained from [`OccupancyGrid::bounds`], which
/// guarantees every index lies inside the grid. Ends are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    start_lateral: usize,
    start_vertical: usize,
    start_advance: usize,
    end_lateral: usize,
    end_vertical: usize,
    end_advance: usize,
}

impl GridBounds {
    /// Cell range along the lateral axis.
    pub fn lateral_range(&self) -> std::ops::Range<usize> {
        self.start_lateral..self.end_lateral
    }

    /// Cell range along the vertical axis.
    pub fn vertical_range(&self) -> std::ops::Range<usize> {
        self.start_vertical..self.end_vertical
    }

    /// Cell range along the advance axis.
    pub fn advance_range(&self) -> std::ops::Range<usize> {
        self.start_advance..self.end_advance
    }

    /// First vertical cell index of the region.
    pub fn start_vertical(&self) -> usize {
        self.start_vertical
    }

    /// Returns true if the region's lower face rests on the cargo floor.
    pub fn on_floor(&self) -> bool {
        self.start_vertical == 0
    }
}

/// 3D voxel map recording which placed unit owns each cell.
///
/// Cells are cubes of `resolution` centimetres. Owners are indices into
/// the run's placed-unit list.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    resolution: f64,
    cells_lateral: usize,
    cells_vertical: usize,
    cells_advance: usize,
    cells: Vec<Option<usize>>,
}

impl OccupancyGrid {
    /// Creates an empty grid covering the given cargo volume.
    pub fn new(volume: &CargoVolume, resolution: f64) -> Self {
        let cells_lateral = (volume.width() / resolution).ceil() as usize;
        let cells_vertical = (volume.height() / resolution).ceil() as usize;
        let cells_advance = (volume.depth() / resolution).ceil() as usize;

        Self {
            resolution,
            cells_lateral,
            cells_vertical,
            cells_advance,
            cells: vec![None; cells_lateral * cells_vertical * cells_advance],
        }
    }

    /// Returns the linear resolution in centimetres per cell.
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    fn index(&self, lateral: usize, vertical: usize, advance: usize) -> usize {
        (lateral * self.cells_vertical + vertical) * self.cells_advance + advance
    }

    /// Computes the voxel region for a box of `dimensions` whose minimum
    /// corner sits at `position`.
    ///
    /// Returns `None` when any voxel index would fall outside the grid,
    /// so a [`GridBounds`] always addresses valid cells.
    pub fn bounds(
        &self,
        position: &CargoPosition,
        dimensions: &Vector3<f64>,
    ) -> Option<GridBounds> {
        if position.lateral < 0.0 || position.vertical < 0.0 || position.advance < 0.0 {
            return None;
        }

        let start_lateral = (position.lateral / self.resolution).floor() as usize;
        let start_vertical = (position.vertical / self.resolution).floor() as usize;
        let start_advance = (position.advance / self.resolution).floor() as usize;

        let end_lateral = start_lateral + (dimensions.x / self.resolution).ceil() as usize;
        let end_vertical = start_vertical + (dimensions.y / self.resolution).ceil() as usize;
        let end_advance = start_advance + (dimensions.z / self.resolution).ceil() as usize;

        if end_lateral > self.cells_lateral
            || end_vertical > self.cells_vertical
            || end_advance > self.cells_advance
        {
            return None;
        }

        Some(GridBounds {
            start_lateral,
            start_vertical,
            start_advance,
            end_lateral,
            end_vertical,
            end_advance,
        })
    }

    /// Returns true iff every voxel in `bounds` is unclaimed.
    pub fn is_free(&self, bounds: &GridBounds) -> bool {
        for lateral in bounds.lateral_range() {
            for vertical in bounds.vertical_range() {
                for advance in bounds.advance_range() {
                    if self.cells[self.index(lateral, vertical, advance)].is_some() {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Claims every voxel in `bounds` for `owner`.
    ///
    /// Must only be called after a placement has been accepted.
    pub fn occupy(&mut self, bounds: &GridBounds, owner: usize) {
        for lateral in bounds.lateral_range() {
            for vertical in bounds.vertical_range() {
                for advance in bounds.advance_range() {
                    let index = self.index(lateral, vertical, advance);
                    self.cells[index] = Some(owner);
                }
            }
        }
    }

    /// Returns the owner of the voxel directly below `(lateral, advance)`
    /// at height `vertical`, or `None` for floor cells and empty space.
    pub fn owner_below(&self, lateral: usize, advance: usize, vertical: usize) -> Option<usize> {
        if vertical == 0 {
            return None;
        }
        self.cells[self.index(lateral, vertical - 1, advance)]
    }
}
