use crate::config::{CELL_PIXEL_SIZE, GRID_ORIGIN_X, GRID_ORIGIN_Y};
use crate::simulation::CellPos;

/// Maps pixel coordinates of pointer events onto board cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardGeometry {
    /// Pixel position of the top-left corner of cell (0, 0)
    pub origin_x: i64,
    pub origin_y: i64,
    /// Cell side in pixels, always positive
    cell_size: i64,
}

impl BoardGeometry {
    /// Returns `None` if `cell_size` is not positive
    pub fn new(origin_x: i64, origin_y: i64, cell_size: i64) -> Option<Self> {
        (cell_size > 0).then_some(Self {
            origin_x,
            origin_y,
            cell_size,
        })
    }

    pub fn cell_size(&self) -> i64 {
        self.cell_size
    }

    /// Cell under pixel (x, y). Points left of or above the board map to
    /// negative indices; the grid clamps them.
    pub fn cell_at(&self, x: i64, y: i64) -> CellPos {
        CellPos::new(
            (y - self.origin_y).div_euclid(self.cell_size),
            (x - self.origin_x).div_euclid(self.cell_size),
        )
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            origin_x: GRID_ORIGIN_X,
            origin_y: GRID_ORIGIN_Y,
            cell_size: CELL_PIXEL_SIZE,
        }
    }
}
