use std::ops::RangeInclusive;

/// A cell coordinate in signed space. May lie outside the board; it is
/// clamped only when turned into a `CellRect`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellPos {
    pub row: i64,
    pub col: i64,
}

impl CellPos {
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

/// Inclusive rectangle of cells, normalized and intersected with a board.
///
/// Layout matches the board: rows index `0..height`, cols index `0..width`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub rows: RangeInclusive<usize>,
    pub cols: RangeInclusive<usize>,
}

impl CellRect {
    /// Build the rectangle spanned by two opposite corners, in any order,
    /// clipped to `height x width`. Returns `None` when it misses the board.
    pub fn from_corners(a: CellPos, b: CellPos, width: usize, height: usize) -> Option<Self> {
        let (r0, r1) = (a.row.min(b.row), a.row.max(b.row));
        let (c0, c1) = (a.col.min(b.col), a.col.max(b.col));

        if r1 < 0 || c1 < 0 || r0 >= height as i64 || c0 >= width as i64 {
            return None;
        }

        Some(Self {
            rows: clamp_index(r0, height)..=clamp_index(r1, height),
            cols: clamp_index(c0, width)..=clamp_index(c1, width),
        })
    }

    /// Number of cells covered
    pub fn area(&self) -> usize {
        (self.rows.end() - self.rows.start() + 1) * (self.cols.end() - self.cols.start() + 1)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.rows.contains(&row) && self.cols.contains(&col)
    }

    /// Row-major iteration over every covered (row, col)
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows
            .clone()
            .flat_map(move |row| self.cols.clone().map(move |col| (row, col)))
    }
}

/// Clamp a signed index into `[0, len)`. `len` must be positive.
fn clamp_index(value: i64, len: usize) -> usize {
    let max = len.saturating_sub(1) as i64;
    value.clamp(0, max) as usize
}
