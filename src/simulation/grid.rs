use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{DEFAULT_FILL_PROBABILITY, GOSPER_ANCHOR, GRID_HEIGHT, GRID_WIDTH};
use crate::error::LifeError;
use crate::simulation::cell::{CellPos, CellRect};
use crate::simulation::patterns::{Pattern, GOSPER_GLIDER_GUN};

/// Fixed-size Game of Life board.
///
/// Cells are stored row-major: `cells[row * width + col]`.
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
    fill_probability: f64,
}

impl Grid {
    /// Create a new grid with every cell dead
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        let cell_count = width
            .checked_mul(height)
            .filter(|&n| n > 0)
            .ok_or(LifeError::InvalidDimension { width, height })?;

        Ok(Self {
            cells: vec![false; cell_count],
            width,
            height,
            fill_probability: DEFAULT_FILL_PROBABILITY,
        })
    }

    /// Create a grid with default dimensions
    pub fn new_default() -> Self {
        Self {
            cells: vec![false; GRID_WIDTH * GRID_HEIGHT],
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            fill_probability: DEFAULT_FILL_PROBABILITY,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// State of (row, col), `None` outside the board
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        (row < self.height && col < self.width).then(|| self.cells[row * self.width + col])
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Read-only row-major traversal yielding `(row, col, alive)`
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &alive)| (i / width, i % width, alive))
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn fill_probability(&self) -> f64 {
        self.fill_probability
    }

    pub fn set_fill_probability(&mut self, probability: f64) -> Result<(), LifeError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(LifeError::InvalidProbability(probability));
        }
        self.fill_probability = probability;
        Ok(())
    }

    /// Make every cell independently alive with `fill_probability`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn fill_random(&mut self, seed: Option<u64>) {
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let p = self.fill_probability;
        for cell in &mut self.cells {
            *cell = rng.gen_bool(p);
        }
        log::debug!("Random fill (p = {}): {} live cells", p, self.population());
    }

    /// Clear the board and place the Gosper glider gun at `GOSPER_ANCHOR`
    pub fn fill_gosper(&mut self) -> Result<(), LifeError> {
        self.check_fits(&GOSPER_GLIDER_GUN, GOSPER_ANCHOR)?;
        self.clear();
        self.stamp(&GOSPER_GLIDER_GUN, GOSPER_ANCHOR)
    }

    /// Set the pattern's live cells at `anchor` (row, col) without clearing.
    /// Nothing is written if the pattern does not fit.
    pub fn stamp(&mut self, pattern: &Pattern, anchor: (usize, usize)) -> Result<(), LifeError> {
        self.check_fits(pattern, anchor)?;
        let (row0, col0) = anchor;
        for &(row, col) in pattern.cells {
            self.cells[(row0 + row) * self.width + col0 + col] = true;
        }
        log::debug!("Stamped {} at {:?}", pattern.name, anchor);
        Ok(())
    }

    fn check_fits(&self, pattern: &Pattern, anchor: (usize, usize)) -> Result<(), LifeError> {
        let (row0, col0) = anchor;
        if row0 + pattern.height > self.height || col0 + pattern.width > self.width {
            return Err(LifeError::PatternOutOfBounds {
                pattern_height: row0 + pattern.height,
                pattern_width: col0 + pattern.width,
                grid_height: self.height,
                grid_width: self.width,
            });
        }
        Ok(())
    }

    /// Toggle every cell in the rectangle spanned by two corners (inclusive,
    /// any order). The rectangle is clipped to the board; one lying entirely
    /// off the board toggles nothing. Returns the number of cells toggled.
    pub fn update_cell(
        &mut self,
        row_start: i64,
        col_start: i64,
        row_end: i64,
        col_end: i64,
    ) -> usize {
        let Some(rect) = CellRect::from_corners(
            CellPos::new(row_start, col_start),
            CellPos::new(row_end, col_end),
            self.width,
            self.height,
        ) else {
            return 0;
        };
        for (row, col) in rect.positions() {
            let cell = &mut self.cells[row * self.width + col];
            *cell = !*cell;
        }
        rect.area()
    }

    /// Compute the next generation (B3/S23) and swap it in.
    ///
    /// With `toroidal` the edges wrap; otherwise cells beyond the border count as dead.
    pub fn evolve(&mut self, toroidal: bool) {
        let next: Vec<bool> = (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| (row, col)))
            .map(|(row, col)| {
                let alive = self.cells[row * self.width + col];
                let neighbors = self.count_neighbors(row, col, toroidal);
                matches!((alive, neighbors), (true, 2) | (_, 3))
            })
            .collect();

        self.cells = next;
    }

    fn count_neighbors(&self, row: usize, col: usize, toroidal: bool) -> u8 {
        let mut count = 0;

        for i_offset in -1..=1 {
            for j_offset in -1..=1 {
                if i_offset == 0 && j_offset == 0 {
                    continue;
                }

                let r = row as isize + i_offset;
                let c = col as isize + j_offset;
                let (r, c) = if toroidal {
                    (
                        r.rem_euclid(self.height as isize),
                        c.rem_euclid(self.width as isize),
                    )
                } else if r < 0 || c < 0 || r >= self.height as isize || c >= self.width as isize {
                    continue;
                } else {
                    (r, c)
                };

                if self.cells[r as usize * self.width + c as usize] {
                    count += 1;
                }
            }
        }

        count
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            let line: String = row.iter().map(|&alive| if alive { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
