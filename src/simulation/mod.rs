mod cell;
mod grid;
mod patterns;

pub use cell::{CellPos, CellRect};
pub use grid::Grid;
pub use patterns::{Pattern, GLIDER, GOSPER_GLIDER_GUN};
