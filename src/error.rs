use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LifeError {
    InvalidDimension {
        width: usize,
        height: usize,
    },
    PatternOutOfBounds {
        pattern_height: usize,
        pattern_width: usize,
        grid_height: usize,
        grid_width: usize,
    },
    InvalidRate(f64),
    InvalidProbability(f64),
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifeError::InvalidDimension { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            LifeError::PatternOutOfBounds {
                pattern_height,
                pattern_width,
                grid_height,
                grid_width,
            } => write!(
                f,
                "pattern ({pattern_height}x{pattern_width} at anchor) does not fit in {grid_height}x{grid_width} grid"
            ),
            LifeError::InvalidRate(rate) => {
                write!(f, "generations per second must be positive and finite, got {rate}")
            }
            LifeError::InvalidProbability(p) => {
                write!(f, "fill probability must be within [0,1], got {p}")
            }
        }
    }
}

impl std::error::Error for LifeError {}
