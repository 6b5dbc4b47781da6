pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod pacer;
pub mod simulation;

pub use app::{App, GenerationMeter};
pub use error::LifeError;
pub use input::BoardGeometry;
pub use pacer::{Pacer, RunState};
pub use simulation::{CellPos, CellRect, Grid};
