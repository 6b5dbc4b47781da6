use crate::config::{DEFAULT_GENERATIONS_PER_SEC, FRAME_WRAP, TICKS_PER_SECOND};
use crate::error::LifeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Paused,
    Running,
}

/// Converts a fixed tick cadence into generation steps.
///
/// `frame_count` cycles through `[1, FRAME_WRAP]`; a generation is due when it
/// reaches the integer part of `next_generation_frame`, which then advances by
/// `TICKS_PER_SECOND / generations_per_sec` and wraps the same way.
pub struct Pacer {
    state: RunState,
    frame_count: u32,
    generations_per_sec: f64,
    next_generation_frame: f64,
}

impl Pacer {
    pub fn new() -> Self {
        Self {
            state: RunState::Paused,
            frame_count: 0,
            generations_per_sec: DEFAULT_GENERATIONS_PER_SEC,
            next_generation_frame: TICKS_PER_SECOND / DEFAULT_GENERATIONS_PER_SEC,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn start(&mut self) {
        self.state = RunState::Running;
    }

    pub fn resume(&mut self) {
        self.state = RunState::Running;
    }

    pub fn pause(&mut self) {
        self.state = RunState::Paused;
    }

    /// Flip between Paused and Running
    pub fn toggle(&mut self) -> RunState {
        self.state = match self.state {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        };
        self.state
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn generations_per_sec(&self) -> f64 {
        self.generations_per_sec
    }

    pub fn next_generation_frame(&self) -> f64 {
        self.next_generation_frame
    }

    /// Change the rate and restart the phase from frame 0.
    pub fn set_generations_per_sec(&mut self, rate: f64) -> Result<(), LifeError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(LifeError::InvalidRate(rate));
        }
        self.frame_count = 0;
        self.generations_per_sec = rate;
        self.next_generation_frame = TICKS_PER_SECOND / rate;
        Ok(())
    }

    /// Advance one tick. Returns `true` when a generation is due and the
    /// pacer is running.
    ///
    /// The threshold advances on schedule even while paused, so resuming
    /// keeps the cadence.
    pub fn on_tick(&mut self) -> bool {
        self.frame_count = self.frame_count % FRAME_WRAP + 1;

        if self.frame_count != self.next_generation_frame.floor() as u32 {
            return false;
        }

        self.next_generation_frame += TICKS_PER_SECOND / self.generations_per_sec;
        // Deliberately >= rather than >: a threshold of exactly FRAME_WRAP + 1
        // is never reached by frame_count and would stall the pacer
        if self.next_generation_frame >= (FRAME_WRAP + 1) as f64 {
            self.next_generation_frame -= FRAME_WRAP as f64;
        }

        self.is_running()
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new()
    }
}
