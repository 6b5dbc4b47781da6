use std::time::Instant;

use crate::error::LifeError;
use crate::input::BoardGeometry;
use crate::pacer::Pacer;
use crate::simulation::Grid;

/// Application state: the board plus everything that drives it.
///
/// One instance is owned by the event loop; ticks and pointer drags are
/// delivered as method calls.
pub struct App {
    grid: Grid,
    pacer: Pacer,
    toroidal: bool,
    geometry: BoardGeometry,
    generation: u64,
}

impl App {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            pacer: Pacer::new(),
            toroidal: false,
            geometry: BoardGeometry::default(),
            generation: 0,
        }
    }

    pub fn new_default() -> Self {
        Self::new(Grid::new_default())
    }

    pub fn with_geometry(mut self, geometry: BoardGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pacer(&self) -> &Pacer {
        &self.pacer
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// Generations computed since the board was last reset
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.pacer.is_running()
    }

    pub fn start(&mut self) {
        self.pacer.start();
        log::info!("Simulation started");
    }

    pub fn pause(&mut self) {
        self.pacer.pause();
        log::info!("Simulation paused at generation {}", self.generation);
    }

    pub fn resume(&mut self) {
        self.pacer.resume();
        log::info!("Simulation resumed");
    }

    /// Start/Pause/Resume control
    pub fn toggle_running(&mut self) {
        let state = self.pacer.toggle();
        log::info!("Simulation {:?}", state);
    }

    pub fn is_toroidal(&self) -> bool {
        self.toroidal
    }

    /// Takes effect on the next generation
    pub fn set_toroidal(&mut self, toroidal: bool) {
        self.toroidal = toroidal;
        log::info!("Toroidal edges: {}", if toroidal { "ON" } else { "OFF" });
    }

    pub fn toggle_toroidal(&mut self) {
        self.set_toroidal(!self.toroidal);
    }

    pub fn clear(&mut self) {
        self.halt();
        self.grid.clear();
        log::info!("Board cleared");
    }

    pub fn set_random(&mut self, seed: Option<u64>) {
        self.halt();
        self.grid.fill_random(seed);
        log::info!("Random fill: {} live cells", self.grid.population());
    }

    pub fn load_gosper(&mut self) -> Result<(), LifeError> {
        self.halt();
        self.grid.fill_gosper()?;
        log::info!("Loaded Gosper glider gun");
        Ok(())
    }

    /// Board resets stop the simulation and restart the generation count
    fn halt(&mut self) {
        self.pacer.pause();
        self.generation = 0;
    }

    pub fn set_generations_per_sec(&mut self, rate: f64) -> Result<(), LifeError> {
        self.pacer.set_generations_per_sec(rate)?;
        log::info!("Speed: {} generations per second", rate);
        Ok(())
    }

    /// Called once per external tick. Returns `true` if a generation was computed.
    pub fn on_tick(&mut self) -> bool {
        if !self.pacer.on_tick() {
            return false;
        }

        self.grid.evolve(self.toroidal);
        self.generation += 1;
        log::debug!(
            "Generation {}: {} live cells",
            self.generation,
            self.grid.population()
        );
        true
    }

    /// Toggle the cells between two corners. Ignored while running.
    /// Returns `true` if any cell changed.
    pub fn update_cell(
        &mut self,
        row_start: i64,
        col_start: i64,
        row_end: i64,
        col_end: i64,
    ) -> bool {
        if self.is_running() {
            return false;
        }
        self.grid.update_cell(row_start, col_start, row_end, col_end) > 0
    }

    /// Pointer press at `press` and release at `release`, both (x, y) in pixels.
    pub fn drag(&mut self, press: (i64, i64), release: (i64, i64)) -> bool {
        let from = self.geometry.cell_at(press.0, press.1);
        let to = self.geometry.cell_at(release.0, release.1);
        log::debug!("Drag {:?} -> {:?}", from, to);
        self.update_cell(from.row, from.col, to.row, to.col)
    }
}

/// Measures the achieved generation rate
pub struct GenerationMeter {
    last_update: Instant,
    generation_count: u32,
}

impl GenerationMeter {
    pub fn new() -> Self {
        Self {
            last_update: Instant::now(),
            generation_count: 0,
        }
    }

    /// Record one generation, returns Some(rate) every second
    pub fn tick(&mut self) -> Option<f64> {
        self.generation_count += 1;
        let elapsed = self.last_update.elapsed();

        if elapsed.as_secs_f64() >= 1.0 {
            let rate = self.generation_count as f64 / elapsed.as_secs_f64();
            self.generation_count = 0;
            self.last_update = Instant::now();
            Some(rate)
        } else {
            None
        }
    }
}

impl Default for GenerationMeter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::GLIDER;
    use std::time::Duration;

    fn small_app() -> App {
        let geometry = BoardGeometry::new(0, 0, 10).unwrap();
        App::new(Grid::new(20, 20).unwrap()).with_geometry(geometry)
    }

    fn run_ticks(app: &mut App, ticks: usize) -> usize {
        (0..ticks).filter(|_| app.on_tick()).count()
    }

    #[test]
    fn test_starts_paused() {
        let app = App::new_default();
        assert!(!app.is_running());
        assert!(!app.is_toroidal());
        assert_eq!(app.generation(), 0);
        assert_eq!(app.grid().population(), 0);
    }

    #[test]
    fn test_paused_ticks_do_not_evolve() {
        let mut app = small_app();
        app.update_cell(5, 5, 5, 7);
        run_ticks(&mut app, 500);
        assert_eq!(app.generation(), 0);
        assert_eq!(app.grid().population(), 3);
    }

    #[test]
    fn test_running_ticks_evolve() {
        let mut app = small_app();
        app.set_generations_per_sec(10.0).unwrap();
        // Blinker oscillates with period 2
        app.update_cell(5, 5, 5, 7);
        app.start();

        assert_eq!(run_ticks(&mut app, 5), 1);
        assert_eq!(app.grid().get(4, 6), Some(true));
        assert_eq!(app.grid().get(5, 5), Some(false));

        assert_eq!(run_ticks(&mut app, 5), 1);
        assert_eq!(app.grid().get(5, 5), Some(true));
        assert_eq!(app.generation(), 2);
    }

    #[test]
    fn test_edits_ignored_while_running() {
        let mut app = small_app();
        app.start();
        assert!(!app.update_cell(0, 0, 3, 3));
        assert!(!app.drag((0, 0), (35, 35)));
        assert_eq!(app.grid().population(), 0);

        app.toggle_running();
        assert!(app.drag((0, 0), (35, 35)));
        assert_eq!(app.grid().population(), 16);
    }

    #[test]
    fn test_drag_corner_order() {
        let mut a = small_app();
        let mut b = small_app();
        a.drag((15, 72), (48, 3));
        b.drag((48, 3), (15, 72));
        assert_eq!(a.grid().to_string(), b.grid().to_string());
        // rows 0..=7, cols 1..=4
        assert_eq!(a.grid().population(), 32);
    }

    #[test]
    fn test_drag_outside_board_is_clamped() {
        let mut app = small_app();
        assert!(app.drag((-50, -50), (5, 1000)));
        // rows 0..=19, col 0
        assert_eq!(app.grid().population(), 20);
    }

    #[test]
    fn test_board_reset_forces_pause() {
        let mut app = App::new_default();

        app.start();
        app.clear();
        assert!(!app.is_running());

        app.start();
        app.set_random(Some(5));
        assert!(!app.is_running());
        assert!(app.grid().population() > 0);

        app.resume();
        app.load_gosper().unwrap();
        assert!(!app.is_running());
        assert_eq!(app.grid().population(), 36);
    }

    #[test]
    fn test_load_gosper_failure_still_pauses() {
        let mut app = App::new(Grid::new(10, 10).unwrap());
        app.start();
        assert!(matches!(
            app.load_gosper(),
            Err(LifeError::PatternOutOfBounds { .. })
        ));
        assert!(!app.is_running());
    }

    #[test]
    fn test_rate_change() {
        let mut app = small_app();
        assert!(app.set_generations_per_sec(-1.0).is_err());
        assert_eq!(app.pacer().generations_per_sec(), 3.0);

        app.set_generations_per_sec(30.0).unwrap();
        assert_eq!(app.pacer().frame_count(), 0);
        assert_eq!(app.pacer().next_generation_frame(), 50.0 / 30.0);
    }

    #[test]
    fn test_toroidal_flag_applies_to_next_generation() {
        let mut grid = Grid::new(8, 8).unwrap();
        grid.stamp(&GLIDER, (5, 5)).unwrap();
        let mut app = App::new(grid);
        app.set_generations_per_sec(10.0).unwrap();
        app.start();

        app.toggle_toroidal();
        assert!(app.is_toroidal());
        // Glider touches the bottom-right edge; on a torus it keeps all 5 cells
        for _ in 0..8 {
            run_ticks(&mut app, 5);
        }
        assert_eq!(app.generation(), 8);
        assert_eq!(app.grid().population(), 5);
    }

    #[test]
    fn test_click_beside_board_changes_nothing() {
        let mut app = App::new_default();
        // Default board starts at x = 550; this is well to its left
        assert!(!app.drag((100, 300), (100, 300)));
        assert!(!app.drag((100, 300), (540, 500)));
        assert_eq!(app.grid().population(), 0);

        // A drag from off the board onto it is clipped
        assert!(app.drag((100, 300), (560, 300)));
        assert_eq!(app.grid().population(), 1);
    }

    #[test]
    fn test_generation_meter_reports_rate() {
        let mut meter = GenerationMeter::new();
        assert_eq!(meter.tick(), None);

        meter.last_update = Instant::now() - Duration::from_secs(2);
        meter.generation_count = 3;
        let rate = meter.tick().unwrap();
        // 4 generations over just over 2 seconds
        assert!(rate > 1.5 && rate <= 2.0, "rate {}", rate);

        // Window restarts after reporting
        assert_eq!(meter.tick(), None);
        assert_eq!(meter.generation_count, 1);
    }
}
