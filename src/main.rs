use std::thread;
use std::time::Duration;

use life_board::config::{
    CELL_PIXEL_SIZE, DEMO_GENERATIONS, GRID_HEIGHT, GRID_ORIGIN_X, GRID_ORIGIN_Y, GRID_WIDTH,
    TICK_INTERVAL_MS,
};
use life_board::{App, GenerationMeter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Initializing Game of Life...");
    log::info!("Grid size: {}x{}", GRID_WIDTH, GRID_HEIGHT);

    let mut app = App::new_default();
    app.load_gosper()?;

    // Paint a 3x3 block in the lower-right quadrant by dragging across it
    let corner = |row: i64, col: i64| {
        (
            GRID_ORIGIN_X + col * CELL_PIXEL_SIZE + CELL_PIXEL_SIZE / 2,
            GRID_ORIGIN_Y + row * CELL_PIXEL_SIZE + CELL_PIXEL_SIZE / 2,
        )
    };
    app.drag(corner(40, 40), corner(42, 42));

    app.set_generations_per_sec(10.0)?;
    app.set_toroidal(true);
    app.start();

    let mut meter = GenerationMeter::new();
    let tick = Duration::from_millis(TICK_INTERVAL_MS);

    while app.generation() < DEMO_GENERATIONS {
        if app.on_tick() {
            if let Some(rate) = meter.tick() {
                log::info!(
                    "Generation {} - {} live cells - {:.1} gen/s",
                    app.generation(),
                    app.grid().population(),
                    rate
                );
            }
        }
        thread::sleep(tick);
    }

    app.pause();
    print!("{}", app.grid());
    log::info!("Exiting...");
    Ok(())
}
