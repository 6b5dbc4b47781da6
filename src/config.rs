/// Grid dimensions (50x50 board)
pub const GRID_WIDTH: usize = 50;
pub const GRID_HEIGHT: usize = 50;

// ============================================
// Pacing
// ============================================

/// Period of the external tick source in milliseconds
pub const TICK_INTERVAL_MS: u64 = 20;

/// Notional ticks per second (1000 / TICK_INTERVAL_MS)
pub const TICKS_PER_SECOND: f64 = 50.0;

/// Frame counter wraps into [1, FRAME_WRAP]
pub const FRAME_WRAP: u32 = 1000;

/// Generations per second on startup
pub const DEFAULT_GENERATIONS_PER_SEC: f64 = 3.0;

/// Rates offered by the speed selector. Any positive rate is accepted.
pub const GENERATION_RATES: [f64; 5] = [0.5, 1.0, 3.0, 10.0, 30.0];

// ============================================
// Board seeding
// ============================================

/// Probability that a cell starts alive on random fill
pub const DEFAULT_FILL_PROBABILITY: f64 = 0.5;

/// (row, col) of the top-left corner of the Gosper gun's bounding box
pub const GOSPER_ANCHOR: (usize, usize) = (1, 1);

// ============================================
// Pointer geometry
// ============================================

/// Pixel position of the top-left corner of cell (0, 0)
pub const GRID_ORIGIN_X: i64 = 550;
pub const GRID_ORIGIN_Y: i64 = 20;

/// Side length of one cell in pixels
pub const CELL_PIXEL_SIZE: i64 = 14;

// ============================================
// Demo driver
// ============================================

/// Generations the headless driver runs before printing the final board
pub const DEMO_GENERATIONS: u64 = 60;
