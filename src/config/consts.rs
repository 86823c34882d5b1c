// src/config/consts.rs
use std::ops::Range;

// Net config
pub const SOURCE_URL: &str = "https://nssdc.gsfc.nasa.gov/planetary/factsheet/planet_table_ratio.html";
pub const USER_AGENT: &str = concat!("planet_facts/", env!("CARGO_PKG_VERSION"));

// Source table layout (one known page)
pub const PLANET_COUNT: usize = 10;
pub const HEADER_ROW: usize = 0;
pub const DATA_ROWS: Range<usize> = 1..19;

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "planets";

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 700.0;
