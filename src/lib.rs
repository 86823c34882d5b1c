// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod data;
pub mod error;
pub mod file;
pub mod gui;
pub mod progress;
pub mod scrape;

#[cfg(feature = "cli")]
pub mod cli;

#[doc(hidden)]
pub use tracing;

pub use data::{Fact, Planet, PlanetRecords, PlanetSet, PlanetTable, PropertyRow, RawTable};
pub use error::{Error, Result};
