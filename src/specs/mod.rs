//! # Scraping "specs" module
//!
//! Page-specific extraction rules. A spec encodes *where the ground truth lives
//! in the HTML* and *what shape it must have*, and nothing else.
//!
//! ## What lives here
//! - **Pure parsing** of already-fetched markup (no I/O).
//! - **Layout knowledge** for the source page: which row is the header, which
//!   rows carry data, how many planet columns to expect.
//! - **Shape validation**: any drift from the known layout is a hard
//!   `Error::ShapeMismatch`, never a best-effort guess.
//!
//! ## What does **not** live here
//! - Networking (`core::net`), progress reporting (`scrape`), GUI or export
//!   formatting (`gui`, `file`).
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → scrape::collect_planet_table → core::net fetch
//!                                          ↘ specs::planets::locate_table
//!                                          ↘ specs::planets::reshape
//! ```
//!
//! Specs are tested offline against synthetic markup and a saved copy of the page.
pub mod planets;
