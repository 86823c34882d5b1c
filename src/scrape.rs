// src/scrape.rs
//! The explicit pipeline: fetch → locate table → reshape.
//! Nothing runs until a front end calls in.

use crate::{
    config::options::SourceOptions,
    core::net::{HttpFetcher, TableFetcher},
    data::PlanetTable,
    error::Result,
    progress::{Progress, Stage},
    specs::planets,
};

/// Fetch over HTTP and build the table.
pub fn run(source: &SourceOptions, progress: Option<&mut dyn Progress>) -> Result<PlanetTable> {
    let fetcher = HttpFetcher::new()?;
    collect_planet_table(&fetcher, source, progress)
}

/// Run the pipeline against any fetcher. A failed fetch stops here; the
/// parser never sees the body of a non-success response.
pub fn collect_planet_table(
    fetcher: &dyn TableFetcher,
    source: &SourceOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<PlanetTable> {
    let url = source.url.as_str();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(Stage::COUNT);
        p.log(&format!("Fetching {url}…"));
    }
    logf!("Fetch: Begin {url}");

    let markup = fetcher.fetch(url)?.into_markup(url).inspect_err(|e| {
        loge!("Fetch: {e}");
    })?;
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done(Stage::Fetch);
        p.log("Parsing…");
    }

    let raw = planets::locate_table(&markup)?;
    logd!("Parse: table with {} rows", raw.len());
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done(Stage::Parse);
    }

    let table = planets::reshape(&raw, &source.layout).inspect_err(|e| {
        loge!("Reshape: {e}");
    })?;
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done(Stage::Reshape);
        p.finish();
    }

    logf!(
        "Fetch: OK planets={}, properties={}",
        table.planet_count(),
        table.property_count()
    );
    Ok(table)
}
