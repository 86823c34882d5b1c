// tests/pipeline.rs
use std::cell::Cell;

use planet_facts::config::options::SourceOptions;
use planet_facts::core::net::{FileFetcher, Fetched, TableFetcher};
use planet_facts::progress::{Progress, Stage};
use planet_facts::scrape::collect_planet_table;
use planet_facts::specs::planets::TableLayout;
use planet_facts::{Error, Result};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/planet_table_ratio.html");

/// Serves a canned response and counts calls.
struct Canned {
    resp: Fetched,
    calls: Cell<usize>,
}

impl Canned {
    fn new(resp: Fetched) -> Self {
        Self { resp, calls: Cell::new(0) }
    }
}

impl TableFetcher for Canned {
    fn fetch(&self, _url: &str) -> Result<Fetched> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.resp.clone())
    }
}

#[derive(Default)]
struct Recorder {
    total: usize,
    stages: Vec<Stage>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn stage_done(&mut self, stage: Stage) { self.stages.push(stage); }
    fn finish(&mut self) { self.finished = true; }
}

fn source(url: &str) -> SourceOptions {
    SourceOptions { url: url.to_string(), layout: TableLayout::default() }
}

#[test]
fn not_found_status_never_reaches_the_parser() {
    // the body would parse fine; it must never be looked at
    let fetcher = Canned::new(Fetched::Failure(404));
    let mut rec = Recorder::default();

    let err = collect_planet_table(&fetcher, &source("http://localhost/t.html"), Some(&mut rec)).unwrap_err();

    match err {
        Error::FetchFailure { url, status } => {
            assert_eq!(status, 404);
            assert_eq!(url, "http://localhost/t.html");
        }
        other => panic!("expected FetchFailure, got {other:?}"),
    }
    assert_eq!(fetcher.calls.get(), 1);
    assert!(rec.stages.is_empty());
    assert!(!rec.finished);
}

#[test]
fn page_without_table_is_not_found() {
    let fetcher = Canned::new(Fetched::Success("<html><body>maintenance</body></html>".into()));
    let err = collect_planet_table(&fetcher, &source("u"), None).unwrap_err();
    assert!(matches!(err, Error::NotFound));
}

#[test]
fn saved_page_runs_every_stage() {
    let fetcher = FileFetcher::new(FIXTURE);
    let mut rec = Recorder::default();

    let t = collect_planet_table(&fetcher, &source("ignored"), Some(&mut rec)).unwrap();

    assert_eq!(t.planet_count(), 10);
    assert_eq!(t.property_count(), 18);
    assert_eq!(rec.total, Stage::COUNT);
    assert_eq!(rec.stages, [Stage::Fetch, Stage::Parse, Stage::Reshape]);
    assert!(rec.finished);
}

#[test]
fn shape_errors_surface_without_partial_results() {
    let html = "<table><tr><td></td><td>Mercury</td><td>Venus</td></tr></table>";
    let fetcher = Canned::new(Fetched::Success(html.into()));
    let mut rec = Recorder::default();

    let err = collect_planet_table(&fetcher, &source("u"), Some(&mut rec)).unwrap_err();

    assert!(matches!(err, Error::ShapeMismatch { .. }));
    assert!(err.to_string().contains("expected 10 planet cells"));
    assert_eq!(rec.stages, [Stage::Fetch, Stage::Parse]);
    assert!(!rec.finished);
}
