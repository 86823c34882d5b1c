// tests/export.rs
use std::fs;

use planet_facts::config::options::{ExportFormat, ExportOptions, View};
use planet_facts::file::{export_string, export_table};
use planet_facts::specs::planets::{parse_planet_table, TableLayout};
use planet_facts::PlanetTable;

fn table() -> PlanetTable {
    let html = "<table>\
        <tr><td></td><td>MARS</td><td>EARTH</td></tr>\
        <tr><td>Mass</td><td>0.107</td><td>1</td></tr>\
        <tr><td>Ring System?</td><td>No</td><td>No</td></tr>\
        <tr><td>Note</td><td>cold, red</td><td>home</td></tr>\
        </table>";
    parse_planet_table(html, &TableLayout::new(2, 3)).unwrap()
}

#[test]
fn property_view_csv() {
    let opts = ExportOptions::default();
    assert_eq!(
        export_string(&opts, &table()),
        "Property,MARS,EARTH\nMass,0.107,1\nRing System?,No,No\nNote,\"cold, red\",home\n"
    );
}

#[test]
fn planet_view_tsv_without_headers() {
    let mut opts = ExportOptions::default();
    opts.view = View::Planet;
    opts.format = ExportFormat::Tsv;
    opts.include_headers = false;

    assert_eq!(
        export_string(&opts, &table()),
        "MARS\t0.107\tNo\tcold, red\nEARTH\t1\tNo\thome\n"
    );
}

#[test]
fn export_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nested").join("deeper").join("facts.csv");

    let mut opts = ExportOptions::default();
    opts.set_path(&target);

    let written = export_table(&opts, &table()).unwrap();
    assert_eq!(written, target);

    let text = fs::read_to_string(&written).unwrap();
    assert!(text.starts_with("Property,MARS,EARTH\n"));
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn user_extension_survives_format_switch() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("facts.txt");

    let mut opts = ExportOptions::default();
    opts.set_path(&target);
    opts.format = ExportFormat::Tsv;

    let written = export_table(&opts, &table()).unwrap();
    assert!(written.to_string_lossy().ends_with("facts.txt"));
    assert!(fs::read_to_string(&written).unwrap().contains("Mass\t0.107\t1"));
}
