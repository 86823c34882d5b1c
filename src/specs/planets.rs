//! Scraping *spec* for the NASA planetary fact sheet (ratio to Earth values).
//!
//! The page is authored property-first: row 0 names the planets, each following
//! row is one property with a label cell and one value cell per planet, and a
//! trailing row repeats the planet names. We read it into both a property-major
//! list and a planet-major mapping.
//!
//! Layout (`TableLayout::default()`):
//! - header row 0, planet cells `1..=10` (cell 0 is the empty label column)
//! - data rows `1..19`, label in cell 0, values in cells `1..=10`
//! - anything after row 18 is ignored
//!
//! Every shape check is fatal. Silently shifting a column would pair labels
//! with the wrong values in every record.

use std::{collections::HashSet, ops::Range};

use crate::config::consts::{DATA_ROWS, HEADER_ROW, PLANET_COUNT};
use crate::core::{html, sanitize::normalize_ws};
use crate::data::{PlanetRecords, PlanetSet, PlanetTable, PropertyRow, RawTable};
use crate::error::{Error, Result};

/// Fixed offsets of the known page. Other values exist for synthetic tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableLayout {
    pub planet_count: usize,
    pub header_row: usize,
    pub data_rows: Range<usize>,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            planet_count: PLANET_COUNT,
            header_row: HEADER_ROW,
            data_rows: DATA_ROWS,
        }
    }
}

impl TableLayout {
    /// Header in row 0, `properties` data rows right below it.
    pub fn new(planet_count: usize, properties: usize) -> Self {
        Self {
            planet_count,
            header_row: 0,
            data_rows: 1..1 + properties,
        }
    }
}

/// First `<table>` of the markup as a raw grid.
pub fn locate_table(markup: &str) -> Result<RawTable> {
    html::first_table_grid(markup)
        .map(RawTable::new)
        .ok_or(Error::NotFound)
}

/// Planet names from the header row, label column skipped.
pub fn extract_planet_set(raw: &RawTable, layout: &TableLayout) -> Result<PlanetSet> {
    let want = layout.planet_count;
    let header = raw.row(layout.header_row).ok_or_else(|| {
        Error::shape(
            format!("header row {}", layout.header_row),
            "a header row",
            format!("a table with {} rows", raw.len()),
        )
    })?;

    let found = header.len().saturating_sub(1);
    if found < want {
        return Err(Error::shape(
            format!("header row {}", layout.header_row),
            format!("{want} planet cells after the label cell"),
            found,
        ));
    }

    let names: Vec<String> = header.iter().skip(1).take(want).map(|c| normalize_ws(c)).collect();

    let mut seen = HashSet::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        let what = format!("header cell {}", i + 1);
        if name.is_empty() {
            return Err(Error::shape(what, "a planet name", "an empty cell"));
        }
        if !seen.insert(name.as_str()) {
            return Err(Error::shape(what, "a distinct planet name", format!("duplicate {name:?}")));
        }
    }

    Ok(PlanetSet::new(names))
}

/// Property rows in document order, one value per planet.
pub fn extract_property_rows(
    raw: &RawTable,
    layout: &TableLayout,
    planets: &PlanetSet,
) -> Result<Vec<PropertyRow>> {
    let want = planets.len();
    let mut out = Vec::with_capacity(layout.data_rows.len());

    for r in layout.data_rows.clone() {
        let row = raw.row(r).ok_or_else(|| {
            Error::shape(
                format!("data row {r}"),
                format!("at least {} rows", layout.data_rows.end),
                format!("{} rows", raw.len()),
            )
        })?;

        let label = row.first().map(|c| normalize_ws(c)).unwrap_or_default();
        if row.len() < want + 1 {
            return Err(Error::shape(
                format!("data row {r} ({label:?})"),
                format!("label + {want} value cells"),
                format!("{} cells", row.len()),
            ));
        }

        let values: Vec<String> = row.iter().skip(1).take(want).map(|c| normalize_ws(c)).collect();

        // A missing property row pulls the trailing planet-name row into range
        if label.is_empty() {
            let found = if values.as_slice() == planets.names() {
                s!("the repeated planet header")
            } else {
                s!("an empty label cell")
            };
            return Err(Error::shape(format!("data row {r}"), "a property label", found));
        }

        out.push(PropertyRow::new(label, values));
    }

    Ok(out)
}

/// Transpose: column `i` of the property-major grid becomes planet `i`'s values.
/// Rows built against a different planet set are a `ShapeMismatch`.
pub fn build_planet_records(planets: &PlanetSet, rows: &[PropertyRow]) -> Result<PlanetRecords> {
    if let Some(row) = rows.iter().find(|row| row.values().len() != planets.len()) {
        return Err(Error::shape(
            format!("property row {:?}", row.label()),
            format!("{} values", planets.len()),
            row.values().len(),
        ));
    }

    let mut records = PlanetRecords::with_capacity(planets.len());
    for (i, name) in planets.iter().enumerate() {
        let values = rows.iter().map(|row| row.values()[i].clone()).collect();
        records.push(s!(name), values);
    }
    Ok(records)
}

/// RawTable → both views.
pub fn reshape(raw: &RawTable, layout: &TableLayout) -> Result<PlanetTable> {
    let planets = extract_planet_set(raw, layout)?;
    let rows = extract_property_rows(raw, layout, &planets)?;
    let records = build_planet_records(&planets, &rows)?;
    logd!("Reshape: {} planets × {} properties", planets.len(), rows.len());
    Ok(PlanetTable::new(planets, rows, records))
}

/// Markup → both views.
pub fn parse_planet_table(markup: &str, layout: &TableLayout) -> Result<PlanetTable> {
    let raw = locate_table(markup)?;
    reshape(&raw, layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_html(rows: &[&[&str]]) -> String {
        let mut html = s!("<html><body><table>\n");
        for row in rows {
            html.push_str("<tr>");
            for cell in *row {
                html.push_str(&format!("<td> {cell} </td>"));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</table></body></html>");
        html
    }

    fn three_planets() -> String {
        table_html(&[
            &["", "Mercury", "Venus", "Earth"],
            &["Mass ratio", "0.055", "0.815", "1.0"],
            &["Diameter ratio", "0.383", "0.949", "1.0"],
        ])
    }

    #[test]
    fn three_planet_scenario() {
        let t = parse_planet_table(&three_planets(), &TableLayout::new(3, 2)).unwrap();

        assert_eq!(t.planet_names(), ["Mercury", "Venus", "Earth"]);
        assert_eq!(t.record("Venus").unwrap(), ["0.815", "0.949"]);

        let first = &t.property_rows()[0];
        assert_eq!(first.label(), "Mass ratio");
        assert_eq!(first.values(), ["0.055", "0.815", "1.0"]);
    }

    #[test]
    fn no_table_is_not_found() {
        let err = parse_planet_table("<html><p>moved</p></html>", &TableLayout::default()).unwrap_err();
        assert!(matches!(err, Error::NotFound));
    }

    #[test]
    fn nine_header_cells_is_shape_mismatch() {
        let mut header = vec![""];
        header.extend(["A", "B", "C", "D", "E", "F", "G", "H", "I"]);
        let html = table_html(&[header.as_slice()]);
        let raw = locate_table(&html).unwrap();
        match extract_planet_set(&raw, &TableLayout::default()) {
            Err(Error::ShapeMismatch { what, found, .. }) => {
                assert_eq!(what, "header row 0");
                assert_eq!(found, "9");
            }
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn extra_header_cells_are_ignored() {
        let html = table_html(&[
            &["", "Mercury", "Venus", "Earth", "Notes"],
            &["Mass ratio", "0.055", "0.815", "1.0"],
        ]);
        let t = parse_planet_table(&html, &TableLayout::new(3, 1)).unwrap();
        assert_eq!(t.planet_names(), ["Mercury", "Venus", "Earth"]);
    }

    #[test]
    fn empty_or_duplicate_planet_names_are_rejected() {
        let empty = table_html(&[&["", "Mercury", "", "Earth"]]);
        let raw = locate_table(&empty).unwrap();
        assert!(matches!(
            extract_planet_set(&raw, &TableLayout::new(3, 0)),
            Err(Error::ShapeMismatch { .. })
        ));

        let dup = table_html(&[&["", "Mars", "Mars", "Earth"]]);
        let raw = locate_table(&dup).unwrap();
        let err = extract_planet_set(&raw, &TableLayout::new(3, 0)).unwrap_err();
        assert!(err.to_string().contains("duplicate \"Mars\""));
    }

    #[test]
    fn short_data_row_names_row_and_label() {
        let html = table_html(&[
            &["", "Mercury", "Venus", "Earth"],
            &["Mass ratio", "0.055", "0.815", "1.0"],
            &["Diameter ratio", "0.383", "0.949"],
        ]);
        let err = parse_planet_table(&html, &TableLayout::new(3, 2)).unwrap_err();
        match err {
            Error::ShapeMismatch { what, expected, found } => {
                assert_eq!(what, "data row 2 (\"Diameter ratio\")");
                assert_eq!(expected, "label + 3 value cells");
                assert_eq!(found, "3 cells");
            }
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn table_shorter_than_row_range_fails() {
        let err = parse_planet_table(&three_planets(), &TableLayout::new(3, 5)).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { ref what, .. } if what == "data row 3"));
    }

    #[test]
    fn trailing_rows_outside_range_are_skipped() {
        let html = table_html(&[
            &["", "Mercury", "Venus", "Earth"],
            &["Mass ratio", "0.055", "0.815", "1.0"],
            &["", "MERCURY", "VENUS", "EARTH"],
        ]);
        let t = parse_planet_table(&html, &TableLayout::new(3, 1)).unwrap();
        assert_eq!(t.property_count(), 1);
        assert_eq!(t.record("Earth").unwrap(), ["1.0"]);
    }

    #[test]
    fn cells_are_trimmed_and_collapsed() {
        let html = "<table>\
            <tr><td></td><td>\n <b>MARS</b>&nbsp;</td></tr>\
            <tr><td><a href='#m'>Mass</a>\n ratio</td><td> 0.107 </td></tr>\
            </table>";
        let t = parse_planet_table(html, &TableLayout::new(1, 1)).unwrap();
        assert_eq!(t.planet_names(), ["MARS"]);
        assert_eq!(t.property_rows()[0].label(), "Mass ratio");
        assert_eq!(t.record("MARS").unwrap(), ["0.107"]);
    }

    #[test]
    fn empty_label_row_is_rejected() {
        let html = table_html(&[
            &["", "Mercury", "Venus", "Earth"],
            &["Mass ratio", "0.055", "0.815", "1.0"],
            &["", "0.383", "0.949", "1.0"],
        ]);
        let err = parse_planet_table(&html, &TableLayout::new(3, 2)).unwrap_err();
        match err {
            Error::ShapeMismatch { what, found, .. } => {
                assert_eq!(what, "data row 2");
                assert_eq!(found, "an empty label cell");
            }
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn repeated_header_inside_range_is_rejected() {
        let html = table_html(&[
            &["", "Mercury", "Venus", "Earth"],
            &["Mass ratio", "0.055", "0.815", "1.0"],
            &["", "Mercury", "Venus", "Earth"],
        ]);
        let err = parse_planet_table(&html, &TableLayout::new(3, 2)).unwrap_err();
        assert!(err.to_string().contains("the repeated planet header"), "{err}");
    }

    #[test]
    fn records_from_mismatched_planet_set_fail() {
        let raw = locate_table(&three_planets()).unwrap();
        let rows = extract_property_rows(
            &raw,
            &TableLayout::new(2, 2),
            &extract_planet_set(&raw, &TableLayout::new(2, 2)).unwrap(),
        )
        .unwrap();
        let planets = extract_planet_set(&raw, &TableLayout::new(3, 2)).unwrap();

        match build_planet_records(&planets, &rows) {
            Err(Error::ShapeMismatch { expected, found, .. }) => {
                assert_eq!(expected, "3 values");
                assert_eq!(found, "2");
            }
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn reshape_is_idempotent() {
        let raw = locate_table(&three_planets()).unwrap();
        let layout = TableLayout::new(3, 2);
        assert_eq!(reshape(&raw, &layout).unwrap(), reshape(&raw, &layout).unwrap());
    }

    #[test]
    fn records_are_the_transpose_of_rows() {
        let raw = locate_table(&three_planets()).unwrap();
        let layout = TableLayout::new(3, 2);
        let planets = extract_planet_set(&raw, &layout).unwrap();
        let rows = extract_property_rows(&raw, &layout, &planets).unwrap();
        let records = build_planet_records(&planets, &rows).unwrap();

        for (i, name) in planets.iter().enumerate() {
            let rec = records.get(name).unwrap();
            assert_eq!(rec.len(), rows.len());
            for (j, row) in rows.iter().enumerate() {
                assert_eq!(rec[j], row.values()[i]);
            }
        }
    }
}
