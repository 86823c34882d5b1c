// src/core/html.rs
// DOM helpers over `scraper`. Rows and cells are collected from the table's
// own structure only, so a table nested inside a cell never leaks rows into
// the outer grid.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("static selector"));

/// First `<table>` in document order, flattened to rows of cell text.
/// Cell text is the concatenated text content, untrimmed.
pub fn first_table_grid(markup: &str) -> Option<Vec<Vec<String>>> {
    let doc = Html::parse_document(markup);
    let table = doc.select(&TABLE).next()?;
    Some(
        own_rows(table)
            .into_iter()
            .map(|tr| own_cells(tr).into_iter().map(cell_text).collect())
            .collect(),
    )
}

/// `<tr>` elements belonging to `table`: direct children, or children of its
/// `<thead>` / `<tbody>` / `<tfoot>` sections.
pub fn own_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let mut rows = Vec::new();
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "tr" => rows.push(child),
            "thead" | "tbody" | "tfoot" => rows.extend(
                child
                    .children()
                    .filter_map(ElementRef::wrap)
                    .filter(|el| el.value().name() == "tr"),
            ),
            _ => {}
        }
    }
    rows
}

/// `<td>` / `<th>` children of a row.
pub fn own_cells(tr: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    tr.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "td" | "th"))
        .collect()
}

pub fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect()
}
