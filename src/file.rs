// src/file.rs

use std::{fs, path::{Path, PathBuf}};

use crate::config::options::{ExportOptions, View};
use crate::csv::to_export_string;
use crate::data::PlanetTable;
use crate::error::{Error, Result};

/// Headers + rows for one view of the table.
/// - `View::Property`: `Property, <planet…>`, one row per property
/// - `View::Planet`: `Planet, <label…>`, one row per planet
pub fn grid_for(view: View, table: &PlanetTable) -> (Vec<String>, Vec<Vec<String>>) {
    match view {
        View::Property => {
            let mut headers = Vec::with_capacity(table.planet_count() + 1);
            headers.push(s!("Property"));
            headers.extend(table.planet_names().iter().cloned());

            let rows = table
                .property_rows()
                .iter()
                .map(|r| {
                    let mut row = Vec::with_capacity(r.values().len() + 1);
                    row.push(s!(r.label()));
                    row.extend(r.values().iter().cloned());
                    row
                })
                .collect();
            (headers, rows)
        }
        View::Planet => {
            let mut headers = Vec::with_capacity(table.property_count() + 1);
            headers.push(s!("Planet"));
            headers.extend(table.labels().map(String::from));

            let rows = table
                .records()
                .iter()
                .map(|rec| {
                    let mut row = Vec::with_capacity(rec.values().len() + 1);
                    row.push(s!(rec.name()));
                    row.extend(rec.values().iter().cloned());
                    row
                })
                .collect();
            (headers, rows)
        }
    }
}

/// Clipboard / stdout text for the configured view and format.
pub fn export_string(export: &ExportOptions, table: &PlanetTable) -> String {
    let (headers, rows) = grid_for(export.view, table);
    to_export_string(&headers, &rows, export.include_headers, export.format.delim())
}

/// Write the configured view to `export.out_path()`. Returns the path written.
pub fn export_table(export: &ExportOptions, table: &PlanetTable) -> Result<PathBuf> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, export_string(export, table)).map_err(|e| Error::io(&path, e))?;
    logf!("Export: {:?} → {}", export.view, path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}
