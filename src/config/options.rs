// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::specs::planets::TableLayout;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub export: ExportOptions,
}

/// What to fetch and how the page is laid out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub url: String,
    pub layout: TableLayout,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            url: s!(SOURCE_URL),
            layout: TableLayout::default(),
        }
    }
}

/// Which axis is primary when a grid is built from the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum View {
    /// Rows are properties; one column per planet.
    Property,
    /// Rows are planets; one column per property.
    Planet,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub view: View,
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: Option<PathBuf>, // None → default dir + stem, ext follows format
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            view: View::Property,
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: None,
        }
    }
}

impl ExportOptions {
    /// Final file path. A user-supplied path is used verbatim, extension included.
    pub fn out_path(&self) -> PathBuf {
        match &self.out_path {
            Some(p) => p.clone(),
            None => PathBuf::from(DEFAULT_OUT_DIR)
                .join(join!(DEFAULT_FILE, ".", self.format.ext())),
        }
    }

    pub fn set_path(&mut self, path: impl AsRef<Path>) {
        let p = path.as_ref();
        self.out_path = if p.as_os_str().is_empty() { None } else { Some(p.to_path_buf()) };
    }
}
