//! TableData: the grid the live table renders.
//!
//! Built once per fetched table from one of the `PlanetTable` views, so the
//! draw code only indexes strings and never touches the reshaping logic.

use crate::config::options::View;
use crate::data::PlanetTable;
use crate::file::grid_for;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_table(view: View, table: &PlanetTable) -> Self {
        let (headers, rows) = grid_for(view, table);
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ncols(&self) -> usize {
        self.headers.len()
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}
