use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::cell::{value_compare, Cell, CellValue};

/// A single named grid. Storage is sparse: only populated cells exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    cells: HashMap<(usize, usize), Cell>,
}

impl Sheet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cells: HashMap::new(),
        }
    }

    pub fn set_value(&mut self, row: usize, col: usize, raw: &str) {
        if raw.is_empty() {
            self.cells.remove(&(row, col));
        } else {
            self.cells.insert((row, col), Cell::new(raw));
        }
    }

    pub fn get_display(&self, row: usize, col: usize) -> String {
        self.cells
            .get(&(row, col))
            .map(|c| c.raw.clone())
            .unwrap_or_default()
    }

    pub fn value(&self, row: usize, col: usize) -> CellValue {
        self.cells
            .get(&(row, col))
            .map(|c| c.value.clone())
            .unwrap_or(CellValue::Empty)
    }

    /// Number of rows in the used extent (0-based max index + 1).
    pub fn last_row(&self) -> usize {
        self.cells.keys().map(|&(r, _)| r + 1).max().unwrap_or(0)
    }

    /// Number of columns in the used extent.
    pub fn last_col(&self) -> usize {
        self.cells.keys().map(|&(_, c)| c + 1).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Reorder the rows from `start_row` to the used extent by the values in
    /// `key_col` (0-based). Rows above `start_row` (headers) are untouched.
    ///
    /// The sort is stable on the key; descending order is the ascending
    /// result reversed. Entire rows move together across every populated
    /// column, and cell text is carried verbatim.
    pub fn sort_rows(&mut self, start_row: usize, key_col: usize, ascending: bool) {
        let end_row = self.last_row();
        if end_row <= start_row + 1 {
            return; // zero or one data row
        }
        let cols = self.last_col();
        if key_col >= cols {
            return; // key column is entirely empty
        }

        // Pull the data rows out of the sparse map
        let mut rows: Vec<Vec<Option<Cell>>> = Vec::with_capacity(end_row - start_row);
        for row in start_row..end_row {
            let mut cells: Vec<Option<Cell>> = Vec::with_capacity(cols);
            for col in 0..cols {
                cells.push(self.cells.remove(&(row, col)));
            }
            rows.push(cells);
        }

        rows.sort_by(|a, b| {
            let key_a = a[key_col].as_ref().map(|c| c.value.clone()).unwrap_or(CellValue::Empty);
            let key_b = b[key_col].as_ref().map(|c| c.value.clone()).unwrap_or(CellValue::Empty);
            value_compare(&key_a, &key_b)
        });
        if !ascending {
            rows.reverse();
        }

        // Write back in the new order
        for (offset, cells) in rows.into_iter().enumerate() {
            for (col, cell) in cells.into_iter().enumerate() {
                if let Some(cell) = cell {
                    self.cells.insert((start_row + offset, col), cell);
                }
            }
        }
    }
}
