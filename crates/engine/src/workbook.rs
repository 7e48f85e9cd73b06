use serde::{Deserialize, Serialize};

use super::sheet::Sheet;

/// An ordered collection of sheets. Sheet names are unique.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn sheet_name_exists(&self, name: &str) -> bool {
        self.sheets.iter().any(|s| s.name == name)
    }

    /// Add an empty sheet. Returns its index, or None if the name is taken.
    pub fn add_sheet_named(&mut self, name: &str) -> Option<usize> {
        if self.sheet_name_exists(name) {
            return None;
        }
        self.sheets.push(Sheet::new(name));
        Some(self.sheets.len() - 1)
    }

    /// Add a fully built sheet. Returns its index, or None if the name is taken.
    pub fn add_sheet(&mut self, sheet: Sheet) -> Option<usize> {
        if self.sheet_name_exists(&sheet.name) {
            return None;
        }
        self.sheets.push(sheet);
        Some(self.sheets.len() - 1)
    }

    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_by_name_mut(&mut self, name: &str) -> Option<&mut Sheet> {
        self.sheets.iter_mut().find(|s| s.name == name)
    }
}
