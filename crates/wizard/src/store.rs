use viralscout_engine::workbook::Workbook;

/// One row-reordering mutation, as the wizard issues it.
///
/// `column` is 1-based, matching how the sheets are documented (column A = 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRequest {
    pub sheet: String,
    pub column: usize,
    pub ascending: bool,
}

/// The wizard's window onto sheet storage.
pub trait SheetStore {
    fn has_sheet(&self, name: &str) -> bool;

    /// Total row count including the header row; 0 for a missing sheet.
    fn row_count(&self, name: &str) -> usize;

    /// Reorder the data range (everything below the header row) of
    /// `request.sheet`. Only called after the sheet has been resolved and
    /// shown to hold at least one data row.
    fn sort_data_rows(&mut self, request: &SortRequest);
}

impl SheetStore for Workbook {
    fn has_sheet(&self, name: &str) -> bool {
        self.sheet_name_exists(name)
    }

    fn row_count(&self, name: &str) -> usize {
        self.sheet_by_name(name).map(|s| s.last_row()).unwrap_or(0)
    }

    fn sort_data_rows(&mut self, request: &SortRequest) {
        if let Some(sheet) = self.sheet_by_name_mut(&request.sheet) {
            sheet.sort_rows(1, request.column - 1, request.ascending);
        }
    }
}
