//! The sort wizard: three modal prompts driving one range sort.
//!
//! Each prompt's free-text reply is parsed once into a closed enum; every
//! invalid or cancelled reply is terminal for the invocation (no retry
//! loops). At most one sort mutation happens, only on the success path.

use crate::prompt::{Reply, UserPrompt};
use crate::store::{SheetStore, SortRequest};

/// Collection-order sorts always key on column A.
const COLLECTION_COLUMN: usize = 1;

/// Auto-dismiss hint passed with success toasts.
const TOAST_SECONDS: u32 = 5;

/// Which sheet the user picked. Each choice binds a fixed sheet name and a
/// fixed 1-based written-date column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetChoice {
    Blog,
    Cafe,
}

impl SheetChoice {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(SheetChoice::Blog),
            "2" => Some(SheetChoice::Cafe),
            _ => None,
        }
    }

    pub fn sheet_name(self) -> &'static str {
        match self {
            SheetChoice::Blog => "Blog",
            SheetChoice::Cafe => "Cafe",
        }
    }

    /// 1-based index of the written-date column (Blog: D, Cafe: E).
    pub fn date_column(self) -> usize {
        match self {
            SheetChoice::Blog => 4,
            SheetChoice::Cafe => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBasis {
    CollectionOrder,
    WrittenDate,
}

impl SortBasis {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "0" => Some(SortBasis::CollectionOrder),
            "1" => Some(SortBasis::WrittenDate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    NewestFirst,
    OldestFirst,
}

impl SortOrder {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(SortOrder::NewestFirst),
            "2" => Some(SortOrder::OldestFirst),
            _ => None,
        }
    }

    pub fn ascending(self) -> bool {
        matches!(self, SortOrder::OldestFirst)
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::NewestFirst => "newest first",
            SortOrder::OldestFirst => "oldest first",
        }
    }
}

/// Why a run ended without sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// A prompt was dismissed; never alerted.
    Cancelled,
    InvalidSheetChoice,
    SheetNotFound(String),
    NoData,
    /// Alerted or silent depending on [`InvalidBasisBehavior`].
    InvalidBasisChoice,
    InvalidOrderChoice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    Sorted(SortRequest),
    Aborted(AbortReason),
}

/// What to do when the sort-basis reply is not "0" or "1".
///
/// The original helper aborted this case silently while alerting on the
/// other two invalid inputs. `Silent` keeps that behavior; `Alert` restores
/// symmetry. Surfaced as a setting rather than decided here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidBasisBehavior {
    #[default]
    Silent,
    Alert,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WizardOptions {
    pub on_invalid_basis: InvalidBasisBehavior,
}

pub struct SortWizard<'a, S, P> {
    store: &'a mut S,
    prompt: &'a mut P,
    options: WizardOptions,
}

impl<'a, S: SheetStore, P: UserPrompt> SortWizard<'a, S, P> {
    pub fn new(store: &'a mut S, prompt: &'a mut P) -> Self {
        Self {
            store,
            prompt,
            options: WizardOptions::default(),
        }
    }

    pub fn with_options(mut self, options: WizardOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run(mut self) -> WizardOutcome {
        use AbortReason::*;
        use WizardOutcome::*;

        // Step 1: target sheet
        let reply = self.prompt.ask(
            "Step 1: choose the target sheet",
            "Enter a number:\n[1] Blog\n[2] Cafe",
        );
        let text = match reply {
            Reply::Cancelled => return Aborted(Cancelled),
            Reply::Text(t) => t,
        };
        let choice = match SheetChoice::parse(text.trim()) {
            Some(c) => c,
            None => {
                self.prompt.alert("Invalid input. Enter 1 or 2.");
                return Aborted(InvalidSheetChoice);
            }
        };
        let sheet = choice.sheet_name();
        if !self.store.has_sheet(sheet) {
            self.prompt
                .alert(&format!("Sheet '{}' was not found.", sheet));
            return Aborted(SheetNotFound(sheet.to_string()));
        }

        // Step 2: the sheet needs at least one data row below the header
        if self.store.row_count(sheet) < 2 {
            self.prompt.alert("No data to sort.");
            return Aborted(NoData);
        }

        // Step 3: sort basis
        let reply = self.prompt.ask(
            "Step 2: choose the sort basis",
            "Enter a number:\n[0] Collection order (column A)\n[1] Written date (newest/oldest)",
        );
        let text = match reply {
            Reply::Cancelled => return Aborted(Cancelled),
            Reply::Text(t) => t,
        };
        let basis = match SortBasis::parse(text.trim()) {
            Some(b) => b,
            None => {
                if self.options.on_invalid_basis == InvalidBasisBehavior::Alert {
                    self.prompt.alert("Invalid input. Enter 0 or 1.");
                }
                return Aborted(InvalidBasisChoice);
            }
        };

        match basis {
            SortBasis::CollectionOrder => {
                let request = SortRequest {
                    sheet: sheet.to_string(),
                    column: COLLECTION_COLUMN,
                    ascending: true,
                };
                self.store.sort_data_rows(&request);
                self.prompt.toast(
                    &format!("{} sheet sorted. (basis: collection order)", sheet),
                    "Done",
                    TOAST_SECONDS,
                );
                Sorted(request)
            }
            SortBasis::WrittenDate => {
                // Step 4: date sort order
                let reply = self.prompt.ask(
                    "Step 3: date sort order",
                    "Enter a number:\n[1] Newest first (descending)\n[2] Oldest first (ascending)",
                );
                let text = match reply {
                    Reply::Cancelled => return Aborted(Cancelled),
                    Reply::Text(t) => t,
                };
                let order = match SortOrder::parse(text.trim()) {
                    Some(o) => o,
                    None => {
                        self.prompt.alert("Invalid input.");
                        return Aborted(InvalidOrderChoice);
                    }
                };
                let request = SortRequest {
                    sheet: sheet.to_string(),
                    column: choice.date_column(),
                    ascending: order.ascending(),
                };
                self.store.sort_data_rows(&request);
                self.prompt.toast(
                    &format!(
                        "{} sheet sorted. (basis: written date, {})",
                        sheet,
                        order.label()
                    ),
                    "Done",
                    TOAST_SECONDS,
                );
                Sorted(request)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, VecDeque};

    /// Prompt fake that plays back a script of replies and records output.
    struct ScriptPrompt {
        replies: VecDeque<Reply>,
        asked: Vec<String>,
        alerts: Vec<String>,
        toasts: Vec<(String, String, u32)>,
    }

    impl ScriptPrompt {
        fn new(replies: &[&str]) -> Self {
            Self {
                replies: replies
                    .iter()
                    .map(|r| Reply::Text(r.to_string()))
                    .collect(),
                asked: Vec::new(),
                alerts: Vec::new(),
                toasts: Vec::new(),
            }
        }

        fn with_cancel_at(mut self, index: usize) -> Self {
            self.replies.truncate(index);
            self.replies.push_back(Reply::Cancelled);
            self
        }
    }

    impl UserPrompt for ScriptPrompt {
        fn ask(&mut self, title: &str, _body: &str) -> Reply {
            self.asked.push(title.to_string());
            self.replies.pop_front().unwrap_or(Reply::Cancelled)
        }

        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }

        fn toast(&mut self, message: &str, title: &str, seconds: u32) {
            self.toasts.push((message.to_string(), title.to_string(), seconds));
        }
    }

    /// Store fake: sheet name -> total row count, plus a call recorder.
    #[derive(Default)]
    struct MemoryStore {
        rows: HashMap<String, usize>,
        calls: Vec<SortRequest>,
    }

    impl MemoryStore {
        fn with_sheet(name: &str, rows: usize) -> Self {
            let mut store = Self::default();
            store.rows.insert(name.to_string(), rows);
            store
        }
    }

    impl SheetStore for MemoryStore {
        fn has_sheet(&self, name: &str) -> bool {
            self.rows.contains_key(name)
        }

        fn row_count(&self, name: &str) -> usize {
            self.rows.get(name).copied().unwrap_or(0)
        }

        fn sort_data_rows(&mut self, request: &SortRequest) {
            self.calls.push(request.clone());
        }
    }

    fn both_sheets() -> MemoryStore {
        let mut store = MemoryStore::with_sheet("Blog", 11);
        store.rows.insert("Cafe".to_string(), 6);
        store
    }

    #[test]
    fn test_blog_written_date_oldest_first_end_to_end() {
        let mut store = MemoryStore::with_sheet("Blog", 11);
        let mut prompt = ScriptPrompt::new(&["1", "1", "2"]);

        let outcome = SortWizard::new(&mut store, &mut prompt).run();

        assert_eq!(
            outcome,
            WizardOutcome::Sorted(SortRequest {
                sheet: "Blog".into(),
                column: 4,
                ascending: true,
            })
        );
        assert_eq!(store.calls.len(), 1);
        assert!(prompt.alerts.is_empty());
        let (message, _, seconds) = &prompt.toasts[0];
        assert!(message.contains("Blog"));
        assert!(message.contains("oldest first"));
        assert_eq!(*seconds, 5);
    }

    #[test]
    fn test_cafe_collection_order_never_prompts_for_order() {
        let mut store = both_sheets();
        let mut prompt = ScriptPrompt::new(&["2", "0"]);

        let outcome = SortWizard::new(&mut store, &mut prompt).run();

        assert_eq!(
            outcome,
            WizardOutcome::Sorted(SortRequest {
                sheet: "Cafe".into(),
                column: 1,
                ascending: true,
            })
        );
        // Only two prompts were ever shown
        assert_eq!(prompt.asked.len(), 2);
        assert!(prompt.toasts[0].0.contains("collection order"));
    }

    #[test]
    fn test_collection_order_ignores_sheet_choice_for_column() {
        for sheet_reply in ["1", "2"] {
            let mut store = both_sheets();
            let mut prompt = ScriptPrompt::new(&[sheet_reply, "0"]);
            let outcome = SortWizard::new(&mut store, &mut prompt).run();
            match outcome {
                WizardOutcome::Sorted(req) => {
                    assert_eq!(req.column, 1);
                    assert!(req.ascending);
                }
                other => panic!("unexpected outcome: {:?}", other),
            }
        }
    }

    #[test]
    fn test_newest_first_is_descending_on_date_column() {
        let mut store = both_sheets();
        let mut prompt = ScriptPrompt::new(&["2", "1", "1"]);

        let outcome = SortWizard::new(&mut store, &mut prompt).run();

        assert_eq!(
            outcome,
            WizardOutcome::Sorted(SortRequest {
                sheet: "Cafe".into(),
                column: 5,
                ascending: false,
            })
        );
        assert!(prompt.toasts[0].0.contains("newest first"));
    }

    #[test]
    fn test_invalid_sheet_choice_alerts_and_aborts() {
        for bad in ["3", "blog", "", "12"] {
            let mut store = both_sheets();
            let mut prompt = ScriptPrompt::new(&[bad]);

            let outcome = SortWizard::new(&mut store, &mut prompt).run();

            assert_eq!(outcome, WizardOutcome::Aborted(AbortReason::InvalidSheetChoice));
            assert_eq!(prompt.alerts.len(), 1);
            assert!(store.calls.is_empty());
        }
    }

    #[test]
    fn test_input_is_trimmed_before_parsing() {
        let mut store = both_sheets();
        let mut prompt = ScriptPrompt::new(&[" 1 ", " 0 "]);

        let outcome = SortWizard::new(&mut store, &mut prompt).run();

        assert!(matches!(outcome, WizardOutcome::Sorted(_)));
    }

    #[test]
    fn test_missing_sheet_alert_names_it() {
        let mut store = MemoryStore::with_sheet("Cafe", 6);
        let mut prompt = ScriptPrompt::new(&["1"]);

        let outcome = SortWizard::new(&mut store, &mut prompt).run();

        assert_eq!(
            outcome,
            WizardOutcome::Aborted(AbortReason::SheetNotFound("Blog".into()))
        );
        assert!(prompt.alerts[0].contains("Blog"));
        assert!(store.calls.is_empty());
    }

    #[test]
    fn test_header_only_sheet_aborts_before_basis_prompt() {
        for rows in [0, 1] {
            let mut store = MemoryStore::with_sheet("Blog", rows);
            let mut prompt = ScriptPrompt::new(&["1", "0"]);

            let outcome = SortWizard::new(&mut store, &mut prompt).run();

            assert_eq!(outcome, WizardOutcome::Aborted(AbortReason::NoData));
            assert_eq!(prompt.asked.len(), 1);
            assert_eq!(prompt.alerts.len(), 1);
            assert!(store.calls.is_empty());
        }
    }

    #[test]
    fn test_invalid_basis_is_silent_by_default() {
        let mut store = both_sheets();
        let mut prompt = ScriptPrompt::new(&["1", "7"]);

        let outcome = SortWizard::new(&mut store, &mut prompt).run();

        assert_eq!(outcome, WizardOutcome::Aborted(AbortReason::InvalidBasisChoice));
        assert!(prompt.alerts.is_empty());
        assert!(prompt.toasts.is_empty());
        assert!(store.calls.is_empty());
    }

    #[test]
    fn test_invalid_basis_alert_policy() {
        let mut store = both_sheets();
        let mut prompt = ScriptPrompt::new(&["1", "7"]);

        let outcome = SortWizard::new(&mut store, &mut prompt)
            .with_options(WizardOptions {
                on_invalid_basis: InvalidBasisBehavior::Alert,
            })
            .run();

        assert_eq!(outcome, WizardOutcome::Aborted(AbortReason::InvalidBasisChoice));
        assert_eq!(prompt.alerts.len(), 1);
        assert!(store.calls.is_empty());
    }

    #[test]
    fn test_cancel_at_each_prompt_is_silent() {
        for cancel_index in 0..3 {
            let mut store = both_sheets();
            let mut prompt = ScriptPrompt::new(&["1", "1", "1"]).with_cancel_at(cancel_index);

            let outcome = SortWizard::new(&mut store, &mut prompt).run();

            assert_eq!(outcome, WizardOutcome::Aborted(AbortReason::Cancelled));
            assert!(prompt.alerts.is_empty());
            assert!(prompt.toasts.is_empty());
            assert!(store.calls.is_empty());
        }
    }

    #[test]
    fn test_invalid_order_choice_alerts_and_aborts() {
        let mut store = both_sheets();
        let mut prompt = ScriptPrompt::new(&["1", "1", "9"]);

        let outcome = SortWizard::new(&mut store, &mut prompt).run();

        assert_eq!(outcome, WizardOutcome::Aborted(AbortReason::InvalidOrderChoice));
        assert_eq!(prompt.alerts.len(), 1);
        assert!(store.calls.is_empty());
    }

    #[test]
    fn test_date_columns_are_fixed_per_sheet() {
        assert_eq!(SheetChoice::Blog.date_column(), 4);
        assert_eq!(SheetChoice::Cafe.date_column(), 5);
        assert_eq!(SheetChoice::Blog.sheet_name(), "Blog");
        assert_eq!(SheetChoice::Cafe.sheet_name(), "Cafe");
    }

    #[test]
    fn test_wizard_against_real_workbook() {
        use viralscout_engine::workbook::Workbook;

        let mut wb = Workbook::new();
        wb.add_sheet_named("Blog");
        let sheet = wb.sheet_by_name_mut("Blog").unwrap();
        sheet.set_value(0, 3, "written");
        sheet.set_value(1, 3, "2024-01-15");
        sheet.set_value(2, 3, "2024-11-20");
        sheet.set_value(3, 3, "2024-05-03");

        let mut prompt = ScriptPrompt::new(&["1", "1", "1"]); // newest first

        let outcome = SortWizard::new(&mut wb, &mut prompt).run();

        assert!(matches!(outcome, WizardOutcome::Sorted(_)));
        let sheet = wb.sheet_by_name("Blog").unwrap();
        assert_eq!(sheet.get_display(1, 3), "2024-11-20");
        assert_eq!(sheet.get_display(2, 3), "2024-05-03");
        assert_eq!(sheet.get_display(3, 3), "2024-01-15");
    }
}
