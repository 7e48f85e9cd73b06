// vscout CLI - Viral Scout workbook sorting
// A workbook is a directory of CSVs, one per sheet (Blog.csv, Cafe.csv, ...)

mod exit_codes;
mod term;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use viralscout_config::{InvalidBasisSetting, Settings};
use viralscout_wizard::{
    AbortReason, InvalidBasisBehavior, SheetStore, SortRequest, SortWizard, UserPrompt,
    WizardOptions, WizardOutcome,
};

use exit_codes::{
    EXIT_IO, EXIT_SUCCESS, EXIT_USAGE, EXIT_WIZARD_INPUT, EXIT_WIZARD_NO_DATA,
    EXIT_WIZARD_NO_SHEET,
};

#[derive(Parser)]
#[command(name = "vscout")]
#[command(about = "Viral Scout workbook tools - interactive and headless sheet sorting")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive sort wizard against a workbook directory
    #[command(after_help = "\
The wizard walks through three prompts (sheet, sort basis, date order) and
sorts the chosen sheet's data rows in place, leaving row 1 as the header.
EOF (Ctrl-D) at any prompt cancels without touching the files.

Examples:
  vscout wizard ./scans
  vscout wizard ~/exports/viral-scout")]
    Wizard {
        /// Workbook directory (one CSV per sheet)
        dir: PathBuf,
    },

    /// Sort one sheet without prompts (for scripts)
    #[command(after_help = "\
Examples:
  vscout sort ./scans --sheet Blog --by collection
  vscout sort ./scans --sheet Blog --by date --order oldest
  vscout sort ./scans --sheet Cafe --by date
  vscout sort ./scans --sheet News --by date --column 3")]
    Sort {
        /// Workbook directory (one CSV per sheet)
        dir: PathBuf,

        /// Sheet to sort
        #[arg(long)]
        sheet: String,

        /// Sort basis
        #[arg(long)]
        by: SortBy,

        /// Date order (only with --by date; default newest)
        #[arg(long)]
        order: Option<OrderArg>,

        /// 1-based key column override (only with --by date)
        #[arg(long)]
        column: Option<usize>,

        /// Suppress the confirmation line
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// List the sheets in a workbook directory
    Sheets {
        /// Workbook directory (one CSV per sheet)
        dir: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SortBy {
    /// Collection order (column A, ascending)
    Collection,
    /// Written date (per-sheet date column)
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OrderArg {
    /// Newest first (descending)
    Newest,
    /// Oldest first (ascending)
    Oldest,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Wizard { dir } => {
            let mut prompt = term::TerminalPrompt::stdio();
            cmd_wizard(&dir, &Settings::load(), &mut prompt)
        }
        Commands::Sort { dir, sheet, by, order, column, quiet } => {
            cmd_sort(&dir, &sheet, by, order, column, quiet, &Settings::load())
        }
        Commands::Sheets { dir } => cmd_sheets(&dir),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO, message: msg.into(), hint: None }
    }

    /// An exit code with no message of its own (the message was already
    /// shown as a wizard alert).
    pub fn silent(code: u8) -> Self {
        Self { code, message: String::new(), hint: None }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Resolve the configured CSV delimiter. `csv.delimiter` must be a single
/// ASCII character; anything wider cannot be a CSV delimiter byte.
fn csv_delimiter(settings: &Settings) -> Result<Option<u8>, CliError> {
    match settings.csv_delimiter {
        None => Ok(None),
        Some(c) if c.is_ascii() => Ok(Some(c as u8)),
        Some(c) => Err(CliError::args(format!(
            "csv.delimiter '{}' is not an ASCII character",
            c
        ))
        .with_hint("edit settings.json: use an ASCII delimiter such as \";\" or \"\\t\"")),
    }
}

fn wizard_options(settings: &Settings) -> WizardOptions {
    WizardOptions {
        on_invalid_basis: match settings.on_invalid_basis {
            InvalidBasisSetting::Silent => InvalidBasisBehavior::Silent,
            InvalidBasisSetting::Alert => InvalidBasisBehavior::Alert,
        },
    }
}

// ============================================================================
// wizard
// ============================================================================

fn cmd_wizard(
    dir: &Path,
    settings: &Settings,
    prompt: &mut impl UserPrompt,
) -> Result<(), CliError> {
    let delimiter = csv_delimiter(settings)?;
    let mut workbook = viralscout_io::workdir::load_workbook(dir, delimiter)
        .map_err(CliError::io)?;

    let outcome = SortWizard::new(&mut workbook, prompt)
        .with_options(wizard_options(settings))
        .run();

    match outcome {
        WizardOutcome::Sorted(request) => {
            viralscout_io::workdir::save_sheet(
                &workbook,
                &request.sheet,
                dir,
                settings.backup_before_sort,
            )
            .map_err(CliError::io)
        }
        // The wizard already alerted where an alert was due; only the exit
        // code is left to report.
        WizardOutcome::Aborted(AbortReason::Cancelled) => Ok(()),
        WizardOutcome::Aborted(AbortReason::SheetNotFound(_)) => {
            Err(CliError::silent(EXIT_WIZARD_NO_SHEET))
        }
        WizardOutcome::Aborted(AbortReason::NoData) => {
            Err(CliError::silent(EXIT_WIZARD_NO_DATA))
        }
        WizardOutcome::Aborted(_) => Err(CliError::silent(EXIT_WIZARD_INPUT)),
    }
}

// ============================================================================
// sort (headless)
// ============================================================================

/// Built-in written-date columns, matching the wizard's sheet choices.
fn builtin_date_column(sheet: &str) -> Option<usize> {
    match sheet {
        "Blog" => Some(4),
        "Cafe" => Some(5),
        _ => None,
    }
}

fn cmd_sort(
    dir: &Path,
    sheet: &str,
    by: SortBy,
    order: Option<OrderArg>,
    column: Option<usize>,
    quiet: bool,
    settings: &Settings,
) -> Result<(), CliError> {
    if by == SortBy::Collection && order.is_some() {
        return Err(CliError::args("--order applies only to --by date"));
    }
    if by == SortBy::Collection && column.is_some() {
        return Err(CliError::args("--column applies only to --by date"));
    }
    if column == Some(0) {
        return Err(CliError::args("--column is 1-based"));
    }

    let delimiter = csv_delimiter(settings)?;
    let mut workbook = viralscout_io::workdir::load_workbook(dir, delimiter)
        .map_err(CliError::io)?;

    if !workbook.has_sheet(sheet) {
        let names = workbook.sheet_names().join(", ");
        return Err(CliError {
            code: EXIT_WIZARD_NO_SHEET,
            message: format!("sheet '{}' not found", sheet),
            hint: if names.is_empty() {
                None
            } else {
                Some(format!("available sheets: {}", names))
            },
        });
    }
    if workbook.row_count(sheet) < 2 {
        return Err(CliError {
            code: EXIT_WIZARD_NO_DATA,
            message: format!("sheet '{}' has no data rows below the header", sheet),
            hint: None,
        });
    }

    let (key_column, ascending, label) = match by {
        SortBy::Collection => (1, true, "collection order".to_string()),
        SortBy::Date => {
            let key = match column {
                Some(c) => c,
                None => builtin_date_column(sheet).ok_or_else(|| {
                    CliError::args(format!("no built-in date column for sheet '{}'", sheet))
                        .with_hint("pass --column <N> (1-based)")
                })?,
            };
            let order = order.unwrap_or(OrderArg::Newest);
            let label = match order {
                OrderArg::Newest => "written date, newest first",
                OrderArg::Oldest => "written date, oldest first",
            };
            (key, order == OrderArg::Oldest, label.to_string())
        }
    };

    let request = SortRequest {
        sheet: sheet.to_string(),
        column: key_column,
        ascending,
    };
    workbook.sort_data_rows(&request);
    viralscout_io::workdir::save_sheet(&workbook, sheet, dir, settings.backup_before_sort)
        .map_err(CliError::io)?;

    if !quiet {
        eprintln!("{} sheet sorted. (basis: {})", sheet, label);
    }
    Ok(())
}

// ============================================================================
// sheets
// ============================================================================

fn cmd_sheets(dir: &Path) -> Result<(), CliError> {
    let workbook = viralscout_io::workdir::load_workbook(dir, None).map_err(CliError::io)?;
    for sheet in workbook.sheets() {
        println!(
            "{}\t{} rows x {} cols",
            sheet.name,
            sheet.last_row(),
            sheet.last_col()
        );
    }
    Ok(())
}
