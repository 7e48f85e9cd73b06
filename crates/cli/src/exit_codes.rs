//! CLI Exit Code Registry
//!
//! Single source of truth for all CLI exit codes. Exit codes are part of
//! the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain    | Description                              |
//! |---------|-----------|------------------------------------------|
//! | 0       | Universal | Success (including user cancellation)    |
//! | 1       | Universal | General error (reserved, unused)         |
//! | 2       | Universal | CLI usage error (bad args)               |
//! | 3-9     | I/O       | Workbook file/directory errors           |
//! | 10-19   | wizard    | Sort-wizard input/validation codes       |

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed, or the user cancelled a prompt.
pub const EXIT_SUCCESS: u8 = 0;

/// Usage error - bad arguments, inconsistent flags.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// I/O (3-9)
// =============================================================================

/// Workbook directory or CSV file could not be read/written.
pub const EXIT_IO: u8 = 3;

// =============================================================================
// Wizard (10-19)
// =============================================================================

/// A prompt reply was not one of the offered choices.
pub const EXIT_WIZARD_INPUT: u8 = 10;

/// The chosen sheet does not exist in the workbook.
pub const EXIT_WIZARD_NO_SHEET: u8 = 11;

/// The sheet has no data rows below the header.
pub const EXIT_WIZARD_NO_DATA: u8 = 12;
