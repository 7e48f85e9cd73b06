pub mod prompt;
pub mod store;
pub mod wizard;

pub use prompt::{Reply, UserPrompt};
pub use store::{SheetStore, SortRequest};
pub use wizard::{
    AbortReason, InvalidBasisBehavior, SheetChoice, SortBasis, SortOrder, SortWizard,
    WizardOptions, WizardOutcome,
};
