pub mod settings;

pub use settings::{InvalidBasisSetting, Settings};
