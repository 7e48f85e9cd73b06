// Application settings
// Loaded from ~/.config/vscout/settings.json

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What the wizard does when the sort-basis reply is unrecognized.
///
/// "silent" reproduces the original helper's behavior (abort with no
/// message); "alert" makes it consistent with the other invalid inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidBasisSetting {
    #[default]
    Silent,
    Alert,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Wizard
    #[serde(rename = "wizard.onInvalidBasis")]
    pub on_invalid_basis: InvalidBasisSetting,

    // CSV
    #[serde(rename = "csv.delimiter")]
    pub csv_delimiter: Option<char>, // None = sniff per file

    // File
    #[serde(rename = "file.backupBeforeSort")]
    pub backup_before_sort: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            on_invalid_basis: InvalidBasisSetting::Silent,
            csv_delimiter: None,
            backup_before_sort: false,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vscout")
            .join("settings.json")
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        let path = Self::config_path();

        if !path.exists() {
            let settings = Self::default();
            settings.create_default_file();
            return settings;
        }

        match fs::read_to_string(&path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Error parsing settings.json: {}", e);
                    eprintln!("Using default settings");
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading settings.json: {}", e);
                Self::default()
            }
        }
    }

    /// Parse settings text, stripping `//` comment lines first.
    fn parse(contents: &str) -> Result<Self, serde_json::Error> {
        let cleaned: String = contents
            .lines()
            .filter(|line| !line.trim().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n");
        serde_json::from_str(&cleaned)
    }

    /// Save current settings to disk
    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(&path, json).map_err(|e| e.to_string())
    }

    /// Create default settings file with comments
    fn create_default_file(&self) {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                eprintln!("Error creating config directory: {}", e);
                return;
            }
        }

        let default_config = r#"{
    // Wizard behavior on an unrecognized sort-basis reply:
    // "silent" (abort without a message) or "alert"
    "wizard.onInvalidBasis": "silent",

    // Force a CSV delimiter (e.g. ";"); null = detect per file
    "csv.delimiter": null,

    // Copy <sheet>.csv to <sheet>.csv.bak before saving a sorted sheet
    "file.backupBeforeSort": false
}
"#;

        if let Err(e) = fs::write(&path, default_config) {
            eprintln!("Error writing default settings.json: {}", e);
        }
    }
}
