//! Settings file support
//!
//! Every setting has a built-in default, so the file only needs the parts a
//! user wants to change. Word lists given in `[words]` replace the default
//! list for that category; `[[slots]]`, when present, replace the default
//! slot list entirely.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::madlib::{Slot, Vocabulary};
use crate::payroll::PayrollRates;
use crate::publish::CommandBuilder;

/// Errors that can occur when loading or parsing settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Where intermediate files and finished artifacts go
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Paths {
    /// Directory holding intermediate rendered files
    pub work_dir: PathBuf,
    /// Destination of the finished story
    pub madlib_dir: PathBuf,
    /// Destination of the finished payslips
    pub payslip_dir: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            madlib_dir: PathBuf::from("."),
            payslip_dir: PathBuf::from("payslip_pdfs"),
        }
    }
}

/// Resolved settings for both tools
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub vocabulary: Vocabulary,
    pub rates: PayrollRates,
    pub build: CommandBuilder,
    pub paths: Paths,
}

/// TOML structure for deserializing settings
#[derive(Deserialize, Default)]
#[serde(default)]
struct TomlSettings {
    words: BTreeMap<String, Vec<String>>,
    slots: Option<Vec<Slot>>,
    rates: PayrollRates,
    build: CommandBuilder,
    paths: Paths,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlSettings = toml::from_str(content)?;

        let mut vocabulary = Vocabulary::default();
        for (category, words) in parsed.words {
            vocabulary = vocabulary.with_words(category, words);
        }
        if let Some(slots) = parsed.slots {
            vocabulary = vocabulary.with_slots(slots);
        }

        Ok(Settings {
            vocabulary,
            rates: parsed.rates,
            build: parsed.build,
            paths: parsed.paths,
        })
    }
}
