//! Keyfill - keyword substitution for story and payslip templates
//!
//! This library provides a literal-token substitution engine, a random word
//! story generator built on it, and a payslip generator that computes pay
//! from a weekly timesheet.
//!
//! # Example
//!
//! ```rust
//! use keyfill::madlib::{fill_story, Vocabulary};
//! use keyfill::template::seeded;
//!
//! let mut rng = seeded(Some(1));
//! let story = fill_story("<exclamation>! A <noun>.", &Vocabulary::default(), &mut rng).unwrap();
//! assert!(!story.contains("<noun>"));
//! ```

pub mod config;
pub mod error;
pub mod madlib;
pub mod payroll;
pub mod publish;
pub mod template;

pub use config::{ConfigError, Paths, Settings};
pub use error::FillError;
pub use madlib::{fill_story, Vocabulary};
pub use payroll::{
    fill_payslip, EmployeeRecord, PayPeriod, PayrollRates, Payslip, RecordError, RecordPolicy,
};
pub use publish::{BuildError, CommandBuilder, DocumentBuilder, PassThrough, Publisher};
pub use template::{render, BindingValue, CandidateList, RandomSource, Rule, TemplateError};

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Final name of the story artifact, without extension
pub const STORY_STEM: &str = "madlib";

/// Intermediate file name of the story, without extension
pub const STORY_INTERMEDIATE: &str = "madlib_gen";

/// Intermediate file name of each payslip, without extension
pub const PAYSLIP_INTERMEDIATE: &str = "payslip_temp";

/// Read a whole input file, mapping failure to [`FillError::MissingInputFile`]
pub fn read_input(path: &Path) -> Result<String, FillError> {
    fs::read_to_string(path).map_err(|e| FillError::missing_input(path, e))
}

/// Intermediate file name carrying the template's extension (`tex` if none)
pub fn intermediate_name(base: &str, template: &Path) -> String {
    let ext = template
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "tex".to_string());
    format!("{base}.{ext}")
}

/// Fill the story template at `template` and publish it
pub fn generate_story<S: RandomSource + ?Sized>(
    template: &Path,
    vocabulary: &Vocabulary,
    source: &mut S,
    publisher: &Publisher,
) -> Result<PathBuf, FillError> {
    let text = read_input(template)?;
    let story = fill_story(&text, vocabulary, source)?;
    let intermediate = intermediate_name(STORY_INTERMEDIATE, template);
    let artifact = publisher.publish(&story, &intermediate, STORY_STEM)?;
    Ok(artifact)
}

/// Options for a payslip run
#[derive(Debug, Clone)]
pub struct PayrollRun {
    /// Tax rates and overtime weights
    pub rates: PayrollRates,
    /// Week the payslips are issued for
    pub period: PayPeriod,
    /// Handling of rows that fail to parse
    pub policy: RecordPolicy,
}

impl PayrollRun {
    /// Create run options for `period` with default rates and the abort policy
    pub fn new(period: PayPeriod) -> Self {
        Self {
            rates: PayrollRates::default(),
            period,
            policy: RecordPolicy::default(),
        }
    }

    /// Set the payroll rates
    pub fn with_rates(mut self, rates: PayrollRates) -> Self {
        self.rates = rates;
        self
    }

    /// Set the policy for malformed rows
    pub fn with_policy(mut self, policy: RecordPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// One employee whose payslip could not be built
#[derive(Debug)]
pub struct BuildFailure {
    /// `{number}_{name}` of the employee
    pub employee: String,
    pub error: BuildError,
}

/// Outcome of a payslip run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Artifacts delivered, in timesheet order
    pub published: Vec<PathBuf>,
    /// Rows skipped under [`RecordPolicy::Skip`]
    pub skipped: Vec<RecordError>,
    /// Employees whose document failed to build or whose output name was taken
    pub failed: Vec<BuildFailure>,
}

impl BatchReport {
    /// True when every row produced a payslip
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.failed.is_empty()
    }
}

/// Read the template and timesheet, then publish one payslip per employee
pub fn generate_payslips(
    template: &Path,
    timesheet: &Path,
    run: &PayrollRun,
    publisher: &Publisher,
) -> Result<BatchReport, FillError> {
    let template_text = read_input(template)?;
    let timesheet_text = read_input(timesheet)?;
    let intermediate = intermediate_name(PAYSLIP_INTERMEDIATE, template);
    publish_payslips(&template_text, &timesheet_text, &intermediate, run, publisher)
}

/// Publish one payslip per timesheet row.
///
/// A build failure is recorded and the next employee is processed. A
/// malformed row either aborts the run or is recorded, per `run.policy`.
/// A row whose output name was already used earlier in the run is recorded
/// as failed instead of overwriting the earlier payslip.
pub fn publish_payslips(
    template: &str,
    timesheet: &str,
    intermediate: &str,
    run: &PayrollRun,
    publisher: &Publisher,
) -> Result<BatchReport, FillError> {
    let rows = payroll::parse_timesheet(timesheet)?;
    let mut report = BatchReport::default();
    let mut stems = HashSet::new();

    for row in rows {
        let record = match row {
            Ok(record) => record,
            Err(err) => match run.policy {
                RecordPolicy::Abort => return Err(err.into()),
                RecordPolicy::Skip => {
                    log::warn!("skipping {}", err);
                    report.skipped.push(err);
                    continue;
                }
            },
        };

        let stem = record.artifact_stem();
        if !stems.insert(stem.clone()) {
            log::warn!("row {}: payslip {} already produced, not overwriting", record.row, stem);
            report.failed.push(BuildFailure {
                error: BuildError::DuplicateArtifact { stem: stem.clone() },
                employee: stem,
            });
            continue;
        }
        let text = fill_payslip(template, &record, &run.rates, &run.period);
        match publisher.publish(&text, intermediate, &stem) {
            Ok(path) => report.published.push(path),
            Err(error) => {
                log::error!("payslip for {} failed: {}", stem, error);
                report.failed.push(BuildFailure {
                    employee: stem,
                    error,
                });
            }
        }
    }

    log::info!(
        "{} payslip(s) published, {} skipped, {} failed",
        report.published.len(),
        report.skipped.len(),
        report.failed.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intermediate_name_follows_template() {
        let name = |template: &str| intermediate_name("payslip_temp", Path::new(template));
        assert_eq!(intermediate_name("madlib_gen", Path::new("story.txt")), "madlib_gen.txt");
        assert_eq!(name("dir/slip.tex"), "payslip_temp.tex");
        assert_eq!(name("slip"), "payslip_temp.tex");
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(&dir.path().join("absent.tex")).unwrap_err();
        assert!(matches!(err, FillError::MissingInputFile { .. }));
    }

    #[test]
    fn test_empty_report_is_clean() {
        assert!(BatchReport::default().is_clean());
    }
}
