//! Top-level error type for the generators

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::payroll::RecordError;
use crate::publish::BuildError;
use crate::template::TemplateError;

/// Errors that stop a generator run
#[derive(Debug, Error)]
pub enum FillError {
    /// A template or timesheet could not be read
    #[error("cannot read input file '{}': {source}", .path.display())]
    MissingInputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid word lists or slots
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Bad timesheet shape, or a bad row under the abort policy
    #[error(transparent)]
    Record(#[from] RecordError),

    /// The single document of a run could not be built
    #[error("build failed: {0}")]
    Build(#[from] BuildError),

    /// Unreadable settings file
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FillError {
    /// Create a missing input file error
    pub fn missing_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::MissingInputFile {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_display() {
        let err = FillError::missing_input(
            "timesheet.csv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(
            err.to_string(),
            "cannot read input file 'timesheet.csv': not found"
        );
    }

    #[test]
    fn test_template_error_is_transparent() {
        let err: FillError = TemplateError::empty_candidates("noun").into();
        assert_eq!(err.to_string(), "candidate list for category 'noun' is empty");
    }
}
