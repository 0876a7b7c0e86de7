//! Document builders that turn rendered text into an artifact

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;

use super::error::BuildError;

/// Turns a rendered source file into a finished artifact
pub trait DocumentBuilder {
    /// Build the document at `source`, returning the artifact path
    fn build(&self, source: &Path) -> Result<PathBuf, BuildError>;
}

/// Publishes the rendered source itself, without building anything
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl DocumentBuilder for PassThrough {
    fn build(&self, source: &Path) -> Result<PathBuf, BuildError> {
        if !source.exists() {
            return Err(BuildError::MissingArtifact {
                path: source.to_path_buf(),
            });
        }
        Ok(source.to_path_buf())
    }
}

/// Runs an external program on the source file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CommandBuilder {
    /// Program to run
    pub program: String,
    /// Arguments placed before the source path
    pub args: Vec<String>,
    /// Extension of the artifact the program writes next to the source
    pub artifact_extension: String,
}

impl Default for CommandBuilder {
    fn default() -> Self {
        Self {
            program: "latexmk".to_string(),
            args: [
                "-cd",
                "-f",
                "-lualatex",
                "-interaction=nonstopmode",
                "-synctex=1",
            ]
            .iter()
            .map(|a| a.to_string())
            .collect(),
            artifact_extension: "pdf".to_string(),
        }
    }
}

impl CommandBuilder {
    /// Create a builder running `program` with no extra arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            artifact_extension: "pdf".to_string(),
        }
    }

    /// Set the arguments passed before the source path
    pub fn with_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set the artifact extension
    pub fn with_artifact_extension(mut self, extension: impl Into<String>) -> Self {
        self.artifact_extension = extension.into();
        self
    }
}

impl DocumentBuilder for CommandBuilder {
    fn build(&self, source: &Path) -> Result<PathBuf, BuildError> {
        log::debug!("running {} on {}", self.program, source.display());
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(source)
            .output()
            .map_err(|e| BuildError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BuildError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        let artifact = source.with_extension(&self.artifact_extension);
        if !artifact.exists() {
            return Err(BuildError::MissingArtifact { path: artifact });
        }
        Ok(artifact)
    }
}
