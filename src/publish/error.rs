//! Error types for building and relocating documents

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while turning rendered text into an artifact
#[derive(Debug, Error)]
pub enum BuildError {
    /// Writing, moving or creating files failed
    #[error("i/o error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The build program could not be started
    #[error("could not run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The build program exited unsuccessfully
    #[error("'{program}' failed with {status}{}", stderr_suffix(.stderr))]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    /// The build reported success but left no artifact behind
    #[error("expected artifact '{}' was not produced", .path.display())]
    MissingArtifact { path: PathBuf },

    /// An earlier document in the same run already took this output name
    #[error("output name '{stem}' is already used by an earlier document")]
    DuplicateArtifact { stem: String },
}

impl BuildError {
    /// Create an i/o error for `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn stderr_suffix(stderr: &str) -> String {
    match stderr.lines().last() {
        Some(line) if !line.trim().is_empty() => format!(": {}", line.trim()),
        _ => String::new(),
    }
}
