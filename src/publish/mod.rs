//! Writing, building and relocating rendered documents
//!
//! A rendered document goes through three steps, each of which can fail on
//! its own: it is written to an intermediate file in the work directory,
//! handed to a [`DocumentBuilder`], and the resulting artifact is moved into
//! the output directory under its final name.

mod builder;
mod error;

pub use builder::{CommandBuilder, DocumentBuilder, PassThrough};
pub use error::BuildError;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Runs the write → build → relocate steps for rendered text
pub struct Publisher {
    builder: Box<dyn DocumentBuilder>,
    work_dir: PathBuf,
    output_dir: PathBuf,
}

impl Publisher {
    /// Create a publisher writing into `work_dir` and delivering into `output_dir`
    pub fn new(
        builder: Box<dyn DocumentBuilder>,
        work_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            builder,
            work_dir: work_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Directory the finished artifacts land in
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `text` to `intermediate`, build it and relocate the artifact
    /// to `{output_dir}/{stem}.{ext}`
    pub fn publish(
        &self,
        text: &str,
        intermediate: &str,
        stem: &str,
    ) -> Result<PathBuf, BuildError> {
        let source = self.work_dir.join(intermediate);
        fs::write(&source, text).map_err(|e| BuildError::io(&source, e))?;
        log::debug!("wrote {}", source.display());

        let artifact = self.builder.build(&source)?;
        let target = relocate(&artifact, &self.output_dir, stem)?;
        log::info!("published {}", target.display());
        Ok(target)
    }
}

/// Move `artifact` into `output_dir` as `{stem}.{ext}`, keeping its extension.
///
/// The output directory is created when missing. Moves across filesystems
/// fall back to copy and remove.
pub fn relocate(artifact: &Path, output_dir: &Path, stem: &str) -> Result<PathBuf, BuildError> {
    fs::create_dir_all(output_dir).map_err(|e| BuildError::io(output_dir, e))?;

    let file_name = match artifact.extension() {
        Some(ext) => format!("{}.{}", stem, ext.to_string_lossy()),
        None => stem.to_string(),
    };
    let target = output_dir.join(file_name);

    match fs::rename(artifact, &target) {
        Ok(()) => Ok(target),
        Err(e) if is_cross_device(&e) => {
            log::debug!("cross-filesystem move, copying {}", artifact.display());
            fs::copy(artifact, &target).map_err(|e| BuildError::io(&target, e))?;
            fs::remove_file(artifact).map_err(|e| BuildError::io(artifact, e))?;
            Ok(target)
        }
        Err(e) => Err(BuildError::io(artifact, e)),
    }
}

// EXDEV on unix
fn is_cross_device(e: &io::Error) -> bool {
    e.kind() == io::ErrorKind::CrossesDevices || e.raw_os_error() == Some(18)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl DocumentBuilder for Failing {
        fn build(&self, _source: &Path) -> Result<PathBuf, BuildError> {
            Err(BuildError::Failed {
                program: "fake".into(),
                status: "exit status: 1".into(),
                stderr: String::new(),
            })
        }
    }

    #[test]
    fn test_relocate_keeps_extension() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join("payslip_temp.pdf");
        fs::write(&artifact, "pdf").unwrap();

        let out = dir.path().join("payslips");
        let target = relocate(&artifact, &out, "7_Ann_Lee").unwrap();
        assert_eq!(target, out.join("7_Ann_Lee.pdf"));
        assert!(target.exists());
        assert!(!artifact.exists());
    }

    #[test]
    fn test_relocate_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let err = relocate(&dir.path().join("nope.pdf"), dir.path(), "x").unwrap_err();
        assert!(matches!(err, BuildError::Io { .. }));
    }

    #[test]
    fn test_cross_device_detection() {
        assert!(is_cross_device(&io::Error::from(io::ErrorKind::CrossesDevices)));
        assert!(is_cross_device(&io::Error::from_raw_os_error(18)));
        assert!(!is_cross_device(&io::Error::from(io::ErrorKind::NotFound)));
        assert!(!is_cross_device(&io::Error::from(io::ErrorKind::PermissionDenied)));
    }

    #[test]
    fn test_publish_pass_through() {
        let work = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let publisher = Publisher::new(Box::new(PassThrough), work.path(), out.path());

        let target = publisher.publish("hello", "madlib_gen.tex", "madlib").unwrap();
        assert_eq!(target, out.path().join("madlib.tex"));
        assert_eq!(fs::read_to_string(target).unwrap(), "hello");
    }

    #[test]
    fn test_publish_surfaces_build_failure() {
        let work = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let publisher = Publisher::new(Box::new(Failing), work.path(), out.path());

        let err = publisher.publish("hello", "doc.tex", "doc").unwrap_err();
        assert!(matches!(err, BuildError::Failed { .. }));
        assert!(work.path().join("doc.tex").exists());
    }
}
