use std::path::Path;

use tracing::{info, warn};
use verify_core::fixtures;
use verify_core::model::{ResumeAnalysis, ResumeFile};

use crate::error::UploadServiceError;

/// Turns a file picked by the user into a validated `ResumeFile`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UploadService;

impl UploadService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Read the metadata of the file at `raw_path` and validate it.
    ///
    /// # Errors
    ///
    /// Returns `UploadServiceError::NoFile` for a blank path or a path that is
    /// not a regular file, `Io` if the metadata cannot be read, and `Rejected`
    /// if the file is not an acceptable resume.
    pub async fn inspect(&self, raw_path: &str) -> Result<ResumeFile, UploadServiceError> {
        let trimmed = raw_path.trim();
        if trimmed.is_empty() {
            return Err(UploadServiceError::NoFile);
        }
        let path = Path::new(trimmed);
        let metadata = tokio::fs::metadata(path).await?;
        if !metadata.is_file() {
            return Err(UploadServiceError::NoFile);
        }
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or(UploadServiceError::NoFile)?;

        match ResumeFile::validate(name, content_type_for(path), metadata.len()) {
            Ok(file) => {
                info!(name = file.name(), size = file.size_bytes(), "resume accepted");
                Ok(file)
            }
            Err(err) => {
                warn!(path = trimmed, error = %err, "resume rejected");
                Err(err.into())
            }
        }
    }

    /// The canned analysis shown once the simulated upload finishes.
    #[must_use]
    pub fn analysis(&self) -> ResumeAnalysis {
        fixtures::resume_analysis()
    }
}

fn content_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => Some("application/pdf"),
        "docx" => Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use verify_core::model::{ResumeKind, UploadError};

    #[tokio::test]
    async fn accepts_pdf_on_disk() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"%PDF-1.7").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let resume = UploadService::new().inspect(&path).await.unwrap();
        assert_eq!(resume.kind(), ResumeKind::Pdf);
        assert_eq!(resume.size_bytes(), 8);
    }

    #[tokio::test]
    async fn rejects_text_files() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"hello").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let err = UploadService::new().inspect(&path).await.unwrap_err();
        assert!(matches!(
            err,
            UploadServiceError::Rejected(UploadError::UnsupportedType)
        ));
    }

    #[tokio::test]
    async fn rejects_blank_and_directories() {
        let service = UploadService::new();
        assert!(matches!(
            service.inspect("   ").await,
            Err(UploadServiceError::NoFile)
        ));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_string_lossy().into_owned();
        assert!(matches!(
            service.inspect(&path).await,
            Err(UploadServiceError::NoFile)
        ));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.pdf").to_string_lossy().into_owned();
        assert!(matches!(
            UploadService::new().inspect(&path).await,
            Err(UploadServiceError::Io(_))
        ));
    }
}
