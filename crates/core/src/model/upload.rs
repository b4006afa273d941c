use serde::Serialize;
use thiserror::Error;

/// Largest resume accepted, in bytes.
pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UploadError {
    #[error("please upload a PDF or DOCX file")]
    UnsupportedType,
    #[error("file is larger than 5 MB")]
    TooLarge,
    #[error("file is empty")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResumeKind {
    Pdf,
    Docx,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    name: String,
    size_bytes: u64,
    kind: ResumeKind,
}

impl ResumeFile {
    /// Accepts PDFs (by content type or extension) and `.docx` documents.
    ///
    /// # Errors
    ///
    /// Returns `UploadError` for other types, empty files, or files over
    /// `MAX_RESUME_BYTES`.
    pub fn validate(
        name: impl Into<String>,
        content_type: Option<&str>,
        size_bytes: u64,
    ) -> Result<Self, UploadError> {
        let name = name.into();
        let lower = name.to_lowercase();
        let kind = if content_type == Some("application/pdf") || lower.ends_with(".pdf") {
            ResumeKind::Pdf
        } else if lower.ends_with(".docx") {
            ResumeKind::Docx
        } else {
            return Err(UploadError::UnsupportedType);
        };
        if size_bytes == 0 {
            return Err(UploadError::Empty);
        }
        if size_bytes > MAX_RESUME_BYTES {
            return Err(UploadError::TooLarge);
        }
        Ok(Self {
            name,
            size_bytes,
            kind,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    #[must_use]
    pub fn kind(&self) -> ResumeKind {
        self.kind
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / 1024.0 / 1024.0)
    }
}

/// Simulated upload progress, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UploadProgress(u8);

impl UploadProgress {
    pub const STEP: u8 = 5;

    #[must_use]
    pub fn percent(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_done(self) -> bool {
        self.0 >= 100
    }

    /// Next tick, saturating at 100.
    #[must_use]
    pub fn tick(self) -> Self {
        Self(self.0.saturating_add(Self::STEP).min(100))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeAnalysis {
    pub score: u8,
    pub feedback: String,
    pub improvements: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_pdf_by_content_type_or_extension() {
        let by_type = ResumeFile::validate("resume", Some("application/pdf"), 10).unwrap();
        assert_eq!(by_type.kind(), ResumeKind::Pdf);
        let by_ext = ResumeFile::validate("Resume.PDF", None, 10).unwrap();
        assert_eq!(by_ext.kind(), ResumeKind::Pdf);
    }

    #[test]
    fn accepts_docx() {
        let file = ResumeFile::validate("cv.docx", None, 2048).unwrap();
        assert_eq!(file.kind(), ResumeKind::Docx);
    }

    #[test]
    fn rejects_other_types_and_sizes() {
        assert_eq!(
            ResumeFile::validate("cv.txt", Some("text/plain"), 10),
            Err(UploadError::UnsupportedType)
        );
        assert_eq!(
            ResumeFile::validate("cv.pdf", None, 0),
            Err(UploadError::Empty)
        );
        assert_eq!(
            ResumeFile::validate("cv.pdf", None, MAX_RESUME_BYTES + 1),
            Err(UploadError::TooLarge)
        );
    }

    #[test]
    fn size_label_in_megabytes() {
        let file = ResumeFile::validate("cv.pdf", None, 1_572_864).unwrap();
        assert_eq!(file.size_label(), "1.50 MB");
    }

    #[test]
    fn progress_reaches_hundred_in_twenty_ticks() {
        let mut progress = UploadProgress::default();
        for _ in 0..20 {
            progress = progress.tick();
        }
        assert!(progress.is_done());
        assert_eq!(progress.tick().percent(), 100);
    }
}
