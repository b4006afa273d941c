use services::UploadServiceError;
use verify_core::model::{ResumeAnalysis, ResumeFile, UploadError, UploadProgress};

/// Where the upload page is in its simulated pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Uploading {
        file: ResumeFile,
        progress: UploadProgress,
    },
    Analyzing {
        file: ResumeFile,
    },
    Analyzed {
        file: ResumeFile,
        analysis: ResumeAnalysis,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadVm {
    pub file_label: Option<String>,
    pub status: &'static str,
    pub progress_percent: Option<u8>,
    pub analysis: Option<ResumeAnalysis>,
    pub can_pick: bool,
    pub can_continue: bool,
}

#[must_use]
pub fn map_upload(phase: &UploadPhase) -> UploadVm {
    let label = |file: &ResumeFile| format!("{} ({})", file.name(), file.size_label());
    match phase {
        UploadPhase::Idle => UploadVm {
            file_label: None,
            status: "Upload your resume",
            progress_percent: None,
            analysis: None,
            can_pick: true,
            can_continue: false,
        },
        UploadPhase::Uploading { file, progress } => UploadVm {
            file_label: Some(label(file)),
            status: "Uploading...",
            progress_percent: Some(progress.percent()),
            analysis: None,
            can_pick: false,
            can_continue: false,
        },
        UploadPhase::Analyzing { file } => UploadVm {
            file_label: Some(label(file)),
            status: "Analyzing...",
            progress_percent: Some(100),
            analysis: None,
            can_pick: false,
            can_continue: false,
        },
        UploadPhase::Analyzed { file, analysis } => UploadVm {
            file_label: Some(label(file)),
            status: "Upload complete",
            progress_percent: None,
            analysis: Some(analysis.clone()),
            can_pick: true,
            can_continue: true,
        },
    }
}

/// User-facing text for a rejected pick.
#[must_use]
pub fn upload_error_message(err: &UploadServiceError) -> String {
    match err {
        UploadServiceError::NoFile => "Choose a resume file to upload.".to_owned(),
        UploadServiceError::Rejected(UploadError::TooLarge) => {
            "That file is larger than 5 MB.".to_owned()
        }
        UploadServiceError::Rejected(UploadError::Empty) => "That file is empty.".to_owned(),
        UploadServiceError::Rejected(_) => "Please upload a PDF or DOCX file".to_owned(),
        UploadServiceError::Io(_) => "That file could not be read.".to_owned(),
        _ => "Something went wrong. Please try again.".to_owned(),
    }
}
