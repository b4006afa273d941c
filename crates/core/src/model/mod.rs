mod assessment;
mod background;
mod destination;
mod identity;
mod permission;
mod quiz;
mod report;
mod session;
mod stage;
mod upload;

pub use assessment::{
    Assessment, AssessmentError, AssessmentPhase, ChallengeId, CodeChallenge, CodingFlow,
    CodingStep, Difficulty, Message, MessageKind, QaFlow, QaStep, Role,
};
pub use background::{BackgroundCheck, Verification, WorkExperience};
pub use destination::Destination;
pub use identity::{IdentityError, UserIdentity, UserIdentityDraft};
pub use permission::{
    Capability, CaptureStatus, DenyReason, FaceScanStatus, GateError, PermissionGate,
    PermissionState, RequestTicket, ScanPhase,
};
pub use quiz::{QuizQuestion, QuizStep, SkillQuiz};
pub use report::{Priority, Recommendation, ReportSummary, SkillScore};
pub use session::Session;
pub use stage::{Stage, StageError, StageId, StageProgress, StageStatus};
pub use upload::{MAX_RESUME_BYTES, ResumeAnalysis, ResumeFile, ResumeKind, UploadError, UploadProgress};
