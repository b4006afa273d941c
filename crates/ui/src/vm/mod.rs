mod chat_vm;
mod code_vm;
mod dashboard_vm;
mod proctor_vm;
mod quiz_vm;
mod report_vm;
mod time_fmt;
mod upload_vm;

pub use chat_vm::{BubbleVm, ChatVm, map_chat};
pub use code_vm::{ChallengeMarker, ChallengeVm, challenge_markers, difficulty_class, map_challenge};
pub use dashboard_vm::{DashboardVm, StageCardVm, map_dashboard};
pub use proctor_vm::{CheckTone, CheckVm, ProctorVm, map_proctor};
pub use quiz_vm::{QuizOptionVm, QuizQuestionVm, QuizResultVm, map_quiz_question, map_quiz_result};
pub use report_vm::{
    RecommendationVm, ReportVm, ScoreCardVm, SkillBarVm, map_report, priority_class,
};
pub use time_fmt::format_datetime;
pub use upload_vm::{UploadPhase, UploadVm, map_upload, upload_error_message};
