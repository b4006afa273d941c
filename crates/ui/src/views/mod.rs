mod assessment;
mod background;
mod dashboard;
mod home;
mod login;
mod not_found;
mod report;
mod state;
mod upload;
mod verify;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assessment::{AssessmentView, ChatPanel, CodePanel, ProctorPanel};
pub use background::BackgroundView;
pub use dashboard::DashboardView;
pub use home::HomeView;
pub use login::LoginView;
pub use not_found::NotFoundView;
pub use report::ReportView;
pub use state::{ViewError, ViewState};
pub use upload::UploadView;
pub use verify::VerifyView;
