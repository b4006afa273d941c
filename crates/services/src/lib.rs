#![forbid(unsafe_code)]

pub mod access_gate;
pub mod app_services;
pub mod config;
pub mod error;
pub mod proctor;
pub mod progress_service;
pub mod report_service;
pub mod session_store;
pub mod upload_service;

pub use verify_core::Clock;

pub use access_gate::{AccessGate, GateDecision};
pub use app_services::AppServices;
pub use config::{Delays, ProctorConfig};
pub use error::{AppServicesError, ReportServiceError, SessionStoreError, UploadServiceError};
pub use progress_service::ProgressService;
pub use report_service::{ReportService, VerificationReport};
pub use session_store::SessionStore;
pub use upload_service::UploadService;
