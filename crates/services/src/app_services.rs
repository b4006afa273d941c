use std::sync::Arc;

use storage::repository::Storage;
use tracing::info;
use verify_core::model::UserIdentity;

use crate::Clock;
use crate::access_gate::AccessGate;
use crate::config::{Delays, ProctorConfig};
use crate::error::{AppServicesError, SessionStoreError};
use crate::proctor::{MediaDevices, ProctorSession, SimulatedMediaDevices};
use crate::progress_service::ProgressService;
use crate::report_service::ReportService;
use crate::session_store::SessionStore;
use crate::upload_service::UploadService;

/// Assembles app-facing services over one `Storage`.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    delays: Delays,
    proctor_config: ProctorConfig,
    devices: Arc<dyn MediaDevices>,
    sessions: Arc<SessionStore>,
    access: Arc<AccessGate>,
    progress: Arc<ProgressService>,
    upload: Arc<UploadService>,
    reports: Arc<ReportService>,
}

impl AppServices {
    #[must_use]
    pub fn new(
        storage: &Storage,
        clock: Clock,
        delays: Delays,
        proctor_config: ProctorConfig,
        devices: Arc<dyn MediaDevices>,
    ) -> Self {
        let sessions = Arc::new(SessionStore::new(clock, Arc::clone(&storage.local_state)));
        let access = Arc::new(AccessGate::new(Arc::clone(&sessions)));
        Self {
            clock,
            delays,
            proctor_config,
            devices,
            sessions,
            access,
            progress: Arc::new(ProgressService::new()),
            upload: Arc::new(UploadService::new()),
            reports: Arc::new(ReportService::new(clock)),
        }
    }

    /// Services over in-memory storage with instant delays and devices that
    /// grant everything.
    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::new(
            &Storage::in_memory(),
            clock,
            Delays::instant(),
            ProctorConfig::instant(),
            Arc::new(SimulatedMediaDevices::granting()),
        )
    }

    /// Build services backed by `SQLite` storage and restore the persisted
    /// session.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        delays: Delays,
        proctor_config: ProctorConfig,
        devices: Arc<dyn MediaDevices>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let services = Self::new(&storage, clock, delays, proctor_config, devices);
        services.sessions.restore().await;
        Ok(services)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn delays(&self) -> Delays {
        self.delays
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<SessionStore> {
        Arc::clone(&self.sessions)
    }

    #[must_use]
    pub fn access(&self) -> Arc<AccessGate> {
        Arc::clone(&self.access)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn upload(&self) -> Arc<UploadService> {
        Arc::clone(&self.upload)
    }

    #[must_use]
    pub fn reports(&self) -> Arc<ReportService> {
        Arc::clone(&self.reports)
    }

    #[must_use]
    pub fn current_identity(&self) -> Option<UserIdentity> {
        self.sessions.identity()
    }

    /// A fresh proctoring session. Each assessment visit gets its own, and
    /// dropping it releases the devices.
    #[must_use]
    pub fn proctor_session(&self) -> ProctorSession {
        ProctorSession::new(Arc::clone(&self.devices), self.proctor_config)
    }

    /// Sign out and drop everything tied to the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` if the persisted session cannot be removed.
    /// Transient state is cleared regardless.
    pub async fn logout(&self) -> Result<(), SessionStoreError> {
        self.progress.reset();
        self.reports.clear();
        let result = self.access.logout().await;
        info!("transient progress cleared");
        result
    }
}
