use std::sync::Arc;

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use services::proctor::ProctorSession;
use services::{
    AccessGate, AppServices, Delays, ProgressService, ReportService, SessionStore, UploadService,
};
use verify_core::model::{StageId, UserIdentity};

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn services(&self) -> AppServices;
}

impl UiApp for AppServices {
    fn services(&self) -> AppServices {
        self.clone()
    }
}

#[derive(Clone)]
pub struct AppContext {
    services: AppServices,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            services: app.services(),
        }
    }

    #[must_use]
    pub fn services(&self) -> &AppServices {
        &self.services
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<SessionStore> {
        self.services.sessions()
    }

    #[must_use]
    pub fn access(&self) -> Arc<AccessGate> {
        self.services.access()
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    #[must_use]
    pub fn upload(&self) -> Arc<UploadService> {
        self.services.upload()
    }

    #[must_use]
    pub fn reports(&self) -> Arc<ReportService> {
        self.services.reports()
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.services.clock().now()
    }

    #[must_use]
    pub fn delays(&self) -> Delays {
        self.services.delays()
    }

    #[must_use]
    pub fn proctor_session(&self) -> ProctorSession {
        self.services.proctor_session()
    }

    /// Record a finished stage. Failures are logged, never surfaced.
    pub fn complete_stage(&self, id: StageId) {
        if let Err(err) = self.services.progress().mark_completed(id) {
            tracing::warn!(stage = %id, error = %err, "could not record stage");
        }
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Reactive state shared by every view.
#[derive(Clone, Copy)]
pub struct UiState {
    /// Mirrors the session store so layouts re-render on sign in and out.
    pub identity: Signal<Option<UserIdentity>>,
}

/// Provide `UiState` below the calling component, seeded from the session.
pub fn use_ui_state_provider() -> UiState {
    let ctx = use_context::<AppContext>();
    let identity = use_signal(move || ctx.sessions().identity());
    use_context_provider(|| UiState { identity })
}
