use std::sync::Arc;

use services::{AppServices, Clock, Delays, GateDecision, ProctorConfig};
use services::proctor::SimulatedMediaDevices;
use storage::repository::{AUTH_USER_KEY, LocalStateRepository, Storage};
use verify_core::model::{Destination, StageId, UserIdentityDraft};
use verify_core::time::fixed_now;

fn build(storage: &Storage) -> AppServices {
    AppServices::new(
        storage,
        Clock::fixed(fixed_now()),
        Delays::instant(),
        ProctorConfig::instant(),
        Arc::new(SimulatedMediaDevices::granting()),
    )
}

#[tokio::test]
async fn signed_out_dashboard_visit_returns_after_login() {
    let services = build(&Storage::in_memory());
    let access = services.access();

    let decision = access.guard(Destination::from_path("/dashboard"));
    assert_eq!(
        decision,
        GateDecision::RedirectToLogin {
            from: Destination::Dashboard
        }
    );

    let identity = UserIdentityDraft::new("Ada", "ada@example.com")
        .validate(fixed_now())
        .unwrap();
    let next = access.complete_login(identity).await.unwrap();
    assert_eq!(next, Destination::Dashboard);
    assert_eq!(access.guard(Destination::Dashboard), GateDecision::Allow);
}

#[tokio::test]
async fn login_survives_a_restart() {
    let storage = Storage::in_memory();
    let first = build(&storage);
    let identity = UserIdentityDraft::new("Ada", "ada@example.com")
        .validate(fixed_now())
        .unwrap();
    first.access().complete_login(identity.clone()).await.unwrap();

    let second = build(&storage);
    assert!(!second.sessions().is_authenticated());
    assert_eq!(second.sessions().restore().await, Some(identity));
    assert!(second.sessions().is_authenticated());
}

#[tokio::test]
async fn logout_clears_persisted_and_transient_state() {
    let storage = Storage::in_memory();
    let services = build(&storage);
    let identity = UserIdentityDraft::new("Ada", "ada@example.com")
        .validate(fixed_now())
        .unwrap();
    services.access().complete_login(identity).await.unwrap();
    services.progress().mark_completed(StageId::Upload).unwrap();

    services.logout().await.unwrap();

    assert!(storage.local_state.load(AUTH_USER_KEY).await.unwrap().is_none());
    assert_eq!(services.progress().snapshot().completed_count(), 0);
    assert_eq!(
        services.access().guard(Destination::Upload),
        GateDecision::RedirectToLogin {
            from: Destination::Upload
        }
    );

    let restarted = build(&storage);
    assert_eq!(restarted.sessions().restore().await, None);
}

#[tokio::test]
async fn sqlite_backed_services_restore_on_start() {
    let url = "sqlite:file:memdb_services_restore?mode=memory&cache=shared";
    let first = AppServices::new_sqlite(
        url,
        Clock::fixed(fixed_now()),
        Delays::instant(),
        ProctorConfig::instant(),
        Arc::new(SimulatedMediaDevices::granting()),
    )
    .await
    .unwrap();
    let identity = UserIdentityDraft::new("Grace", "grace@example.com")
        .validate(fixed_now())
        .unwrap();
    first.sessions().login(identity.clone()).await.unwrap();

    let second = AppServices::new_sqlite(
        url,
        Clock::fixed(fixed_now()),
        Delays::instant(),
        ProctorConfig::instant(),
        Arc::new(SimulatedMediaDevices::granting()),
    )
    .await
    .unwrap();
    assert_eq!(second.current_identity(), Some(identity));
}
