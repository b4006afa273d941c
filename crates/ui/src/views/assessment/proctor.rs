use std::sync::Arc;

use dioxus::prelude::*;
use tracing::{debug, info, warn};
use verify_core::model::Capability;

use crate::context::AppContext;
use crate::vm::{CheckVm, map_proctor};

/// Camera, microphone and face checks. Owns the proctoring session, so the
/// devices are released when this panel unmounts.
#[component]
pub fn ProctorPanel(on_ready: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_hook(|| Arc::new(ctx.proctor_session()));
    let mut snapshot = use_signal(|| session.snapshot());

    let drop_session = Arc::clone(&session);
    use_drop(move || {
        drop_session.release();
        debug!("proctoring devices released");
    });

    let watch_session = Arc::clone(&session);
    use_future(move || {
        let session = Arc::clone(&watch_session);
        async move {
            let mut updates = session.subscribe();
            loop {
                let current = *updates.borrow_and_update();
                snapshot.set(current);
                if session.take_ready() {
                    info!("proctoring ready");
                    on_ready.call(());
                }
                if updates.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    let request_session = Arc::clone(&session);
    let request = move |capability: Capability| {
        let session = Arc::clone(&request_session);
        spawn(async move {
            let status = session.request(capability).await;
            debug!(?capability, ?status, "capability request settled");
        });
    };

    let cancel_session = Arc::clone(&session);
    let cancel = move |capability: Capability| {
        if cancel_session.cancel_request(capability) {
            debug!(?capability, "capability request cancelled");
        }
    };

    let scan_session = Arc::clone(&session);
    let scan = move || {
        let session = Arc::clone(&scan_session);
        spawn(async move {
            if let Err(err) = session.run_face_scan().await {
                warn!(error = %err, "face scan refused");
            }
        });
    };

    let vm = map_proctor(&snapshot());
    let request_camera = request.clone();
    let cancel_camera = cancel.clone();

    rsx! {
        section { class: "card proctor",
            header { class: "proctor__header",
                h2 { "Proctoring Setup" }
                if vm.ready {
                    span { class: "badge badge--live", "Proctoring Active" }
                }
            }
            ul { class: "checklist",
                CheckRow {
                    check: vm.camera,
                    on_request: move |()| request_camera(Capability::Camera),
                    on_cancel: move |()| cancel_camera(Capability::Camera),
                }
                CheckRow {
                    check: vm.microphone,
                    on_request: move |()| request(Capability::Microphone),
                    on_cancel: move |()| cancel(Capability::Microphone),
                }
                CheckRow {
                    check: vm.face,
                    on_request: move |()| scan(),
                    on_cancel: move |()| {},
                }
            }
        }
    }
}

#[component]
fn CheckRow(check: CheckVm, on_request: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    rsx! {
        li { class: "{check.tone.class()}",
            div { class: "check__text",
                strong { "{check.label}" }
                span { class: "check__state", "{check.state}" }
                if let Some(notice) = check.notice.clone() {
                    span { class: "check__notice", "{notice}" }
                }
            }
            div { class: "check__actions",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !check.can_request,
                    onclick: move |_| on_request.call(()),
                    "{check.action_label}"
                }
                if check.can_cancel {
                    button {
                        class: "btn btn-link",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
