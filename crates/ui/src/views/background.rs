use dioxus::prelude::*;
use dioxus_router::Link;
use verify_core::fixtures;
use verify_core::model::{BackgroundCheck, StageId, Verification};

use crate::context::AppContext;
use crate::routes::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CheckState {
    Pending,
    Checking,
    Done(BackgroundCheck),
}

#[component]
pub fn BackgroundView() -> Element {
    let ctx = use_context::<AppContext>();
    let delays = ctx.delays();
    let timeline = use_hook(fixtures::work_history);
    let mut state = use_signal(|| CheckState::Pending);

    let verify_timeline = timeline.clone();
    let verify_all = move |_| {
        if state() != CheckState::Pending {
            return;
        }
        state.set(CheckState::Checking);
        let ctx = ctx.clone();
        let timeline = verify_timeline.clone();
        spawn(async move {
            tokio::time::sleep(delays.background_verify).await;
            state.set(CheckState::Done(BackgroundCheck::from_timeline(&timeline)));
            ctx.complete_stage(StageId::Background);
        });
    };

    let revealed = matches!(state(), CheckState::Done(_));

    rsx! {
        div { class: "page page--background",
            header { class: "page-heading",
                span { class: "chip", "Step 4" }
                h1 { "Background Verification" }
                p { "Explore your professional history and verify the information in your resume." }
            }

            section { class: "card timeline",
                div { class: "timeline__header",
                    h2 { "Background Timeline" }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: state() != CheckState::Pending,
                        onclick: verify_all,
                        if state() == CheckState::Checking { "Verifying..." } else { "Verify All" }
                    }
                }

                ol { class: "timeline__list",
                    for (index, entry) in timeline.iter().enumerate() {
                        li { key: "{index}", class: "timeline__entry",
                            span { class: "timeline__period", "{entry.period}" }
                            h3 { "{entry.role}" }
                            p { class: "timeline__company", "{entry.company}" }
                            p { "{entry.description}" }
                            if revealed {
                                match &entry.verification {
                                    Verification::Verified => rsx! {
                                        span { class: "badge badge--ok", "Verified" }
                                    },
                                    Verification::Mismatch { detail } => rsx! {
                                        span { class: "badge badge--warn", "Mismatch Detected" }
                                        p { class: "timeline__mismatch", "{detail}" }
                                    },
                                }
                            }
                        }
                    }
                }

                if let CheckState::Done(check) = state() {
                    div { class: "timeline__summary",
                        h3 { "Background Verification Complete" }
                        p { "{check.summary()}" }
                        Link { class: "btn btn-primary", to: Route::Report {}, "View Final Report" }
                    }
                }
            }
        }
    }
}
