use dioxus::prelude::*;
use dioxus_router::Link;
use verify_core::model::StageStatus;

use crate::context::{AppContext, UiState};
use crate::routes::Route;
use crate::vm::{StageCardVm, map_dashboard};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();
    let identity = ui.identity.read().clone();
    let progress = ctx.progress().snapshot();
    let vm = map_dashboard(identity.as_ref(), &progress);

    rsx! {
        div { class: "page page--dashboard",
            header { class: "page-heading",
                span { class: "chip", "Dashboard" }
                h1 { "{vm.greeting}" }
                p { "Track your verification progress and pick up where you left off." }
            }

            section { class: "card progress-card",
                div { class: "progress-card__header",
                    h2 { "Verification Progress" }
                    span { "{vm.completed} of {vm.total} completed" }
                }
                div { class: "progress-bar",
                    div { class: "progress-bar__fill", style: "width: {vm.percent}%" }
                }
                Link {
                    class: "btn btn-primary",
                    to: Route::from(vm.continue_to),
                    "{vm.continue_label}"
                }
            }

            ol { class: "stage-list",
                for card in vm.cards {
                    StageCard { key: "{card.step}", card }
                }
            }
        }
    }
}

#[component]
fn StageCard(card: StageCardVm) -> Element {
    let class = match card.status {
        StageStatus::Completed => "stage stage--completed",
        StageStatus::Current => "stage stage--current",
        StageStatus::NotStarted => "stage stage--waiting",
    };

    rsx! {
        li { class: "{class}",
            span { class: "stage__step", "{card.step}" }
            div { class: "stage__body",
                h3 { "{card.title}" }
                p { "{card.blurb}" }
                span { class: "stage__status", "{card.status_label}" }
            }
            if let Some(action) = card.action_label {
                Link { class: "btn btn-secondary", to: Route::from(card.destination), "{action}" }
            }
        }
    }
}
