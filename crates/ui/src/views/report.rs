use std::path::PathBuf;

use dioxus::prelude::*;
use tracing::warn;
use verify_core::model::StageId;

use crate::context::{AppContext, UiState};
use crate::views::{ViewError, ViewState};
use crate::vm::{RecommendationVm, map_report};

const DEFAULT_EXPORT_PATH: &str = "verification-report.json";

#[component]
pub fn ReportView() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_context::<UiState>();

    let mark_ctx = ctx.clone();
    use_hook(move || mark_ctx.complete_stage(StageId::Report));

    let identity = ui.identity.read().clone();
    let report = ctx.reports().build(identity, &ctx.progress().snapshot());
    let vm = map_report(&report);

    let mut export_path = use_signal(|| DEFAULT_EXPORT_PATH.to_owned());
    let mut export = use_signal(|| ViewState::<PathBuf>::Idle);
    let mut show_details = use_signal(|| false);

    let download = move |_| {
        if export.read().is_loading() {
            return;
        }
        let path = PathBuf::from(export_path().trim());
        if path.as_os_str().is_empty() {
            export.set(ViewState::Error(ViewError::Export));
            return;
        }
        export.set(ViewState::Loading);
        let reports = ctx.reports();
        let report = report.clone();
        spawn(async move {
            match reports.export_json(&report, &path).await {
                Ok(()) => export.set(ViewState::Ready(path)),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "report export failed");
                    export.set(ViewState::Error(ViewError::Export));
                }
            }
        });
    };

    rsx! {
        div { class: "page page--report",
            header { class: "page-heading",
                span { class: "chip", "Final Step" }
                h1 { "Interactive Verification Report" }
                p {
                    "Your comprehensive verification report with insights and recommendations. Explore it in detail."
                }
            }

            section { class: "card report-overview",
                div { class: "report-overview__score",
                    div { class: "score-ring", "{vm.overall}" }
                    div {
                        h2 { "Overall Verification Score" }
                        p { class: "muted", "Based on resume quality, skill verification, and background check" }
                        p { class: "muted", "{vm.candidate} · Generated {vm.generated_at}" }
                    }
                }
                div { class: "grid grid--3",
                    for card in vm.scores {
                        div { key: "{card.label}", class: "score-card",
                            span { "{card.label}" }
                            strong { "{card.value}%" }
                        }
                    }
                }
                div { class: "grid grid--2",
                    div {
                        h3 { "Strengths" }
                        ul {
                            for item in vm.strengths {
                                li { key: "{item}", "{item}" }
                            }
                        }
                    }
                    div {
                        h3 { "Areas for Improvement" }
                        ul {
                            for item in vm.improvements {
                                li { key: "{item}", "{item}" }
                            }
                        }
                    }
                }
                ul { class: "report-facts",
                    li { "{vm.quiz_line}" }
                    li { "{vm.background_line}" }
                    li { "{vm.progress_line}" }
                }

                form {
                    class: "form form--inline",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                    },
                    input {
                        r#type: "text",
                        value: "{export_path}",
                        oninput: move |evt| export_path.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: export.read().is_loading(),
                        onclick: download,
                        "Download Report"
                    }
                }
                match export() {
                    ViewState::Idle => rsx! {},
                    ViewState::Loading => rsx! {
                        p { class: "muted", "Saving report..." }
                    },
                    ViewState::Ready(path) => rsx! {
                        p { class: "notice", "Report downloaded successfully to {path.display()}" }
                    },
                    ViewState::Error(err) => rsx! {
                        p { class: "form-error", "{err.message()}" }
                    },
                }
            }

            section { class: "card",
                h2 { "Skills Analysis" }
                p { "Based on our skill verification process, here's a breakdown of your technical competencies:" }
                div { class: "skill-bars",
                    for skill in vm.skills {
                        div { key: "{skill.name}", class: "skill-row",
                            span { "{skill.name}" }
                            div { class: "progress-bar",
                                div { class: "progress-bar__fill", style: "{skill.style}" }
                            }
                            span { "{skill.value}%" }
                        }
                    }
                }
            }

            section { class: "card",
                div { class: "section-header",
                    h2 { "AI Recommendations" }
                    button {
                        class: "btn btn-link",
                        r#type: "button",
                        onclick: move |_| show_details.toggle(),
                        if show_details() { "Hide Details" } else { "Show Details" }
                    }
                }
                if show_details() {
                    p { class: "muted",
                        "Overall, your verification shows strong alignment between your resume, skills, and background. "
                        "The minor discrepancy in your work history at CreativeTech Studio should be clarified."
                    }
                }
                ul { class: "recommendations",
                    for rec in vm.recommendations {
                        RecommendationCard { key: "{rec.title}", rec }
                    }
                }
            }
        }
    }
}

#[component]
fn RecommendationCard(rec: RecommendationVm) -> Element {
    rsx! {
        li { class: "recommendation",
            div { class: "recommendation__header",
                h3 { "{rec.title}" }
                span { class: "{rec.priority_class}", "{rec.priority_label}" }
            }
            p { "{rec.description}" }
        }
    }
}
