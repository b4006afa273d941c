use dioxus::prelude::*;
use dioxus::core::Task;
use dioxus_router::Link;
use verify_core::model::{StageId, UploadProgress};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{UploadPhase, map_upload, upload_error_message};

#[component]
pub fn UploadView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut path = use_signal(String::new);
    let mut phase = use_signal(UploadPhase::default);
    let mut error = use_signal(|| None::<String>);
    let mut running = use_signal(|| None::<Task>);

    let start_ctx = ctx.clone();
    let start = move |evt: FormEvent| {
        evt.prevent_default();
        if let Some(previous) = running.write().take() {
            previous.cancel();
        }
        error.set(None);

        let ctx = start_ctx.clone();
        let upload = ctx.upload();
        let delays = ctx.delays();
        let raw = path();
        let task = spawn(async move {
            let file = match upload.inspect(&raw).await {
                Ok(file) => file,
                Err(err) => {
                    error.set(Some(upload_error_message(&err)));
                    phase.set(UploadPhase::Idle);
                    return;
                }
            };

            let mut progress = UploadProgress::default();
            phase.set(UploadPhase::Uploading {
                file: file.clone(),
                progress,
            });
            while !progress.is_done() {
                tokio::time::sleep(delays.upload_tick).await;
                progress = progress.tick();
                phase.set(UploadPhase::Uploading {
                    file: file.clone(),
                    progress,
                });
            }

            phase.set(UploadPhase::Analyzing { file: file.clone() });
            tokio::time::sleep(delays.analysis).await;
            phase.set(UploadPhase::Analyzed {
                file,
                analysis: upload.analysis(),
            });
            ctx.complete_stage(StageId::Upload);
        });
        running.set(Some(task));
    };

    let reset = move |_| {
        if let Some(task) = running.write().take() {
            task.cancel();
        }
        phase.set(UploadPhase::Idle);
        error.set(None);
        path.set(String::new());
    };

    let vm = map_upload(&phase.read());

    rsx! {
        div { class: "page page--upload",
            header { class: "page-heading",
                span { class: "chip", "Step 1" }
                h1 { "Upload Your Resume" }
                p { "Upload your resume and get instant AI-powered analysis and feedback." }
            }

            section { class: "card upload-area",
                h2 { "{vm.status}" }
                p { class: "muted", "Supports PDF, DOCX (Max 5MB)" }

                if vm.can_pick && vm.analysis.is_none() {
                    form { class: "form form--inline", onsubmit: start,
                        input {
                            r#type: "text",
                            placeholder: "Path to your resume, e.g. ~/Documents/resume.pdf",
                            value: "{path}",
                            oninput: move |evt| path.set(evt.value()),
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Select File" }
                    }
                }

                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }

                if let Some(label) = vm.file_label.clone() {
                    p { class: "upload-file", "{label}" }
                }

                if let Some(percent) = vm.progress_percent {
                    div { class: "progress-bar",
                        div { class: "progress-bar__fill", style: "width: {percent}%" }
                    }
                    span { class: "muted", "{percent}%" }
                }

                if let Some(analysis) = vm.analysis.clone() {
                    div { class: "analysis",
                        p { class: "analysis__done", "Your resume has been analyzed" }
                        h3 { "Resume Analysis" }
                        div { class: "score-ring", "{analysis.score}" }
                        p { "{analysis.feedback}" }
                        h4 { "Recommended Improvements:" }
                        ul {
                            for item in analysis.improvements {
                                li { key: "{item}", "{item}" }
                            }
                        }
                    }
                    div { class: "actions",
                        button { class: "btn btn-secondary", r#type: "button", onclick: reset,
                            "Upload Another"
                        }
                        if vm.can_continue {
                            Link { class: "btn btn-primary", to: Route::Assessment {},
                                "Start Technical Assessment"
                            }
                        }
                    }
                }
            }
        }
    }
}
