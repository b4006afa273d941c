use dioxus::prelude::*;
use tracing::{info, warn};
use verify_core::fixtures::RUN_OUTPUT;
use verify_core::model::{Assessment, CodingStep};

use crate::context::AppContext;
use crate::vm::{challenge_markers, map_challenge};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EditorTab {
    Code,
    Output,
}

fn current_boilerplate(assessment: &Assessment) -> String {
    assessment
        .coding()
        .current()
        .map(|challenge| challenge.boilerplate.clone())
        .unwrap_or_default()
}

/// Coding challenges. Nothing is executed: running and submitting only wait
/// out their delays.
#[component]
pub fn CodePanel(assessment: Signal<Assessment>, on_complete: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let delays = ctx.delays();
    let mut assessment = assessment;
    let mut code = use_signal(|| current_boilerplate(&assessment.read()));
    let mut output = use_signal(|| None::<&'static str>);
    let mut tab = use_signal(|| EditorTab::Code);
    let mut running = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let run = move |_| {
        if running() || submitting() {
            return;
        }
        running.set(true);
        tab.set(EditorTab::Output);
        spawn(async move {
            tokio::time::sleep(delays.code_run).await;
            output.set(Some(RUN_OUTPUT));
            running.set(false);
        });
    };

    let submit = move |_| {
        if running() || submitting() {
            return;
        }
        submitting.set(true);
        spawn(async move {
            tokio::time::sleep(delays.code_submit).await;
            let step = assessment.write().submit_challenge();
            submitting.set(false);
            match step {
                Ok(CodingStep::Next(index)) => {
                    info!(challenge = index, "solution submitted");
                    code.set(current_boilerplate(&assessment.read()));
                    output.set(None);
                    tab.set(EditorTab::Code);
                }
                Ok(CodingStep::AllCompleted) => {
                    info!("all challenges submitted");
                    on_complete.call(());
                }
                Err(err) => warn!(error = %err, "submission rejected"),
            }
        });
    };

    let (challenge, markers) = {
        let current = assessment.read();
        (
            map_challenge(current.coding()),
            challenge_markers(current.coding()),
        )
    };
    let Some(challenge) = challenge else {
        return rsx! {
            p { class: "muted", "All challenges submitted." }
        };
    };
    let busy = running() || submitting();
    let tab_class = |which: EditorTab| if tab() == which { "tab tab--active" } else { "tab" };
    let code_tab_class = tab_class(EditorTab::Code);
    let output_tab_class = tab_class(EditorTab::Output);

    rsx! {
        div { class: "card code-editor",
            div { class: "code-editor__header",
                div {
                    h3 { "{challenge.title}" }
                    p { class: "muted",
                        "Difficulty: "
                        span { class: "{challenge.difficulty_class}", "{challenge.difficulty_label}" }
                    }
                }
                div { class: "code-editor__position",
                    span { class: "muted", "{challenge.position_label}" }
                    for (index, marker) in markers.into_iter().enumerate() {
                        span { key: "{index}", class: "{marker.class()}" }
                    }
                }
            }
            p { "{challenge.description}" }

            div { class: "tabs",
                button {
                    class: code_tab_class,
                    r#type: "button",
                    onclick: move |_| tab.set(EditorTab::Code),
                    "Code"
                }
                button {
                    class: output_tab_class,
                    r#type: "button",
                    onclick: move |_| tab.set(EditorTab::Output),
                    "Output"
                }
            }

            match tab() {
                EditorTab::Code => rsx! {
                    textarea {
                        class: "code-editor__input",
                        spellcheck: "false",
                        value: "{code}",
                        oninput: move |evt| code.set(evt.value()),
                    }
                    pre { class: "code-editor__tests", "{challenge.test_notes}" }
                },
                EditorTab::Output => rsx! {
                    div { class: "code-editor__output",
                        if running() {
                            span { "Running code..." }
                        } else if let Some(text) = output() {
                            pre { "{text}" }
                        } else {
                            span { class: "muted", "Run your code to see output" }
                        }
                    }
                },
            }

            div { class: "actions",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: busy,
                    onclick: run,
                    if running() { "Running" } else { "Run Code" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy,
                    onclick: submit,
                    if submitting() {
                        "Submitting"
                    } else if challenge.completed {
                        "Completed"
                    } else {
                        "Submit Solution"
                    }
                }
            }
        }
    }
}
