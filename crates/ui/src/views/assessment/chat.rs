use dioxus::prelude::*;
use tracing::debug;
use verify_core::model::{Assessment, QaStep};

use crate::context::AppContext;
use crate::vm::map_chat;

fn ask_next(assessment: &mut Signal<Assessment>) {
    if let Err(err) = assessment.write().ask_current() {
        debug!(error = %err, "no prompt to ask");
    }
}

/// Interview chat. Prompts appear after a short "typing" pause and each
/// answer is held for a simulated evaluation before the next one.
#[component]
pub fn ChatPanel(assessment: Signal<Assessment>, on_complete: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let delays = ctx.delays();
    let mut assessment = assessment;
    let mut draft = use_signal(String::new);
    let mut busy = use_signal(|| true);

    use_future(move || async move {
        let (awaiting, finished) = {
            let current = assessment.read();
            (current.qa().awaiting_answer(), current.qa().is_finished())
        };
        if !awaiting && !finished {
            tokio::time::sleep(delays.question).await;
            ask_next(&mut assessment);
        }
        busy.set(false);
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let answer = draft();
        let step = match assessment.write().submit_answer(&answer) {
            Ok(step) => step,
            Err(err) => {
                debug!(error = %err, "answer not accepted");
                return;
            }
        };
        draft.set(String::new());
        busy.set(true);

        spawn(async move {
            tokio::time::sleep(delays.evaluation).await;
            match step {
                QaStep::Next(_) => {
                    tokio::time::sleep(delays.question).await;
                    ask_next(&mut assessment);
                    busy.set(false);
                }
                QaStep::Finished => {
                    tokio::time::sleep(delays.handoff).await;
                    on_complete.call(());
                }
            }
        });
    };

    let vm = map_chat(assessment.read().qa(), busy());
    let can_send = vm.can_answer && !draft.read().trim().is_empty();

    rsx! {
        div { class: "chat",
            div { class: "chat__header",
                h3 { "Technical Assessment" }
                span { class: "muted", "{vm.progress_label}" }
            }
            div { class: "chat__log",
                for bubble in vm.bubbles {
                    div { key: "{bubble.key}", class: "{bubble.class}",
                        span { class: "bubble__author", "{bubble.author}" }
                        p { "{bubble.text}" }
                    }
                }
                if busy() && !vm.finished {
                    div { class: "bubble bubble--assistant bubble--typing", "..." }
                }
            }
            form { class: "chat__input", onsubmit: submit,
                textarea {
                    placeholder: "Type your answer...",
                    value: "{draft}",
                    disabled: !vm.can_answer,
                    oninput: move |evt| draft.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: !can_send,
                    "Send"
                }
            }
        }
    }
}
