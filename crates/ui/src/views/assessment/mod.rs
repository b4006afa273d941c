mod chat;
mod code;
mod proctor;

use dioxus::prelude::*;
use dioxus_router::Link;
use tracing::{info, warn};
use verify_core::fixtures;
use verify_core::model::{Assessment, AssessmentPhase};

use crate::routes::Route;

pub use chat::ChatPanel;
pub use code::CodePanel;
pub use proctor::ProctorPanel;

#[component]
pub fn AssessmentView() -> Element {
    let mut ready = use_signal(|| false);
    let mut assessment = use_signal(|| {
        Assessment::new(fixtures::interview_prompts(), fixtures::code_challenges())
    });
    let phase = assessment.read().phase();
    let (questions_tab, coding_tab) = match phase {
        AssessmentPhase::Questions => ("tab tab--active", "tab tab--locked"),
        AssessmentPhase::Coding | AssessmentPhase::Completed => ("tab", "tab tab--active"),
    };

    let start_coding = move |()| {
        if let Err(err) = assessment.write().begin_coding() {
            warn!(error = %err, "coding phase not available yet");
        }
    };
    let finish = move |()| info!("assessment completed");

    rsx! {
        div { class: "page page--assessment",
            header { class: "page-heading",
                span { class: "chip", "Step 2" }
                h1 { "Technical Assessment" }
                p { "Answer technical questions and solve coding challenges under light proctoring." }
            }

            ProctorPanel { on_ready: move |()| ready.set(true) }

            if !ready() {
                section { class: "card notice",
                    h2 { "Proctoring Setup Required" }
                    p {
                        "Enable your camera and microphone and complete face detection to begin. "
                        "They stay on to monitor the session until you leave this page."
                    }
                }
            } else {
                match phase {
                    AssessmentPhase::Completed => rsx! {
                        section { class: "card completion",
                            h2 { "Assessment Completed!" }
                            p {
                                "Thank you for completing the technical assessment. Your results have been saved."
                            }
                            Link { class: "btn btn-primary", to: Route::Verify {}, "Continue to Next Step" }
                        }
                    },
                    AssessmentPhase::Questions | AssessmentPhase::Coding => rsx! {
                        div { class: "tabs",
                            span {
                                class: questions_tab,
                                "Technical Questions"
                            }
                            span {
                                class: coding_tab,
                                "Coding Challenges"
                            }
                        }
                        if phase == AssessmentPhase::Questions {
                            ChatPanel { assessment, on_complete: start_coding }
                        } else {
                            CodePanel { assessment, on_complete: finish }
                        }
                    },
                }
            }
        }
    }
}
