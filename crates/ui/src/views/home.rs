use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::UiState;
use crate::routes::Route;

const FEATURES: [(&str, &str); 4] = [
    (
        "AI Resume Analysis",
        "Get instant feedback on your resume with scoring and concrete improvements.",
    ),
    (
        "Proctored Assessment",
        "Answer technical questions and solve coding challenges with camera and microphone checks.",
    ),
    (
        "Skill Verification",
        "Prove what you know with a short quiz tailored to your experience level.",
    ),
    (
        "Background Check",
        "Match your employment history against your resume and flag discrepancies.",
    ),
];

const STEPS: [(&str, &str); 4] = [
    ("Upload", "Share your resume for analysis."),
    ("Assess", "Complete the technical assessment."),
    ("Verify", "Confirm your skills and work history."),
    ("Report", "Receive a verification report with recommendations."),
];

#[component]
pub fn HomeView() -> Element {
    let ui = use_context::<UiState>();
    let signed_in = ui.identity.read().is_some();
    let cta_target = if signed_in {
        Route::Dashboard {}
    } else {
        Route::Login {}
    };
    let cta_label = if signed_in {
        "Go to Dashboard"
    } else {
        "Get Started"
    };

    rsx! {
        div { class: "page page--home",
            section { class: "hero",
                span { class: "chip", "AI-Powered Verification" }
                h1 { "Verify your skills. Prove your experience." }
                p { class: "lead",
                    "VerifyMe checks your resume, skills, and background in one guided journey."
                }
                Link { class: "btn btn-primary", to: cta_target.clone(), "{cta_label}" }
            }

            section { class: "features",
                h2 { "Features" }
                div { class: "grid",
                    for (title, body) in FEATURES {
                        div { class: "card", key: "{title}",
                            h3 { "{title}" }
                            p { "{body}" }
                        }
                    }
                }
            }

            section { class: "how-it-works",
                h2 { "How It Works" }
                ol { class: "steps",
                    for (index, (title, body)) in STEPS.iter().enumerate() {
                        li { key: "{title}",
                            span { class: "step-number", "{index + 1}" }
                            strong { "{title}" }
                            p { "{body}" }
                        }
                    }
                }
            }

            section { class: "cta",
                h2 { "Ready to get verified?" }
                Link { class: "btn btn-primary", to: cta_target, "{cta_label}" }
            }
        }
    }
}
