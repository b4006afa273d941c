use dioxus::prelude::*;
use dioxus_router::Link;
use verify_core::fixtures;
use verify_core::model::{QuizStep, SkillQuiz, StageId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{map_quiz_question, map_quiz_result};

#[component]
pub fn VerifyView() -> Element {
    let ctx = use_context::<AppContext>();
    let delays = ctx.delays();
    let mut quiz = use_signal(|| SkillQuiz::new(fixtures::skill_quiz()));
    let mut advancing = use_signal(|| false);

    let choose = move |option: usize| {
        if advancing() || quiz.write().choose(option).is_none() {
            return;
        }
        advancing.set(true);
        let ctx = ctx.clone();
        spawn(async move {
            tokio::time::sleep(delays.quiz_advance).await;
            let step = quiz.write().advance();
            advancing.set(false);
            if step == Some(QuizStep::Finished) {
                ctx.reports().record_quiz(quiz.read().score());
                ctx.complete_stage(StageId::Verify);
            }
        });
    };

    let (question, result) = {
        let current = quiz.read();
        let result = current
            .is_finished()
            .then(|| map_quiz_result(&current.score()));
        (map_quiz_question(&current), result)
    };

    rsx! {
        div { class: "page page--verify",
            header { class: "page-heading",
                span { class: "chip", "Step 3" }
                h1 { "Verify Your Skills" }
                p { "Complete this personalized skill assessment tailored to your experience level." }
            }

            section { class: "card quiz",
                if let Some(result) = result {
                    div { class: "quiz__result",
                        h2 { "{result.headline}" }
                        p { class: "muted", "{result.detail}" }
                        div { class: "skill-summary",
                            h3 { "Skill Assessment Summary" }
                            for level in result.skills {
                                div { key: "{level.skill}", class: "skill-row",
                                    span { "{level.skill}" }
                                    div { class: "progress-bar",
                                        div { class: "progress-bar__fill", style: "width: {level.percent}%" }
                                    }
                                    span { class: "skill-row__rating", "{level.rating}" }
                                }
                            }
                        }
                        Link { class: "btn btn-primary", to: Route::Background {},
                            "Continue to Background Check"
                        }
                    }
                } else if let Some(question) = question {
                    div { class: "quiz__header",
                        span { class: "chip", "{question.position_label}" }
                        div { class: "progress-bar progress-bar--small",
                            div { class: "progress-bar__fill", style: "width: {question.progress_percent}%" }
                        }
                    }
                    h2 { "{question.prompt}" }
                    div { class: "quiz__options",
                        for option in question.options {
                            button {
                                key: "{option.index}",
                                class: option.class,
                                r#type: "button",
                                onclick: {
                                    let mut choose = choose.clone();
                                    move |_| choose(option.index)
                                },
                                span { class: "option__letter", "{option.letter}" }
                                span { "{option.text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
