use verify_core::fixtures::{SKILL_LEVELS, SkillLevel};
use verify_core::model::SkillQuiz;
use verify_core::scoring::ScoreResult;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub index: usize,
    /// "A", "B", ...
    pub letter: char,
    pub text: String,
    pub selected: bool,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestionVm {
    pub position_label: String,
    pub progress_percent: u32,
    pub prompt: String,
    pub options: Vec<QuizOptionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultVm {
    pub headline: &'static str,
    pub detail: String,
    pub skills: Vec<SkillLevel>,
}

#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn map_quiz_question(quiz: &SkillQuiz) -> Option<QuizQuestionVm> {
    let question = quiz.current()?;
    let index = quiz.current_index();
    let selected = quiz.selected(index);
    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(option, text)| QuizOptionVm {
            index: option,
            letter: option_letter(option),
            text: text.clone(),
            selected: selected == Some(option),
            class: if selected == Some(option) {
                "option option--selected"
            } else {
                "option"
            },
        })
        .collect();

    Some(QuizQuestionVm {
        position_label: format!("Question {} of {}", index + 1, quiz.questions().len()),
        progress_percent: quiz.progress_percent().round() as u32,
        prompt: question.prompt.clone(),
        options,
    })
}

#[must_use]
pub fn map_quiz_result(score: &ScoreResult) -> QuizResultVm {
    QuizResultVm {
        headline: "Skill Verification Complete!",
        detail: format!(
            "You scored {}% on the JavaScript & React assessment.",
            score.rounded()
        ),
        skills: SKILL_LEVELS.to_vec(),
    }
}

fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|offset| b'A'.checked_add(offset))
        .filter(u8::is_ascii_uppercase)
        .map_or('?', char::from)
}
