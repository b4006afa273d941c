use crate::scoring::{AnswerSet, ScoreResult, score};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    Next(usize),
    Finished,
}

/// Multiple-choice skill check, one question at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillQuiz {
    questions: Vec<QuizQuestion>,
    answers: AnswerSet,
    current: usize,
    finished: bool,
}

impl SkillQuiz {
    #[must_use]
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let finished = questions.is_empty();
        Self {
            questions,
            answers: AnswerSet::new(),
            current: 0,
            finished,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current(&self) -> Option<&QuizQuestion> {
        if self.finished {
            return None;
        }
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn selected(&self, index: usize) -> Option<usize> {
        self.answers.get(&index).copied()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Records a choice for the current question; choosing again overwrites.
    ///
    /// Returns `None` once the quiz is finished or for a choice that is not
    /// one of the options.
    pub fn choose(&mut self, option: usize) -> Option<usize> {
        let question = self.current()?;
        if option >= question.options.len() {
            return None;
        }
        self.answers.insert(self.current, option);
        Some(self.current)
    }

    /// Moves past the current question once it has an answer.
    pub fn advance(&mut self) -> Option<QuizStep> {
        if self.finished || !self.answers.contains_key(&self.current) {
            return None;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            Some(QuizStep::Next(self.current))
        } else {
            self.finished = true;
            Some(QuizStep::Finished)
        }
    }

    #[must_use]
    pub fn answer_key(&self) -> Vec<usize> {
        self.questions.iter().map(|q| q.answer).collect()
    }

    #[must_use]
    pub fn score(&self) -> ScoreResult {
        score(&self.answers, &self.answer_key())
    }

    /// Fraction of the walk shown so far, for the progress bar.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_percent(&self) -> f64 {
        if self.questions.is_empty() {
            return 100.0;
        }
        (self.current + 1) as f64 / self.questions.len() as f64 * 100.0
    }
}
