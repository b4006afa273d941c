use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssessmentError {
    #[error("answer cannot be empty")]
    EmptyAnswer,
    #[error("no question is waiting for an answer")]
    NoOpenQuestion,
    #[error("all questions have been answered")]
    QuestionsExhausted,
    #[error("all challenges have been submitted")]
    ChallengesExhausted,
    #[error("the assessment is not in the {0} phase")]
    WrongPhase(AssessmentPhase),
}

//
// ─── TRANSCRIPT ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Assistant,
    User,
}

impl Role {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::Assistant => "AI Assessor",
            Role::User => "You",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Welcome,
    Question(usize),
    Answer(usize),
    Completion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub kind: MessageKind,
    pub content: String,
}

impl Message {
    /// Stable key for rendering lists.
    #[must_use]
    pub fn key(&self) -> String {
        match self.kind {
            MessageKind::Welcome => "welcome".to_owned(),
            MessageKind::Question(i) => format!("question-{i}"),
            MessageKind::Answer(i) => format!("answer-{i}"),
            MessageKind::Completion => "completion".to_owned(),
        }
    }

    #[must_use]
    pub fn is_question(&self) -> bool {
        matches!(self.kind, MessageKind::Question(_))
    }
}

const WELCOME: &str = "Welcome to the technical assessment! I'll ask you a series of questions \
to evaluate your knowledge. Please provide detailed answers.";
const COMPLETION: &str =
    "You've answered all the technical questions. Let's move on to the coding challenges.";

/// Result of a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QaStep {
    /// Another prompt is due; ask it with `ask_current`.
    Next(usize),
    /// The completion message was appended.
    Finished,
}

/// Scripted question/answer walk with an append-only transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaFlow {
    prompts: Vec<String>,
    transcript: Vec<Message>,
    current: usize,
    awaiting_answer: bool,
    finished: bool,
}

impl QaFlow {
    /// Starts the flow with the welcome message in the transcript.
    #[must_use]
    pub fn new(prompts: Vec<String>) -> Self {
        Self {
            prompts,
            transcript: vec![Message {
                role: Role::Assistant,
                kind: MessageKind::Welcome,
                content: WELCOME.to_owned(),
            }],
            current: 0,
            awaiting_answer: false,
            finished: false,
        }
    }

    #[must_use]
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.prompts.len()
    }

    #[must_use]
    pub fn awaiting_answer(&self) -> bool {
        self.awaiting_answer
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Appends the current prompt. Asking twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::QuestionsExhausted` once every prompt has been
    /// answered.
    pub fn ask_current(&mut self) -> Result<&Message, AssessmentError> {
        if self.finished || self.current >= self.prompts.len() {
            return Err(AssessmentError::QuestionsExhausted);
        }
        if !self.awaiting_answer {
            self.transcript.push(Message {
                role: Role::Assistant,
                kind: MessageKind::Question(self.current),
                content: self.prompts[self.current].clone(),
            });
            self.awaiting_answer = true;
        }
        Ok(&self.transcript[self.transcript.len() - 1])
    }

    /// Records an answer to the open prompt.
    ///
    /// # Errors
    ///
    /// Returns `EmptyAnswer` for blank input (nothing is recorded) or
    /// `NoOpenQuestion` when no prompt has been asked.
    pub fn submit_answer(&mut self, answer: &str) -> Result<QaStep, AssessmentError> {
        if answer.trim().is_empty() {
            return Err(AssessmentError::EmptyAnswer);
        }
        if !self.awaiting_answer {
            return Err(AssessmentError::NoOpenQuestion);
        }

        self.transcript.push(Message {
            role: Role::User,
            kind: MessageKind::Answer(self.current),
            content: answer.to_owned(),
        });
        self.awaiting_answer = false;

        let next = self.current + 1;
        if next < self.prompts.len() {
            self.current = next;
            Ok(QaStep::Next(next))
        } else {
            self.transcript.push(Message {
                role: Role::Assistant,
                kind: MessageKind::Completion,
                content: COMPLETION.to_owned(),
            });
            self.finished = true;
            Ok(QaStep::Finished)
        }
    }
}

//
// ─── CODING CHALLENGES ─────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChallengeId(u32);

impl ChallengeId {
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ChallengeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeChallenge {
    pub id: ChallengeId,
    pub title: String,
    pub description: String,
    pub boilerplate: String,
    pub test_notes: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodingStep {
    Next(usize),
    AllCompleted,
}

/// One challenge at a time; every submission is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodingFlow {
    challenges: Vec<CodeChallenge>,
    current: usize,
    completed: BTreeSet<ChallengeId>,
}

impl CodingFlow {
    #[must_use]
    pub fn new(challenges: Vec<CodeChallenge>) -> Self {
        Self {
            challenges,
            current: 0,
            completed: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn challenges(&self) -> &[CodeChallenge] {
        &self.challenges
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current(&self) -> Option<&CodeChallenge> {
        self.challenges.get(self.current)
    }

    #[must_use]
    pub fn completed_ids(&self) -> &BTreeSet<ChallengeId> {
        &self.completed
    }

    #[must_use]
    pub fn is_completed(&self, id: ChallengeId) -> bool {
        self.completed.contains(&id)
    }

    #[must_use]
    pub fn all_completed(&self) -> bool {
        self.challenges
            .iter()
            .all(|challenge| self.completed.contains(&challenge.id))
    }

    /// Marks the current challenge completed and moves on.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::ChallengesExhausted` when everything was
    /// already submitted.
    pub fn submit_current(&mut self) -> Result<CodingStep, AssessmentError> {
        if self.all_completed() {
            return Err(AssessmentError::ChallengesExhausted);
        }
        let Some(challenge) = self.challenges.get(self.current) else {
            return Err(AssessmentError::ChallengesExhausted);
        };
        self.completed.insert(challenge.id);

        if self.current + 1 < self.challenges.len() {
            self.current += 1;
            return Ok(CodingStep::Next(self.current));
        }
        if self.all_completed() {
            Ok(CodingStep::AllCompleted)
        } else {
            Ok(CodingStep::Next(self.current))
        }
    }
}

//
// ─── ASSESSMENT ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentPhase {
    Questions,
    Coding,
    Completed,
}

impl fmt::Display for AssessmentPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AssessmentPhase::Questions => "questions",
            AssessmentPhase::Coding => "coding",
            AssessmentPhase::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// Q&A followed by coding challenges, strictly in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    qa: QaFlow,
    coding: CodingFlow,
    phase: AssessmentPhase,
}

impl Assessment {
    #[must_use]
    pub fn new(prompts: Vec<String>, challenges: Vec<CodeChallenge>) -> Self {
        Self {
            qa: QaFlow::new(prompts),
            coding: CodingFlow::new(challenges),
            phase: AssessmentPhase::Questions,
        }
    }

    #[must_use]
    pub fn phase(&self) -> AssessmentPhase {
        self.phase
    }

    #[must_use]
    pub fn qa(&self) -> &QaFlow {
        &self.qa
    }

    #[must_use]
    pub fn coding(&self) -> &CodingFlow {
        &self.coding
    }

    /// # Errors
    ///
    /// Returns `WrongPhase` outside the question phase, or the flow's error.
    pub fn ask_current(&mut self) -> Result<&Message, AssessmentError> {
        self.expect_phase(AssessmentPhase::Questions)?;
        self.qa.ask_current()
    }

    /// # Errors
    ///
    /// Returns `WrongPhase` outside the question phase, or the flow's error.
    pub fn submit_answer(&mut self, answer: &str) -> Result<QaStep, AssessmentError> {
        self.expect_phase(AssessmentPhase::Questions)?;
        self.qa.submit_answer(answer)
    }

    /// Hands control from the questions to the coding challenges.
    ///
    /// # Errors
    ///
    /// Returns `WrongPhase` unless the question flow has finished.
    pub fn begin_coding(&mut self) -> Result<(), AssessmentError> {
        match self.phase {
            AssessmentPhase::Coding => Ok(()),
            AssessmentPhase::Questions if self.qa.is_finished() => {
                self.phase = AssessmentPhase::Coding;
                Ok(())
            }
            _ => Err(AssessmentError::WrongPhase(AssessmentPhase::Questions)),
        }
    }

    /// # Errors
    ///
    /// Returns `WrongPhase` outside the coding phase, or the flow's error.
    pub fn submit_challenge(&mut self) -> Result<CodingStep, AssessmentError> {
        self.expect_phase(AssessmentPhase::Coding)?;
        let step = self.coding.submit_current()?;
        if step == CodingStep::AllCompleted {
            self.phase = AssessmentPhase::Completed;
        }
        Ok(step)
    }

    fn expect_phase(&self, phase: AssessmentPhase) -> Result<(), AssessmentError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(AssessmentError::WrongPhase(phase))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompts(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Question {i}?")).collect()
    }

    fn challenge(id: u32) -> CodeChallenge {
        CodeChallenge {
            id: ChallengeId::new(id),
            title: format!("Challenge {id}"),
            description: String::new(),
            boilerplate: String::new(),
            test_notes: String::new(),
            difficulty: Difficulty::Easy,
        }
    }

    #[test]
    fn transcript_starts_with_welcome() {
        let flow = QaFlow::new(prompts(2));
        assert_eq!(flow.transcript().len(), 1);
        assert_eq!(flow.transcript()[0].kind, MessageKind::Welcome);
    }

    #[test]
    fn blank_answer_changes_nothing() {
        let mut flow = QaFlow::new(prompts(2));
        flow.ask_current().unwrap();
        let before = flow.clone();
        assert_eq!(flow.submit_answer("   "), Err(AssessmentError::EmptyAnswer));
        assert_eq!(flow, before);
    }

    #[test]
    fn asking_twice_does_not_duplicate() {
        let mut flow = QaFlow::new(prompts(2));
        flow.ask_current().unwrap();
        flow.ask_current().unwrap();
        assert_eq!(flow.transcript().len(), 2);
    }

    #[test]
    fn answering_before_asking_is_rejected() {
        let mut flow = QaFlow::new(prompts(1));
        assert_eq!(flow.submit_answer("hi"), Err(AssessmentError::NoOpenQuestion));
    }

    #[test]
    fn walks_prompts_then_appends_completion() {
        let mut flow = QaFlow::new(prompts(2));
        flow.ask_current().unwrap();
        assert_eq!(flow.submit_answer("first"), Ok(QaStep::Next(1)));
        flow.ask_current().unwrap();
        assert_eq!(flow.submit_answer("second"), Ok(QaStep::Finished));

        let kinds: Vec<_> = flow.transcript().iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![
                MessageKind::Welcome,
                MessageKind::Question(0),
                MessageKind::Answer(0),
                MessageKind::Question(1),
                MessageKind::Answer(1),
                MessageKind::Completion,
            ]
        );
        assert!(flow.is_finished());
        assert_eq!(flow.ask_current().unwrap_err(), AssessmentError::QuestionsExhausted);
    }

    #[test]
    fn coding_flow_completes_after_every_submission() {
        let mut flow = CodingFlow::new(vec![challenge(1), challenge(2), challenge(3)]);
        assert_eq!(flow.submit_current(), Ok(CodingStep::Next(1)));
        assert_eq!(flow.submit_current(), Ok(CodingStep::Next(2)));
        assert_eq!(flow.submit_current(), Ok(CodingStep::AllCompleted));
        assert!(flow.all_completed());
        assert_eq!(
            flow.submit_current(),
            Err(AssessmentError::ChallengesExhausted)
        );
    }

    #[test]
    fn assessment_runs_phases_in_order() {
        let mut assessment = Assessment::new(prompts(1), vec![challenge(7)]);
        assert_eq!(
            assessment.submit_challenge(),
            Err(AssessmentError::WrongPhase(AssessmentPhase::Coding))
        );
        assert!(assessment.begin_coding().is_err());

        assessment.ask_current().unwrap();
        assessment.submit_answer("answer").unwrap();
        assessment.begin_coding().unwrap();
        assert_eq!(assessment.phase(), AssessmentPhase::Coding);

        assert_eq!(assessment.submit_challenge(), Ok(CodingStep::AllCompleted));
        assert_eq!(assessment.phase(), AssessmentPhase::Completed);
        assert!(assessment.coding().is_completed(ChallengeId::new(7)));
    }
}
