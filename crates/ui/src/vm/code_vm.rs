use verify_core::model::{CodingFlow, Difficulty};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChallengeVm {
    pub title: String,
    pub description: String,
    pub boilerplate: String,
    pub test_notes: String,
    pub difficulty_label: &'static str,
    pub difficulty_class: &'static str,
    pub position_label: String,
    pub completed: bool,
}

/// Progress dot per challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChallengeMarker {
    Done,
    Active,
    Waiting,
}

impl ChallengeMarker {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            ChallengeMarker::Done => "dot dot--done",
            ChallengeMarker::Active => "dot dot--active",
            ChallengeMarker::Waiting => "dot",
        }
    }
}

#[must_use]
pub fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "difficulty difficulty--easy",
        Difficulty::Medium => "difficulty difficulty--medium",
        Difficulty::Hard => "difficulty difficulty--hard",
    }
}

#[must_use]
pub fn map_challenge(flow: &CodingFlow) -> Option<ChallengeVm> {
    let challenge = flow.current()?;
    Some(ChallengeVm {
        title: challenge.title.clone(),
        description: challenge.description.clone(),
        boilerplate: challenge.boilerplate.clone(),
        test_notes: challenge.test_notes.clone(),
        difficulty_label: challenge.difficulty.label(),
        difficulty_class: difficulty_class(challenge.difficulty),
        position_label: format!(
            "Challenge {} of {}",
            flow.current_index() + 1,
            flow.challenges().len()
        ),
        completed: flow.is_completed(challenge.id),
    })
}

#[must_use]
pub fn challenge_markers(flow: &CodingFlow) -> Vec<ChallengeMarker> {
    flow.challenges()
        .iter()
        .enumerate()
        .map(|(index, challenge)| {
            if flow.is_completed(challenge.id) {
                ChallengeMarker::Done
            } else if index == flow.current_index() {
                ChallengeMarker::Active
            } else {
                ChallengeMarker::Waiting
            }
        })
        .collect()
}
