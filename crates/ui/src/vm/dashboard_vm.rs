use verify_core::model::{Destination, StageProgress, StageStatus, UserIdentity};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageCardVm {
    pub step: usize,
    pub title: &'static str,
    pub blurb: &'static str,
    pub status: StageStatus,
    pub status_label: &'static str,
    /// `None` for stages the visitor has not reached yet.
    pub action_label: Option<&'static str>,
    pub destination: Destination,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub greeting: String,
    pub completed: usize,
    pub total: usize,
    pub percent: usize,
    pub cards: Vec<StageCardVm>,
    pub continue_label: String,
    pub continue_to: Destination,
}

#[must_use]
pub fn map_dashboard(identity: Option<&UserIdentity>, progress: &StageProgress) -> DashboardVm {
    let name = identity.map_or("User", UserIdentity::name);
    let greeting = format!("Welcome, {name}");
    let total = progress.len();
    let completed = progress.completed_count();
    let percent = if total == 0 { 0 } else { completed * 100 / total };

    let cards = progress
        .stages()
        .iter()
        .enumerate()
        .map(|(index, stage)| {
            let status = progress.status_of(index);
            let (status_label, action_label) = match status {
                StageStatus::Completed => ("Completed", Some("Review")),
                StageStatus::Current => ("Current step", Some("Continue")),
                StageStatus::NotStarted => ("Not started", None),
            };
            StageCardVm {
                step: index + 1,
                title: stage.display_name,
                blurb: stage.id.blurb(),
                status,
                status_label,
                action_label,
                destination: stage.destination,
            }
        })
        .collect();

    let (continue_label, continue_to) = if progress.all_completed() {
        ("View Report".to_owned(), Destination::Report)
    } else {
        let current = progress.current();
        (
            format!("Continue: {}", current.display_name),
            current.destination,
        )
    };

    DashboardVm {
        greeting,
        completed,
        total,
        percent,
        cards,
        continue_label,
        continue_to,
    }
}
