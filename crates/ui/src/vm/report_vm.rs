use services::VerificationReport;
use verify_core::model::Priority;

use super::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreCardVm {
    pub label: &'static str,
    pub value: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillBarVm {
    pub name: String,
    pub value: u8,
    pub style: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecommendationVm {
    pub title: String,
    pub description: String,
    pub priority_label: &'static str,
    pub priority_class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportVm {
    pub candidate: String,
    pub generated_at: String,
    pub overall: u8,
    pub scores: Vec<ScoreCardVm>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub skills: Vec<SkillBarVm>,
    pub recommendations: Vec<RecommendationVm>,
    pub background_line: String,
    pub quiz_line: String,
    pub progress_line: String,
}

#[must_use]
pub fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "priority priority--high",
        Priority::Medium => "priority priority--medium",
        Priority::Low => "priority priority--low",
    }
}

#[must_use]
pub fn map_report(report: &VerificationReport) -> ReportVm {
    let summary = &report.summary;
    let candidate = report.candidate.as_ref().map_or_else(
        || "Candidate".to_owned(),
        |identity| format!("{} <{}>", identity.name(), identity.email()),
    );

    let quiz_line = match report.quiz {
        Some(score) => format!(
            "Skill quiz: {} of {} correct ({}%)",
            score.correct,
            score.total,
            score.rounded()
        ),
        None => "Skill quiz: not taken yet".to_owned(),
    };

    ReportVm {
        candidate,
        generated_at: format_datetime(report.generated_at),
        overall: summary.overall_score,
        scores: vec![
            ScoreCardVm {
                label: "Resume Score",
                value: summary.resume_score,
            },
            ScoreCardVm {
                label: "Skill Verification",
                value: summary.skill_verification,
            },
            ScoreCardVm {
                label: "Background Check",
                value: summary.background_check,
            },
        ],
        strengths: summary.strengths.clone(),
        improvements: summary.improvements.clone(),
        skills: report
            .skills
            .iter()
            .map(|skill| SkillBarVm {
                name: skill.name.clone(),
                value: skill.value,
                style: format!("width: {}%; background: {};", skill.value, skill.color),
            })
            .collect(),
        recommendations: report
            .recommendations
            .iter()
            .map(|rec| RecommendationVm {
                title: rec.title.clone(),
                description: rec.description.clone(),
                priority_label: rec.priority.label(),
                priority_class: priority_class(rec.priority),
            })
            .collect(),
        background_line: report.background.summary(),
        quiz_line,
        progress_line: format!(
            "{} of {} stages completed",
            report.stages_completed, report.stages_total
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::{Clock, ReportService};
    use verify_core::model::{StageProgress, UserIdentityDraft};
    use verify_core::scoring::ScoreResult;
    use verify_core::time::fixed_now;

    fn report() -> VerificationReport {
        ReportService::new(Clock::fixed(fixed_now())).build(None, &StageProgress::new())
    }

    #[test]
    fn anonymous_report_uses_placeholder_name() {
        let vm = map_report(&report());
        assert_eq!(vm.candidate, "Candidate");
        assert_eq!(vm.overall, 84);
        assert_eq!(vm.scores.len(), 3);
        assert_eq!(vm.quiz_line, "Skill quiz: not taken yet");
        assert_eq!(vm.generated_at, "Nov 14, 2023 22:13 UTC");
        assert_eq!(vm.progress_line, "0 of 4 stages completed");
    }

    #[test]
    fn quiz_and_candidate_are_shown() {
        let mut report = report();
        report.candidate = Some(
            UserIdentityDraft::new("Ada", "ada@example.com")
                .validate(fixed_now())
                .unwrap(),
        );
        report.quiz = Some(ScoreResult {
            correct: 2,
            total: 3,
            percentage: 200.0 / 3.0,
        });
        let vm = map_report(&report);
        assert_eq!(vm.candidate, "Ada <ada@example.com>");
        assert_eq!(vm.quiz_line, "Skill quiz: 2 of 3 correct (67%)");
    }

    #[test]
    fn recommendations_carry_priority_styling() {
        let vm = map_report(&report());
        let first = &vm.recommendations[0];
        assert_eq!(first.priority_label, "High Priority");
        assert_eq!(first.priority_class, "priority priority--high");
        assert!(vm.skills[0].style.contains("width: 85%"));
    }
}
