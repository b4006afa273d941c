use verify_core::model::{QaFlow, Role};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BubbleVm {
    pub key: String,
    pub class: &'static str,
    pub author: &'static str,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatVm {
    pub bubbles: Vec<BubbleVm>,
    pub progress_label: String,
    /// Input is accepted only while a prompt is open and nothing is pending.
    pub can_answer: bool,
    pub finished: bool,
}

#[must_use]
pub fn map_chat(qa: &QaFlow, busy: bool) -> ChatVm {
    let bubbles = qa
        .transcript()
        .iter()
        .map(|message| BubbleVm {
            key: message.key(),
            class: match message.role {
                Role::Assistant => "bubble bubble--assistant",
                Role::User => "bubble bubble--user",
            },
            author: message.role.label(),
            text: message.content.clone(),
        })
        .collect();

    let progress_label = if qa.is_finished() {
        "All questions answered".to_owned()
    } else {
        format!("Question {} of {}", qa.current_index() + 1, qa.total())
    };

    ChatVm {
        bubbles,
        progress_label,
        can_answer: qa.awaiting_answer() && !busy,
        finished: qa.is_finished(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow() -> QaFlow {
        QaFlow::new(vec!["First?".to_owned(), "Second?".to_owned()])
    }

    #[test]
    fn opens_with_welcome_and_no_input() {
        let vm = map_chat(&flow(), false);
        assert_eq!(vm.bubbles.len(), 1);
        assert_eq!(vm.bubbles[0].author, "AI Assessor");
        assert!(!vm.can_answer);
        assert_eq!(vm.progress_label, "Question 1 of 2");
    }

    #[test]
    fn open_prompt_accepts_input_unless_busy() {
        let mut qa = flow();
        qa.ask_current().unwrap();
        assert!(map_chat(&qa, false).can_answer);
        assert!(!map_chat(&qa, true).can_answer);
    }

    #[test]
    fn answers_render_as_user_bubbles() {
        let mut qa = flow();
        qa.ask_current().unwrap();
        qa.submit_answer("Mine").unwrap();
        let vm = map_chat(&qa, false);
        let last = vm.bubbles.last().unwrap();
        assert_eq!(last.author, "You");
        assert_eq!(last.class, "bubble bubble--user");
        assert_eq!(vm.progress_label, "Question 2 of 2");
    }

    #[test]
    fn finished_flow_reports_completion() {
        let mut qa = flow();
        for answer in ["a", "b"] {
            qa.ask_current().unwrap();
            qa.submit_answer(answer).unwrap();
        }
        let vm = map_chat(&qa, false);
        assert!(vm.finished);
        assert!(!vm.can_answer);
        assert_eq!(vm.progress_label, "All questions answered");
    }
}
