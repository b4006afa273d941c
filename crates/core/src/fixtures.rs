//! Canned content for the simulated verification journey.
//!
//! Every screen draws its questions, challenges, and results from here so
//! services and views agree on the same data.

use crate::model::{
    ChallengeId, CodeChallenge, Difficulty, Priority, QuizQuestion, Recommendation,
    ReportSummary, ResumeAnalysis, SkillScore, Verification, WorkExperience,
};

pub const RUN_OUTPUT: &str = "// Code executed successfully!\n// All tests passed.";

pub const INTERVIEW_PROMPTS: [&str; 10] = [
    "Explain the difference between var, let, and const in JavaScript.",
    "What is React's Virtual DOM and how does it work?",
    "Describe the box model in CSS.",
    "What is the difference between == and === in JavaScript?",
    "Explain how promises work in JavaScript.",
    "What are React hooks and why were they introduced?",
    "What is the purpose of the useEffect hook in React?",
    "Explain how event delegation works in JavaScript.",
    "What is CSS specificity and how is it calculated?",
    "Describe the concept of closure in JavaScript.",
];

#[must_use]
pub fn interview_prompts() -> Vec<String> {
    INTERVIEW_PROMPTS.iter().map(|p| (*p).to_string()).collect()
}

#[must_use]
pub fn code_challenges() -> Vec<CodeChallenge> {
    vec![
        CodeChallenge {
            id: ChallengeId::new(1),
            title: "Array Sum".into(),
            description:
                "Write a function that takes an array of numbers and returns the sum of all elements."
                    .into(),
            boilerplate: "function arraySum(numbers) {\n  // Your code here\n\n}".into(),
            test_notes: "// Test cases:\n// arraySum([1, 2, 3, 4, 5]) should return 15\n// arraySum([-1, -2, -3]) should return -6".into(),
            difficulty: Difficulty::Easy,
        },
        CodeChallenge {
            id: ChallengeId::new(2),
            title: "String Reverse".into(),
            description: "Write a function that takes a string and returns it reversed.".into(),
            boilerplate: "function reverseString(str) {\n  // Your code here\n\n}".into(),
            test_notes: "// Test cases:\n// reverseString('hello') should return 'olleh'\n// reverseString('javascript') should return 'tpircsavaj'".into(),
            difficulty: Difficulty::Easy,
        },
        CodeChallenge {
            id: ChallengeId::new(3),
            title: "Palindrome Check".into(),
            description: "Write a function that checks if a given string is a palindrome (reads the same forward and backward).".into(),
            boilerplate: "function isPalindrome(str) {\n  // Your code here\n\n}".into(),
            test_notes: "// Test cases:\n// isPalindrome('racecar') should return true\n// isPalindrome('hello') should return false".into(),
            difficulty: Difficulty::Medium,
        },
    ]
}

fn question(prompt: &str, options: [&str; 4], answer: usize) -> QuizQuestion {
    QuizQuestion {
        prompt: prompt.into(),
        options: options.iter().map(|o| (*o).to_string()).collect(),
        answer,
    }
}

#[must_use]
pub fn skill_quiz() -> Vec<QuizQuestion> {
    vec![
        question(
            "Which of the following is NOT a JavaScript data type?",
            ["String", "Boolean", "Character", "Number"],
            2,
        ),
        question(
            "In React, what is the correct way to update state?",
            ["modifyState()", "this.state()", "useState()", "setState()"],
            3,
        ),
        question(
            "What does CSS stand for?",
            [
                "Computer Style Sheets",
                "Creative Style System",
                "Cascading Style Sheets",
                "Colorful Style Sheets",
            ],
            2,
        ),
    ]
}

/// One bar in the per-skill breakdown shown after the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillLevel {
    pub skill: &'static str,
    pub percent: u8,
    pub rating: &'static str,
}

pub const SKILL_LEVELS: [SkillLevel; 3] = [
    SkillLevel {
        skill: "JavaScript",
        percent: 75,
        rating: "Good",
    },
    SkillLevel {
        skill: "React",
        percent: 85,
        rating: "Excellent",
    },
    SkillLevel {
        skill: "CSS",
        percent: 60,
        rating: "Average",
    },
];

#[must_use]
pub fn resume_analysis() -> ResumeAnalysis {
    ResumeAnalysis {
        score: 85,
        feedback: "Your resume is 85% complete. Adding more details about your technical skills could improve it further.".into(),
        improvements: vec![
            "Add more details about your technical skills".into(),
            "Quantify your achievements with metrics".into(),
            "Include keywords relevant to your target role".into(),
        ],
    }
}

#[must_use]
pub fn work_history() -> Vec<WorkExperience> {
    vec![
        WorkExperience {
            company: "Tech Innovations Inc.".into(),
            role: "Senior Frontend Developer".into(),
            period: "Jan 2020 - Present".into(),
            description: "Led the development of responsive web applications using React, TypeScript, and modern CSS frameworks.".into(),
            verification: Verification::Verified,
        },
        WorkExperience {
            company: "Digital Solutions Ltd.".into(),
            role: "Web Developer".into(),
            period: "Mar 2018 - Dec 2019".into(),
            description: "Developed and maintained client websites and e-commerce platforms using JavaScript, HTML, and CSS.".into(),
            verification: Verification::Verified,
        },
        WorkExperience {
            company: "CreativeTech Studio".into(),
            role: "Junior Developer".into(),
            period: "Jul 2016 - Feb 2018".into(),
            description: "Assisted in building interactive web experiences and implementing UI designs for various clients.".into(),
            verification: Verification::Mismatch {
                detail: "Duration discrepancy: Resume states Jul 2015 - Feb 2018".into(),
            },
        },
    ]
}

#[must_use]
pub fn report_summary() -> ReportSummary {
    ReportSummary {
        resume_score: 85,
        skill_verification: 78,
        background_check: 90,
        overall_score: 84,
        strengths: vec![
            "Strong technical skills in JavaScript and React".into(),
            "Consistent work history with progressive experience".into(),
            "Well-structured resume with clear accomplishments".into(),
        ],
        improvements: vec![
            "Add more quantifiable achievements".into(),
            "Expand on specific technical project details".into(),
            "Clarify date discrepancy in earlier work experience".into(),
        ],
    }
}

fn skill(name: &str, value: u8, color: &str) -> SkillScore {
    SkillScore {
        name: name.into(),
        value,
        color: color.into(),
    }
}

#[must_use]
pub fn skill_scores() -> Vec<SkillScore> {
    vec![
        skill("JavaScript", 85, "#4CAF50"),
        skill("React", 82, "#2196F3"),
        skill("CSS", 68, "#9C27B0"),
        skill("Node.js", 75, "#FF9800"),
        skill("TypeScript", 70, "#607D8B"),
    ]
}

#[must_use]
pub fn recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            title: "Learn Python to expand your tech stack".into(),
            description: "Based on your current skill set and market trends, adding Python to your toolkit would make you more versatile for full-stack roles.".into(),
            priority: Priority::High,
        },
        Recommendation {
            title: "Enhance your CSS expertise".into(),
            description: "Your CSS skills are currently rated at 68%. Consider taking a specialized course in advanced CSS and modern layout techniques.".into(),
            priority: Priority::Medium,
        },
        Recommendation {
            title: "Add more quantifiable achievements to your resume".into(),
            description: "Including metrics and specific outcomes in your work accomplishments will strengthen your resume significantly.".into(),
            priority: Priority::High,
        },
        Recommendation {
            title: "Clarify employment dates".into(),
            description: "There's a slight discrepancy in your employment dates at CreativeTech Studio. Updating this will improve your verification score.".into(),
            priority: Priority::Medium,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BackgroundCheck;

    #[test]
    fn quiz_answers_point_at_real_options() {
        for q in skill_quiz() {
            assert!(q.answer < q.options.len());
        }
    }

    #[test]
    fn challenge_ids_are_unique() {
        let challenges = code_challenges();
        let mut ids: Vec<_> = challenges.iter().map(|c| c.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), challenges.len());
    }

    #[test]
    fn work_history_has_one_mismatch() {
        let check = BackgroundCheck::from_timeline(&work_history());
        assert_eq!(check.matched, 2);
        assert_eq!(check.total, 3);
    }
}
