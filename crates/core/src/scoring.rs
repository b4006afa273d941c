//! Percentage scoring against a fixed answer key.

use std::collections::BTreeMap;

use serde::Serialize;

/// Chosen option per question index.
pub type AnswerSet = BTreeMap<usize, usize>;

/// Correct option per question, indexed by question.
pub type AnswerKey = [usize];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub correct: usize,
    pub total: usize,
    /// Unrounded, in `[0, 100]`.
    pub percentage: f64,
}

impl ScoreResult {
    /// Whole-number percentage for display.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded(&self) -> u32 {
        self.percentage.round() as u32
    }
}

/// Counts answers equal to the key and scales to a percentage.
///
/// Answers for indices outside the key are ignored. An empty key scores 0%.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn score(answers: &AnswerSet, key: &AnswerKey) -> ScoreResult {
    let total = key.len();
    let correct = key
        .iter()
        .enumerate()
        .filter(|(index, expected)| answers.get(index) == Some(*expected))
        .count();
    let percentage = if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64 * 100.0
    };
    ScoreResult {
        correct,
        total,
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(usize, usize)]) -> AnswerSet {
        pairs.iter().copied().collect()
    }

    #[test]
    fn empty_key_scores_zero() {
        let result = score(&AnswerSet::new(), &[]);
        assert_eq!(result.total, 0);
        assert_eq!(result.rounded(), 0);
    }

    #[test]
    fn full_match_scores_hundred() {
        let result = score(&answers(&[(0, 2), (1, 3), (2, 2)]), &[2, 3, 2]);
        assert_eq!(result.correct, 3);
        assert_eq!(result.rounded(), 100);
    }

    #[test]
    fn one_of_three_rounds_to_33() {
        let result = score(&answers(&[(0, 2), (1, 0), (2, 1)]), &[2, 3, 2]);
        assert_eq!(result.correct, 1);
        assert_eq!(result.rounded(), 33);
        assert!((result.percentage - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn missing_answers_count_as_wrong() {
        let result = score(&answers(&[(1, 3)]), &[2, 3, 2]);
        assert_eq!(result.correct, 1);
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let forward = score(&answers(&[(0, 2), (1, 3)]), &[2, 3]);
        let backward = score(&answers(&[(1, 3), (0, 2)]), &[2, 3]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn extra_answers_are_ignored() {
        let result = score(&answers(&[(0, 1), (9, 9)]), &[1]);
        assert_eq!(result.correct, 1);
        assert_eq!(result.total, 1);
    }
}
