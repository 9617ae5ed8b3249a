use crate::models::mcq_question::McqQuestion;
use std::collections::HashMap;

/// Outcome of grading one submitted answer map against a question bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSummary {
    pub score: i32,
    pub total_marks: i32,
    pub correct: i32,
    pub wrong: i32,
    pub unanswered: i32,
}

impl ScoreSummary {
    /// Percentage rounded to two decimals; 0 for an empty bank.
    pub fn percentage(&self) -> f64 {
        if self.total_marks > 0 {
            let raw = self.score as f64 / self.total_marks as f64 * 100.0;
            (raw * 100.0).round() / 100.0
        } else {
            0.0
        }
    }
}

/// Grades against the full bank, not the sampled subset a learner was
/// shown: every question contributes its marks to the total, and any
/// submitted answer keyed by a bank question id is graded.
///
/// Option letters compare case-insensitively; an absent or empty entry
/// leaves the question unanswered (derived as bank size minus
/// correct minus wrong).
pub fn score_submission(
    questions: &[McqQuestion],
    answers: &HashMap<String, String>,
) -> ScoreSummary {
    let mut score = 0;
    let mut total_marks = 0;
    let mut correct = 0;
    let mut wrong = 0;

    for q in questions {
        total_marks += q.marks;
        match answers.get(&q.id.to_string()) {
            Some(submitted) if !submitted.is_empty() => {
                if q.is_correct(submitted) {
                    score += q.marks;
                    correct += 1;
                } else {
                    wrong += 1;
                }
            }
            _ => {}
        }
    }

    let unanswered = questions.len() as i32 - correct - wrong;

    ScoreSummary {
        score,
        total_marks,
        correct,
        wrong,
        unanswered,
    }
}
