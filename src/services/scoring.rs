//! Pure scoring of submitted answers against a quiz's answer key.
//!
//! Nothing in here touches storage: the caller loads the quiz, hands the
//! answers over, and persists whatever [`Evaluation`] comes back.

use crate::models::domain::{EvaluatedAnswer, Quiz};
use crate::models::dto::request::AnswerInput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub score: i32,
    pub total_points: i32,
    pub answers: Vec<EvaluatedAnswer>,
}

/// Case-insensitive comparison that ignores leading and trailing whitespace.
pub fn answers_match(user_answer: &str, correct_answer: &str) -> bool {
    user_answer.trim().to_lowercase() == correct_answer.trim().to_lowercase()
}

/// Score `submitted` against `quiz`.
///
/// Answers whose question id is not in the quiz are dropped: they add nothing
/// to `score` or `total_points` and do not show up in `answers`.
pub fn evaluate(quiz: &Quiz, submitted: &[AnswerInput]) -> Evaluation {
    let mut score = 0;
    let mut total_points = 0;
    let mut answers = Vec::with_capacity(submitted.len());

    for answer in submitted {
        let Some(question) = quiz.find_question(&answer.question_id) else {
            log::debug!(
                "Skipping answer for unknown question '{}' in quiz '{}'",
                answer.question_id,
                quiz.id
            );
            continue;
        };

        let is_correct = answers_match(&answer.user_answer, &question.correct_answer);

        total_points += question.points;
        if is_correct {
            score += question.points;
        }

        answers.push(EvaluatedAnswer {
            question_id: answer.question_id.clone(),
            user_answer: answer.user_answer.clone(),
            is_correct,
        });
    }

    Evaluation {
        score,
        total_points,
        answers,
    }
}

/// `score / total_points * 100` to two decimals, or `"0"` for an empty total.
pub fn format_percentage(score: i32, total_points: i32) -> String {
    if total_points > 0 {
        format!("{:.2}", f64::from(score) / f64::from(total_points) * 100.0)
    } else {
        "0".to_string()
    }
}
