use crate::models::domain::{Question, QuestionType, Quiz};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Three free-text questions worth 1, 2 and 3 points.
    pub fn sample_quiz() -> Quiz {
        Quiz::new(
            "European Capitals",
            Some("Name the capital city".to_string()),
            vec![
                Question::new(QuestionType::Text, "Capital of France?", vec![], "Paris", None),
                Question::new(QuestionType::Text, "Capital of Spain?", vec![], "Madrid", Some(2)),
                Question::new(
                    QuestionType::Mcq,
                    "Capital of Italy?",
                    vec!["Milan".to_string(), "Rome".to_string()],
                    "Rome",
                    Some(3),
                ),
            ],
        )
    }

    /// Creates a quiz with a single question and the given title
    pub fn single_question_quiz(title: &str, correct_answer: &str) -> Quiz {
        Quiz::new(
            title,
            None,
            vec![Question::new(QuestionType::Text, "Answer?", vec![], correct_answer, None)],
        )
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_sample_quiz() {
        let quiz = sample_quiz();
        assert_eq!(quiz.questions.len(), 3);
        assert_eq!(
            quiz.questions.iter().map(|q| q.points).sum::<i32>(),
            6
        );
    }

    #[test]
    fn test_fixtures_single_question_quiz() {
        let quiz = single_question_quiz("Math", "4");
        assert_eq!(quiz.title, "Math");
        assert_eq!(quiz.questions[0].correct_answer, "4");
    }
}
