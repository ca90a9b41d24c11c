use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Question, QuestionType, Quiz};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(length(min = 1, message = "A quiz needs at least one question"))]
    #[validate(nested)]
    pub questions: Vec<CreateQuestionRequest>,
}

/// Any `_id` sent by the client is ignored; ids are always assigned server-side.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    #[serde(rename = "type", default)]
    pub question_type: QuestionType,

    #[serde(rename = "question")]
    #[validate(length(min = 1, max = 2000))]
    pub prompt: String,

    #[serde(default)]
    pub options: Option<Vec<String>>,

    #[validate(length(min = 1, max = 2000))]
    pub correct_answer: String,

    #[validate(range(min = 0, max = 1000))]
    pub points: Option<i32>,
}

impl CreateQuizRequest {
    pub fn into_quiz(self) -> Quiz {
        let questions = self
            .questions
            .into_iter()
            .map(|q| {
                Question::new(
                    q.question_type,
                    &q.prompt,
                    q.options.unwrap_or_default(),
                    &q.correct_answer,
                    q.points,
                )
            })
            .collect();

        Quiz::new(&self.title, self.description, questions)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizRequest {
    #[validate(length(min = 1, message = "quizId must not be empty"))]
    pub quiz_id: String,

    pub user_name: Option<String>,

    pub answers: Vec<AnswerInput>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerInput {
    pub question_id: String,
    pub user_answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use validator::Validate;

    fn question(prompt: &str, answer: &str, points: Option<i32>) -> CreateQuestionRequest {
        CreateQuestionRequest {
            question_type: QuestionType::Text,
            prompt: prompt.to_string(),
            options: None,
            correct_answer: answer.to_string(),
            points,
        }
    }

    #[test]
    fn test_valid_create_quiz_request() {
        let request = CreateQuizRequest {
            title: "Capitals".to_string(),
            description: None,
            questions: vec![question("France?", "Paris", Some(2))],
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_quiz_without_questions_is_rejected() {
        let request = CreateQuizRequest {
            title: "Empty".to_string(),
            description: None,
            questions: vec![],
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_negative_points_are_rejected() {
        let request = CreateQuizRequest {
            title: "Capitals".to_string(),
            description: None,
            questions: vec![question("France?", "Paris", Some(-1))],
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_quiz_request_parses_client_payload() {
        let json = r#"{
            "title": "Mixed",
            "questions": [
                {
                    "type": "MCQ",
                    "question": "Pick b",
                    "options": ["a", "b"],
                    "correctAnswer": "b",
                    "points": 2
                },
                {"_id": "client-supplied", "question": "Free text", "correctAnswer": "yes"}
            ]
        }"#;

        let request: CreateQuizRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.questions[0].question_type, QuestionType::Mcq);
        assert_eq!(request.questions[1].question_type, QuestionType::Text);
        assert_eq!(request.questions[1].points, None);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_into_quiz_assigns_unique_question_ids() {
        let request = CreateQuizRequest {
            title: "Capitals".to_string(),
            description: Some("Europe".to_string()),
            questions: vec![
                question("France?", "Paris", None),
                question("Spain?", "Madrid", Some(3)),
                question("Italy?", "Rome", None),
            ],
        };

        let quiz = request.into_quiz();
        let ids: HashSet<_> = quiz.questions.iter().map(|q| q.id.clone()).collect();

        assert_eq!(ids.len(), 3);
        assert!(quiz.questions.iter().all(|q| !q.id.is_empty()));
        assert_eq!(quiz.questions[0].points, 1);
        assert_eq!(quiz.questions[1].points, 3);
        assert!(quiz.is_active);
    }

    #[test]
    fn test_submit_request_requires_answer_list() {
        let not_a_list = r#"{"quizId": "q", "answers": "Paris"}"#;
        assert!(serde_json::from_str::<SubmitQuizRequest>(not_a_list).is_err());

        let missing = r#"{"quizId": "q"}"#;
        assert!(serde_json::from_str::<SubmitQuizRequest>(missing).is_err());
    }

    #[test]
    fn test_submit_request_with_empty_quiz_id_is_rejected() {
        let request: SubmitQuizRequest =
            serde_json::from_str(r#"{"quizId": "", "answers": []}"#).unwrap();
        assert!(request.validate().is_err());
    }
}
