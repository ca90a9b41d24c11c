pub mod health_handler;
pub mod quiz_handler;
pub mod submission_handler;

use actix_web::web;

use crate::errors::AppError;

pub use health_handler::{health_check, health_check_ready};
pub use quiz_handler::{create_quiz, delete_quiz, get_quiz, list_quizzes};
pub use submission_handler::{get_submission, submit_quiz};

/// Registers every API route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(health_check)
        .service(health_check_ready)
        .service(create_quiz)
        .service(list_quizzes)
        .service(get_quiz)
        .service(delete_quiz)
        .service(submit_quiz)
        .service(get_submission);
}

/// Malformed JSON bodies become `ValidationError`s so they share the API's
/// error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(256 * 1024)
        .error_handler(|err, _req| AppError::from(err).into())
}
