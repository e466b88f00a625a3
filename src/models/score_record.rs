// src/models/score_record.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'quiz_scores' table in the database.
/// One row per (user, topic); never updated or deleted.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: i64,

    /// Already-verified identity supplied by the caller.
    pub user_email: String,

    /// Canonical topic identifier the score belongs to.
    pub topic_id: String,

    pub level_id: i64,

    /// Correctly answered question count.
    pub score: i64,

    /// Full question count of the quiz, answered or not.
    pub total: i64,

    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// DTO for submitting a graded quiz attempt.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitScoreRequest {
    #[validate(email(message = "A valid user email is required."))]
    pub user_email: String,

    #[validate(range(min = 1, message = "Level must be positive."))]
    pub level_id: i64,

    #[validate(length(min = 1, max = 64))]
    pub topic_id: String,

    #[validate(range(min = 0))]
    pub score: i64,

    #[validate(range(min = 1, message = "A quiz has at least one question."))]
    pub total: i64,
}
