// src/models/topic.rs

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use validator::ValidationError;

use crate::utils::navigation::NavTarget;

/// Represents the 'topics' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,

    /// Canonical topic identifier, e.g. 'level1-topic-003'.
    pub custom_id: String,

    pub level_id: i64,

    /// 1-based position within the level.
    pub sequence: i64,

    pub title: String,

    /// Lesson body text.
    pub content: String,

    /// Quiz questions, present only for topics ending in a quiz.
    /// Stored as a JSON array in the database.
    pub quiz: Option<Json<Vec<QuizQuestion>>>,

    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// A single multiple-choice question.
///
/// The correct answer is matched by option *text*, not by index. The answer
/// field is sent to the client as well, since the client grades attempts
/// locally for immediate feedback before submitting the score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// Authoring-time validation for a question.
///
/// Duplicate option text would make value-matched grading ambiguous, so it is
/// rejected here, never at grading time.
pub fn validate_question(question: &QuizQuestion) -> Result<(), ValidationError> {
    if question.options.len() < 2 {
        return Err(ValidationError::new("too_few_options"));
    }

    let mut seen = HashSet::new();
    for opt in &question.options {
        if !seen.insert(opt.as_str()) {
            return Err(ValidationError::new("duplicate_option_text"));
        }
    }

    if !question.options.iter().any(|opt| opt == &question.answer) {
        return Err(ValidationError::new("answer_not_an_option"));
    }

    Ok(())
}

/// Summary row for the per-level topic listing.
#[derive(Debug, Serialize, FromRow)]
pub struct TopicSummary {
    pub custom_id: String,
    pub level_id: i64,
    pub sequence: i64,
    pub title: String,
}

/// Full topic payload with derived neighbor links.
#[derive(Debug, Serialize)]
pub struct TopicResponse {
    pub custom_id: String,
    pub level_id: i64,
    pub sequence: i64,
    pub title: String,
    pub content: String,
    pub quiz: Option<Json<Vec<QuizQuestion>>>,
    pub previous: NavTarget,
    pub next: Option<NavTarget>,
}

/// DTO for grading a quiz attempt.
#[derive(Debug, Deserialize)]
pub struct GradeAttemptRequest {
    /// Question index -> selected option index. Partial attempts are legal.
    pub answers: HashMap<usize, usize>,
}
