// src/handlers/topic.rs

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use sqlx::PgPool;

use crate::{
    config::Config,
    error::AppError,
    models::topic::{
        GradeAttemptRequest, QuizQuestion, Topic, TopicResponse, TopicSummary, validate_question,
    },
    utils::{
        navigation::{self, NavTarget},
        topic_id::TopicId,
    },
};

/// Grades an attempt against a quiz.
///
/// Each selected option index resolves to its text, which is compared against
/// the question's designated answer value. Unanswered questions and
/// out-of-range selections never count. The total is always the full question
/// count, so a sparse or even empty attempt is a legal input, not an error;
/// blocking empty submissions is a UX concern left to the caller.
fn grade(quiz: &[QuizQuestion], answers: &HashMap<usize, usize>) -> (usize, usize) {
    let total = quiz.len();
    let mut correct = 0;

    for (index, question) in quiz.iter().enumerate() {
        if let Some(&selected) = answers.get(&index) {
            if let Some(selected_text) = question.options.get(selected) {
                if *selected_text == question.answer {
                    correct += 1;
                }
            }
        }
    }

    (correct, total)
}

/// Decodes the path identifier and checks it belongs to the path level.
fn parse_topic_path(level_id: i64, topic_id: &str) -> Result<TopicId, AppError> {
    let id = TopicId::decode(topic_id)?;

    if id.level != level_id {
        return Err(AppError::BadRequest(format!(
            "Topic '{}' does not belong to level {}",
            topic_id, level_id
        )));
    }

    Ok(id)
}

async fn fetch_topic(pool: &PgPool, custom_id: &str) -> Result<Topic, AppError> {
    sqlx::query_as::<_, Topic>(
        r#"
        SELECT id, custom_id, level_id, sequence, title, content, quiz, created_at
        FROM topics
        WHERE custom_id = $1
        "#,
    )
    .bind(custom_id)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::NotFound("Topic not found".to_string()))
}

/// Lists the topics of one level in sequence order.
pub async fn list_topics(
    State(pool): State<PgPool>,
    Path(level_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if level_id < 1 {
        return Err(AppError::InvalidIdentifier(format!(
            "Invalid level {}",
            level_id
        )));
    }

    let topics = sqlx::query_as::<_, TopicSummary>(
        r#"
        SELECT custom_id, level_id, sequence, title
        FROM topics
        WHERE level_id = $1
        ORDER BY sequence
        "#,
    )
    .bind(level_id)
    .fetch_all(&pool)
    .await?;

    if topics.is_empty() {
        return Err(AppError::NotFound(format!(
            "Level {} has no topics",
            level_id
        )));
    }

    Ok(Json(topics))
}

/// Retrieves a single topic with its quiz and derived neighbor links.
///
/// The quiz questions include the answer field, matching the observed wire
/// contract: clients grade attempts locally for immediate feedback.
pub async fn get_topic(
    State(pool): State<PgPool>,
    State(config): State<Config>,
    Path((level_id, topic_id)): Path<(i64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_topic_path(level_id, &topic_id)?;

    // Look up by the canonical form so unpadded ids still resolve.
    let topic = fetch_topic(&pool, &id.encode()).await?;

    let previous = navigation::previous(id, config.level_size);
    let next = navigation::next(id, config.level_size).map(NavTarget::topic);

    Ok(Json(TopicResponse {
        custom_id: topic.custom_id,
        level_id: topic.level_id,
        sequence: topic.sequence,
        title: topic.title,
        content: topic.content,
        quiz: topic.quiz,
        previous,
        next,
    }))
}

/// Grades a quiz attempt without persisting anything.
///
/// This is the immediate-feedback path; the durable, authoritative record is
/// written only through the quiz-scores submit endpoint.
pub async fn grade_attempt(
    State(pool): State<PgPool>,
    Path((level_id, topic_id)): Path<(i64, String)>,
    Json(req): Json<GradeAttemptRequest>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_topic_path(level_id, &topic_id)?;
    let topic = fetch_topic(&pool, &id.encode()).await?;

    let quiz = topic
        .quiz
        .ok_or(AppError::NotFound("Topic has no quiz".to_string()))?
        .0;

    // Ambiguous content should have been rejected at authoring time; grading
    // proceeds on the value-match contract either way.
    for question in &quiz {
        if let Err(e) = validate_question(question) {
            tracing::warn!("Ill-formed quiz question in topic {}: {}", topic.custom_id, e);
        }
    }

    let (correct_count, total_questions) = grade(&quiz, &req.answers);

    Ok(Json(serde_json::json!({
        "correct_count": correct_count,
        "total_questions": total_questions,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(options: &[&str], answer: &str) -> QuizQuestion {
        QuizQuestion {
            question: "q".to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            answer: answer.to_string(),
        }
    }

    fn three_question_quiz() -> Vec<QuizQuestion> {
        vec![
            question(&["A", "B", "C", "D"], "A"),
            question(&["A", "B", "C", "D"], "B"),
            question(&["A", "B", "C", "D"], "C"),
        ]
    }

    #[test]
    fn test_grade_single_correct_answer() {
        // Only question 0 answered, pointing at the text "A".
        let mut answers = HashMap::new();
        answers.insert(0, 0);

        assert_eq!(grade(&three_question_quiz(), &answers), (1, 3));
    }

    #[test]
    fn test_grade_empty_attempt_keeps_full_total() {
        let quiz: Vec<QuizQuestion> = (0..5).map(|_| question(&["A", "B"], "A")).collect();
        let answers = HashMap::new();

        assert_eq!(grade(&quiz, &answers), (0, 5));
    }

    #[test]
    fn test_grade_full_marks() {
        let mut answers = HashMap::new();
        answers.insert(0, 0);
        answers.insert(1, 1);
        answers.insert(2, 2);

        assert_eq!(grade(&three_question_quiz(), &answers), (3, 3));
    }

    #[test]
    fn test_grade_ignores_wrong_and_out_of_range_selections() {
        let mut answers = HashMap::new();
        answers.insert(0, 1); // wrong option
        answers.insert(1, 99); // out of range
        answers.insert(7, 0); // no such question

        assert_eq!(grade(&three_question_quiz(), &answers), (0, 3));
    }

    #[test]
    fn test_grade_matches_by_value_not_index() {
        // The correct text sits at a different index than in the answer key.
        let quiz = vec![question(&["B", "A"], "A")];
        let mut answers = HashMap::new();
        answers.insert(0, 1);

        assert_eq!(grade(&quiz, &answers), (1, 1));
    }

    #[test]
    fn test_parse_topic_path_checks_level_agreement() {
        assert!(parse_topic_path(2, "level2-topic-004").is_ok());

        let err = parse_topic_path(1, "level2-topic-004").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let err = parse_topic_path(1, "not-a-topic").unwrap_err();
        assert!(matches!(err, AppError::InvalidIdentifier(_)));
    }
}
