// src/handlers/score.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError,
    models::score_record::{ScoreRecord, SubmitScoreRequest},
    utils::topic_id::TopicId,
};

/// Records a quiz score, at most once per (user, topic).
///
/// * Re-validates the payload server-side; the stored record is authoritative.
/// * The insert races against concurrent submissions for the same key, so
///   uniqueness is left to the storage layer: a single INSERT .. ON CONFLICT
///   DO NOTHING against the (user_email, topic_id) unique index. Zero returned
///   rows means an earlier submission holds the slot, and that record stays
///   untouched.
/// * Returns 201 Created with the stored record, or 409 Conflict on a repeat.
pub async fn submit_score(
    State(pool): State<PgPool>,
    Json(payload): Json<SubmitScoreRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    if payload.score > payload.total {
        return Err(AppError::BadRequest(
            "Score cannot exceed the question count".to_string(),
        ));
    }

    let id = TopicId::decode(&payload.topic_id)?;
    if id.level != payload.level_id {
        return Err(AppError::BadRequest(format!(
            "Topic '{}' does not belong to level {}",
            payload.topic_id, payload.level_id
        )));
    }
    let custom_id = id.encode();

    // Topics are immutable content, so the existence check cannot race with
    // the insert below.
    let topic = sqlx::query_scalar::<_, i64>("SELECT id FROM topics WHERE custom_id = $1")
        .bind(&custom_id)
        .fetch_optional(&pool)
        .await?;

    if topic.is_none() {
        return Err(AppError::NotFound("Topic not found".to_string()));
    }

    let record = sqlx::query_as::<_, ScoreRecord>(
        r#"
        INSERT INTO quiz_scores (user_email, topic_id, level_id, score, total)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (user_email, topic_id) DO NOTHING
        RETURNING id, user_email, topic_id, level_id, score, total, created_at
        "#,
    )
    .bind(&payload.user_email)
    .bind(&custom_id)
    .bind(payload.level_id)
    .bind(payload.score)
    .bind(payload.total)
    .fetch_optional(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to insert quiz score: {:?}", e);
        AppError::from(e)
    })?;

    match record {
        Some(record) => Ok((StatusCode::CREATED, Json(record))),
        None => Err(AppError::Conflict(
            "Quiz already submitted for this topic".to_string(),
        )),
    }
}
