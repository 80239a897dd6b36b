use axum::{extract::Json, response::IntoResponse};

use crate::{
    error::AppError,
    model::{
        api::{ChallengeScoreDto, ScoreChallengeDto},
        challenge::ChallengeTiming,
    },
    service::scoring,
};

/// Score a challenge submission.
///
/// Computes the point value for a timed challenge submission from its three
/// timestamps. Scoring is pure; nothing is persisted. The route sits behind
/// the rate limiting middleware, so a valid API key is required.
///
/// # Access Control
/// - API key - Any active key admitted by the rate limiter
///
/// # Arguments
/// - `payload` - The submission's timestamps
///
/// # Returns
/// - `200 OK` - The points earned
/// - `401 Unauthorized` / `403 Forbidden` - Missing, unknown, or inactive API key
/// - `429 Too Many Requests` - Rate limit exceeded
pub async fn score_challenge(
    Json(payload): Json<ScoreChallengeDto>,
) -> Result<impl IntoResponse, AppError> {
    let timing = ChallengeTiming::new(
        payload.input_generated_at.into(),
        payload.submitted_at.into(),
        payload.challenge_end_at.into(),
    );

    Ok(Json(ChallengeScoreDto {
        points: scoring::score_challenge(&timing),
    }))
}
