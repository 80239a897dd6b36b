//! DTOs exchanged with API clients.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Timestamp accepted with or without a timezone offset.
///
/// Clients send RFC 3339 timestamps; values without an offset are interpreted
/// as already-UTC so scoring arithmetic always runs on aware values.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimestampDto {
    Aware(DateTime<Utc>),
    Naive(NaiveDateTime),
}

impl From<TimestampDto> for DateTime<Utc> {
    fn from(value: TimestampDto) -> Self {
        match value {
            TimestampDto::Aware(aware) => aware,
            TimestampDto::Naive(naive) => naive.and_utc(),
        }
    }
}

/// Request body for scoring a challenge submission.
#[derive(Serialize, Deserialize)]
pub struct ScoreChallengeDto {
    pub input_generated_at: TimestampDto,
    pub submitted_at: TimestampDto,
    pub challenge_end_at: TimestampDto,
}

/// Points awarded for a challenge submission.
#[derive(Serialize, Deserialize)]
pub struct ChallengeScoreDto {
    pub points: u32,
}

/// Request body for creating an API key.
#[derive(Serialize, Deserialize)]
pub struct CreateApiKeyDto {
    pub name: String,
    pub rate_limit_per_second: i32,
    pub rate_limit_per_minute: i32,
    pub rate_limit_per_15_minutes: i32,
}

/// API key representation returned by the admin endpoints.
#[derive(Serialize, Deserialize)]
pub struct ApiKeyDto {
    pub id: i32,
    pub key: String,
    pub name: String,
    pub active: bool,
    pub rate_limit_per_second: i32,
    pub rate_limit_per_minute: i32,
    pub rate_limit_per_15_minutes: i32,
    pub created_at: DateTime<Utc>,
}
