//! Challenge timing model for submission scoring.
//!
//! Provides the three timestamps the scoring function consumes. Timestamps are
//! UTC-aware by construction; offset-less client input is normalized at the
//! DTO boundary before a timing is assembled.

use chrono::{DateTime, Utc};

/// Timing of one challenge submission.
///
/// Pure input to the scoring function; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeTiming {
    /// When the challenge input was generated for the solver (timer start).
    pub input_generated_at: DateTime<Utc>,
    /// When the solution was submitted.
    pub submitted_at: DateTime<Utc>,
    /// When the challenge closes.
    pub challenge_end_at: DateTime<Utc>,
}

impl ChallengeTiming {
    /// Creates a timing from UTC-aware timestamps.
    ///
    /// # Arguments
    /// - `input_generated_at` - Timer start
    /// - `submitted_at` - Submission time
    /// - `challenge_end_at` - Challenge deadline
    ///
    /// # Returns
    /// - `ChallengeTiming` - The assembled timing
    pub fn new(
        input_generated_at: DateTime<Utc>,
        submitted_at: DateTime<Utc>,
        challenge_end_at: DateTime<Utc>,
    ) -> Self {
        Self {
            input_generated_at,
            submitted_at,
            challenge_end_at,
        }
    }

    /// Seconds elapsed between timer start and submission.
    ///
    /// May be zero or negative under clock skew; the scoring function treats
    /// that as an instant submission.
    ///
    /// # Returns
    /// - `f64` - Elapsed solve time in seconds
    pub fn elapsed_secs(&self) -> f64 {
        (self.submitted_at - self.input_generated_at).num_milliseconds() as f64 / 1000.0
    }

    /// Seconds between timer start and the challenge deadline.
    ///
    /// # Returns
    /// - `f64` - Time that was available to the solver in seconds
    pub fn time_remaining_secs(&self) -> f64 {
        (self.challenge_end_at - self.input_generated_at).num_milliseconds() as f64 / 1000.0
    }
}
