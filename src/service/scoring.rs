//! Challenge submission scoring.
//!
//! Converts elapsed solve time into an integer point value between 0 and 4096,
//! rewarding speed with a generous early plateau and fair decay thereafter. The
//! decay shape depends on how much time was available when the challenge input
//! was generated:
//!
//! - 2 hours or more: dual-phase, a logarithmic first hour spanning [2048, 4096]
//!   followed by a linear glide from 2048 to 0 over the rest of the window.
//! - Between 1 and 2 hours: a single logarithmic curve over the first hour from
//!   4096 down to 0.
//! - Under 1 hour: a single linear curve over the whole window.
//!
//! Scoring is a pure function of the three timestamps; it never errors and has
//! no hidden state.

use crate::model::challenge::ChallengeTiming;

/// Maximum score for an instant submission.
const MAX_POINTS: f64 = 4096.0;

/// Submissions faster than this always earn the maximum score.
const GRACE_PERIOD_SECS: f64 = 10.0;

/// Length of the logarithmic phase.
const LOG_PHASE_SECS: f64 = 3600.0;

/// Minimum time remaining at input generation for dual-phase scoring.
const DUAL_PHASE_MIN_REMAINING_SECS: f64 = 7200.0;

/// Exponent steepening the logarithmic decay curve.
const LOG_CURVE_EXPONENT: f64 = 0.6;

/// Computes the point value for a challenge submission.
///
/// Fast submissions inside the grace period earn the full 4096 points and
/// submissions at or after the challenge deadline earn 0; everything in
/// between decays along the curve selected by the time that was available
/// when the input was generated.
///
/// # Arguments
/// - `timing` - The submission's three timestamps, normalized to UTC
///
/// # Returns
/// - `u32` - Points earned, always in `[0, 4096]`
pub fn score_challenge(timing: &ChallengeTiming) -> u32 {
    let elapsed = timing.elapsed_secs();

    // Clock skew or instant submission.
    if elapsed <= 0.0 {
        return MAX_POINTS as u32;
    }
    if elapsed < GRACE_PERIOD_SECS {
        return MAX_POINTS as u32;
    }
    if timing.submitted_at >= timing.challenge_end_at {
        return 0;
    }

    let time_remaining = timing.time_remaining_secs();

    if time_remaining >= DUAL_PHASE_MIN_REMAINING_SECS {
        dual_phase_points(elapsed, time_remaining)
    } else if time_remaining >= LOG_PHASE_SECS {
        logarithmic_points(elapsed)
    } else {
        linear_points(elapsed, time_remaining)
    }
}

/// Dual-phase decay for challenges with at least 2 hours available.
///
/// The first hour decays logarithmically from 4096 to exactly 2048; after the
/// transition the remaining 2048 points decay linearly over the rest of the
/// window. Both branches yield 2048 at the 1-hour mark.
fn dual_phase_points(elapsed: f64, time_remaining: f64) -> u32 {
    if elapsed <= LOG_PHASE_SECS {
        let raw = MAX_POINTS - (MAX_POINTS / 2.0) * log_decay(elapsed);
        return ceil_unless_exact(raw) as u32;
    }

    let time_in_linear = elapsed - LOG_PHASE_SECS;
    let total_linear = time_remaining - LOG_PHASE_SECS;
    if total_linear <= 0.0 {
        return 0;
    }

    let fraction_remaining = (1.0 - time_in_linear / total_linear).max(0.0);
    if fraction_remaining == 0.0 {
        return 0;
    }
    ((MAX_POINTS / 2.0) * fraction_remaining).ceil() as u32
}

/// Single logarithmic curve for challenges with between 1 and 2 hours
/// available. Decays the full 4096 points over the first hour; clamps at 0
/// for any later submission.
fn logarithmic_points(elapsed: f64) -> u32 {
    let raw = MAX_POINTS - MAX_POINTS * log_decay(elapsed);
    if raw <= 0.0 {
        return 0;
    }
    ceil_unless_exact(raw) as u32
}

/// Single linear curve for challenges with under 1 hour available.
fn linear_points(elapsed: f64, time_remaining: f64) -> u32 {
    if time_remaining <= 0.0 {
        return 0;
    }

    let fraction_remaining = (1.0 - elapsed / time_remaining).max(0.0);
    if fraction_remaining == 0.0 {
        return 0;
    }
    (MAX_POINTS * fraction_remaining).ceil() as u32
}

/// Steepened logarithmic decay factor, 0 at `elapsed = 0` and exactly 1 at
/// `elapsed = LOG_PHASE_SECS`.
fn log_decay(elapsed: f64) -> f64 {
    (1.0 + elapsed / LOG_PHASE_SECS).log2().powf(LOG_CURVE_EXPONENT)
}

/// Rounds up to the nearest integer unless the raw value is already exact.
///
/// Exact values pass through unchanged so the curve endpoints (4096 and the
/// 2048 transition) are hit precisely rather than rounded past.
fn ceil_unless_exact(raw: f64) -> f64 {
    if raw.fract() == 0.0 {
        raw
    } else {
        raw.ceil()
    }
}
