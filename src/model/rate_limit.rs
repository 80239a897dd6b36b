//! Rate limit windows and decision types.
//!
//! Provides the three nested time windows the limiter evaluates per API key, the
//! explicit escalation relation between them, and the decision types returned to
//! middleware. Windows form an ordered tuple rather than a positional list so the
//! "next coarser tier" relation is defined by the type, not by list indices.

use chrono::{DateTime, Duration, Utc};

use crate::model::api_key::ApiKeyLimits;

/// A named rate limit window evaluated against an API key's usage log.
///
/// Evaluation always proceeds finest to coarsest: `Second`, then `Minute`, then
/// `FifteenMinutes`. When a window's ceiling is exceeded the penalty escalates
/// to the next coarser window's duration, so a burst violator waits out the
/// whole minute rather than just the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateLimitWindow {
    /// 1 second window.
    Second,
    /// 60 second window.
    Minute,
    /// 900 second window, the coarsest tier.
    FifteenMinutes,
}

impl RateLimitWindow {
    /// All windows in evaluation order, finest to coarsest.
    ///
    /// # Returns
    /// - `[RateLimitWindow; 3]` - The fixed evaluation order
    pub const fn ordered() -> [RateLimitWindow; 3] {
        [Self::Second, Self::Minute, Self::FifteenMinutes]
    }

    /// Duration of this window in seconds.
    ///
    /// # Returns
    /// - `i64` - Window length in seconds
    pub const fn duration_secs(&self) -> i64 {
        match self {
            Self::Second => 1,
            Self::Minute => 60,
            Self::FifteenMinutes => 900,
        }
    }

    /// Duration of this window as a chrono `Duration`.
    ///
    /// # Returns
    /// - `Duration` - Window length
    pub fn duration(&self) -> Duration {
        Duration::seconds(self.duration_secs())
    }

    /// The window a violation of this window escalates to.
    ///
    /// Returns the next coarser window; the coarsest window escalates to itself.
    /// A denied request waits out the escalated window's full duration.
    ///
    /// # Returns
    /// - `RateLimitWindow` - The escalation target
    pub const fn escalation(&self) -> RateLimitWindow {
        match self {
            Self::Second => Self::Minute,
            Self::Minute => Self::FifteenMinutes,
            Self::FifteenMinutes => Self::FifteenMinutes,
        }
    }

    /// The configured request ceiling for this window on the given key.
    ///
    /// # Arguments
    /// - `limits` - The key's configured per-window ceilings
    ///
    /// # Returns
    /// - `i64` - The ceiling; 0 (or negative) means always deny
    pub fn ceiling(&self, limits: &ApiKeyLimits) -> i64 {
        match self {
            Self::Second => limits.per_second as i64,
            Self::Minute => limits.per_minute as i64,
            Self::FifteenMinutes => limits.per_15_minutes as i64,
        }
    }
}

/// Ephemeral per-window state computed for one rate limit check.
///
/// Never persisted; recomputed on every check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowStatus {
    /// The configured ceiling for the window.
    pub limit: i64,
    /// Requests left in the window, never negative.
    pub remaining: i64,
    /// Absolute time at which the window's count is expected to roll over.
    pub reset_at: DateTime<Utc>,
}

/// Outcome of one rate limit check for one request.
///
/// Carries per-window statuses for response headers plus a legacy aggregate
/// status: the finest tier when the request is allowed, the escalated tier when
/// it is denied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitDecision {
    /// Whether the request may proceed.
    pub allowed: bool,
    /// Seconds the caller must wait before retrying; 0 when allowed.
    pub retry_after_secs: i64,
    /// Status for each window in evaluation order.
    pub windows: [(RateLimitWindow, WindowStatus); 3],
    /// Aggregate status for single-header consumers.
    pub legacy: WindowStatus,
}

impl RateLimitDecision {
    /// Builds the decision for an allowed request.
    ///
    /// Remaining counts account for the request just recorded
    /// (`ceiling - usage - 1`, floored at 0); each window resets one full
    /// duration from now. The legacy status mirrors the finest window.
    ///
    /// # Arguments
    /// - `limits` - The key's configured ceilings
    /// - `usage` - Observed usage count per window, in evaluation order
    /// - `now` - The instant the check was performed
    ///
    /// # Returns
    /// - `RateLimitDecision` - Allowed decision with per-window statuses
    pub fn allowed(limits: &ApiKeyLimits, usage: &[(RateLimitWindow, i64)], now: DateTime<Utc>) -> Self {
        let windows = RateLimitWindow::ordered().map(|window| {
            let ceiling = window.ceiling(limits);
            let used = usage
                .iter()
                .find(|(w, _)| *w == window)
                .map(|(_, count)| *count)
                .unwrap_or(0);
            let status = WindowStatus {
                limit: ceiling,
                remaining: (ceiling - used - 1).max(0),
                reset_at: now + window.duration(),
            };
            (window, status)
        });

        Self {
            allowed: true,
            retry_after_secs: 0,
            legacy: windows[0].1,
            windows,
        }
    }

    /// Builds the decision for a request denied at the given window.
    ///
    /// The penalty escalates to the violated window's escalation target: the
    /// retry delay and reset time are the escalated window's full duration from
    /// now. Every window reports 0 remaining; the legacy status mirrors the
    /// escalated tier.
    ///
    /// # Arguments
    /// - `limits` - The key's configured ceilings
    /// - `violated` - The window whose ceiling was exceeded
    /// - `now` - The instant the check was performed
    ///
    /// # Returns
    /// - `RateLimitDecision` - Denied decision with escalated retry values
    pub fn denied(limits: &ApiKeyLimits, violated: RateLimitWindow, now: DateTime<Utc>) -> Self {
        let escalated = violated.escalation();
        let retry_after_secs = escalated.duration_secs();
        let reset_at = now + escalated.duration();

        let windows = RateLimitWindow::ordered().map(|window| {
            let status = WindowStatus {
                limit: window.ceiling(limits),
                remaining: 0,
                reset_at: if window == violated {
                    reset_at
                } else {
                    now + window.duration()
                },
            };
            (window, status)
        });

        Self {
            allowed: false,
            retry_after_secs,
            windows,
            legacy: WindowStatus {
                limit: escalated.ceiling(limits),
                remaining: 0,
                reset_at,
            },
        }
    }

    /// Builds the degraded decision used when the usage store is unavailable.
    ///
    /// The limiter fails open: the request is allowed and nothing is recorded,
    /// so each window reports its full ceiling as remaining. Availability over
    /// strictness; the caller logs the underlying store error.
    ///
    /// # Arguments
    /// - `limits` - The key's configured ceilings
    /// - `now` - The instant the check was performed
    ///
    /// # Returns
    /// - `RateLimitDecision` - Allowed decision with full ceilings reported
    pub fn fail_open(limits: &ApiKeyLimits, now: DateTime<Utc>) -> Self {
        let windows = RateLimitWindow::ordered().map(|window| {
            let ceiling = window.ceiling(limits);
            let status = WindowStatus {
                limit: ceiling,
                remaining: ceiling.max(0),
                reset_at: now + window.duration(),
            };
            (window, status)
        });

        Self {
            allowed: true,
            retry_after_secs: 0,
            legacy: windows[0].1,
            windows,
        }
    }
}
