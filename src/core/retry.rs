// src/core/retry.rs
use std::time::Duration;

use crate::config::consts::{RETRY_ATTEMPTS, RETRY_BASE_MS, RETRY_MAX_MS};

/// Coarse failure class used to decide whether a fetch is worth repeating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connect or read timed out.
    Timeout,
    /// Server asked us to slow down (429, 503).
    Throttled,
    /// DNS, refused, reset.
    Connection,
    /// Any other 5xx.
    Http5xx(u16),
    /// Everything else (4xx, bad URL, body decode). Never retried.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    NoRetry,
    RetryAfter(Duration),
}

/// Exponential backoff with a cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts including the first one.
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: RETRY_ATTEMPTS,
            base_delay: Duration::from_millis(RETRY_BASE_MS),
            max_delay: Duration::from_millis(RETRY_MAX_MS),
        }
    }
}

impl RetryPolicy {
    /// `attempt` is 1-based: the attempt that just failed.
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryDecision {
        if attempt >= self.max_attempts {
            return RetryDecision::NoRetry;
        }
        match kind {
            ErrorKind::Other => RetryDecision::NoRetry,
            ErrorKind::Timeout
            | ErrorKind::Connection
            | ErrorKind::Throttled
            | ErrorKind::Http5xx(_) => {
                // base * 2^(attempt-1)
                let exp = 1u32 << attempt.saturating_sub(1).min(8);
                let delay = self.base_delay.saturating_mul(exp).min(self.max_delay);
                RetryDecision::RetryAfter(delay)
            }
        }
    }
}

/// Map an HTTP status to a retry class. `None` for success codes.
pub fn classify_status(status: u16) -> Option<ErrorKind> {
    match status {
        200..=399 => None,
        429 | 503 => Some(ErrorKind::Throttled),
        500..=599 => Some(ErrorKind::Http5xx(status)),
        _ => Some(ErrorKind::Other),
    }
}
