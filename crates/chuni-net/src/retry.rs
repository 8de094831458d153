//! Retry strategy abstraction for connection failures.
//!
//! This module provides traits and implementations for retry logic with
//! configurable backoff strategies. Retries here are transport-level only:
//! callers decide which errors are retryable.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::config::network::retry as retry_config;

/// Trait for defining retry strategies.
///
/// Implementations define how many attempts to make and how long to wait
/// between each attempt.
pub trait RetryStrategy {
    /// Maximum number of attempts, including the first one.
    fn max_attempts(&self) -> u32;

    /// Delay after the given failed attempt (0-indexed).
    ///
    /// Returns `None` if no delay should be applied.
    fn delay_for_attempt(&self, attempt: u32) -> Option<Duration>;
}

/// Run `f` up to `strategy.max_attempts()` times.
///
/// Errors for which `is_retryable` returns false are returned immediately.
/// Between retryable failures the strategy's delay is awaited.
pub async fn execute<S, T, E, F, Fut, R>(strategy: &S, mut f: F, is_retryable: R) -> Result<T, E>
where
    S: RetryStrategy + ?Sized,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    R: Fn(&E) -> bool,
    E: std::fmt::Display,
{
    let max = strategy.max_attempts().max(1);
    let mut attempt = 0;

    loop {
        match f(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) if attempt + 1 < max && is_retryable(&e) => {
                warn!("Attempt {}/{} failed: {}", attempt + 1, max, e);
                if let Some(delay) = strategy.delay_for_attempt(attempt) {
                    tokio::time::sleep(delay).await;
                }
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Exponential backoff retry strategy.
///
/// Uses the configured delays from `config::network::retry`.
#[derive(Debug, Clone, Default)]
pub struct ExponentialBackoff;

impl ExponentialBackoff {
    pub fn new() -> Self {
        Self
    }
}

impl RetryStrategy for ExponentialBackoff {
    fn max_attempts(&self) -> u32 {
        retry_config::MAX_CONNECT_ATTEMPTS
    }

    fn delay_for_attempt(&self, attempt: u32) -> Option<Duration> {
        retry_config::RETRY_DELAYS_MS
            .get(attempt as usize)
            .map(|&ms| Duration::from_millis(ms))
    }
}

/// Fixed delay retry strategy.
///
/// Waits a constant duration between each attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedDelay {
    max_attempts: u32,
    delay: Duration,
}

impl FixedDelay {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }
}

impl RetryStrategy for FixedDelay {
    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn delay_for_attempt(&self, _attempt: u32) -> Option<Duration> {
        Some(self.delay)
    }
}

/// No retry strategy - attempt once and return the result.
#[derive(Debug, Clone, Default)]
pub struct NoRetry;

impl NoRetry {
    pub fn new() -> Self {
        Self
    }
}

impl RetryStrategy for NoRetry {
    fn max_attempts(&self) -> u32 {
        1
    }

    fn delay_for_attempt(&self, _attempt: u32) -> Option<Duration> {
        None
    }
}

/// Retry strategy selected in [`ClientConfig`](crate::config::ClientConfig).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RetryPolicy {
    #[default]
    Exponential,
    Fixed { max_attempts: u32, delay: Duration },
    None,
}

impl RetryStrategy for RetryPolicy {
    fn max_attempts(&self) -> u32 {
        match self {
            Self::Exponential => ExponentialBackoff.max_attempts(),
            Self::Fixed { max_attempts, delay } => {
                FixedDelay::new(*max_attempts, *delay).max_attempts()
            }
            Self::None => NoRetry.max_attempts(),
        }
    }

    fn delay_for_attempt(&self, attempt: u32) -> Option<Duration> {
        match self {
            Self::Exponential => ExponentialBackoff.delay_for_attempt(attempt),
            Self::Fixed { max_attempts, delay } => {
                FixedDelay::new(*max_attempts, *delay).delay_for_attempt(attempt)
            }
            Self::None => NoRetry.delay_for_attempt(attempt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_backoff_delays() {
        let strategy = ExponentialBackoff::new();

        assert_eq!(strategy.max_attempts(), 3);
        assert_eq!(
            strategy.delay_for_attempt(0),
            Some(Duration::from_millis(250))
        );
        assert_eq!(
            strategy.delay_for_attempt(2),
            Some(Duration::from_millis(1000))
        );
        assert_eq!(strategy.delay_for_attempt(3), None);
    }

    #[test]
    fn test_policy_delegates() {
        let fixed = RetryPolicy::Fixed {
            max_attempts: 4,
            delay: Duration::from_millis(10),
        };
        assert_eq!(fixed.max_attempts(), 4);
        assert_eq!(fixed.delay_for_attempt(3), Some(Duration::from_millis(10)));
        assert_eq!(RetryPolicy::None.max_attempts(), 1);
        assert_eq!(RetryPolicy::default().max_attempts(), 3);
    }

    #[tokio::test]
    async fn test_execute_success_after_retry() {
        let strategy = FixedDelay::new(3, Duration::from_millis(1));
        let mut attempts = 0;
        let result: Result<i32, &str> = execute(
            &strategy,
            |_| {
                attempts += 1;
                let outcome = if attempts < 3 { Err("refused") } else { Ok(42) };
                async move { outcome }
            },
            |_| true,
        )
        .await;
        assert_eq!(result, Ok(42));
        assert_eq!(attempts, 3);
    }

    #[tokio::test]
    async fn test_execute_stops_on_non_retryable() {
        let strategy = FixedDelay::new(5, Duration::from_millis(1));
        let mut attempts = 0;
        let result: Result<i32, &str> = execute(
            &strategy,
            |_| {
                attempts += 1;
                async { Err("bad request") }
            },
            |e| *e == "refused",
        )
        .await;
        assert_eq!(result, Err("bad request"));
        assert_eq!(attempts, 1);
    }

    #[tokio::test]
    async fn test_no_retry_execute() {
        let mut attempts = 0;
        let result: Result<i32, &str> = execute(
            &NoRetry::new(),
            |_| {
                attempts += 1;
                async { Err("refused") }
            },
            |_| true,
        )
        .await;
        assert_eq!(result, Err("refused"));
        assert_eq!(attempts, 1);
    }
}
