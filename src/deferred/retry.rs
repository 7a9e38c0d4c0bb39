//! Polling a condition until it holds or a deadline passes.
//!
//! The condition (what to check) is a closure supplied by the caller; the
//! polling mechanics (how often, for how long, what to report) live here.

use std::thread;
use std::time::{Duration, Instant};

use crate::error::LambdaError;

/// How often and for how long [`retry_until_true_or_timeout`] polls.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use lambdakit::deferred::RetryPolicy;
///
/// let policy = RetryPolicy::default()
///     .with_sleep_interval(Duration::from_millis(50))
///     .with_timeout(Duration::from_secs(5));
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RetryPolicy {
    /// Pause between two attempts.
    pub sleep_interval: Duration,
    /// Total time after which polling gives up.
    pub timeout: Duration,
}

impl RetryPolicy {
    /// Pause used by [`RetryPolicy::default`].
    pub const DEFAULT_SLEEP_INTERVAL: Duration = Duration::from_millis(200);

    /// Timeout used by [`RetryPolicy::default`].
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a policy from its two settings.
    pub const fn new(sleep_interval: Duration, timeout: Duration) -> Self {
        Self {
            sleep_interval,
            timeout,
        }
    }

    /// Replaces the sleep interval.
    #[must_use]
    pub const fn with_sleep_interval(mut self, sleep_interval: Duration) -> Self {
        self.sleep_interval = sleep_interval;
        self
    }

    /// Replaces the timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Checks that the policy can be used for polling.
    ///
    /// # Errors
    ///
    /// Returns [`LambdaError::InvalidRetryPolicy`] when the sleep interval is
    /// zero or longer than the timeout.
    pub fn validate(&self) -> Result<(), LambdaError> {
        if self.sleep_interval.is_zero() {
            return Err(LambdaError::InvalidRetryPolicy {
                reason: "sleep interval must be non-zero",
            });
        }
        if self.timeout < self.sleep_interval {
            return Err(LambdaError::InvalidRetryPolicy {
                reason: "timeout must not be shorter than the sleep interval",
            });
        }
        Ok(())
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SLEEP_INTERVAL, Self::DEFAULT_TIMEOUT)
    }
}

/// Calls `predicate` until it returns `true` or `policy.timeout` elapses.
///
/// The predicate is always called at least once. Between attempts the
/// current thread sleeps for `policy.sleep_interval` (or for whatever is left
/// of the timeout, if that is shorter). Every failed attempt is logged at
/// `debug` level with the elapsed and remaining time.
///
/// Returns `Ok(true)` as soon as the predicate succeeds and `Ok(false)` once
/// the timeout has expired.
///
/// # Errors
///
/// Returns [`LambdaError::InvalidRetryPolicy`] before the first attempt if
/// `policy` does not validate.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use lambdakit::deferred::{RetryPolicy, retry_until_true_or_timeout};
///
/// let policy = RetryPolicy::new(Duration::from_millis(1), Duration::from_secs(1));
/// let mut attempts = 0;
/// let server_response_succeeded = || {
///     attempts += 1;
///     attempts == 3
/// };
///
/// assert_eq!(retry_until_true_or_timeout(server_response_succeeded, &policy), Ok(true));
/// assert_eq!(attempts, 3);
/// ```
pub fn retry_until_true_or_timeout<P>(
    mut predicate: P,
    policy: &RetryPolicy,
) -> Result<bool, LambdaError>
where
    P: FnMut() -> bool,
{
    policy.validate()?;
    let started = Instant::now();
    let mut attempt = 0_u64;

    loop {
        attempt += 1;
        if predicate() {
            tracing::debug!(attempt, elapsed = ?started.elapsed(), "condition met");
            return Ok(true);
        }

        let elapsed = started.elapsed();
        let remaining = policy.timeout.checked_sub(elapsed);
        let Some(remaining) = remaining.filter(|left| !left.is_zero()) else {
            tracing::warn!(attempt, elapsed = ?elapsed, "condition not met before timeout");
            return Ok(false);
        };

        tracing::debug!(
            attempt,
            elapsed = ?elapsed,
            remaining = ?remaining,
            "condition not met, retrying"
        );
        thread::sleep(policy.sleep_interval.min(remaining));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.sleep_interval, Duration::from_millis(200));
        assert_eq!(policy.timeout, Duration::from_secs(30));
        assert!(policy.validate().is_ok());
    }

    #[rstest]
    #[case(Duration::ZERO, Duration::from_secs(1))]
    #[case(Duration::from_secs(2), Duration::from_secs(1))]
    fn test_invalid_policies(#[case] sleep_interval: Duration, #[case] timeout: Duration) {
        let policy = RetryPolicy::new(sleep_interval, timeout);
        assert!(matches!(
            policy.validate(),
            Err(LambdaError::InvalidRetryPolicy { .. })
        ));
        assert!(retry_until_true_or_timeout(|| true, &policy).is_err());
    }

    #[test]
    fn test_immediate_success_calls_once() {
        let mut calls = 0;
        let policy = RetryPolicy::new(Duration::from_millis(1), Duration::from_millis(100));
        let result = retry_until_true_or_timeout(
            || {
                calls += 1;
                true
            },
            &policy,
        );
        assert_eq!(result, Ok(true));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_timeout_returns_false() {
        let mut calls = 0;
        let policy = RetryPolicy::new(Duration::from_millis(5), Duration::from_millis(20));
        let started = Instant::now();
        let result = retry_until_true_or_timeout(
            || {
                calls += 1;
                false
            },
            &policy,
        );
        assert_eq!(result, Ok(false));
        assert!(calls >= 2);
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
