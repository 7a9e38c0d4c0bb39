//! Error types shared by the combinators.
//!
//! Faults raised by caller-supplied functions are never wrapped: fallible
//! combinators hand back the caller's own error unchanged. [`LambdaError`]
//! only covers failures detected by the library itself.

/// Errors raised by lambdakit's own operations.
///
/// # Examples
///
/// ```rust
/// use lambdakit::LambdaError;
///
/// let error = LambdaError::UnknownEvent { key: "GreenEvent".to_string() };
/// assert_eq!(
///     format!("{error}"),
///     "no handler registered for event GreenEvent"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LambdaError {
    /// A deferred division was evaluated with a zero divisor.
    #[error("attempted to divide by zero")]
    DivisionByZero,

    /// An event was dispatched to a handler table that has no handler for it.
    #[error("no handler registered for event {key}")]
    UnknownEvent {
        /// The `Debug` rendering of the event key.
        key: String,
    },

    /// A retry policy cannot be used as configured.
    #[error("invalid retry policy: {reason}")]
    InvalidRetryPolicy {
        /// Why the policy was rejected.
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_display() {
        assert_eq!(
            LambdaError::DivisionByZero.to_string(),
            "attempted to divide by zero"
        );
    }

    #[test]
    fn test_invalid_retry_policy_display() {
        let error = LambdaError::InvalidRetryPolicy {
            reason: "sleep interval must be non-zero",
        };
        assert_eq!(
            error.to_string(),
            "invalid retry policy: sleep interval must be non-zero"
        );
    }

    #[test]
    fn test_error_equality() {
        let first = LambdaError::UnknownEvent {
            key: "Blue".to_string(),
        };
        let second = LambdaError::UnknownEvent {
            key: "Blue".to_string(),
        };
        assert_eq!(first, second);
        assert_ne!(first, LambdaError::DivisionByZero);
    }
}
