//! Error types for the carcel-rules crate.
//!
//! The rules cannot fail for well-formed inputs. The two failure modes left
//! are sanity arithmetic leaving the `i32` range, which is reported instead
//! of wrapping, and rule tunables that describe an empty range.

/// Errors that can occur while evaluating a rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// A stat update would overflow its integer range.
    #[error("arithmetic overflow in rule computation: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },

    /// The rule tunables are inconsistent.
    #[error("invalid rules config: {reason}")]
    InvalidConfig {
        /// Description of the inconsistency.
        reason: String,
    },
}

/// Apply a signed delta to a stat with checked arithmetic.
pub(crate) fn shift(value: i32, delta: i32, context: &str) -> Result<i32, RuleError> {
    value
        .checked_add(delta)
        .ok_or_else(|| RuleError::ArithmeticOverflow {
            context: context.to_owned(),
        })
}
