use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum DivvyError {
    /// Expense amount is not a positive finite number
    #[error("Amount must be a positive finite number, got {0}")]
    InvalidAmount(f64),

    /// Split has no participants
    #[error("Split has no participants")]
    EmptySplit,

    /// A share value is negative
    #[error("Share for user {user_id} is negative: {share}")]
    NegativeShare { user_id: String, share: f64 },

    /// Share amounts don't add up to the expense amount
    #[error("Split amounts sum to {actual}, expected {expected}")]
    InvalidSplit { expected: f64, actual: f64 },

    /// Percentages don't add up to 100
    #[error("Percentages sum to {0}, expected 100")]
    InvalidPercentage(f64),

    /// Proportional split where every weight is zero
    #[error("Share weights sum to zero")]
    ZeroShareWeights,

    /// Settlement reduction hit its safety cap; the input balances are
    /// malformed or the scope is too large to reduce
    #[error("Settlement reduction exceeded {0} iterations")]
    IterationLimitExceeded(usize),
}
