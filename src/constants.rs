/// Currency-unit floor below which a balance or payment is treated as
/// already settled, absorbing floating-point drift.
pub const SETTLEMENT_THRESHOLD: f64 = 0.01;

/// Tolerance within which an expense's shares must reconcile to its amount.
pub const SPLIT_TOLERANCE: f64 = 0.01;

/// Safety cap on settlement-reduction iterations. Well-formed input
/// terminates in at most debtors + creditors - 1 steps; hitting the cap is
/// a computation failure, not a partial result.
pub const MAX_SETTLEMENT_ITERATIONS: usize = 100;
