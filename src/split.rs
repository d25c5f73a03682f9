//! Share construction and validation for the supported split methods.
//!
//! Every builder guarantees its output reconciles exactly to the expense
//! amount: per-user portions are rounded to cents and the rounding
//! remainder is folded into the last participant in sorted-id order. The
//! balance aggregator relies on this guarantee instead of re-checking it.

use crate::balance::round_to_cents;
use crate::constants::SPLIT_TOLERANCE;
use crate::error::DivvyError;
use log::debug;
use std::collections::HashMap;

fn validate_amount(amount: f64) -> Result<(), DivvyError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(DivvyError::InvalidAmount(amount));
    }
    Ok(())
}

/// Check that a share map reconciles to the expense amount: non-empty,
/// all shares non-negative, sum within `SPLIT_TOLERANCE` of the amount.
pub fn validate_shares(amount: f64, shares: &HashMap<String, f64>) -> Result<(), DivvyError> {
    validate_amount(amount)?;
    if shares.is_empty() {
        return Err(DivvyError::EmptySplit);
    }
    for (user_id, share) in shares {
        if *share < 0.0 {
            return Err(DivvyError::NegativeShare {
                user_id: user_id.clone(),
                share: *share,
            });
        }
    }
    let share_sum: f64 = shares.values().sum();
    if (share_sum - amount).abs() > SPLIT_TOLERANCE {
        return Err(DivvyError::InvalidSplit {
            expected: amount,
            actual: share_sum,
        });
    }
    Ok(())
}

// Assign cent-rounded portions in sorted-id order, folding the rounding
// remainder into the last participant so the shares sum exactly.
fn distribute(amount: f64, portions: Vec<(String, f64)>) -> HashMap<String, f64> {
    let mut portions = portions;
    portions.sort_by(|a, b| a.0.cmp(&b.0));

    let mut shares = HashMap::new();
    let mut assigned = 0.0;
    let last = portions.len() - 1;
    for (i, (user_id, portion)) in portions.into_iter().enumerate() {
        let share = if i == last {
            round_to_cents(amount - assigned)
        } else {
            round_to_cents(portion)
        };
        assigned += share;
        shares.insert(user_id, share);
    }
    shares
}

/// Split an amount equally across the participants.
pub fn split_equally(amount: f64, participants: &[String]) -> Result<HashMap<String, f64>, DivvyError> {
    validate_amount(amount)?;
    if participants.is_empty() {
        return Err(DivvyError::EmptySplit);
    }
    debug!("Splitting {} equally across {} participants", amount, participants.len());

    let per_head = amount / participants.len() as f64;
    let portions = participants.iter().map(|id| (id.clone(), per_head)).collect();
    Ok(distribute(amount, portions))
}

/// Split an amount by per-user percentages, which must sum to 100 within
/// `SPLIT_TOLERANCE`.
pub fn split_by_percentage(
    amount: f64,
    percentages: &HashMap<String, f64>,
) -> Result<HashMap<String, f64>, DivvyError> {
    validate_amount(amount)?;
    if percentages.is_empty() {
        return Err(DivvyError::EmptySplit);
    }
    for (user_id, pct) in percentages {
        if *pct < 0.0 {
            return Err(DivvyError::NegativeShare {
                user_id: user_id.clone(),
                share: *pct,
            });
        }
    }
    let pct_sum: f64 = percentages.values().sum();
    if (pct_sum - 100.0).abs() > SPLIT_TOLERANCE {
        return Err(DivvyError::InvalidPercentage(pct_sum));
    }

    let portions = percentages
        .iter()
        .map(|(id, pct)| (id.clone(), amount * pct / 100.0))
        .collect();
    Ok(distribute(amount, portions))
}

/// Split an amount proportionally to integer weights.
pub fn split_by_shares(amount: f64, weights: &HashMap<String, u32>) -> Result<HashMap<String, f64>, DivvyError> {
    validate_amount(amount)?;
    if weights.is_empty() {
        return Err(DivvyError::EmptySplit);
    }
    let total: u32 = weights.values().sum();
    if total == 0 {
        return Err(DivvyError::ZeroShareWeights);
    }

    let portions = weights
        .iter()
        .map(|(id, w)| (id.clone(), amount * *w as f64 / total as f64))
        .collect();
    Ok(distribute(amount, portions))
}
