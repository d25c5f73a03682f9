use crate::balance::{net_balances, round_to_cents};
use crate::constants::{MAX_SETTLEMENT_ITERATIONS, SETTLEMENT_THRESHOLD};
use crate::error::DivvyError;
use crate::models::{Expense, NetBalance, Settlement};
use log::{debug, info, warn};
use std::collections::HashMap;

/// Reduce a set of net balances into a short list of directed payments that
/// zero them out, by greedily matching the largest remaining debtor against
/// the largest remaining creditor.
///
/// Users within `SETTLEMENT_THRESHOLD` of zero are treated as already
/// settled and dropped. Emitted amounts are rounded to cents and always
/// carry `settled: false`. The input is cloned into local working lists;
/// caller data is never mutated. Empty or fully balanced input yields an
/// empty list, which is a valid "nothing to settle" outcome, not an error.
///
/// The loop carries a hard cap of `MAX_SETTLEMENT_ITERATIONS`; exceeding it
/// means the input was malformed (or the scope absurdly large) and returns
/// `DivvyError::IterationLimitExceeded` rather than a truncated list.
pub fn reduce_to_settlements(balances: &[NetBalance]) -> Result<Vec<Settlement>, DivvyError> {
    let mut debtors: Vec<NetBalance> = balances
        .iter()
        .filter(|b| b.net_balance < -SETTLEMENT_THRESHOLD)
        .cloned()
        .collect();
    let mut creditors: Vec<NetBalance> = balances
        .iter()
        .filter(|b| b.net_balance > SETTLEMENT_THRESHOLD)
        .cloned()
        .collect();

    debug!(
        "Reducing {} balances: {} debtors, {} creditors",
        balances.len(),
        debtors.len(),
        creditors.len()
    );

    // Most negative debtor first, largest creditor first.
    debtors.sort_by(|a, b| a.net_balance.total_cmp(&b.net_balance));
    creditors.sort_by(|a, b| b.net_balance.total_cmp(&a.net_balance));

    let mut settlements = Vec::new();
    let mut iterations = 0usize;

    while !debtors.is_empty() && !creditors.is_empty() {
        if iterations >= MAX_SETTLEMENT_ITERATIONS {
            return Err(DivvyError::IterationLimitExceeded(MAX_SETTLEMENT_ITERATIONS));
        }
        iterations += 1;

        let payment = creditors[0].net_balance.min(-debtors[0].net_balance);
        if payment > SETTLEMENT_THRESHOLD {
            settlements.push(Settlement {
                from_user_id: debtors[0].user_id.clone(),
                from_user_name: debtors[0].user_name.clone(),
                to_user_id: creditors[0].user_id.clone(),
                to_user_name: creditors[0].user_name.clone(),
                amount: round_to_cents(payment),
                settled: false,
            });
        }

        debtors[0].net_balance += payment;
        creditors[0].net_balance -= payment;

        if debtors[0].net_balance > -SETTLEMENT_THRESHOLD {
            debtors.remove(0);
        }
        if creditors[0].net_balance < SETTLEMENT_THRESHOLD {
            creditors.remove(0);
        }

        // Re-sort so the largest remaining imbalances pair on the next
        // step; also pins tie-break order, keeping output reproducible.
        debtors.sort_by(|a, b| a.net_balance.total_cmp(&b.net_balance));
        creditors.sort_by(|a, b| b.net_balance.total_cmp(&a.net_balance));
    }

    // One side emptying while the other holds real balance means the input
    // didn't sum to zero: an upstream aggregation defect.
    let leftover: f64 = debtors.iter().map(|d| -d.net_balance).sum::<f64>()
        + creditors.iter().map(|c| c.net_balance).sum::<f64>();
    if leftover > SETTLEMENT_THRESHOLD {
        warn!(
            "Unmatched balance of {:.2} remained after settlement reduction; input balances do not sum to zero",
            leftover
        );
    }

    info!("Reduced to {} suggested settlements in {} iterations", settlements.len(), iterations);
    Ok(settlements)
}

/// Aggregate expenses into net balances and reduce them to suggested
/// payments in one pass.
pub fn suggest_settlements(
    expenses: &[Expense],
    display_names: &HashMap<String, String>,
) -> Result<Vec<Settlement>, DivvyError> {
    let balances = net_balances(expenses, display_names);
    reduce_to_settlements(&balances)
}
