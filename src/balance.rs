use crate::models::{Expense, NetBalance};
use log::debug;
use std::collections::HashMap;

/// Round a currency amount to 2 decimal places.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Reduce a set of expenses into one signed net balance per user: the payer
/// is credited the full expense amount, every user in the share map is
/// debited their share. Pure summation over the input; shares are assumed
/// to have been validated against the expense amount upstream (see the
/// split module). A payer who also appears in the shares nets out against
/// their own credit.
pub fn aggregate_balances(expenses: &[Expense]) -> HashMap<String, f64> {
    debug!("Aggregating balances across {} expenses", expenses.len());

    let mut totals: HashMap<String, f64> = HashMap::new();
    for expense in expenses {
        *totals.entry(expense.paid_by.clone()).or_insert(0.0) += expense.amount;
        for (user_id, share) in &expense.shares {
            *totals.entry(user_id.clone()).or_insert(0.0) -= share;
        }
    }
    totals
}

/// Materialize aggregated balances as `NetBalance` records with display
/// names resolved, sorted by user id. The sort keeps downstream settlement
/// reduction deterministic: equal-magnitude balances pair in id order via
/// sort stability.
pub fn net_balances(expenses: &[Expense], display_names: &HashMap<String, String>) -> Vec<NetBalance> {
    let mut balances: Vec<NetBalance> = aggregate_balances(expenses)
        .into_iter()
        .map(|(user_id, net_balance)| NetBalance {
            user_name: display_names.get(&user_id).cloned(),
            user_id,
            net_balance,
        })
        .collect();
    balances.sort_by(|a, b| a.user_id.cmp(&b.user_id));
    balances
}
