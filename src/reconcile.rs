use crate::models::Settlement;
use log::debug;

fn amount_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Carry `settled` marks from a previous settlement list onto a freshly
/// recomputed one. Settlements carry no stable identifier, so matching keys
/// on the `(from_user_id, to_user_id, amount)` tuple, with amounts compared
/// in exact cents; each previous mark is consumed at most once, so two
/// identical payments in the new list don't both inherit a single
/// confirmation.
pub fn carry_settled_flags(previous: &[Settlement], current: Vec<Settlement>) -> Vec<Settlement> {
    let mut marks: Vec<(&str, &str, i64)> = previous
        .iter()
        .filter(|s| s.settled)
        .map(|s| (s.from_user_id.as_str(), s.to_user_id.as_str(), amount_cents(s.amount)))
        .collect();
    debug!("Carrying {} settled marks onto {} recomputed settlements", marks.len(), current.len());

    let mut current = current;
    for settlement in current.iter_mut() {
        let key = (
            settlement.from_user_id.as_str(),
            settlement.to_user_id.as_str(),
            amount_cents(settlement.amount),
        );
        if let Some(pos) = marks.iter().position(|mark| *mark == key) {
            marks.swap_remove(pos);
            settlement.settled = true;
        }
    }
    current
}
