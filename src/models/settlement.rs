use serde::{Deserialize, Serialize};

/// A suggested directed payment that reduces net imbalance. The reducer
/// only ever emits `settled: false`; flipping the flag is downstream
/// payment-tracking. Settlements carry no stable identifier, so consumers
/// match on the `(from_user_id, to_user_id, amount)` tuple.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub from_user_id: String,
    pub from_user_name: Option<String>,
    pub to_user_id: String,
    pub to_user_name: Option<String>,
    pub amount: f64,
    pub settled: bool,
}
