use serde::{Deserialize, Serialize};

/// A user's aggregate position across all expenses in scope. Positive means
/// the user is owed money, negative means the user owes money.
///
/// Always a derived projection: recomputed from the full expense set
/// whenever an expense changes, never persisted as the authoritative value.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NetBalance {
    pub user_id: String,
    pub user_name: Option<String>,
    pub net_balance: f64,
}
