use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A shared expense: one payer covered the full amount, and each user in
/// `shares` owes the listed portion of it back.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub paid_by: String,
    pub shares: HashMap<String, f64>,
    pub timestamp: DateTime<Utc>,
}

impl Expense {
    pub fn new(description: String, amount: f64, paid_by: String, shares: HashMap<String, f64>) -> Self {
        Expense {
            id: Uuid::new_v4(),
            description,
            amount,
            paid_by,
            shares,
            timestamp: Utc::now(),
        }
    }
}
