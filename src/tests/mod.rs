
use crate::models::{Expense, NetBalance};
use std::collections::HashMap;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn expense(amount: f64, paid_by: &str, shares: &[(&str, f64)]) -> Expense {
    Expense::new(
        "test expense".to_string(),
        amount,
        paid_by.to_string(),
        shares.iter().map(|(id, share)| (id.to_string(), *share)).collect(),
    )
}

pub fn balance(user_id: &str, net_balance: f64) -> NetBalance {
    NetBalance {
        user_id: user_id.to_string(),
        user_name: None,
        net_balance,
    }
}

pub fn names(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(id, name)| (id.to_string(), name.to_string())).collect()
}
