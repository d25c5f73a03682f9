pub mod balance;
pub mod constants;
pub mod error;
pub mod models;
pub mod reconcile;
pub mod settlement;
pub mod split;

pub use balance::{aggregate_balances, net_balances};
pub use error::DivvyError;
pub use models::{Expense, NetBalance, Settlement};
pub use reconcile::carry_settled_flags;
pub use settlement::{reduce_to_settlements, suggest_settlements};
pub use split::{split_by_percentage, split_by_shares, split_equally, validate_shares};

#[cfg(test)]
mod tests;
