pub mod balance;
pub mod expense;
pub mod settlement;

pub use balance::NetBalance;
pub use expense::Expense;
pub use settlement::Settlement;
