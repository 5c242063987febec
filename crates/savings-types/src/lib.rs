mod account;
mod amount;
mod block;
mod error;
mod records;

pub use account::AccountId;
pub use amount::Amount;
pub use block::BlockHeight;
pub use error::{Result, SavingsError};
pub use records::{BalanceRecord, CheckpointRecord, GoalProgress, GoalStatus, SavingsGoal};
