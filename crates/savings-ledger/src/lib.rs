mod config;
mod ledger;
mod memory;
mod store;

pub use config::{InterestConfig, BLOCKS_PER_YEAR, INTEREST_RATE_PERCENT};
pub use ledger::{Accrual, SavingsLedger};
pub use memory::MemoryStore;
pub use store::{SavingsStore, StoreSnapshot};
