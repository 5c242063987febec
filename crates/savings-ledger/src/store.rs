use savings_types::{AccountId, BalanceRecord, CheckpointRecord, Result, SavingsGoal};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Storage backing a savings ledger
/// Implemented in memory here; a contract runtime or database can provide its own
pub trait SavingsStore {
    /// Balance record for an account, zero if never written
    fn balance(&self, account: &AccountId) -> BalanceRecord;

    fn set_balance(&mut self, account: &AccountId, record: BalanceRecord);

    /// Interest checkpoint for an account, block 0 if never written
    fn checkpoint(&self, account: &AccountId) -> CheckpointRecord;

    fn set_checkpoint(&mut self, account: &AccountId, record: CheckpointRecord);

    /// Active savings goal, if any
    fn goal(&self, account: &AccountId) -> Option<SavingsGoal>;

    /// Replace the account's goal, returning the one it displaced
    fn set_goal(&mut self, account: &AccountId, goal: SavingsGoal) -> Option<SavingsGoal>;

    /// Every account that appears in any mapping, sorted
    fn list_accounts(&self) -> Vec<AccountId>;

    /// Copy of all state (for checkpoint/restore)
    fn snapshot(&self) -> StoreSnapshot;

    /// Replace all state with a snapshot
    fn restore(&mut self, snapshot: &StoreSnapshot) -> Result<()>;
}

/// Serializable copy of the three savings mappings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSnapshot {
    pub balances: BTreeMap<AccountId, BalanceRecord>,
    pub checkpoints: BTreeMap<AccountId, CheckpointRecord>,
    pub goals: BTreeMap<AccountId, SavingsGoal>,
}

impl StoreSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
