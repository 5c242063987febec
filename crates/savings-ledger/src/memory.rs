use savings_types::{
    AccountId, BalanceRecord, CheckpointRecord, Result, SavingsError, SavingsGoal,
};
use std::collections::{BTreeMap, BTreeSet};

use crate::store::{SavingsStore, StoreSnapshot};

/// In-memory savings store
/// Each instance is isolated, so tests build a fresh one per case
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    balances: BTreeMap<AccountId, BalanceRecord>,
    checkpoints: BTreeMap<AccountId, CheckpointRecord>,
    goals: BTreeMap<AccountId, SavingsGoal>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a snapshot, validating it the same way `restore` does
    pub fn from_snapshot(snapshot: &StoreSnapshot) -> Result<Self> {
        let mut store = Self::new();
        store.restore(snapshot)?;
        Ok(store)
    }
}

impl SavingsStore for MemoryStore {
    fn balance(&self, account: &AccountId) -> BalanceRecord {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn set_balance(&mut self, account: &AccountId, record: BalanceRecord) {
        self.balances.insert(account.clone(), record);
    }

    fn checkpoint(&self, account: &AccountId) -> CheckpointRecord {
        self.checkpoints.get(account).copied().unwrap_or_default()
    }

    fn set_checkpoint(&mut self, account: &AccountId, record: CheckpointRecord) {
        self.checkpoints.insert(account.clone(), record);
    }

    fn goal(&self, account: &AccountId) -> Option<SavingsGoal> {
        self.goals.get(account).copied()
    }

    fn set_goal(&mut self, account: &AccountId, goal: SavingsGoal) -> Option<SavingsGoal> {
        self.goals.insert(account.clone(), goal)
    }

    fn list_accounts(&self) -> Vec<AccountId> {
        let accounts: BTreeSet<&AccountId> = self
            .balances
            .keys()
            .chain(self.checkpoints.keys())
            .chain(self.goals.keys())
            .collect();
        accounts.into_iter().cloned().collect()
    }

    fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            balances: self.balances.clone(),
            checkpoints: self.checkpoints.clone(),
            goals: self.goals.clone(),
        }
    }

    fn restore(&mut self, snapshot: &StoreSnapshot) -> Result<()> {
        // a zero target would make progress undefined
        if snapshot.goals.values().any(|goal| goal.target.is_zero()) {
            return Err(SavingsError::AmountZero);
        }

        self.balances = snapshot.balances.clone();
        self.checkpoints = snapshot.checkpoints.clone();
        self.goals = snapshot.goals.clone();
        Ok(())
    }
}
