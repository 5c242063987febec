use savings_types::{
    AccountId, Amount, BalanceRecord, BlockHeight, CheckpointRecord, GoalProgress, Result,
    SavingsError, SavingsGoal,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::InterestConfig;
use crate::memory::MemoryStore;
use crate::store::SavingsStore;

/// Outcome of settling interest for one account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accrual {
    pub interest: Amount,
    pub balance: Amount,
    pub blocks_passed: BlockHeight,
}

/// Savings engine: interest accrual, goals and goal progress over a store
///
/// Every mutating operation validates fully before writing, so a returned
/// error never leaves a partial update behind.
#[derive(Debug, Clone)]
pub struct SavingsLedger<S: SavingsStore = MemoryStore> {
    store: S,
    config: InterestConfig,
}

impl SavingsLedger<MemoryStore> {
    /// Empty in-memory ledger with the default 5% / 52560-block rate
    pub fn new() -> Self {
        SavingsLedger {
            store: MemoryStore::new(),
            config: InterestConfig::default(),
        }
    }

    pub fn with_config(config: InterestConfig) -> Result<Self> {
        Self::with_store(MemoryStore::new(), config)
    }
}

impl Default for SavingsLedger<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SavingsStore> SavingsLedger<S> {
    pub fn with_store(store: S, config: InterestConfig) -> Result<Self> {
        config.validate()?;
        Ok(SavingsLedger { store, config })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn balance(&self, account: &AccountId) -> Amount {
        self.store.balance(account).balance
    }

    /// Credit funds to an account
    pub fn deposit(&mut self, account: &AccountId, amount: Amount) -> Result<Amount> {
        if amount.is_zero() {
            return Err(SavingsError::AmountZero);
        }

        let balance = self.balance(account).checked_add(amount)?;
        self.store.set_balance(account, BalanceRecord { balance });
        debug!(%account, %amount, %balance, "deposit");
        Ok(balance)
    }

    /// Debit funds from an account
    pub fn withdraw(&mut self, account: &AccountId, amount: Amount) -> Result<Amount> {
        if amount.is_zero() {
            return Err(SavingsError::AmountZero);
        }

        let current = self.balance(account);
        if current < amount {
            warn!(%account, %current, %amount, "withdrawal exceeds balance");
            return Err(SavingsError::InsufficientBalance {
                account: account.clone(),
                balance: current,
                requested: amount,
            });
        }

        let balance = current.checked_sub(amount)?;
        self.store.set_balance(account, BalanceRecord { balance });
        debug!(%account, %amount, %balance, "withdraw");
        Ok(balance)
    }

    /// Settle simple interest since the account's last checkpoint
    ///
    /// An account that was never settled (checkpoint at block 0) has no
    /// elapsed time, so its first accrual only records the checkpoint.
    pub fn accrue_interest(
        &mut self,
        account: &AccountId,
        current_block: BlockHeight,
    ) -> Result<Accrual> {
        let current = self.balance(account);
        let checkpoint = self.store.checkpoint(account);
        let last_block = if checkpoint.is_settled() {
            checkpoint.block
        } else {
            current_block
        };

        let blocks_passed = current_block.checked_sub(last_block).ok_or_else(|| {
            warn!(%account, checkpoint = last_block, current_block, "block height went backwards");
            SavingsError::BlockRegression {
                account: account.clone(),
                checkpoint: last_block,
                current: current_block,
            }
        })?;

        let interest = self.config.interest_for(current, blocks_passed)?;
        let balance = current.checked_add(interest)?;

        self.store.set_balance(account, BalanceRecord { balance });
        self.store.set_checkpoint(
            account,
            CheckpointRecord {
                block: current_block,
            },
        );

        debug!(%account, blocks_passed, %interest, %balance, "interest accrued");
        Ok(Accrual {
            interest,
            balance,
            blocks_passed,
        })
    }

    /// Record a savings goal of `target` due `duration` blocks from now
    /// Any existing goal for the account is replaced.
    pub fn set_goal(
        &mut self,
        account: &AccountId,
        target: Amount,
        duration: BlockHeight,
        current_block: BlockHeight,
    ) -> Result<SavingsGoal> {
        let goal = SavingsGoal::starting_at(target, duration, current_block).map_err(|e| {
            warn!(%account, %target, error = e.code(), "savings goal rejected");
            e
        })?;

        if let Some(previous) = self.store.set_goal(account, goal) {
            debug!(%account, old_target = %previous.target, old_deadline = previous.deadline, "savings goal replaced");
        }
        debug!(%account, %target, deadline = goal.deadline, "savings goal set");
        Ok(goal)
    }

    /// Progress towards the account's goal at `current_block`
    pub fn goal_progress(&self, account: &AccountId, current_block: BlockHeight) -> GoalProgress {
        match self.store.goal(account) {
            Some(goal) => goal.progress_at(self.balance(account), current_block),
            None => GoalProgress::no_goal(),
        }
    }
}
