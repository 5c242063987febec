use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::block::BlockHeight;
use crate::error::{Result, SavingsError};

/// Balance held by one account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRecord {
    pub balance: Amount,
}

/// Last block at which interest was settled for an account
/// Block 0 doubles as "never settled"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointRecord {
    pub block: BlockHeight,
}

impl CheckpointRecord {
    pub const fn is_settled(&self) -> bool {
        self.block != 0
    }
}

/// A savings target with an absolute deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub target: Amount,
    pub deadline: BlockHeight,
}

impl SavingsGoal {
    /// Build a goal ending `duration` blocks after `current_block`
    pub fn starting_at(
        target: Amount,
        duration: BlockHeight,
        current_block: BlockHeight,
    ) -> Result<Self> {
        if target.is_zero() {
            return Err(SavingsError::AmountZero);
        }
        let deadline = current_block.checked_add(duration).ok_or_else(|| {
            SavingsError::Overflow(format!("deadline {} + {}", current_block, duration))
        })?;
        Ok(SavingsGoal { target, deadline })
    }

    /// Time-based status; independent of how well funded the goal is
    pub fn status_at(&self, current_block: BlockHeight) -> GoalStatus {
        if current_block >= self.deadline {
            GoalStatus::Completed
        } else {
            GoalStatus::Ongoing
        }
    }

    /// Derive a progress report for `balance` at `current_block`
    ///
    /// Never fails: `u64::MAX * 100` fits in a u128. A zero target is only
    /// reachable by building the record by hand and reports 0%.
    pub fn progress_at(&self, balance: Amount, current_block: BlockHeight) -> GoalProgress {
        let progress = (balance.units() as u128 * 100)
            .checked_div(self.target.units() as u128)
            .unwrap_or(0);

        GoalProgress {
            target: self.target,
            deadline: self.deadline,
            progress,
            status: Some(self.status_at(current_block)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Ongoing,
    Completed,
}

/// Progress report for an account's savings goal
///
/// `status` is `None` only when the account has no goal; that case is kept
/// distinct from `Ongoing` and the JSON form omits the field entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub target: Amount,
    pub deadline: BlockHeight,
    /// Whole percent of target reached, floored and not clamped at 100
    pub progress: u128,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GoalStatus>,
}

impl GoalProgress {
    /// Report for an account without a goal
    pub const fn no_goal() -> Self {
        GoalProgress {
            target: Amount::ZERO,
            deadline: 0,
            progress: 0,
            status: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == Some(GoalStatus::Completed)
    }
}
