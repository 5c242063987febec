use savings_ledger::{InterestConfig, StoreSnapshot};
use savings_types::{AccountId, Amount, BlockHeight, Result};
use serde::{Deserialize, Serialize};

/// A scripted sequence of ledger operations with optional expectations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Interest parameters; the 5% / 52560-block default when absent
    #[serde(default)]
    pub interest: Option<InterestConfig>,

    /// State loaded before the first step
    #[serde(default)]
    pub initial_state: StoreSnapshot,

    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn interest_config(&self) -> InterestConfig {
        self.interest.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    #[serde(flatten)]
    pub action: Action,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect: Option<Expectation>,
}

/// One ledger call, tagged by `op` in JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Action {
    Deposit {
        account: AccountId,
        amount: Amount,
    },
    Withdraw {
        account: AccountId,
        amount: Amount,
    },
    Accrue {
        account: AccountId,
        block: BlockHeight,
    },
    SetGoal {
        account: AccountId,
        target: Amount,
        duration: BlockHeight,
        block: BlockHeight,
    },
    Progress {
        account: AccountId,
        block: BlockHeight,
    },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Deposit { .. } => "deposit",
            Action::Withdraw { .. } => "withdraw",
            Action::Accrue { .. } => "accrue",
            Action::SetGoal { .. } => "set_goal",
            Action::Progress { .. } => "progress",
        }
    }

    pub fn account(&self) -> &AccountId {
        match self {
            Action::Deposit { account, .. }
            | Action::Withdraw { account, .. }
            | Action::Accrue { account, .. }
            | Action::SetGoal { account, .. }
            | Action::Progress { account, .. } => account,
        }
    }
}

/// What a step should produce
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    /// Success whose JSON value contains these fields; `null` means "absent"
    Ok(serde_json::Value),
    /// Failure with this error code
    Error(String),
}
