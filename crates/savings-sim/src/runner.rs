use savings_ledger::{MemoryStore, SavingsLedger, SavingsStore, StoreSnapshot};
use savings_types::{Result, SavingsError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::hashing::{compute_json_hash, HashRef};
use crate::scenario::{Action, Expectation, Scenario};

/// Result of a scenario run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimResult {
    pub scenario_name: String,
    pub steps: Vec<StepResult>,
    pub final_state: StoreSnapshot,
    /// SHA256 of the final state, for comparing runs
    pub state_hash: HashRef,
    pub summary: SimSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    pub index: usize,
    pub op: String,
    pub account: String,
    pub outcome: StepOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum StepOutcome {
    Ok { value: Value },
    Error { code: String, message: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimSummary {
    pub total_steps: usize,
    pub failed_steps: usize,
    pub passed: bool,
    pub failure_reasons: Vec<String>,
}

/// Replays scenarios against a fresh in-memory ledger
#[derive(Debug, Default)]
pub struct SimRunner;

impl SimRunner {
    pub fn new() -> Self {
        SimRunner
    }

    /// Run every step, recording outcomes and checking expectations
    /// Fails only when the scenario's config or initial state is invalid.
    pub fn run_scenario(&self, scenario: &Scenario) -> Result<SimResult> {
        let store = MemoryStore::from_snapshot(&scenario.initial_state)?;
        let mut ledger = SavingsLedger::with_store(store, scenario.interest_config())?;
        info!(scenario = %scenario.name, steps = scenario.steps.len(), "running scenario");

        let mut steps = Vec::with_capacity(scenario.steps.len());
        let mut failure_reasons = Vec::new();

        for (index, step) in scenario.steps.iter().enumerate() {
            let outcome = match Self::apply(&mut ledger, &step.action) {
                Ok(value) => StepOutcome::Ok { value },
                Err(e) => e.into(),
            };
            debug!(index, op = step.action.name(), ?outcome, "step applied");

            if let Some(expect) = &step.expect {
                if let Some(reason) = check_expectation(expect, &outcome) {
                    warn!(index, op = step.action.name(), %reason, "expectation failed");
                    failure_reasons.push(format!("step {} ({}): {}", index, step.action.name(), reason));
                }
            }

            steps.push(StepResult {
                index,
                op: step.action.name().to_string(),
                account: step.action.account().to_string(),
                outcome,
            });
        }

        let final_state = ledger.into_store().snapshot();
        let state_hash = compute_json_hash(&final_state)?;
        let summary = SimSummary {
            total_steps: steps.len(),
            failed_steps: failure_reasons.len(),
            passed: failure_reasons.is_empty(),
            failure_reasons,
        };
        info!(scenario = %scenario.name, passed = summary.passed, %state_hash, "scenario finished");

        Ok(SimResult {
            scenario_name: scenario.name.clone(),
            steps,
            final_state,
            state_hash,
            summary,
        })
    }

    fn apply(ledger: &mut SavingsLedger, action: &Action) -> Result<Value> {
        let value = match action {
            Action::Deposit { account, amount } => {
                json!({ "balance": ledger.deposit(account, *amount)? })
            }
            Action::Withdraw { account, amount } => {
                json!({ "balance": ledger.withdraw(account, *amount)? })
            }
            Action::Accrue { account, block } => {
                serde_json::to_value(ledger.accrue_interest(account, *block)?)?
            }
            Action::SetGoal {
                account,
                target,
                duration,
                block,
            } => serde_json::to_value(ledger.set_goal(account, *target, *duration, *block)?)?,
            Action::Progress { account, block } => {
                serde_json::to_value(ledger.goal_progress(account, *block))?
            }
        };
        Ok(value)
    }
}

/// None when the outcome satisfies the expectation, otherwise the reason
fn check_expectation(expect: &Expectation, outcome: &StepOutcome) -> Option<String> {
    match (expect, outcome) {
        (Expectation::Ok(expected), StepOutcome::Ok { value }) => {
            if contains(expected, value) {
                None
            } else {
                Some(format!("expected {} within {}", expected, value))
            }
        }
        (Expectation::Ok(_), StepOutcome::Error { code, .. }) => {
            Some(format!("expected success, got {}", code))
        }
        (Expectation::Error(want), StepOutcome::Error { code, .. }) => {
            if want == code {
                None
            } else {
                Some(format!("expected {}, got {}", want, code))
            }
        }
        (Expectation::Error(want), StepOutcome::Ok { value }) => {
            Some(format!("expected {}, got success {}", want, value))
        }
    }
}

/// Partial match: every field of `expected` must match in `actual`
/// An expected `null` also accepts a missing field.
fn contains(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Object(want), Value::Object(have)) => want.iter().all(|(key, want_value)| {
            match have.get(key) {
                Some(have_value) => contains(want_value, have_value),
                None => want_value.is_null(),
            }
        }),
        _ => expected == actual,
    }
}

impl From<SavingsError> for StepOutcome {
    fn from(err: SavingsError) -> Self {
        StepOutcome::Error {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}
