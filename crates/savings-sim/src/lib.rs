mod hashing;
mod runner;
mod scenario;

pub use hashing::{compute_hash, compute_json_hash, HashRef};
pub use runner::{SimResult, SimRunner, SimSummary, StepOutcome, StepResult};
pub use scenario::{Action, Expectation, Scenario, Step};

#[cfg(test)]
mod tests;
