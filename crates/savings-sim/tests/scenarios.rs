use savings_sim::{Scenario, SimRunner, StepOutcome};

fn run(json: &str) -> savings_sim::SimResult {
    let scenario = Scenario::from_json(json).unwrap();
    SimRunner::new().run_scenario(&scenario).unwrap()
}

#[test]
fn test_reference_scenario() {
    let result = run(include_str!("../scenarios/reference.json"));

    assert!(
        result.summary.passed,
        "failures: {:?}",
        result.summary.failure_reasons
    );
    assert_eq!(result.summary.total_steps, 9);

    // the no-goal report carries no status key
    match &result.steps[8].outcome {
        StepOutcome::Ok { value } => assert!(value.get("status").is_none()),
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[test]
fn test_yearly_saver_scenario() {
    let result = run(include_str!("../scenarios/yearly_saver.json"));

    assert!(
        result.summary.passed,
        "failures: {:?}",
        result.summary.failure_reasons
    );
    let alice = result
        .final_state
        .balances
        .iter()
        .find(|(account, _)| account.as_str() == "alice")
        .map(|(_, record)| record.balance.units());
    assert_eq!(alice, Some(11025));
}

#[test]
fn test_failed_steps_leave_state_untouched() {
    let result = run(include_str!("../scenarios/yearly_saver.json"));
    let checkpoint = result
        .final_state
        .checkpoints
        .values()
        .next()
        .map(|record| record.block);

    // the regressing accrual at block 100 was rejected
    assert_eq!(checkpoint, Some(105_121));
}
