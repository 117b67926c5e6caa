//! Behaviour-driven step definitions driving the validate CLI scenarios.

use super::helpers::{DatasetDir, runs_with_inactive, sample_runs};
use super::*;
use crate::validate::{ValidationSummary, run_validate_with};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug)]
struct ValidateWorld {
    dataset: DatasetDir,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl ValidateWorld {
    fn new() -> Self {
        Self {
            dataset: DatasetDir::new(),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }
}

#[fixture]
fn validate_world() -> ValidateWorld {
    ValidateWorld::new()
}

#[given("a mixed dataset awaits validation")]
fn mixed_dataset_awaits(#[from(validate_world)] world: &ValidateWorld) {
    world.dataset.write_runs(&runs_with_inactive());
}

#[given("the dataset awaiting validation contains a nameless run")]
fn awaiting_dataset_contains_nameless_run(#[from(validate_world)] world: &ValidateWorld) {
    let mut runs = sample_runs();
    if let Some(run) = runs.first_mut() {
        run.name = String::new();
    }
    world.dataset.write_runs(&runs);
}

#[when("I run the validate command")]
fn run_validate_command(#[from(validate_world)] world: &ValidateWorld) {
    let invocation = vec![
        "pacematch".to_string(),
        "validate".to_string(),
        world.dataset.runs_path().as_str().to_string(),
    ];
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Validate(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_validate_with(args, &mut *buffer)
        }
        Command::Rank(_) => panic!("expected validate command"),
    });

    world.result.replace(Some(outcome));
}

#[then("the summary reports the dataset composition")]
fn summary_reports_composition(#[from(validate_world)] world: &ValidateWorld) {
    let borrowed = world.result.borrow();
    borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect("expected success");

    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    let summary: ValidationSummary =
        serde_json::from_str(&stdout).expect("output should be a JSON summary");
    assert_eq!(
        summary,
        ValidationSummary {
            total: 3,
            active: 2,
            inactive: 1,
        }
    );
}

#[then("the validation fails naming the offending run")]
fn validation_fails_naming_offender(#[from(validate_world)] world: &ValidateWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::InvalidRun { id, .. } => assert_eq!(*id, 1),
        other => panic!("expected InvalidRun, found {other:?}"),
    }
}

macro_rules! register_validate_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/validate_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(validate_world)] world: ValidateWorld) {
            let _ = world;
        }
    };
}

register_validate_scenario!(validate_summary, "summarising a valid dataset");
register_validate_scenario!(validate_invalid_run, "rejecting datasets with invalid runs");
