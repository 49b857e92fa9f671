//! Integration tests for argument processing
//!
//! Drives scanning and validation together through `process_arguments`.

use anyhow::{bail, Result};
use grove_arguments::{process_arguments, ArgumentError, Invocation, RunConfiguration, TreeType};

fn run(args: &[&str]) -> Result<RunConfiguration> {
    match process_arguments(args.iter().copied())? {
        Invocation::Run { config, .. } => Ok(config),
        other => bail!("expected a run configuration, got {:?}", other),
    }
}

fn failure(args: &[&str]) -> Result<ArgumentError> {
    match process_arguments(args.iter().copied()) {
        Err(err) => Ok(err),
        Ok(other) => bail!("expected a failure, got {:?}", other),
    }
}

#[test]
fn test_minimal_training_run() -> Result<()> {
    let config = run(&["--file", "in.csv", "--depvarname", "y", "--ntree", "100"])?;

    let expected = RunConfiguration {
        input_file: "in.csv".to_string(),
        dependent_var_name: "y".to_string(),
        num_trees: 100,
        ..RunConfiguration::default()
    };
    assert_eq!(config, expected);

    Ok(())
}

#[test]
fn test_full_instrumental_run() -> Result<()> {
    let config = run(&[
        "-f",
        "data.csv",
        "-D",
        "outcome",
        "--treetype",
        "15",
        "--instrumentvarname",
        "z",
        "--statusvarname",
        "w",
        "--quantiles",
        "0.1,0.5,0.9",
        "--mtry",
        "3",
        "--targetpartitionsize",
        "5",
        "--nthreads",
        "2",
        "--fraction",
        "0.5",
        "--seed",
        "42",
        "--caseweights",
        "cw.txt",
        "--alwayssplitvars",
        "X1,X2",
        "-uNvwX",
    ])?;

    assert_eq!(config.tree_type, TreeType::Instrumental);
    assert_eq!(config.instrument_var_name, "z");
    assert_eq!(config.status_var_name, "w");
    assert_eq!(config.quantiles, vec![0.1, 0.5, 0.9]);
    assert_eq!(config.mtry, 3);
    assert_eq!(config.target_partition_size, 5);
    assert_eq!(config.num_threads, 2);
    assert_eq!(config.fraction, 0.5);
    assert_eq!(config.seed, 42);
    assert_eq!(config.case_weights_file, "cw.txt");
    assert_eq!(config.always_split_vars, vec!["X1", "X2"]);
    assert!(config.sample_without_replacement);
    assert!(config.save_memory);
    assert!(config.verbose);
    assert!(config.write_forest);
    assert!(config.predict_all);

    Ok(())
}

#[test]
fn test_prediction_run_without_dependent_variable() -> Result<()> {
    let config = run(&["--file", "new.csv", "--predict", "forest.bin"])?;

    assert!(config.is_prediction());
    assert!(config.dependent_var_name.is_empty());

    Ok(())
}

#[test]
fn test_instrument_checked_before_status() -> Result<()> {
    let err = failure(&["--file", "in.csv", "--depvarname", "y", "--treetype", "15"])?;

    assert_eq!(err.option(), "instrumentvarname");

    Ok(())
}

#[test]
fn test_split_weights_exclusive_in_any_order() -> Result<()> {
    let base = ["--file", "in.csv", "--depvarname", "y"];
    let orders: [&[&str]; 2] = [
        &["--splitweights", "a.txt", "--alwayssplitvars", "X,Y"],
        &["--alwayssplitvars", "X,Y", "--splitweights", "a.txt"],
    ];

    for order in orders {
        let args: Vec<&str> = base.iter().chain(order.iter()).copied().collect();
        let err = failure(&args)?;
        assert!(
            matches!(err, ArgumentError::MutuallyExclusive { .. }),
            "unexpected error: {err}"
        );
    }

    Ok(())
}

#[test]
fn test_missing_input_file() -> Result<()> {
    let err = failure(&["--depvarname", "y"])?;
    assert_eq!(err.option(), "file");

    let err = failure(&[])?;
    assert_eq!(err.option(), "file");

    Ok(())
}

#[test]
fn test_scan_failure_precedes_validation() -> Result<()> {
    let err = failure(&["--fraction", "0"])?;

    assert_eq!(
        err,
        ArgumentError::InvalidValue {
            option: "fraction",
            expected: "a value in (0,1]",
            value: "0".to_string(),
        }
    );

    Ok(())
}

#[test]
fn test_quantiles_not_partially_stored() -> Result<()> {
    let err = failure(&["--file", "in.csv", "-D", "y", "--quantiles", "0.1,1.0"])?;
    assert_eq!(err.option(), "quantiles");

    Ok(())
}

#[test]
fn test_help_anywhere() -> Result<()> {
    let cases: [&[&str]; 4] = [
        &["--help"],
        &["--ntree", "0", "--help"],
        &["--bogus", "--fraction", "7", "-h", "--treetype", "99"],
        &["--help", "--ntree", "0"],
    ];

    for args in cases {
        assert_eq!(process_arguments(args.iter().copied())?, Invocation::Help);
    }

    Ok(())
}

#[test]
fn test_version_skips_validation() -> Result<()> {
    assert_eq!(process_arguments(["--version"])?, Invocation::Version);

    Ok(())
}

#[test]
fn test_unprocessed_tokens_reported() -> Result<()> {
    let invocation = process_arguments(["input", "--file", "in.csv", "-D", "y", "stray"])?;

    match invocation {
        Invocation::Run { unprocessed, .. } => assert_eq!(unprocessed, vec!["input", "stray"]),
        other => bail!("expected a run configuration, got {:?}", other),
    }

    Ok(())
}

#[test]
fn test_error_messages_are_descriptive() -> Result<()> {
    let err = failure(&["--ntree", "zero"])?;
    let message = err.to_string();

    assert!(message.contains("'ntree'"), "{message}");
    assert!(message.contains("positive integer"), "{message}");
    assert!(message.contains("--help"), "{message}");

    let err = failure(&["--file", "in.csv"])?;
    assert!(err.to_string().contains("--depvarname"));

    Ok(())
}
