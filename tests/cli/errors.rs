//! Tests for usage errors and provider failures.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("--src") && out.contains("--dst-pass"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stackport"));
}

#[test]
fn test_missing_required_flags() {
    let t = Test::new();
    let full = t.standard_args();

    for flag in ["--src", "--dst", "--src-pass", "--dst-pass"] {
        let pos = full.iter().position(|a| a == flag).unwrap();
        let mut args = full.clone();
        args.remove(pos);
        args.remove(pos);

        let output = t.cmd().args(&args).output().unwrap();
        assert_failure(&output);
        assert_stderr_contains(&output, flag);
        assert!(t.calls().is_empty(), "{flag} missing but provider was called");
    }
}

#[test]
fn test_empty_passphrase_is_usage_error() {
    let t = Test::with_config(SIMPLE_CONFIG);
    let mut args = t.standard_args();
    let pos = args.iter().position(|a| a == "--src-pass").unwrap();
    args[pos + 1] = String::new();

    let output = t.cmd().args(&args).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "--src-pass is required");
    assert!(t.calls().is_empty());
}

#[test]
fn test_same_stack_is_usage_error() {
    let t = Test::with_config(SIMPLE_CONFIG);
    let mut args = t.standard_args();
    let pos = args.iter().position(|a| a == "--dst").unwrap();
    args[pos + 1] = "dev".to_string();

    t.cmd()
        .args(&args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("same stack"));
    assert!(t.calls().is_empty());
}

#[test]
fn test_missing_provider_binary() {
    let t = Test::new();
    let mut args = t.standard_args();
    let last = args.len() - 1;
    args[last] = t.state.path().join("no-such-pulumi").display().to_string();

    let output = t.cmd().args(&args).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "not found");
    assert_stdout_contains(&output, "--pulumi");
}

#[test]
fn test_fetch_failure_stops_everything() {
    let t = Test::with_config(SIMPLE_CONFIG);
    t.write_state("fail-config", "");

    let output = t.migrate();
    assert_failure(&output);
    assert_stderr_contains(&output, "config --show-secrets --json --stack dev");
    assert_stderr_contains(&output, "error: failed to decrypt config");

    assert_eq!(t.calls().len(), 1);
}

#[test]
fn test_listing_failure_stops_before_init() {
    let t = Test::with_config(SIMPLE_CONFIG);
    t.write_state("fail-ls", "");

    let output = t.migrate();
    assert_failure(&output);
    assert_stderr_contains(&output, "could not list stacks");
    assert!(t.calls_to("stack init").is_empty());
    assert!(t.calls_to("config set").is_empty());
}

#[test]
fn test_unparsable_listing() {
    let t = Test::with_config(SIMPLE_CONFIG);
    t.write_state("stacks.json", "NAME  LAST UPDATE\ndev   n/a\n");

    let output = t.migrate();
    assert_failure(&output);
    assert_stderr_contains(&output, "decoding stack ls JSON");
    assert!(t.calls_to("stack init").is_empty());
}

#[test]
fn test_unparsable_config() {
    let t = Test::with_config(STRUCTURED_CONFIG);

    let output = t.migrate();
    assert_failure(&output);
    assert_stderr_contains(&output, "decoding config JSON");
    assert_eq!(t.calls().len(), 1);
}

#[test]
fn test_init_failure_stops_before_sets() {
    let t = Test::with_config(SIMPLE_CONFIG);
    t.write_state("fail-init", "");

    let output = t.migrate();
    assert_failure(&output);
    assert_stderr_contains(&output, "could not create stack new-dev");
    assert!(t.calls_to("config set").is_empty());
}

#[test]
fn test_first_failed_set_aborts() {
    let t = Test::with_config(STANDARD_CONFIG);
    t.write_state("fail-set", "app:dbUrl");

    let output = t.migrate();
    assert_failure(&output);

    // ascending order: app:apiKey, app:dbPassword, app:dbUrl (fails)
    let sets = t.calls_to("config set");
    assert_eq!(sets.len(), 3);
    assert!(sets[2].args.contains("app:dbUrl"));

    assert_stdout_contains(&output, "→ app:dbUrl");
    let out = stdout(&output);
    assert!(!out.contains("→ app:replicas"));
    assert!(!out.contains("migrated"));
}

#[test]
fn test_failed_secret_set_redacts_value() {
    let t = Test::with_config(STANDARD_CONFIG);
    t.write_state("fail-set", "app:apiKey");

    let output = t.migrate();
    assert_failure(&output);
    assert_stderr_contains(&output, "--secret -- app:apiKey [redacted]");
    assert_output_excludes(&output, "sk-test-12345");
}
