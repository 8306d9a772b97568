use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn setup_without_day_is_a_usage_error() {
    let ctx = TestContext::with_template();

    ctx.cli()
        .arg("setup")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("Example: aoc-scaffold setup 13"));

    assert_eq!(ctx.top_level(), vec!["aoc_template"]);
}

#[test]
fn setup_with_two_days_is_a_usage_error() {
    let ctx = TestContext::with_template();

    ctx.cli()
        .args(["setup", "1", "2"])
        .assert()
        .failure()
        .code(1);

    assert_eq!(ctx.top_level(), vec!["aoc_template"]);
}

#[test]
fn copy_with_wrong_argument_count_is_a_usage_error() {
    let ctx = TestContext::with_template();
    ctx.setup("1");

    ctx.cli().arg("copy").assert().failure().code(1);
    ctx.cli()
        .args(["copy", "1", "extra"])
        .assert()
        .failure()
        .code(1);

    assert_eq!(ctx.top_level(), vec!["aoc_template", "day1-part1"]);
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let ctx = TestContext::new();

    ctx.cli().assert().failure().code(1);

    assert!(ctx.top_level().is_empty());
}
