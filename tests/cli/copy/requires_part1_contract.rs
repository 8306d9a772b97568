use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn copy_fails_without_part1() {
    let ctx = TestContext::with_template();

    ctx.cli()
        .args(["copy", "8"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("'day8-part1/' not found"));

    assert_eq!(ctx.top_level(), vec!["aoc_template"]);
}
