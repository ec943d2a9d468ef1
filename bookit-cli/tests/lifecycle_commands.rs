//! Integration tests for the reservation lifecycle commands.
//!
//! These drive `actor add`, `resource add`, `reserve`, `approve`,
//! `cancel`, `show` and `eligible` through the binary.

mod common;

use common::{days_from_now, Catalog, TestEnv};
use predicates::prelude::*;

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn test_actor_and_resource_ids_are_printed() {
    let env = TestEnv::new();
    let owner = env.add_actor("olivia");
    let other = env.add_actor("ravi");
    assert_ne!(owner, other);

    let resource = env.add_resource(owner, "tent");
    assert!(resource > 0);
}

#[test]
fn test_resource_for_unknown_owner() {
    let env = TestEnv::new();
    env.command()
        .args(["resource", "add", "--owner", "77", "--name", "kayak"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("actor 77"));
}

// ============================================================================
// Reserve
// ============================================================================

#[test]
fn test_reserve_prints_id_and_starts_waiting() {
    let env = TestEnv::new();
    let c = Catalog::register(&env);
    let id = env.reserve(c.resource, c.requester, 1, 2);

    env.command()
        .args(["show", "--format", "json", "--reservation"])
        .arg(id.to_string())
        .arg("--actor")
        .arg(c.requester.to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"WAITING\""));
}

#[test]
fn test_reserve_rejects_past_window_by_default() {
    let env = TestEnv::new();
    let c = Catalog::register(&env);

    env.command()
        .arg("reserve")
        .arg("--resource")
        .arg(c.resource.to_string())
        .arg("--requester")
        .arg(c.requester.to_string())
        .arg("--start")
        .arg(days_from_now(-3))
        .arg("--end")
        .arg(days_from_now(-2))
        .assert()
        .code(9)
        .stderr(predicate::str::contains("start"));
}

#[test]
fn test_reserve_own_resource_is_not_found() {
    let env = TestEnv::new();
    let c = Catalog::register(&env);

    env.command()
        .arg("reserve")
        .arg("--resource")
        .arg(c.resource.to_string())
        .arg("--requester")
        .arg(c.owner.to_string())
        .arg("--start")
        .arg(days_from_now(1))
        .arg("--end")
        .arg(days_from_now(2))
        .assert()
        .code(8);
}

#[test]
fn test_reserve_unavailable_resource() {
    let env = TestEnv::new();
    let c = Catalog::register(&env);
    let shelved = {
        let output = env
            .command()
            .args(["resource", "add", "--name", "shelved", "--unavailable"])
            .arg("--owner")
            .arg(c.owner.to_string())
            .output()
            .unwrap();
        assert!(output.status.success());
        common::parse_id(&String::from_utf8(output.stdout).unwrap())
    };

    env.command()
        .arg("reserve")
        .arg("--resource")
        .arg(shelved.to_string())
        .arg("--requester")
        .arg(c.requester.to_string())
        .arg("--start")
        .arg(days_from_now(1))
        .arg("--end")
        .arg(days_from_now(2))
        .assert()
        .code(9);
}

#[test]
fn test_reserve_dry_run_creates_nothing() {
    let env = TestEnv::new();
    let c = Catalog::register(&env);

    env.command()
        .arg("reserve")
        .arg("--resource")
        .arg(c.resource.to_string())
        .arg("--requester")
        .arg(c.requester.to_string())
        .arg("--start")
        .arg(days_from_now(1))
        .arg("--end")
        .arg(days_from_now(2))
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Dry run"))
        .stderr(predicate::str::contains("Create reservation"));

    let listing = env.list(&["--actor", &c.requester.to_string()]);
    assert_eq!(listing.lines().count(), 1);
}

#[test]
fn test_reserve_sub_millisecond_window_is_validation_failure() {
    let env = TestEnv::new();
    let c = Catalog::register(&env);

    env.command()
        .arg("reserve")
        .arg("--resource")
        .arg(c.resource.to_string())
        .arg("--requester")
        .arg(c.requester.to_string())
        .args(["--start", "2030-01-01T00:00:00.0001Z"])
        .args(["--end", "2030-01-01T00:00:00.0004Z"])
        .assert()
        .code(9)
        .stderr(predicate::str::contains("end"));
}

#[test]
fn test_reserve_over_approved_window_warns() {
    let env = TestEnv::new();
    let c = Catalog::register(&env);
    let approved = env.reserve(c.resource, c.requester, 2, 4);
    env.approve(approved, c.owner);

    env.command()
        .arg("reserve")
        .arg("--dry-run")
        .arg("--resource")
        .arg(c.resource.to_string())
        .arg("--requester")
        .arg(c.stranger.to_string())
        .arg("--start")
        .arg(days_from_now(3))
        .arg("--end")
        .arg(days_from_now(5))
        .assert()
        .success()
        .stderr(predicate::str::contains("Warnings:"))
        .stderr(predicate::str::contains(format!(
            "approved reservation(s) {approved} overlapping"
        )));

    env.command()
        .arg("reserve")
        .arg("--resource")
        .arg(c.resource.to_string())
        .arg("--requester")
        .arg(c.stranger.to_string())
        .arg("--start")
        .arg(days_from_now(3))
        .arg("--end")
        .arg(days_from_now(5))
        .assert()
        .success()
        .stderr(predicate::str::contains("WARN: resource"));
}

// ============================================================================
// Approve / cancel
// ============================================================================

#[test]
fn test_approve_then_cancel_fails() {
    let env = TestEnv::new();
    let c = Catalog::register(&env);
    let id = env.reserve(c.resource, c.requester, 1, 2);

    env.command()
        .arg("approve")
        .arg("--reservation")
        .arg(id.to_string())
        .arg("--actor")
        .arg(c.owner.to_string())
        .assert()
        .success()
        .stdout("APPROVED\n");

    env.command()
        .arg("cancel")
        .arg("--reservation")
        .arg(id.to_string())
        .arg("--actor")
        .arg(c.requester.to_string())
        .assert()
        .code(9)
        .stderr(predicate::str::contains("already been processed"));
}

#[test]
fn test_reject_is_terminal() {
    let env = TestEnv::new();
    let c = Catalog::register(&env);
    let id = env.reserve(c.resource, c.requester, 1, 2);

    env.command()
        .arg("approve")
        .arg("--reject")
        .arg("--reservation")
        .arg(id.to_string())
        .arg("--actor")
        .arg(c.owner.to_string())
        .assert()
        .success()
        .stdout("REJECTED\n");

    env.command()
        .arg("approve")
        .arg("--reservation")
        .arg(id.to_string())
        .arg("--actor")
        .arg(c.owner.to_string())
        .assert()
        .code(9)
        .stderr(predicate::str::contains("already been processed"));
}

#[test]
fn test_only_owner_may_decide() {
    let env = TestEnv::new();
    let c = Catalog::register(&env);
    let id = env.reserve(c.resource, c.requester, 1, 2);

    for actor in [c.requester, c.stranger] {
        env.command()
            .arg("approve")
            .arg("--reservation")
            .arg(id.to_string())
            .arg("--actor")
            .arg(actor.to_string())
            .assert()
            .code(10);
    }
}

#[test]
fn test_only_requester_may_cancel() {
    let env = TestEnv::new();
    let c = Catalog::register(&env);
    let id = env.reserve(c.resource, c.requester, 1, 2);

    env.command()
        .arg("cancel")
        .arg("--reservation")
        .arg(id.to_string())
        .arg("--actor")
        .arg(c.owner.to_string())
        .assert()
        .code(10);

    env.command()
        .arg("cancel")
        .arg("--reservation")
        .arg(id.to_string())
        .arg("--actor")
        .arg(c.requester.to_string())
        .assert()
        .success()
        .stdout("CANCELED\n");
}

#[test]
fn test_approve_dry_run_leaves_waiting() {
    let env = TestEnv::new();
    let c = Catalog::register(&env);
    let id = env.reserve(c.resource, c.requester, 1, 2);

    env.command()
        .arg("approve")
        .arg("--dry-run")
        .arg("--reservation")
        .arg(id.to_string())
        .arg("--actor")
        .arg(c.owner.to_string())
        .assert()
        .success()
        .stderr(predicate::str::contains("from WAITING to APPROVED"));

    let waiting = env.list(&["--actor", &c.requester.to_string(), "--state", "waiting"]);
    assert_eq!(common::table_ids(&waiting), vec![id]);
}

// ============================================================================
// Show / eligible
// ============================================================================

#[test]
fn test_show_denied_to_stranger() {
    let env = TestEnv::new();
    let c = Catalog::register(&env);
    let id = env.reserve(c.resource, c.requester, 1, 2);

    env.command()
        .arg("show")
        .arg("--reservation")
        .arg(id.to_string())
        .arg("--actor")
        .arg(c.stranger.to_string())
        .assert()
        .code(10)
        .stderr(predicate::str::contains("access denied"));

    env.command()
        .arg("show")
        .arg("--reservation")
        .arg(id.to_string())
        .arg("--actor")
        .arg(c.owner.to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("circular saw"));
}

#[test]
fn test_show_missing_reservation() {
    let env = TestEnv::new();
    let c = Catalog::register(&env);

    env.command()
        .args(["show", "--reservation", "999"])
        .arg("--actor")
        .arg(c.owner.to_string())
        .assert()
        .code(8);
}

#[test]
fn test_eligible_after_completed_approved_reservation() {
    let env = TestEnv::new();
    let c = Catalog::register(&env);

    let eligible = |expected_success: bool| {
        let assert = env
            .command()
            .arg("eligible")
            .arg("--actor")
            .arg(c.requester.to_string())
            .arg("--resource")
            .arg(c.resource.to_string())
            .assert();
        if expected_success {
            assert.success().stdout("eligible\n");
        } else {
            assert.code(1);
        }
    };

    eligible(false);

    let past = env.reserve(c.resource, c.requester, -4, -3);
    eligible(false);

    env.approve(past, c.owner);
    eligible(true);
}
