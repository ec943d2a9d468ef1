//! Property-based tests for the lifecycle operations.
//!
//! These run random sequences of approve and cancel calls against a real
//! database and check the state machine invariants.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use crate::database::test_util::{create_test_database, TestCatalog};
use crate::database::Database;
use crate::reservation::Status;

use super::{approve_reservation, cancel_reservation, ApproveOptions, CancelOptions};

#[derive(Debug, Clone, Copy)]
enum Step {
    Approve(bool),
    Cancel,
    ApproveAsStranger,
    CancelAsOwner,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        any::<bool>().prop_map(Step::Approve),
        Just(Step::Cancel),
        Just(Step::ApproveAsStranger),
        Just(Step::CancelAsOwner),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    // At most one transition ever succeeds, and only an owner decision or a
    // requester cancel can be it
    #[test]
    fn terminal_states_are_absorbing(steps in prop::collection::vec(step_strategy(), 1..8)) {
        let mut db = create_test_database();
        let catalog = TestCatalog::seed(db.connection());
        let stranger = Database::insert_actor(db.connection(), "stranger").unwrap();
        let start = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let id = catalog.reserve(db.connection(), start, start + Duration::days(1));

        let mut expected = Status::Waiting;
        for step in steps {
            let outcome = match step {
                Step::Approve(decision) => approve_reservation(
                    &mut db,
                    ApproveOptions::new(id, catalog.owner).with_decision(decision),
                ),
                Step::Cancel => cancel_reservation(&mut db, CancelOptions::new(id, catalog.requester)),
                Step::ApproveAsStranger => {
                    approve_reservation(&mut db, ApproveOptions::new(id, stranger))
                }
                Step::CancelAsOwner => {
                    cancel_reservation(&mut db, CancelOptions::new(id, catalog.owner))
                }
            };

            match (step, outcome) {
                (Step::ApproveAsStranger | Step::CancelAsOwner, result) => {
                    prop_assert!(result.unwrap_err().is_access_denied());
                }
                (_, Ok(reservation)) => {
                    prop_assert_eq!(expected, Status::Waiting);
                    expected = reservation.status();
                }
                (_, Err(err)) => {
                    prop_assert!(err.is_validation());
                    prop_assert!(expected.is_terminal());
                }
            }

            let stored = Database::get_reservation(db.connection(), id).unwrap().unwrap();
            prop_assert_eq!(stored.status(), expected);
        }
    }
}
