//! Property-based tests for `Reservation` and `NewReservation` construction.

use super::{ActorId, NewReservation, Reservation, ReservationId, ResourceId, Status};
use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

// Instants within a few years of a fixed epoch, at millisecond precision
fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..100_000_000_000).prop_map(|millis| {
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap() + Duration::milliseconds(millis)
    })
}

fn status_strategy() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Waiting),
        Just(Status::Approved),
        Just(Status::Rejected),
        Just(Status::Canceled),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Construction succeeds exactly when start < end
    #[test]
    fn new_reservation_requires_ordered_interval(start in instant_strategy(), end in instant_strategy()) {
        let result = NewReservation::new(ResourceId::new(1), ActorId::new(2), start, end);
        prop_assert_eq!(result.is_ok(), start < end);
    }

    // Every built reservation satisfies start < end
    #[test]
    fn built_reservation_keeps_interval_invariant(
        start in instant_strategy(),
        end in instant_strategy(),
        status in status_strategy(),
    ) {
        match Reservation::builder(ReservationId::new(1), start, end).status(status).build() {
            Ok(r) => {
                prop_assert!(r.start() < r.end());
                prop_assert_eq!(r.status(), status);
            }
            Err(e) => {
                prop_assert!(start >= end);
                prop_assert_eq!(e.field.as_str(), "end");
            }
        }
    }

    // Status names round-trip regardless of case
    #[test]
    fn status_parse_is_case_insensitive(status in status_strategy(), lower in any::<bool>()) {
        let name = if lower { status.as_str().to_lowercase() } else { status.as_str().to_string() };
        prop_assert_eq!(name.parse::<Status>().unwrap(), status);
    }
}
