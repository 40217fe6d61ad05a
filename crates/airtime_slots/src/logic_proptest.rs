#[cfg(test)]
mod tests {
    use crate::logic::{book_range, expected_unit_count, BookingError};
    use airtime_db::{DbError, NewSlotDefinition, SlotDefinition, TimeSlot, TimeSlotRepository};
    use proptest::prelude::*;

    // Store that must never be reached; used to prove validation
    // short-circuits before any storage access.
    struct UnreachableSlotRepo;

    impl TimeSlotRepository for UnreachableSlotRepo {
        async fn init_schema(&self) -> Result<(), DbError> {
            panic!("store must not be touched");
        }

        async fn find_available_in_range(
            &self,
            _from_ts: i64,
            _to_ts: i64,
        ) -> Result<Vec<TimeSlot>, DbError> {
            panic!("store must not be touched");
        }

        async fn mark_range_booked(
            &self,
            _from_ts: i64,
            _to_ts: i64,
            _expected_count: u64,
            _user_id: i64,
        ) -> Result<u64, DbError> {
            panic!("store must not be touched");
        }

        async fn create_definition(
            &self,
            _definition: NewSlotDefinition,
            _granularity_seconds: i64,
        ) -> Result<Option<SlotDefinition>, DbError> {
            panic!("store must not be touched");
        }

        async fn find_definitions(&self) -> Result<Vec<SlotDefinition>, DbError> {
            panic!("store must not be touched");
        }
    }

    // Helper function to count units by walking the range explicitly
    fn enumerated_unit_count(from_ts: i64, to_ts: i64, granularity_seconds: i64) -> u64 {
        let mut count = 0;
        let mut ts = from_ts;
        while ts <= to_ts {
            count += 1;
            ts += granularity_seconds;
        }
        count
    }

    proptest! {
        // The analytic count must agree with explicit enumeration of the
        // closed interval at every granularity.
        #[test]
        fn expected_count_matches_explicit_enumeration(
            from_ts in -10_000i64..10_000,
            span in 0i64..2_000,
            granularity_seconds in 1i64..120,
        ) {
            let to_ts = from_ts + span;
            prop_assert_eq!(
                expected_unit_count(from_ts, to_ts, granularity_seconds).unwrap(),
                enumerated_unit_count(from_ts, to_ts, granularity_seconds)
            );
        }

        // Extending the range by exactly one granularity step adds exactly
        // one unit.
        #[test]
        fn expected_count_grows_by_one_per_step(
            from_ts in -10_000i64..10_000,
            span in 0i64..2_000,
            granularity_seconds in 1i64..120,
        ) {
            let to_ts = from_ts + span;
            prop_assert_eq!(
                expected_unit_count(from_ts, to_ts + granularity_seconds, granularity_seconds)
                    .unwrap(),
                expected_unit_count(from_ts, to_ts, granularity_seconds).unwrap() + 1
            );
        }

        // A range that starts and ends on the same unit is always one unit,
        // regardless of granularity.
        #[test]
        fn single_unit_range_always_expects_one(
            from_ts in -10_000i64..10_000,
            granularity_seconds in 1i64..3_600,
        ) {
            prop_assert_eq!(
                expected_unit_count(from_ts, from_ts, granularity_seconds).unwrap(),
                1
            );
        }

        // An inverted range is rejected no matter what the store holds; the
        // panicking store proves it is never consulted.
        #[test]
        fn inverted_ranges_are_always_rejected(
            from_ts in -10_000i64..10_000,
            delta in 1i64..1_000,
            user_id in 1i64..100,
        ) {
            let to_ts = from_ts - delta;
            let rt = tokio::runtime::Runtime::new().unwrap();
            let result = rt.block_on(book_range(
                &UnreachableSlotRepo,
                1,
                user_id,
                from_ts,
                to_ts,
            ));
            prop_assert!(matches!(result, Err(BookingError::InvalidRange(_))));
        }
    }
}
