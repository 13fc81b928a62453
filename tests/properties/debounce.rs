//! Property tests for the debounce delay curve.

use std::time::{Duration, Instant};

use proptest::prelude::*;

use syncwatch::domain::services::{DebounceScheduler, PRESSURE_THRESHOLD};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The delay never leaves [min, max] and never shrinks as resets grow.
    #[test]
    fn property_delay_bounded_and_monotonic(
        min_ms in 1u64..500,
        extra_ms in 0u64..5000,
        resets in 0u32..200,
    ) {
        let min = Duration::from_millis(min_ms);
        let max = Duration::from_millis(min_ms + extra_ms);
        let scheduler = DebounceScheduler::new(min, max);

        let delay = scheduler.delay_for(resets);
        prop_assert!(delay >= min && delay <= max, "{:?} outside [{:?}, {:?}]", delay, min, max);
        prop_assert!(scheduler.delay_for(resets + 1) >= delay);
    }

    /// PROPERTY: Pressure is reported exactly when resets reach the threshold.
    #[test]
    fn property_pressure_threshold(changes in 1u32..32, pending in 0usize..500) {
        let mut scheduler = DebounceScheduler::default();
        let now = Instant::now();
        let mut last = None;
        for _ in 0..changes {
            last = Some(scheduler.change_occurred(now, pending));
        }

        let resets = changes - 1;
        prop_assert_eq!(scheduler.consecutive_resets(), resets);
        let expected = (resets >= PRESSURE_THRESHOLD).then_some(pending);
        prop_assert_eq!(last.map(|d| d.pressure), Some(expected));
    }
}
