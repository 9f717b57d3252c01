//! Task scheduling tests
//!
//! Unit and property-based tests for:
//! - Next due date of stage, continuous and one-off tasks
//! - Task form validation
//! - Season and day/night helpers the scheduler shares

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use shared::{
    is_daytime, next_task_date, next_task_date_at, validate_task_schedule, DurationType, Season,
    TaskSchedule,
};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(14, 0, 0)
        .unwrap()
}

// ============================================================================
// Property Test Strategies
// ============================================================================

fn interval_strategy() -> impl Strategy<Value = i64> {
    1i64..=90
}

/// Start dates up to two years before or one month after `now()`
fn start_offset_strategy() -> impl Strategy<Value = i64> {
    -2i64 * 365 * 24 * 60..=30 * 24 * 60
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_stage_ten_days_ago_weekly() {
        let start = now() - Duration::days(10);
        let next = next_task_date_at(now(), Some(7), DurationType::Stage, Some(start), None).unwrap();
        assert!(next > now());
        assert_eq!((next - start).num_days() % 7, 0);
        assert_eq!(next, start + Duration::days(14));
    }

    #[test]
    fn test_stage_with_local_clock() {
        let start = chrono::Local::now().naive_local() - Duration::days(10);
        let next = next_task_date(Some(7), DurationType::Stage, Some(start), None).unwrap();
        assert_eq!((next - start).num_days() % 7, 0);
        assert!(next > start + Duration::days(10));
    }

    #[test]
    fn test_invalid_interval_yields_none() {
        let start = now() - Duration::days(3);
        for interval in [None, Some(0), Some(-7)] {
            assert_eq!(
                next_task_date_at(now(), interval, DurationType::Stage, Some(start), None),
                None
            );
            assert_eq!(
                next_task_date_at(now(), interval, DurationType::Continuous, None, None),
                None
            );
        }
    }

    #[test]
    fn test_huge_interval_does_not_overflow() {
        let start = now() - Duration::days(1);
        assert_eq!(
            next_task_date_at(now(), Some(i64::MAX), DurationType::Stage, Some(start), None),
            None
        );
    }

    #[test]
    fn test_schedule_validation_matches_scheduler() {
        let schedule = TaskSchedule {
            duration_type: DurationType::Stage,
            interval_days: Some(7),
            start_date: Some(now() - Duration::days(10)),
            end_date: Some(now() + Duration::days(60)),
            once_date: None,
        };
        assert!(validate_task_schedule(&schedule).is_ok());
        assert!(schedule.next_occurrence_at(now()).is_some());
    }

    #[test]
    fn test_schedule_from_json() {
        let schedule: TaskSchedule = serde_json::from_str(
            r#"{"duration_type": "once", "once_date": "2024-04-01T09:00:00"}"#,
        )
        .unwrap();
        assert_eq!(schedule.duration_type, DurationType::Once);
        assert_eq!(
            schedule.next_occurrence_at(now()),
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap().and_hms_opt(9, 0, 0)
        );
    }

    #[test]
    fn test_season_boundaries() {
        assert_eq!(Season::from_month(2), Season::Winter);
        assert_eq!(Season::from_month(3), Season::Spring);
        assert_eq!(Season::from_month(5), Season::Spring);
        assert_eq!(Season::from_month(6), Season::Summer);
        assert_eq!(Season::from_month(10), Season::Autumn);
        assert_eq!(Season::from_month(11), Season::Winter);
    }

    #[test]
    fn test_daytime_window() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert!(!is_daytime(day.and_hms_opt(5, 59, 59).unwrap()));
        assert!(is_daytime(day.and_hms_opt(6, 0, 0).unwrap()));
        assert!(is_daytime(day.and_hms_opt(17, 59, 0).unwrap()));
        assert!(!is_daytime(day.and_hms_opt(18, 0, 0).unwrap()));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Stage tasks land strictly after now, on a whole number of intervals
        /// from the start, and no earlier occurrence is also in the future
        #[test]
        fn prop_stage_next_date_is_first_future_step(
            interval in interval_strategy(),
            offset in start_offset_strategy(),
        ) {
            let start = now() + Duration::minutes(offset);
            let next = next_task_date_at(now(), Some(interval), DurationType::Stage, Some(start), None)
                .unwrap();
            prop_assert!(next > now() || next == start);
            prop_assert_eq!((next - start).num_seconds() % Duration::days(interval).num_seconds(), 0);
            if next > start {
                prop_assert!(next - Duration::days(interval) <= now());
            }
        }

        /// Continuous tasks are always exactly one interval away
        #[test]
        fn prop_continuous_is_one_interval_ahead(interval in interval_strategy()) {
            let next = next_task_date_at(now(), Some(interval), DurationType::Continuous, None, None);
            prop_assert_eq!(next, Some(now() + Duration::days(interval)));
        }

        /// Non-positive intervals never produce a date
        #[test]
        fn prop_non_positive_interval_rejected(interval in -365i64..=0) {
            let start = now() - Duration::days(5);
            prop_assert!(next_task_date_at(now(), Some(interval), DurationType::Stage, Some(start), None).is_none());
            let schedule = TaskSchedule {
                duration_type: DurationType::Continuous,
                interval_days: Some(interval),
                start_date: None,
                end_date: None,
                once_date: None,
            };
            prop_assert!(validate_task_schedule(&schedule).is_err());
        }

        /// Every month maps to the season of its calendar quarter
        #[test]
        fn prop_season_of_month(month in 1u32..=12) {
            let expected = match month {
                3..=5 => Season::Spring,
                6..=8 => Season::Summer,
                9 | 10 => Season::Autumn,
                _ => Season::Winter,
            };
            prop_assert_eq!(Season::from_month(month), expected);
        }
    }
}
