use chrono::{DateTime, TimeZone, Utc};

use datebound::{GradingPeriod, PolicyConfig, PolicyContext, PolicyError, ValidDateRange};

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

#[test]
fn test_valid_configuration_builds() {
    let config = PolicyConfig {
        valid_date_range: Some(ValidDateRange {
            start: Some(date(2024, 1, 1)),
            end: Some(date(2024, 12, 31)),
        }),
        has_grading_periods: true,
        grading_periods: vec![
            GradingPeriod {
                title: "Q1".to_string(),
                start_date: date(2024, 1, 1),
                end_date: date(2024, 3, 31),
                closed: true,
            },
            GradingPeriod {
                title: "Q2".to_string(),
                start_date: date(2024, 3, 31),
                end_date: date(2024, 6, 30),
                closed: false,
            },
        ],
        user_is_admin: false,
        post_to_sis_required: false,
    };

    let policy = PolicyContext::new(config).unwrap();

    assert_eq!(policy.grading_periods().unwrap().len(), 2);
}

#[test]
fn test_inverted_range_fails_fast() {
    let config = PolicyConfig {
        valid_date_range: Some(ValidDateRange {
            start: Some(date(2024, 12, 31)),
            end: Some(date(2024, 1, 1)),
        }),
        ..Default::default()
    };

    let err = PolicyContext::new(config).unwrap_err();

    assert!(matches!(err, PolicyError::InvertedDateRange { .. }));
    assert!(err.to_string().contains("valid date range"));
}

#[test]
fn test_inverted_period_names_the_period() {
    let config = PolicyConfig {
        has_grading_periods: true,
        grading_periods: vec![GradingPeriod {
            title: "Q1".to_string(),
            start_date: date(2024, 6, 1),
            end_date: date(2024, 6, 1),
            closed: false,
        }],
        ..Default::default()
    };

    let err = PolicyContext::new(config).unwrap_err();

    assert!(matches!(err, PolicyError::InvertedGradingPeriod { .. }));
    assert!(err.to_string().contains("Q1"));
}

#[test]
fn test_periods_without_flag_fail_fast() {
    let config = PolicyConfig {
        has_grading_periods: false,
        grading_periods: vec![GradingPeriod {
            title: "Q1".to_string(),
            start_date: date(2024, 1, 1),
            end_date: date(2024, 3, 31),
            closed: false,
        }],
        ..Default::default()
    };

    assert!(matches!(
        PolicyContext::new(config),
        Err(PolicyError::UnexpectedGradingPeriods)
    ));
}

#[test]
fn test_flag_without_periods_fails_fast() {
    let config = PolicyConfig {
        has_grading_periods: true,
        grading_periods: vec![],
        ..Default::default()
    };

    assert!(matches!(
        PolicyContext::new(config),
        Err(PolicyError::MissingGradingPeriods)
    ));
}

#[test]
fn test_range_containment_with_open_bounds() {
    let bounded_below = ValidDateRange {
        start: Some(date(2024, 3, 1)),
        end: None,
    };

    assert!(bounded_below.contains(date(2024, 3, 1)));
    assert!(bounded_below.contains(date(2030, 1, 1)));
    assert!(!bounded_below.contains(date(2024, 2, 29)));

    let unbounded = ValidDateRange::default();
    assert!(unbounded.contains(date(1999, 1, 1)));
}
