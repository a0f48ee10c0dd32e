use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use zoomchart::api::{ChartConfig, ChartState};
use zoomchart::core::{Sample, ZoomLevel};
use zoomchart::error::ChartError;

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
        .single()
        .expect("valid date")
}

fn hourly_series(from: DateTime<Utc>, to: DateTime<Utc>) -> Vec<Sample> {
    let mut samples = Vec::new();
    let mut time = from;
    let mut index = 0_u64;
    while time <= to {
        samples.push(Sample::new(time, index as f64).expect("valid sample"));
        time += Duration::hours(1);
        index += 1;
    }
    samples
}

#[test]
fn initial_state_derives_range_and_no_zoom_cache() {
    let samples = hourly_series(date(2010, 3, 1), date(2010, 9, 30));
    let config = ChartConfig::new(date(2010, 5, 3), date(2010, 5, 5));

    let state = ChartState::from_samples(samples, &config).expect("valid initial state");

    assert_eq!(state.global_range().min_time, date(2010, 3, 1));
    assert_eq!(state.global_range().max_time, date(2010, 9, 30));
    assert_eq!(state.zoom_level(), ZoomLevel::NoZoom);
    assert!(state.zoom_settings().level1_bounds.is_none());
    assert!(state.zoom_settings().level2_bounds.is_none());
    assert!(!state.visible_samples().is_empty());
    assert!(state.visible_samples().len() <= config.point_budget);
}

#[test]
fn ingestion_canonicalizes_unsorted_and_duplicate_input() {
    let t0 = date(2010, 3, 1);
    let samples = vec![
        Sample::new(t0 + Duration::hours(2), 3.0).expect("valid sample"),
        Sample::new(t0, 1.0).expect("valid sample"),
        Sample::new(t0, 9.0).expect("valid sample"),
        Sample::new(t0 + Duration::hours(1), 2.0).expect("valid sample"),
        // Not constructible through `Sample::new`; ingestion must drop it.
        Sample {
            time: t0 + Duration::hours(3),
            value: f64::NAN,
        },
    ];
    let config = ChartConfig::new(t0, t0 + Duration::hours(1));

    let state = ChartState::from_samples(samples, &config).expect("valid initial state");

    assert_eq!(state.sample_count(), 3);
    let visible = state.visible_samples();
    for pair in visible.windows(2) {
        assert!(pair[0].time < pair[1].time);
    }
    // First-seen wins on the duplicate timestamp.
    assert_eq!(visible[0].value, 1.0);
}

#[test]
fn empty_series_is_rejected() {
    let config = ChartConfig::new(date(2010, 5, 3), date(2010, 5, 5));

    let result = ChartState::from_samples(Vec::new(), &config);

    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn initial_window_outside_series_range_is_rejected() {
    let samples = hourly_series(date(2010, 3, 1), date(2010, 9, 30));
    let config = ChartConfig::new(date(2010, 2, 1), date(2010, 5, 5));

    let result = ChartState::from_samples(samples, &config);

    assert!(matches!(result, Err(ChartError::InvalidConfig(_))));
}

#[test]
fn degenerate_config_values_are_rejected() {
    let samples = hourly_series(date(2010, 3, 1), date(2010, 9, 30));

    let inverted = ChartConfig::new(date(2010, 5, 5), date(2010, 5, 3));
    assert!(ChartState::from_samples(samples.clone(), &inverted).is_err());

    let tiny_budget =
        ChartConfig::new(date(2010, 5, 3), date(2010, 5, 5)).with_point_budget(1);
    assert!(ChartState::from_samples(samples.clone(), &tiny_budget).is_err());

    let zero_width = ChartConfig::new(date(2010, 5, 3), date(2010, 5, 5))
        .with_minimal_width_minutes(0.0);
    assert!(ChartState::from_samples(samples, &zero_width).is_err());
}

#[test]
fn decimal_ingestion_matches_float_ingestion() {
    let t0 = date(2010, 3, 1);
    let from_decimal =
        Sample::from_decimal(t0, Decimal::new(12_345, 2)).expect("valid decimal sample");

    assert_eq!(from_decimal.value, 123.45);
}

#[test]
fn non_finite_sample_values_are_rejected_at_construction() {
    let t0 = date(2010, 3, 1);

    assert!(Sample::new(t0, f64::NAN).is_err());
    assert!(Sample::new(t0, f64::INFINITY).is_err());
}

#[test]
fn config_round_trips_through_json() {
    let config = ChartConfig::new(date(2010, 5, 3), date(2010, 5, 5))
        .with_minimal_width_minutes(720.0)
        .with_point_budget(500);

    let json = config.to_json_pretty().expect("serialize");
    let restored = ChartConfig::from_json_str(&json).expect("deserialize");

    assert_eq!(restored, config);
}

#[test]
fn config_defaults_fill_missing_json_fields() {
    let json = r#"{"window_from":"2010-05-03T00:00:00Z","window_to":"2010-05-05T00:00:00Z"}"#;

    let config = ChartConfig::from_json_str(json).expect("deserialize");

    assert_eq!(config.minimal_width_minutes, 1440.0);
    assert_eq!(config.point_budget, 1000);
}
