use care_metrics::algorithm::forecast::{estimate_trend, exponential_smoothing};
use care_metrics::{
    ForecastConfig, SmoothingMethod, TrendDirection, compute_forecast, compute_forecast_with,
};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use crate::utils::series;

#[test]
fn test_constant_history() {
    let history = series(&[5; 14]);
    let smoothed = exponential_smoothing(&[5.0; 14], 0.3);
    assert!(smoothed.iter().all(|&v| v == 5.0));
    assert_eq!(estimate_trend(&[5.0; 14], 7), 0.0);

    let report = compute_forecast(&history, 7, SmoothingMethod::ExponentialSmoothing);
    assert_eq!(report.forecast.len(), 7);
    for point in &report.forecast {
        assert_eq!(point.value, 5);
        assert_eq!((point.confidence.lower, point.confidence.upper), (5, 5));
        assert!(!point.is_historical);
    }
    assert_eq!(report.metrics.trend, TrendDirection::Stable);
    assert_eq!(
        report.recommendations.staffing,
        "Maintain current staffing for stable workload of ~5 patients/day."
    );
}

#[test]
fn test_rising_history() {
    let counts: Vec<u32> = (1..=30).collect();
    let report = compute_forecast(&series(&counts), 7, SmoothingMethod::ExponentialSmoothing);

    let values: Vec<u64> = report.forecast.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![29, 30, 31, 32, 33, 34, 35]);
    assert_eq!(report.metrics.trend, TrendDirection::Increasing);
    assert_eq!(report.metrics.expected_total, 224);
    // Local average of the last week is 27
    assert!(report.metrics.expected_total > 7 * 27);

    assert_eq!(report.metrics.peak_day.date, NaiveDate::from_ymd_opt(2023, 12, 7));
    assert_eq!(report.metrics.peak_day.value, 35);
    assert_eq!(
        report.recommendations.staffing,
        "Increase staffing by 15-20% to handle expected 32 patients/day. Peak on 12/7/2023 with 35 patients."
    );
    assert_eq!(
        report.recommendations.beds,
        "Prepare 26 additional beds. Ensure 32 beds available for peak day."
    );
}

#[test]
fn test_falling_history_clamps_at_zero() {
    let counts: Vec<u32> = (1..=30).rev().collect();
    let report = compute_forecast(&series(&counts), 7, SmoothingMethod::ExponentialSmoothing);

    assert_eq!(report.metrics.trend, TrendDirection::Decreasing);
    assert_eq!(report.forecast.last().map(|p| p.value), Some(0));
    assert!(report.forecast.iter().all(|p| p.confidence.lower <= p.value));
    assert_eq!(
        report.recommendations.beds,
        "Current bed capacity is sufficient. Consider scheduling elective procedures."
    );
}

#[test]
fn test_forecast_dates_follow_history() {
    let history = series(&[3, 4, 2, 5]);
    let report = compute_forecast(&history, 3, SmoothingMethod::MovingAverage);
    let dates: Vec<NaiveDate> = report.forecast.iter().map(|p| p.date).collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2023, 11, 5).unwrap(),
            NaiveDate::from_ymd_opt(2023, 11, 6).unwrap(),
            NaiveDate::from_ymd_opt(2023, 11, 7).unwrap(),
        ]
    );
}

#[test]
fn test_short_history_has_no_trend() {
    // Moving average passes short series through; no trend below 14 days
    let report = compute_forecast(&series(&[2, 8]), 4, SmoothingMethod::MovingAverage);
    assert!(report.forecast.iter().all(|p| p.value == 8));
    assert_eq!(report.metrics.expected_total, 32);
}

#[test]
fn test_config_from_file() {
    let path =
        std::env::temp_dir().join(format!("care-metrics-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "horizonDays": 3, "method": "moving-average" }"#).unwrap();
    let config = ForecastConfig::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.horizon_days, 3);
    assert_eq!(config.method, SmoothingMethod::MovingAverage);
    assert_eq!(config.smoothing_alpha, 0.3);

    let report = compute_forecast_with(&series(&[4; 10]), &config);
    assert_eq!(report.forecast.len(), 3);
    assert_eq!(report.metrics.expected_total, 12);
}

#[test]
fn test_unknown_method_name() {
    assert!("holt-winters".parse::<SmoothingMethod>().is_err());
    assert_eq!(
        SmoothingMethod::from_name_or_default("holt-winters"),
        SmoothingMethod::ExponentialSmoothing
    );
}

#[test]
fn test_report_json_shape() {
    let report = compute_forecast(&series(&[3, 1, 3]), 2, SmoothingMethod::MovingAverage);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(
        json["historical"][0],
        serde_json::json!({ "date": "2023-11-01", "value": 3, "isHistorical": true })
    );
    // The peak is reported as the whole projected point
    assert_eq!(json["metrics"]["peakDay"], json["forecast"][0]);
}

#[test]
fn test_alpha_controls_responsiveness() {
    // A late jump: a higher alpha follows it more closely
    let history = series(&[2, 2, 2, 2, 2, 10]);
    let base = ForecastConfig::default().with_horizon(1);

    let sluggish = compute_forecast_with(&history, &base);
    let eager = compute_forecast_with(&history, &base.clone().with_alpha(1.0));

    // 2 + 0.3 * 8 = 4.4
    assert_eq!(sluggish.forecast[0].value, 4);
    assert_eq!(eager.forecast[0].value, 10);
}
