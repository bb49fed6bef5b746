//! Wind trend summarizer
//!
//! Classifies the near-term wind-speed direction from an ordered sequence of
//! hourly forecast samples. Total function: any sample sequence, including an
//! empty one or one with missing speeds, yields exactly one trend label.

use crate::app::models::{WindForecastSample, WindTrend};
use crate::constants::{MIN_TREND_SAMPLES, TREND_THRESHOLD_MPH};

/// Truncate to the leading `num_hours` samples and classify the trend
///
/// The trend compares the 1st and 3rd sample's sustained speed: a difference
/// above the threshold is Increasing, below the negative threshold
/// Decreasing, otherwise No Change. Fewer than 3 samples, or a missing speed
/// in either position, yields N/A rather than an error.
pub fn summarize_trend(
    samples: &[WindForecastSample],
    num_hours: usize,
) -> (Vec<WindForecastSample>, WindTrend) {
    let window: Vec<WindForecastSample> = samples.iter().take(num_hours).cloned().collect();
    let trend = classify_trend(&window);
    (window, trend)
}

/// Classify the trend over an already-truncated window
pub fn classify_trend(window: &[WindForecastSample]) -> WindTrend {
    if window.len() < MIN_TREND_SAMPLES {
        return WindTrend::NotAvailable;
    }

    match (window[0].wind_speed_mph, window[2].wind_speed_mph) {
        (Some(first), Some(third)) => {
            let diff = f64::from(third) - f64::from(first);
            if diff > TREND_THRESHOLD_MPH {
                WindTrend::Increasing
            } else if diff < -TREND_THRESHOLD_MPH {
                WindTrend::Decreasing
            } else {
                WindTrend::NoChange
            }
        }
        _ => WindTrend::NotAvailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_TREND_HOURS;

    fn sample(speed: Option<i32>) -> WindForecastSample {
        WindForecastSample {
            start_time: None,
            wind_speed_mph: speed,
            wind_gust_mph: None,
            wind_direction: "W".to_string(),
        }
    }

    fn samples(speeds: &[i32]) -> Vec<WindForecastSample> {
        speeds.iter().map(|&s| sample(Some(s))).collect()
    }

    #[test]
    fn test_increasing_trend() {
        // diff = 20 - 15 = 5 > 0.5
        let (window, trend) = summarize_trend(&samples(&[15, 18, 20, 22, 19, 16]), DEFAULT_TREND_HOURS);
        assert_eq!(trend, WindTrend::Increasing);
        assert_eq!(window.len(), 5);
    }

    #[test]
    fn test_decreasing_trend() {
        let (_, trend) = summarize_trend(&samples(&[20, 18, 15, 14, 13]), DEFAULT_TREND_HOURS);
        assert_eq!(trend, WindTrend::Decreasing);
    }

    #[test]
    fn test_no_change_within_threshold() {
        let (_, trend) = summarize_trend(&samples(&[15, 18, 15, 22, 19]), DEFAULT_TREND_HOURS);
        assert_eq!(trend, WindTrend::NoChange);
    }

    #[test]
    fn test_fewer_than_three_samples() {
        let (_, trend) = summarize_trend(&samples(&[15, 18]), DEFAULT_TREND_HOURS);
        assert_eq!(trend, WindTrend::NotAvailable);

        let (_, trend) = summarize_trend(&[], DEFAULT_TREND_HOURS);
        assert_eq!(trend, WindTrend::NotAvailable);
    }

    #[test]
    fn test_missing_speed_in_compared_position() {
        let with_null_first = vec![sample(None), sample(Some(18)), sample(Some(20))];
        assert_eq!(classify_trend(&with_null_first), WindTrend::NotAvailable);

        let with_null_third = vec![sample(Some(15)), sample(Some(18)), sample(None)];
        assert_eq!(classify_trend(&with_null_third), WindTrend::NotAvailable);
    }

    #[test]
    fn test_extreme_speeds_do_not_overflow() {
        // Parsed speeds are unbounded i32; the difference is taken in f64
        let window = vec![
            sample(Some(i32::MIN)),
            sample(Some(0)),
            sample(Some(i32::MAX)),
        ];
        assert_eq!(classify_trend(&window), WindTrend::Increasing);

        let window = vec![
            sample(Some(i32::MAX)),
            sample(Some(0)),
            sample(Some(i32::MIN)),
        ];
        assert_eq!(classify_trend(&window), WindTrend::Decreasing);
    }

    #[test]
    fn test_missing_speed_elsewhere_does_not_matter() {
        let window = vec![sample(Some(15)), sample(None), sample(Some(20))];
        assert_eq!(classify_trend(&window), WindTrend::Increasing);
    }

    #[test]
    fn test_window_is_truncated_not_modified() {
        let input = samples(&[15, 18, 20, 22, 19, 16, 14]);
        let (window, _) = summarize_trend(&input, 3);
        assert_eq!(window, input[..3].to_vec());
    }

    #[test]
    fn test_totality_over_sample_counts() {
        // Every length from 0 to 8 produces exactly one label, never a panic
        for len in 0..=8 {
            let speeds: Vec<i32> = (0..len).collect();
            let (_, trend) = summarize_trend(&samples(&speeds), DEFAULT_TREND_HOURS);
            assert!(matches!(
                trend,
                WindTrend::Increasing
                    | WindTrend::Decreasing
                    | WindTrend::NoChange
                    | WindTrend::NotAvailable
            ));
        }
    }
}
