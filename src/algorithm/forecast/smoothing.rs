//! Smoothing strategies applied to the history before projection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CareMetricsError;

/// Smoothing strategy, selectable by name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SmoothingMethod {
    /// Trailing mean over a fixed window
    MovingAverage,
    /// Recursive weighted average
    #[default]
    ExponentialSmoothing,
}

impl SmoothingMethod {
    /// Wire name of the method
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MovingAverage => "moving-average",
            Self::ExponentialSmoothing => "exponential-smoothing",
        }
    }

    /// Lenient lookup: unknown names fall back to exponential smoothing
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!("Unknown forecasting method '{name}', using exponential smoothing");
            Self::ExponentialSmoothing
        })
    }

    /// Apply the method with the given parameters
    #[must_use]
    pub fn smooth(self, values: &[f64], window: usize, alpha: f64) -> Vec<f64> {
        match self {
            Self::MovingAverage => moving_average(values, window),
            Self::ExponentialSmoothing => exponential_smoothing(values, alpha),
        }
    }
}

impl fmt::Display for SmoothingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SmoothingMethod {
    type Err = CareMetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "moving-average" => Ok(Self::MovingAverage),
            "exponential-smoothing" => Ok(Self::ExponentialSmoothing),
            other => Err(CareMetricsError::UnknownMethod(other.to_string())),
        }
    }
}

/// Trailing moving average
///
/// Positions before the first full window pass the raw value through, so the
/// output has the same length as the input.
#[must_use]
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 {
        return values.to_vec();
    }

    let mut out = Vec::with_capacity(values.len());
    let mut sum = 0.0;
    for (i, &value) in values.iter().enumerate() {
        sum += value;
        if i >= window {
            sum -= values[i - window];
        }
        if i + 1 < window {
            out.push(value);
        } else {
            out.push(sum / window as f64);
        }
    }
    out
}

/// Exponential smoothing: `s[0] = x[0]`, `s[i] = α·x[i] + (1−α)·s[i−1]`
#[must_use]
pub fn exponential_smoothing(values: &[f64], alpha: f64) -> Vec<f64> {
    let Some((&first, rest)) = values.split_first() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(values.len());
    let mut smoothed = first;
    out.push(smoothed);
    for &value in rest {
        smoothed = alpha * value + (1.0 - alpha) * smoothed;
        out.push(smoothed);
    }
    out
}
