//! Configuration for the forecast engine.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algorithm::forecast::SmoothingMethod;
use crate::error::Result;

/// Configuration for workload forecasting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForecastConfig {
    /// Number of days to project past the last historical date
    pub horizon_days: u32,
    /// Smoothing strategy applied to the history
    pub method: SmoothingMethod,
    /// Weight of the newest observation in exponential smoothing
    pub smoothing_alpha: f64,
    /// Trailing window of the moving average
    pub moving_average_window: usize,
    /// Length of the two windows compared to estimate the trend
    pub trend_window: usize,
    /// Extra confidence half-width per projected day, as a fraction of the std-dev
    pub confidence_growth: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon_days: 7,
            method: SmoothingMethod::default(),
            smoothing_alpha: 0.3,
            moving_average_window: 7,
            trend_window: 7,
            confidence_growth: 0.1,
        }
    }
}

impl ForecastConfig {
    /// Set the forecast horizon
    #[must_use]
    pub fn with_horizon(mut self, days: u32) -> Self {
        self.horizon_days = days;
        self
    }

    /// Set the smoothing method
    #[must_use]
    pub fn with_method(mut self, method: SmoothingMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the exponential smoothing factor
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.smoothing_alpha = alpha;
        self
    }

    /// Load a configuration from a JSON file; missing keys take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

impl fmt::Display for ForecastConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Forecast Configuration:")?;
        writeln!(f, "  Horizon: {} days", self.horizon_days)?;
        writeln!(f, "  Method: {}", self.method)?;
        if self.method == SmoothingMethod::ExponentialSmoothing {
            writeln!(f, "  Smoothing Alpha: {}", self.smoothing_alpha)?;
        } else {
            writeln!(f, "  Moving Average Window: {}", self.moving_average_window)?;
        }
        writeln!(f, "  Trend Window: {}", self.trend_window)?;
        writeln!(f, "  Confidence Growth: {}", self.confidence_growth)?;
        Ok(())
    }
}
