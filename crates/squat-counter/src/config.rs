use std::path::Path;

use serde::Deserialize;

use crate::CounterError;

/// Thresholds for posture checks and movement detection.
///
/// Defaults reproduce the tuning the counter shipped with. Any field missing
/// from a JSON config falls back to its default.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CounterConfig {
    knee_tolerance_deg: f64,
    min_stance_ratio: f32,
    movement_divisor: f32,
    min_in_frame_likelihood: Option<f32>,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            knee_tolerance_deg: 5.0,
            min_stance_ratio: 0.5,
            movement_divisor: 5.0,
            min_in_frame_likelihood: None,
        }
    }
}

impl CounterConfig {
    /// Parse a JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, CounterError> {
        let config: CounterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CounterError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Set how far (in degrees) the right knee may bend before the stance counts as not straight.
    pub fn with_knee_tolerance_deg(mut self, degrees: f64) -> Self {
        self.knee_tolerance_deg = degrees;
        self
    }

    /// Set the minimum ankle span to shoulder span ratio required before counting.
    pub fn with_min_stance_ratio(mut self, ratio: f32) -> Self {
        self.min_stance_ratio = ratio;
        self
    }

    /// Set the divisor applied to the hip-to-ankle height to get the movement threshold.
    pub fn with_movement_divisor(mut self, divisor: f32) -> Self {
        self.movement_divisor = divisor;
        self
    }

    /// Treat required landmarks below this in-frame likelihood as missing.
    pub fn with_min_in_frame_likelihood(mut self, likelihood: Option<f32>) -> Self {
        self.min_in_frame_likelihood = likelihood;
        self
    }

    // Getters
    pub fn knee_tolerance_deg(&self) -> f64 {
        self.knee_tolerance_deg
    }

    pub fn min_stance_ratio(&self) -> f32 {
        self.min_stance_ratio
    }

    pub fn movement_divisor(&self) -> f32 {
        self.movement_divisor
    }

    pub fn min_in_frame_likelihood(&self) -> Option<f32> {
        self.min_in_frame_likelihood
    }

    pub fn validate(&self) -> Result<(), CounterError> {
        if !self.knee_tolerance_deg.is_finite() || self.knee_tolerance_deg < 0.0 {
            return Err(CounterError::InvalidConfig(format!(
                "knee_tolerance_deg must be a non-negative number, got {}",
                self.knee_tolerance_deg
            )));
        }
        if !self.min_stance_ratio.is_finite() {
            return Err(CounterError::InvalidConfig(format!(
                "min_stance_ratio must be finite, got {}",
                self.min_stance_ratio
            )));
        }
        if !self.movement_divisor.is_finite() || self.movement_divisor <= 0.0 {
            return Err(CounterError::InvalidConfig(format!(
                "movement_divisor must be positive, got {}",
                self.movement_divisor
            )));
        }
        if let Some(likelihood) = self.min_in_frame_likelihood {
            if !(0.0..=1.0).contains(&likelihood) {
                return Err(CounterError::InvalidConfig(format!(
                    "min_in_frame_likelihood must be in [0, 1], got {}",
                    likelihood
                )));
            }
        }
        Ok(())
    }
}
