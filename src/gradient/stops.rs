use crate::foundation::core::Rgb8;
use crate::foundation::error::{ShimmerError, ShimmerResult};

/// Brightness ramp the grid cycles through.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradientConfig {
    /// Number of gray stops (must be >= 2).
    pub stop_count: usize,
    /// Brightness of the first stop, in `[0, 1]`.
    pub min_brightness: f64,
    /// Brightness of the last stop, in `[0, 1]`.
    pub max_brightness: f64,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            stop_count: 8,
            min_brightness: 0.10,
            max_brightness: 0.50,
        }
    }
}

impl GradientConfig {
    pub fn validate(&self) -> ShimmerResult<()> {
        if self.stop_count < 2 {
            return Err(ShimmerError::validation(format!(
                "gradient stop_count must be >= 2 (got {})",
                self.stop_count
            )));
        }
        for (name, v) in [
            ("min_brightness", self.min_brightness),
            ("max_brightness", self.max_brightness),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(ShimmerError::validation(format!(
                    "gradient {name} must be within [0, 1] (got {v})"
                )));
            }
        }
        if self.min_brightness > self.max_brightness {
            return Err(ShimmerError::validation(
                "gradient min_brightness must be <= max_brightness",
            ));
        }
        Ok(())
    }
}

/// Ordered grayscale stops, evenly stepped from `min_brightness` to `max_brightness` inclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorStopTable {
    stops: Vec<Rgb8>,
}

impl ColorStopTable {
    pub fn new(cfg: &GradientConfig) -> ShimmerResult<Self> {
        cfg.validate()?;
        let last = (cfg.stop_count - 1) as f64;
        let span = cfg.max_brightness - cfg.min_brightness;
        let stops = (0..cfg.stop_count)
            .map(|i| brightness_to_rgb(cfg.min_brightness + span * (i as f64 / last)))
            .collect();
        Ok(Self { stops })
    }

    /// Use an explicit stop sequence.
    pub fn from_stops(stops: Vec<Rgb8>) -> ShimmerResult<Self> {
        if stops.len() < 2 {
            return Err(ShimmerError::validation(format!(
                "color stop table needs at least 2 stops (got {})",
                stops.len()
            )));
        }
        Ok(Self { stops })
    }

    pub fn stops(&self) -> &[Rgb8] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn first(&self) -> Rgb8 {
        self.stops[0]
    }

    pub fn last(&self) -> Rgb8 {
        self.stops[self.stops.len() - 1]
    }
}

fn brightness_to_rgb(b: f64) -> Rgb8 {
    Rgb8::gray((255.0 * b).round_ties_even() as u8)
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/stops.rs"]
mod tests;
