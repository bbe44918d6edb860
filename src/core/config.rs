//! Starfield options and their parsing from string key/value pairs
//! (element `data-*` attributes or a JS options object).

use super::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("option `{key}` is not a finite number: {value:?}")]
    NotANumber { key: String, value: String },
    #[error("option `{key}` must be {expected}, got {value}")]
    OutOfRange {
        key: &'static str,
        value: f32,
        expected: &'static str,
    },
    #[error("speedMin ({min}) is greater than speedMax ({max})")]
    InvertedSpeedRange { min: f32, max: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarfieldConfig {
    /// Grid cell size controlling star density.
    pub gap: f32,
    /// Base star radius before the per-star size roll.
    pub radius: f32,
    /// Global alpha multiplier.
    pub opacity: f32,
    pub speed_min: f32,
    pub speed_max: f32,
    /// Global time scale applied to the animation clock.
    pub speed_scale: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP,
            radius: DEFAULT_RADIUS,
            opacity: DEFAULT_OPACITY,
            speed_min: DEFAULT_SPEED_MIN,
            speed_max: DEFAULT_SPEED_MAX,
            speed_scale: DEFAULT_SPEED_SCALE,
        }
    }
}

impl StarfieldConfig {
    /// Start from the defaults and override with every recognised key.
    /// Keys may be camelCase (`speedMin`) or kebab-case (`speed-min`);
    /// unrecognised keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut cfg = Self::default();
        for (key, value) in pairs {
            let key = key.as_ref();
            let slot = match key {
                "gap" => &mut cfg.gap,
                "radius" => &mut cfg.radius,
                "opacity" => &mut cfg.opacity,
                "speedMin" | "speed-min" => &mut cfg.speed_min,
                "speedMax" | "speed-max" => &mut cfg.speed_max,
                "speedScale" | "speed-scale" => &mut cfg.speed_scale,
                _ => continue,
            };
            *slot = parse_number(key, value.as_ref())?;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gap < MIN_GAP {
            return Err(out_of_range("gap", self.gap, ">= 1"));
        }
        if self.radius <= 0.0 {
            return Err(out_of_range("radius", self.radius, "> 0"));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(out_of_range("opacity", self.opacity, "within [0, 1]"));
        }
        if self.speed_min < 0.0 {
            return Err(out_of_range("speedMin", self.speed_min, ">= 0"));
        }
        if self.speed_min > self.speed_max {
            return Err(ConfigError::InvertedSpeedRange {
                min: self.speed_min,
                max: self.speed_max,
            });
        }
        if self.speed_scale < 0.0 {
            return Err(out_of_range("speedScale", self.speed_scale, ">= 0"));
        }
        Ok(())
    }
}

fn parse_number(key: &str, raw: &str) -> Result<f32, ConfigError> {
    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConfigError::NotANumber {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn out_of_range(key: &'static str, value: f32, expected: &'static str) -> ConfigError {
    ConfigError::OutOfRange {
        key,
        value,
        expected,
    }
}
