//! Configuration for a [`crate::CartPoleEnv`].
//!
//! Every field has a default, so a JSON file only needs the values it
//! changes:
//!
//! ```json
//! { "force_magnitude": 200.0, "reward": { "include_velocity_term": false } }
//! ```

use std::f64::consts::PI;
use std::path::Path;

use physics::{RewardConfig, SimParams};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for a cart-pole environment
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartPoleConfig {
    /// Cart mass in kg
    pub cart_mass: f64,
    /// Pole mass in kg
    pub pole_mass: f64,
    /// Pole length in meters
    pub pole_length: f64,
    /// Distance from the hinge to the pole's center of mass, in meters
    pub pole_mass_center: f64,
    /// Magnitude of the push applied by either action, in newtons
    pub force_magnitude: f64,
    pub gravity: f64,
    /// Seconds per tick
    pub time_step: f64,
    /// Episode ends once the cart is further than this from the origin
    pub position_threshold: f64,
    /// Half the angular extent of the observation space
    pub angle_threshold: f64,
    pub reward: RewardConfig,
}

impl Default for CartPoleConfig {
    fn default() -> Self {
        let sim = SimParams::default();
        Self {
            cart_mass: 10.0,
            pole_mass: 1.0,
            pole_length: 10.0,
            pole_mass_center: 10.0,
            force_magnitude: 400.0,
            gravity: sim.gravity,
            time_step: sim.time_step,
            position_threshold: 100.0,
            angle_threshold: PI,
            reward: RewardConfig::default(),
        }
    }
}

impl CartPoleConfig {
    /// Parse a JSON document. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed input and
    /// [`ConfigError::Invalid`] when a value fails [`Self::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise as
    /// [`Self::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    #[must_use]
    pub fn sim_params(&self) -> SimParams {
        SimParams {
            gravity: self.gravity,
            time_step: self.time_step,
        }
    }

    /// Check that every constant is physically meaningful.
    ///
    /// Zero masses and a zero center-of-mass distance are accepted; they can
    /// make the dynamics singular, which is reported per step.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("cart_mass", self.cart_mass),
            ("pole_mass", self.pole_mass),
            ("pole_length", self.pole_length),
            ("pole_mass_center", self.pole_mass_center),
            ("force_magnitude", self.force_magnitude),
        ];
        for (field, value) in non_negative {
            check(field, value, "finite and non-negative", value >= 0.0)?;
        }

        let positive = [
            ("time_step", self.time_step),
            ("position_threshold", self.position_threshold),
            ("angle_threshold", self.angle_threshold),
            ("reward.angle_softening", self.reward.angle_softening),
        ];
        for (field, value) in positive {
            check(field, value, "finite and positive", value > 0.0)?;
        }

        let finite = [
            ("gravity", self.gravity),
            ("reward.center_radius", self.reward.center_radius),
            ("reward.spin_limit", self.reward.spin_limit),
            ("reward.spin_reward", self.reward.spin_reward),
            ("reward.termination_reward", self.reward.termination_reward),
        ];
        for (field, value) in finite {
            check(field, value, "finite", true)?;
        }
        Ok(())
    }
}

fn check(
    field: &'static str,
    value: f64,
    requirement: &'static str,
    holds: bool,
) -> Result<(), ConfigError> {
    if value.is_finite() && holds {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            requirement,
            value,
        })
    }
}
