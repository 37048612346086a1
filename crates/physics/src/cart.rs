//! # Cart
//!
//! The actuated body: slides along an unbounded track and responds to the
//! horizontal force chosen by the agent.

use crate::reward::RewardConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct Cart {
    mass: f64,
    /// Position along the track in meters. Never clamped.
    pub position: f64,
    /// Velocity in meters per second.
    pub velocity: f64,
}

impl Cart {
    #[must_use]
    pub fn new(mass: f64) -> Self {
        Self {
            mass,
            position: 0.0,
            velocity: 0.0,
        }
    }

    #[must_use]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Advance one tick. Position moves with the velocity from before this
    /// tick's acceleration is applied.
    pub fn advance(&mut self, acceleration: f64, dt: f64) {
        self.position += self.velocity * dt;
        self.velocity += acceleration * dt;
    }

    /// Put the cart back at the origin, at rest.
    pub fn reset(&mut self) {
        self.position = 0.0;
        self.velocity = 0.0;
    }

    /// Reward for staying near the center of the track, with default shaping.
    #[must_use]
    pub fn reward(&self) -> f64 {
        self.reward_with(&RewardConfig::default())
    }

    /// Full reward inside `center_radius`, then decaying as `1 / |position|`.
    #[must_use]
    pub fn reward_with(&self, config: &RewardConfig) -> f64 {
        let distance = self.position.abs();
        // |x| < radius also rules out x == 0 on the division branch.
        if distance < config.center_radius {
            1.0
        } else {
            1.0 / distance
        }
    }
}
