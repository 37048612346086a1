//! Reward shaping constants for the cart-pole objective.

use serde::{Deserialize, Serialize};

/// Constants shaping the per-tick reward.
///
/// `spin_reward` is what [`crate::Pole::reward`] hands back once the pole
/// spins faster than `spin_limit`. It is positive, so it is added to the
/// total like any other term even though fast spinning is unwanted. The value
/// is kept as-is and left configurable.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Cart positions closer to the origin than this earn the full reward.
    pub center_radius: f64,
    /// Added to `angle²` in the pole position reward; caps it at `1 / softening`.
    pub angle_softening: f64,
    /// Angular speed above which the fixed `spin_reward` replaces the shaped term.
    pub spin_limit: f64,
    pub spin_reward: f64,
    /// Reward of the tick that ends the episode.
    pub termination_reward: f64,
    /// Whether the pole velocity term is part of the total reward.
    pub include_velocity_term: bool,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            center_radius: 5.0,
            angle_softening: 0.3,
            spin_limit: 20.0,
            spin_reward: 10.0,
            termination_reward: -10.0,
            include_velocity_term: true,
        }
    }
}

/// The two independent components of the pole reward.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PoleReward {
    /// Peaks when the pole is upright.
    pub position: f64,
    /// Rewards angular speed near upright and penalizes it hanging down.
    pub velocity: f64,
}

impl PoleReward {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.position + self.velocity
    }
}
