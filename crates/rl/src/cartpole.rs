//! Cart-pole swing-up environment.
//!
//! A pole is hinged on a cart that slides along an unbounded track. The pole
//! starts near either its upright or its hanging rest position, and the agent
//! pushes the cart left or right with a fixed force. Rewards favor a centered
//! cart and an upright pole; the episode ends once the cart drifts past
//! `position_threshold`.
//!
//! | index | observation            | bound       |
//! |-------|------------------------|-------------|
//! | 0     | cart position          | ±2·x_thresh |
//! | 1     | cart velocity          | ±f32::MAX   |
//! | 2     | pole angle             | ±2·θ_thresh |
//! | 3     | pole angular velocity  | ±f32::MAX   |
//!
//! | action | effect              |
//! |--------|---------------------|
//! | 0      | push cart left      |
//! | 1      | push cart right     |

use physics::{dynamics, Cart, Pole, SimParams};

use crate::config::CartPoleConfig;
use crate::env::{Env, Step};
use crate::error::{ConfigError, EnvError};
use crate::observation::Observation;
use crate::spaces::{BoxSpace, Discrete};

/// Where the environment is in its episode lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EpisodeStatus {
    /// Accepting steps.
    Active,
    /// A step has reported `done`; the caller should reset.
    Terminated,
}

pub struct CartPoleEnv {
    cart: Cart,
    pole: Pole,
    config: CartPoleConfig,
    params: SimParams,
    rng: fastrand::Rng,
    seed: u64,
    steps: u64,
    status: EpisodeStatus,
    action_space: Discrete,
    observation_space: BoxSpace<4>,
}

impl CartPoleEnv {
    /// Create an environment seeded from entropy and reset it.
    ///
    /// # Errors
    ///
    /// Returns the first problem found by [`CartPoleConfig::validate`].
    pub fn new(config: CartPoleConfig) -> Result<Self, ConfigError> {
        Self::with_seed(config, fastrand::u64(..))
    }

    /// Create a deterministic environment and reset it.
    ///
    /// # Errors
    ///
    /// Returns the first problem found by [`CartPoleConfig::validate`].
    pub fn with_seed(config: CartPoleConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let high = [
            config.position_threshold * 2.0,
            f64::from(f32::MAX),
            config.angle_threshold * 2.0,
            f64::from(f32::MAX),
        ];
        let mut env = Self {
            cart: Cart::new(config.cart_mass),
            pole: Pole::new(config.pole_mass, config.pole_length, config.pole_mass_center),
            params: config.sim_params(),
            config,
            rng: fastrand::Rng::with_seed(seed),
            seed,
            steps: 0,
            status: EpisodeStatus::Active,
            action_space: Discrete::new(2),
            observation_space: BoxSpace::symmetric(high),
        };
        env.reset();
        Ok(env)
    }

    /// Re-seed the episode RNG, drawing a fresh seed when `None`. Returns the
    /// seed in use. Takes effect from the next reset.
    pub fn seed(&mut self, seed: Option<u64>) -> u64 {
        let seed = seed.unwrap_or_else(|| fastrand::u64(..));
        self.rng = fastrand::Rng::with_seed(seed);
        self.seed = seed;
        seed
    }

    #[must_use]
    pub fn current_seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn state(&self) -> Observation {
        Observation::new(
            self.cart.position,
            self.cart.velocity,
            self.pole.angle(),
            self.pole.angular_velocity(),
        )
    }

    /// Place the system at an arbitrary configuration. The pole angle is
    /// normalized; the episode status is left alone.
    pub fn set_state(&mut self, obs: Observation) {
        self.cart.position = obs.cart_position;
        self.cart.velocity = obs.cart_velocity;
        self.pole.set_state(obs.pole_angle, obs.pole_angular_velocity);
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn pole(&self) -> &Pole {
        &self.pole
    }

    #[must_use]
    pub fn config(&self) -> &CartPoleConfig {
        &self.config
    }

    #[must_use]
    pub fn status(&self) -> EpisodeStatus {
        self.status
    }

    /// Steps taken since the last reset.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    #[must_use]
    pub fn action_space(&self) -> Discrete {
        self.action_space
    }

    #[must_use]
    pub fn observation_space(&self) -> BoxSpace<4> {
        self.observation_space
    }

    fn is_out_of_bounds(&self) -> bool {
        self.cart.position.abs() > self.config.position_threshold
    }

    fn shaped_reward(&self) -> f64 {
        let shaping = &self.config.reward;
        let pole = self.pole.reward_with(shaping);
        let mut reward = self.cart.reward_with(shaping) + pole.position;
        if shaping.include_velocity_term {
            reward += pole.velocity;
        }
        reward
    }
}

impl Env for CartPoleEnv {
    type Obs = Observation;
    type Action = u32;

    fn step(&mut self, action: u32) -> Result<Step<Observation>, EnvError> {
        if !self.action_space.contains(action) {
            return Err(EnvError::InvalidAction { action });
        }
        if self.status == EpisodeStatus::Terminated {
            tracing::warn!(
                steps = self.steps,
                "step after termination without reset; simulating on from the terminal state"
            );
        }

        let force = if action == 1 {
            self.config.force_magnitude
        } else {
            -self.config.force_magnitude
        };
        dynamics::integrate(&mut self.cart, &mut self.pole, force, &self.params)?;
        self.steps += 1;

        let done = self.is_out_of_bounds();
        let reward = if done {
            self.status = EpisodeStatus::Terminated;
            tracing::debug!(steps = self.steps, x = self.cart.position, "episode terminated");
            self.config.reward.termination_reward
        } else {
            self.shaped_reward()
        };

        Ok(Step::new(self.state(), reward, done))
    }

    fn reset(&mut self) -> Observation {
        self.cart.reset();
        self.pole.reset(&mut self.rng);
        self.steps = 0;
        self.status = EpisodeStatus::Active;
        tracing::debug!(theta = self.pole.angle(), "reset");
        self.state()
    }

    fn obs_size(&self) -> usize {
        self.observation_space.shape()
    }

    fn action_size(&self) -> usize {
        self.action_space.n as usize
    }
}
