#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Swingup RL Environment
//!
//! Wraps the [`physics`] cart-pole model in a Gym-style environment.
//!
//! [`CartPoleEnv`] owns one [`physics::Cart`] and one [`physics::Pole`] for
//! its whole lifetime. Each [`Env::step`] maps a discrete action to a push
//! force, runs one tick of the coupled dynamics, checks termination and
//! shapes the reward. [`Env::reset`] puts both bodies back at an episode
//! start state.
//!
//! ```rust
//! use rl::{CartPoleConfig, CartPoleEnv, Env};
//!
//! let mut env = CartPoleEnv::with_seed(CartPoleConfig::default(), 42)?;
//! let _obs = env.reset();
//! let step = env.step(1)?;
//! assert!(!step.done);
//! # Ok::<(), rl::EnvError>(())
//! ```

pub mod cartpole;
pub mod config;
pub mod env;
pub mod error;
pub mod observation;
pub mod spaces;

pub use cartpole::{CartPoleEnv, EpisodeStatus};
pub use config::CartPoleConfig;
pub use env::{Env, Info, Step};
pub use error::{ConfigError, EnvError};
pub use observation::Observation;
pub use physics::RewardConfig;
pub use spaces::{BoxSpace, Discrete};
