use std::collections::BTreeMap;

use crate::error::EnvError;

/// Auxiliary diagnostics returned with every step. Currently always empty.
pub type Info = BTreeMap<String, f64>;

/// Result of advancing an environment by one action.
#[derive(Clone, Debug, PartialEq)]
pub struct Step<O> {
    pub observation: O,
    pub reward: f64,
    pub done: bool,
    pub info: Info,
}

impl<O> Step<O> {
    #[must_use]
    pub fn new(observation: O, reward: f64, done: bool) -> Self {
        Self {
            observation,
            reward,
            done,
            info: Info::new(),
        }
    }
}

/// Reinforcement learning environment trait.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait defines the core
/// interface an environment must provide. Each call to [`step`] advances the
/// simulation by one action and returns the new observation, a reward signal,
/// and whether the episode has terminated.
///
/// Callers are expected to [`reset`] once `done` has been reported.
///
/// [`step`]: Env::step
/// [`reset`]: Env::reset
pub trait Env {
    type Obs;
    type Action;

    /// Advance the environment by one action.
    ///
    /// # Errors
    ///
    /// Fails without mutating state when the action is outside the action
    /// space or the simulation cannot be advanced.
    fn step(&mut self, action: Self::Action) -> Result<Step<Self::Obs>, EnvError>;

    /// Reset the environment to its starting state and return the initial
    /// observation.
    fn reset(&mut self) -> Self::Obs;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Size of the action space.
    fn action_size(&self) -> usize;
}
