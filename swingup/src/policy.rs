use clap::ValueEnum;
use rl::Discrete;

/// Fixed action-selection rules for exercising the environment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Policy {
    /// Always push right
    Right,
    /// Always push left
    Left,
    /// Right on even steps, left on odd ones
    Alternate,
    /// Uniformly random
    Random,
}

impl Policy {
    pub fn act(self, step: u64, actions: Discrete, rng: &mut fastrand::Rng) -> u32 {
        match self {
            Policy::Right => 1,
            Policy::Left => 0,
            Policy::Alternate => u32::from(step % 2 == 0),
            Policy::Random => actions.sample(rng),
        }
    }
}
