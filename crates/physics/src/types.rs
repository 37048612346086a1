use serde::{Deserialize, Serialize};

/// Standard gravity used by the cart-pole model, in m/s².
pub const GRAVITY: f64 = 9.8;

/// Duration of one tick, in seconds.
pub const TIME_STEP: f64 = 0.02;

/// Simulation-level parameters shared by every body in a tick.
///
/// The time step belongs to the simulation rather than to either body; it is
/// passed explicitly into [`crate::dynamics::integrate`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimParams {
    pub gravity: f64,
    pub time_step: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            time_step: TIME_STEP,
        }
    }
}
