//! # Pole
//!
//! The un-actuated body hinged on top of the cart. Its angle is measured from
//! upright and always kept in `(-π, π]`.

use std::f64::consts::{PI, TAU};

use crate::reward::{PoleReward, RewardConfig};

/// Multiplicative loss applied to the angular velocity every tick.
pub const DAMPING_FACTOR: f64 = 0.999;

/// Half-width of the uniform perturbation applied around a rest position on reset.
pub const RESET_SPREAD: f64 = 0.2;

/// Fold an angle into `(-π, π]`.
///
/// In-range angles come back untouched. Anything else is wrapped by whole
/// turns, however far out of range it is.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    if angle > -PI && angle <= PI {
        return angle;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        PI
    } else {
        wrapped
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pole {
    angle: f64,
    angular_velocity: f64,
    mass: f64,
    length: f64,
    mass_center: f64,
    inertia: f64,
}

impl Pole {
    /// A pole at rest and upright. `mass_center` is the distance from the hinge
    /// to the center of mass.
    #[must_use]
    pub fn new(mass: f64, length: f64, mass_center: f64) -> Self {
        Self {
            angle: 0.0,
            angular_velocity: 0.0,
            mass,
            length,
            mass_center,
            inertia: mass * mass_center * mass_center,
        }
    }

    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[must_use]
    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    #[must_use]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[must_use]
    pub fn mass_center(&self) -> f64 {
        self.mass_center
    }

    #[must_use]
    pub fn inertia(&self) -> f64 {
        self.inertia
    }

    /// Overwrite the state. The angle is normalized.
    pub fn set_state(&mut self, angle: f64, angular_velocity: f64) {
        self.angle = angle;
        self.angular_velocity = angular_velocity;
        self.normalize();
    }

    /// Advance one tick: angle from the old angular velocity, then the new
    /// angular velocity, then damping, then normalization.
    pub fn advance(&mut self, angular_acceleration: f64, dt: f64) {
        self.angle += self.angular_velocity * dt;
        self.angular_velocity += angular_acceleration * dt;
        self.angular_velocity *= DAMPING_FACTOR;
        self.normalize();
    }

    pub fn normalize(&mut self) {
        self.angle = normalize_angle(self.angle);
    }

    /// Start near one of the two rest positions, chosen with equal
    /// probability: upright (0) or hanging (π), perturbed by up to
    /// [`RESET_SPREAD`] either way.
    pub fn reset(&mut self, rng: &mut fastrand::Rng) {
        let perturbation = RESET_SPREAD * (2.0 * rng.f64() - 1.0);
        let rest = if rng.bool() { PI } else { 0.0 };
        self.angle = perturbation + rest;
        self.angular_velocity = 0.0;
        self.normalize();
    }

    /// Position and velocity rewards with default shaping.
    #[must_use]
    pub fn reward(&self) -> PoleReward {
        self.reward_with(&RewardConfig::default())
    }

    #[must_use]
    pub fn reward_with(&self, config: &RewardConfig) -> PoleReward {
        let theta = self.angle;
        let speed = self.angular_velocity.abs();
        let position = 1.0 / (theta * theta + config.angle_softening);
        let velocity = if speed > config.spin_limit {
            config.spin_reward
        } else {
            // 2cos²(θ/2) - 1 == cos θ
            let half = (theta / 2.0).cos();
            (2.0 * half * half - 1.0) * speed
        };
        PoleReward { position, velocity }
    }
}
