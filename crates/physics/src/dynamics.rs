//! # Coupled Cart-Pole Dynamics
//!
//! Reduces the Lagrangian equations of motion for a pole hinged on a cart to
//! a 2x2 linear system per tick:
//!
//! ```text
//! | cos θ            l            | | ẍ |   | -g sin θ               |
//! | m_cart + m_pole  m_pole l cos θ | | θ̈ | = | F + m_pole l θ̇² sin θ |
//! ```
//!
//! with `θ = -pole.angle()` and `l = pole.mass_center()`. The solution is
//! the cart acceleration and the pole angular acceleration, which are then
//! fed to explicit Euler integration of both bodies.

use glam::{DMat2, DVec2};

use crate::cart::Cart;
use crate::error::PhysicsError;
use crate::pole::Pole;
use crate::types::SimParams;

/// Determinants at or below this magnitude are treated as singular.
pub const SINGULARITY_EPSILON: f64 = 1e-12;

/// Solution of one tick's linear system.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Accelerations {
    /// Linear acceleration of the cart, m/s².
    pub cart: f64,
    /// Angular acceleration of the pole, rad/s².
    pub pole: f64,
}

/// Coefficient matrix and generalized-force vector for the current state.
#[must_use]
pub fn system(cart: &Cart, pole: &Pole, force: f64, gravity: f64) -> (DMat2, DVec2) {
    let theta = -pole.angle();
    let (sin, cos) = theta.sin_cos();
    let l = pole.mass_center();
    let m_pole = pole.mass();
    let omega = pole.angular_velocity();

    let generalized = DVec2::new(
        -gravity * sin,
        force + m_pole * l * omega * omega * sin,
    );
    // glam is column-major: x_axis is the first column.
    let coefficients = DMat2::from_cols(
        DVec2::new(cos, cart.mass() + m_pole),
        DVec2::new(l, m_pole * l * cos),
    );
    (coefficients, generalized)
}

/// Solve for the coupled accelerations without touching either body.
///
/// # Errors
///
/// [`PhysicsError::SingularSystem`] when the coefficient matrix has a
/// determinant within [`SINGULARITY_EPSILON`] of zero, for example a massless
/// cart under an upright pole or a pole whose center of mass sits on the
/// hinge. [`PhysicsError::NonFinite`] when the state or the solution is not
/// finite.
pub fn solve(
    cart: &Cart,
    pole: &Pole,
    force: f64,
    gravity: f64,
) -> Result<Accelerations, PhysicsError> {
    let (coefficients, generalized) = system(cart, pole, force, gravity);
    let determinant = coefficients.determinant();
    if !determinant.is_finite() {
        return Err(PhysicsError::NonFinite);
    }
    if determinant.abs() <= SINGULARITY_EPSILON {
        tracing::warn!(determinant, angle = pole.angle(), "singular cart-pole system");
        return Err(PhysicsError::SingularSystem { determinant });
    }

    let solution = coefficients.inverse() * generalized;
    if !solution.is_finite() {
        return Err(PhysicsError::NonFinite);
    }

    Ok(Accelerations {
        cart: solution.x,
        pole: solution.y,
    })
}

/// Solve the current tick and advance both bodies by `params.time_step`.
///
/// Nothing is mutated when solving fails.
///
/// # Errors
///
/// Propagates any error from [`solve`].
pub fn integrate(
    cart: &mut Cart,
    pole: &mut Pole,
    force: f64,
    params: &SimParams,
) -> Result<Accelerations, PhysicsError> {
    let acc = solve(cart, pole, force, params.gravity)?;
    cart.advance(acc.cart, params.time_step);
    pole.advance(acc.pole, params.time_step);
    tracing::trace!(
        x = cart.position,
        x_dot = cart.velocity,
        theta = pole.angle(),
        theta_dot = pole.angular_velocity(),
        "tick"
    );
    Ok(acc)
}
