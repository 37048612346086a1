#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Swingup Physics
//!
//! A small two-body model of a pole hinged on a cart sliding along a track.
//!
//! The crate is deliberately tiny: a [`Cart`] owns its horizontal position and
//! velocity, a [`Pole`] owns its angle and angular velocity, and the
//! [`dynamics`] module couples the two through the rigid-body
//! pendulum-on-cart equations of motion. Each tick the coupled accelerations
//! come out of a 2x2 linear system and both bodies are advanced with explicit
//! Euler integration.
//!
//! ## Key Components
//!
//! -   **Bodies:** [`Cart`] and [`Pole`] hold mutable state plus immutable
//!     physical constants. Neither references the other.
//! -   **Solver:** [`dynamics::solve`] builds the generalized-force vector and
//!     coefficient matrix for the current instant and solves it in closed
//!     form. [`dynamics::integrate`] solves and advances both bodies.
//! -   **Rewards:** [`Cart::reward`] and [`Pole::reward`] encode the control
//!     objective, shaped by a [`RewardConfig`].
//!
//! ## Usage
//!
//! ```rust
//! use physics::{dynamics, Cart, Pole, SimParams};
//!
//! let mut cart = Cart::new(10.0);
//! let mut pole = Pole::new(1.0, 10.0, 10.0);
//! let params = SimParams::default();
//!
//! let acc = dynamics::integrate(&mut cart, &mut pole, 400.0, &params)?;
//! assert!(acc.cart > 0.0);
//! # Ok::<(), physics::PhysicsError>(())
//! ```

pub mod cart;
pub mod dynamics;
pub mod error;
pub mod pole;
pub mod reward;
pub mod types;

pub use cart::Cart;
pub use dynamics::Accelerations;
pub use error::PhysicsError;
pub use pole::{normalize_angle, Pole};
pub use reward::{PoleReward, RewardConfig};
pub use types::SimParams;
