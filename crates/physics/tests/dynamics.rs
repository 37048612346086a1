//! Tests for the coupled cart-pole solver and Euler integration.
//!
//! Reference values are worked out by hand from the closed-form inverse of
//! the 2x2 coefficient matrix with the default constants: force 400,
//! m_cart 10, m_pole 1, mass_center 10, dt 0.02.

use approx::assert_relative_eq;
use physics::dynamics::{self, SINGULARITY_EPSILON};
use physics::{normalize_angle, Cart, PhysicsError, Pole, SimParams};
use std::f64::consts::PI;

fn default_bodies() -> (Cart, Pole) {
    (Cart::new(10.0), Pole::new(1.0, 10.0, 10.0))
}

#[test]
fn upright_rest_push_matches_hand_computed_solution() {
    // θ = 0: F = [[1, 10], [11, 10]], det = -100, G = [0, 400]
    // ẍ = (10·0 - 10·400) / -100 = 40
    // θ̈ = (-11·0 + 1·400) / -100 = -4
    let (cart, pole) = default_bodies();
    let acc = dynamics::solve(&cart, &pole, 400.0, 9.8).unwrap();
    assert_relative_eq!(acc.cart, 40.0, epsilon = 1e-12);
    assert_relative_eq!(acc.pole, -4.0, epsilon = 1e-12);
}

#[test]
fn hanging_rest_push_flips_pole_acceleration() {
    // θ = -π: F = [[-1, 10], [11, -10]], det = -100, G ≈ [0, 400]
    let (cart, mut pole) = default_bodies();
    pole.set_state(PI, 0.0);
    let acc = dynamics::solve(&cart, &pole, 400.0, 9.8).unwrap();
    assert_relative_eq!(acc.cart, 40.0, epsilon = 1e-9);
    assert_relative_eq!(acc.pole, 4.0, epsilon = 1e-9);
}

#[test]
fn one_tick_from_rest_updates_velocities_only() {
    let (mut cart, mut pole) = default_bodies();
    let params = SimParams::default();
    dynamics::integrate(&mut cart, &mut pole, 400.0, &params).unwrap();

    // Positions move with the pre-tick velocities, which were zero.
    assert_eq!(cart.position, 0.0);
    assert_eq!(pole.angle(), 0.0);
    assert_relative_eq!(cart.velocity, 0.8, epsilon = 1e-12);
    assert_relative_eq!(pole.angular_velocity(), -4.0 * 0.02 * 0.999, epsilon = 1e-12);
}

#[test]
fn second_tick_moves_positions() {
    let (mut cart, mut pole) = default_bodies();
    let params = SimParams::default();
    dynamics::integrate(&mut cart, &mut pole, 400.0, &params).unwrap();
    dynamics::integrate(&mut cart, &mut pole, 400.0, &params).unwrap();

    assert_relative_eq!(cart.position, 0.8 * 0.02, epsilon = 1e-12);
    assert_relative_eq!(pole.angle(), -0.079_92 * 0.02, epsilon = 1e-12);
}

#[test]
fn gravity_topples_a_tilted_pole_without_force() {
    let (mut cart, mut pole) = default_bodies();
    pole.set_state(0.1, 0.0);
    let params = SimParams::default();
    let start = pole.angle().abs();
    for _ in 0..50 {
        dynamics::integrate(&mut cart, &mut pole, 0.0, &params).unwrap();
    }
    assert!(
        pole.angle().abs() > start,
        "pole should fall away from upright, angle = {}",
        pole.angle()
    );
}

#[test]
fn massless_cart_under_upright_pole_is_singular() {
    // det = l (m_pole cos²θ - m_cart - m_pole) = 0 when m_cart = 0 and θ = 0.
    let mut cart = Cart::new(0.0);
    let mut pole = Pole::new(1.0, 10.0, 10.0);
    let before = (cart.clone(), pole.clone());

    let err = dynamics::integrate(&mut cart, &mut pole, 400.0, &SimParams::default()).unwrap_err();
    match err {
        PhysicsError::SingularSystem { determinant } => {
            assert!(determinant.abs() <= SINGULARITY_EPSILON);
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!((cart, pole), before, "state must not change on failure");
}

#[test]
fn horizontal_pole_with_centered_mass_is_singular() {
    // cos θ = 0 zeroes the diagonal; l = 0 zeroes the off-diagonal.
    let cart = Cart::new(10.0);
    let mut pole = Pole::new(1.0, 10.0, 0.0);
    pole.set_state(PI / 2.0, 0.0);
    for _ in 0..3 {
        assert!(matches!(
            dynamics::solve(&cart, &pole, 400.0, 9.8),
            Err(PhysicsError::SingularSystem { .. })
        ));
    }
}

#[test]
fn non_finite_state_is_reported() {
    let mut cart = Cart::new(10.0);
    cart.velocity = f64::NAN;
    let mut pole = Pole::new(1.0, 10.0, 10.0);
    pole.set_state(f64::NAN, 0.0);
    assert_eq!(
        dynamics::solve(&cart, &pole, 400.0, 9.8),
        Err(PhysicsError::NonFinite)
    );
}

#[test]
fn angle_stays_normalized_under_repeated_advance() {
    let mut rng = fastrand::Rng::with_seed(7);
    let mut pole = Pole::new(1.0, 10.0, 10.0);
    for _ in 0..10_000 {
        let alpha = (rng.f64() - 0.5) * 2_000.0;
        pole.advance(alpha, 0.02);
        assert!(
            pole.angle() > -PI && pole.angle() <= PI,
            "angle {} escaped (-π, π]",
            pole.angle()
        );
    }
}

#[test]
fn normalize_folds_arbitrary_angles_into_range() {
    let mut rng = fastrand::Rng::with_seed(11);
    for _ in 0..10_000 {
        let angle = (rng.f64() - 0.5) * 200.0;
        let folded = normalize_angle(angle);
        assert!(folded > -PI && folded <= PI);
        let turns = (angle - folded) / (2.0 * PI);
        assert_relative_eq!(turns, turns.round(), epsilon = 1e-9);
    }
}

#[test]
fn damping_shrinks_free_spin() {
    let mut pole = Pole::new(1.0, 10.0, 10.0);
    pole.set_state(0.0, 10.0);
    pole.advance(0.0, 0.02);
    assert_relative_eq!(pole.angular_velocity(), 9.99, epsilon = 1e-12);
    assert_relative_eq!(pole.angle(), 0.2, epsilon = 1e-12);
}
