/// Full state of the cart-pole system as seen by the agent.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Observation {
    pub cart_position: f64,
    pub cart_velocity: f64,
    pub pole_angle: f64,
    pub pole_angular_velocity: f64,
}

impl Observation {
    #[must_use]
    pub const fn new(
        cart_position: f64,
        cart_velocity: f64,
        pole_angle: f64,
        pole_angular_velocity: f64,
    ) -> Self {
        Self {
            cart_position,
            cart_velocity,
            pole_angle,
            pole_angular_velocity,
        }
    }

    /// `[x, x_dot, theta, theta_dot]`
    #[must_use]
    pub const fn to_array(self) -> [f64; 4] {
        [
            self.cart_position,
            self.cart_velocity,
            self.pole_angle,
            self.pole_angular_velocity,
        ]
    }
}

impl From<Observation> for [f64; 4] {
    fn from(obs: Observation) -> Self {
        obs.to_array()
    }
}

impl From<[f64; 4]> for Observation {
    fn from([x, x_dot, theta, theta_dot]: [f64; 4]) -> Self {
        Self::new(x, x_dot, theta, theta_dot)
    }
}
