use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PhysicsError {
    /// The coefficient matrix of the coupled system cannot be inverted.
    #[error("coefficient matrix is singular (determinant {determinant:e})")]
    SingularSystem { determinant: f64 },
    #[error("dynamics produced a non-finite acceleration")]
    NonFinite,
}
