use num::BigInt;
use thiserror::Error;

/// Errors raised by polynomial arithmetic and modular reduction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// The divisor of a polynomial division is the zero polynomial.
    #[error("attempted to divide by the zero polynomial")]
    DivisionByZeroPolynomial,
    /// A rational coefficient cannot be mapped into `Z_m` because its denominator shares a
    /// factor with `m`.
    #[error("coefficient denominator {denominator} is not invertible modulo {modulus}")]
    NonInvertibleCoefficient { denominator: BigInt, modulus: BigInt },
    /// A modulus that is zero or negative.
    #[error("modulus must be positive, found {0}")]
    InvalidModulus(BigInt),
}
