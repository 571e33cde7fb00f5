//! Exact polynomial arithmetic over arbitrary-precision coefficients.
//!
//! Polynomials over the rationals are used while inverting a polynomial modulo the ring modulus
//! `x^N - 1`, and polynomials over the integers are used everywhere else. Reduction into `Z_m`
//! happens only at the boundary between the two, see [`mod_polynomial`] and [`reduce_modulo`].
use core::ops::{Add, Div, Mul, Neg, Sub};

use num::{BigInt, BigRational, One, Zero};

mod error;
pub use error::MathError;

mod modular;
pub use modular::{center_lift, mod_inverse, mod_polynomial, rational_mod, reduce_modulo};

mod polynomial;
pub use polynomial::Polynomial;

mod xgcd;
pub use xgcd::{BezoutIdentity, extended_euclid};


// TYPE ALIASES
// ================================================================================================

/// A polynomial with arbitrary-precision integer coefficients.
pub type IntPolynomial = Polynomial<BigInt>;

/// A polynomial with exact rational coefficients.
pub type RationalPolynomial = Polynomial<BigRational>;

// COEFFICIENT TRAITS
// ================================================================================================

/// Coefficients of a commutative ring: everything polynomial addition and convolution need.
pub trait RingElement:
    Clone + PartialEq + Zero + One + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
    + Neg<Output = Self>
{
}

impl<T> RingElement for T where
    T: Clone
        + PartialEq
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Neg<Output = T>
{
}

/// Coefficients of a field, required for long division and the extended Euclidean algorithm.
///
/// Division by a non-zero element must be exact. [`BigRational`] is the intended
/// implementation; floating-point types satisfy the bound but silently corrupt inverses.
pub trait FieldElement: RingElement + Div<Output = Self> {}

impl<T> FieldElement for T where T: RingElement + Div<Output = T> {}
