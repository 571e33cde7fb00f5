//! Extended Euclidean algorithm for polynomials with field coefficients.

use core::mem;

use num::{One, Zero};

use super::{FieldElement, MathError, Polynomial};

// BEZOUT IDENTITY
// ================================================================================================

/// Output of [`extended_euclid`]: polynomials such that `s * a + t * b = gcd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BezoutIdentity<F> {
    /// Monic greatest common divisor of the inputs.
    pub gcd: Polynomial<F>,
    /// Coefficient of the first input.
    pub s: Polynomial<F>,
    /// Coefficient of the second input.
    pub t: Polynomial<F>,
}

impl<F: FieldElement> BezoutIdentity<F> {
    /// Returns the inverse of the first input modulo the second one, which exists exactly when
    /// the gcd is a constant.
    pub fn inverse(&self) -> Option<&Polynomial<F>> {
        (self.gcd.degree() == 0).then_some(&self.s)
    }

    fn swapped(self) -> Self {
        Self { gcd: self.gcd, s: self.t, t: self.s }
    }
}

// EXTENDED EUCLID
// ================================================================================================

/// Computes the monic gcd of `a` and `b` together with Bezout coefficients `s`, `t` satisfying
/// `s * a + t * b = gcd`.
///
/// The remainder sequence always starts from the operand of larger degree; the coefficients are
/// returned in the caller's order regardless.
///
/// # Errors
/// Returns [`MathError::DivisionByZeroPolynomial`] if both inputs are zero, in which case the gcd
/// has no leading coefficient to normalize by.
pub fn extended_euclid<F: FieldElement>(
    a: &Polynomial<F>,
    b: &Polynomial<F>,
) -> Result<BezoutIdentity<F>, MathError> {
    if a.is_zero() && b.is_zero() {
        return Err(MathError::DivisionByZeroPolynomial);
    }

    if b.degree() > a.degree() {
        descending_euclid(b, a).map(BezoutIdentity::swapped)
    } else {
        descending_euclid(a, b)
    }
}

/// Runs the remainder sequence for `degree(a) >= degree(b)`.
///
/// Bezout coefficients follow `S_i = S_{i-2} - q_{i-2} * S_{i-1}` seeded with `S = ([1], [0])`
/// and `T = ([0], [1])`, updated alongside each division.
fn descending_euclid<F: FieldElement>(
    a: &Polynomial<F>,
    b: &Polynomial<F>,
) -> Result<BezoutIdentity<F>, MathError> {
    let (mut r_prev, mut r) = (a.clone(), b.clone());
    let (mut s_prev, mut s) = (Polynomial::one(), Polynomial::zero());
    let (mut t_prev, mut t) = (Polynomial::zero(), Polynomial::one());

    let mut steps = 0usize;
    while !r.is_zero() {
        let (quotient, remainder) = r_prev.div_rem(&r)?;
        let s_next = &s_prev - &(&quotient * &s);
        let t_next = &t_prev - &(&quotient * &t);

        r_prev = mem::replace(&mut r, remainder);
        s_prev = mem::replace(&mut s, s_next);
        t_prev = mem::replace(&mut t, t_next);
        steps += 1;
    }

    // r_prev is the last non-zero remainder; scale everything so that it becomes monic
    let scale = r_prev.leading_coefficient().clone();
    let identity = BezoutIdentity {
        gcd: &r_prev / scale.clone(),
        s: &s_prev / scale.clone(),
        t: &t_prev / scale,
    };

    log::trace!("extended euclid: {steps} division steps, gcd of degree {}", identity.gcd.degree());

    Ok(identity)
}

// TESTS
// ================================================================================================
