//! NTRU parameter sets and the checks that make decryption correct.

use num::{BigInt, Integer, One, Zero};

use super::ParameterError;
use crate::math::IntPolynomial;

// PARAMETERS
// ================================================================================================

/// The public parameters `(N, p, q)` of an NTRU instance.
///
/// `N` is the ring degree (the ring is `Z[x]/(x^N - 1)`), `p` the small modulus and `q` the large
/// modulus. Construction performs no checks; see [`NtruParams::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NtruParams {
    n: usize,
    p: u64,
    q: u64,
}

impl NtruParams {
    /// Creates a new parameter set.
    pub const fn new(n: usize, p: u64, q: u64) -> Self {
        Self { n, p, q }
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the ring degree `N`.
    pub const fn n(&self) -> usize {
        self.n
    }

    /// Returns the small modulus `p`.
    pub const fn p(&self) -> u64 {
        self.p
    }

    /// Returns the large modulus `q`.
    pub const fn q(&self) -> u64 {
        self.q
    }

    /// Returns the ring modulus `x^N - 1`.
    pub fn ring_modulus(&self) -> IntPolynomial {
        let mut coefficients = vec![BigInt::zero(); self.n + 1];
        coefficients[0] = -BigInt::one();
        coefficients[self.n] += BigInt::one();
        IntPolynomial::new(coefficients)
    }

    // VALIDATION
    // --------------------------------------------------------------------------------------------

    /// Checks the scalar preconditions: `N` prime, `gcd(N, p) = gcd(N, q) = gcd(p, q) = 1` and
    /// `q > (6d + 1)p`.
    pub fn validate_moduli(&self, d: usize) -> Result<(), ParameterError> {
        if !is_prime(self.n as u64) {
            return Err(ParameterError::NotPrime(self.n));
        }
        let n = self.n as u64;
        if n.gcd(&self.p) != 1 {
            return Err(ParameterError::NotCoprime("N, p"));
        }
        if n.gcd(&self.q) != 1 {
            return Err(ParameterError::NotCoprime("N, q"));
        }
        if self.p.gcd(&self.q) != 1 {
            return Err(ParameterError::NotCoprime("p, q"));
        }

        // a bound past u128::MAX is out of reach for any u64 modulus
        let bound = (d as u128)
            .checked_mul(6)
            .and_then(|b| b.checked_add(1))
            .and_then(|b| b.checked_mul(self.p as u128))
            .unwrap_or(u128::MAX);
        if self.q as u128 <= bound {
            return Err(ParameterError::ModulusTooSmall { q: self.q, bound });
        }
        Ok(())
    }

    /// Checks the scalar preconditions together with the shape of the private polynomials: `f`
    /// must be ternary with `d + 1` ones and `d` minus ones, `g` ternary with `d` of each, and
    /// both of degree below `N`.
    pub fn validate(
        &self,
        d: usize,
        f: &IntPolynomial,
        g: &IntPolynomial,
    ) -> Result<(), ParameterError> {
        self.validate_moduli(d)?;
        let f_ones = d.checked_add(1).ok_or(ParameterError::WeightTooLarge {
            ones: usize::MAX,
            neg_ones: d,
            n: self.n,
        })?;
        check_ternary("f", f, self.n, f_ones, d)?;
        check_ternary("g", g, self.n, d, d)
    }
}

// HELPERS
// ================================================================================================

fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut divisor = 3;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

fn check_ternary(
    name: &'static str,
    poly: &IntPolynomial,
    n: usize,
    expected_ones: usize,
    expected_neg_ones: usize,
) -> Result<(), ParameterError> {
    if !poly.is_zero() && poly.degree() >= n {
        return Err(ParameterError::DegreeTooLarge { name, degree: poly.degree(), n });
    }

    let (mut ones, mut neg_ones) = (0, 0);
    for c in poly.coefficients() {
        if c.is_one() {
            ones += 1;
        } else if (-c).is_one() {
            neg_ones += 1;
        } else if !c.is_zero() {
            return Err(ParameterError::NotTernary { name, coefficient: c.clone() });
        }
    }

    if ones != expected_ones || neg_ones != expected_neg_ones {
        return Err(ParameterError::WrongWeight {
            name,
            expected_ones,
            expected_neg_ones,
            ones,
            neg_ones,
        });
    }
    Ok(())
}

// TESTS
// ================================================================================================
