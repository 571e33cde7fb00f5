use ntru_crypto_derive::{SilentDebug, SilentDisplay};
use rand::{Rng, seq::SliceRandom};

use super::ParameterError;
use crate::math::IntPolynomial;

// PRIVATE KEY
// ================================================================================================

/// The private key material of an NTRU key holder.
///
/// Consists of the ternary polynomials `f` and `g` and the inverses `f_p`, `f_q` of `f` in
/// `Z_p[x]/(x^N - 1)` and `Z_q[x]/(x^N - 1)`. The inverses are derived from `f` at key generation
/// time and are only meaningful together with it, so the four are created and replaced as a unit.
#[derive(Clone, PartialEq, Eq, SilentDebug, SilentDisplay)]
pub struct PrivateKey {
    f: IntPolynomial,
    g: IntPolynomial,
    f_p: IntPolynomial,
    f_q: IntPolynomial,
}

impl PrivateKey {
    pub(super) fn new(
        f: IntPolynomial,
        g: IntPolynomial,
        f_p: IntPolynomial,
        f_q: IntPolynomial,
    ) -> Self {
        Self { f, g, f_p, f_q }
    }

    /// Returns the private polynomial `f`.
    pub fn f(&self) -> &IntPolynomial {
        &self.f
    }

    /// Returns the private polynomial `g`.
    pub fn g(&self) -> &IntPolynomial {
        &self.g
    }

    /// Returns the inverse of `f` modulo `(x^N - 1, p)`.
    pub fn f_p(&self) -> &IntPolynomial {
        &self.f_p
    }

    /// Returns the inverse of `f` modulo `(x^N - 1, q)`.
    pub fn f_q(&self) -> &IntPolynomial {
        &self.f_q
    }
}

// PUBLIC KEY
// ================================================================================================

/// The NTRU public key `h = f_q * g mod (x^N - 1, q)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PublicKey(IntPolynomial);

impl PublicKey {
    /// Wraps a polynomial received from a key holder.
    pub fn new(h: IntPolynomial) -> Self {
        Self(h)
    }

    /// Returns the polynomial `h`.
    pub fn as_polynomial(&self) -> &IntPolynomial {
        &self.0
    }

    /// Consumes the key and returns the polynomial `h`.
    pub fn into_polynomial(self) -> IntPolynomial {
        self.0
    }
}

impl From<IntPolynomial> for PublicKey {
    fn from(h: IntPolynomial) -> Self {
        Self(h)
    }
}

// SAMPLING
// ================================================================================================

/// Samples a ternary polynomial with `n` coefficients of which exactly `ones` are `1` and
/// `neg_ones` are `-1`, uniformly over all such arrangements.
///
/// This is how fresh `f`, `g` and blinding polynomials `r` are drawn. The RNG must be
/// cryptographically secure for the resulting keys to be of any use.
///
/// # Errors
/// Returns [`ParameterError::WeightTooLarge`] if `ones + neg_ones > n`.
pub fn sample_ternary<R: Rng + ?Sized>(
    n: usize,
    ones: usize,
    neg_ones: usize,
    rng: &mut R,
) -> Result<IntPolynomial, ParameterError> {
    if ones.checked_add(neg_ones).is_none_or(|weight| weight > n) {
        return Err(ParameterError::WeightTooLarge { ones, neg_ones, n });
    }

    let mut coefficients = vec![0i64; n];
    coefficients[..ones].fill(1);
    coefficients[ones..ones + neg_ones].fill(-1);
    coefficients.shuffle(rng);

    Ok(IntPolynomial::from(coefficients))
}

// TESTS
// ================================================================================================
