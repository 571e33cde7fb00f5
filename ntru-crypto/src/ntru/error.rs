use num::BigInt;
use thiserror::Error;

use crate::math::MathError;

// NTRU ERROR
// ================================================================================================

/// Errors that can occur during NTRU key generation, encryption and decryption.
///
/// None of these are transient: retrying with the same inputs fails the same way. Recovering from
/// [`NtruError::NonInvertibleElement`] means sampling a fresh `f`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NtruError {
    /// The private polynomial `f` shares a non-trivial factor with `x^N - 1`.
    #[error(
        "f has no inverse in Z[x]/(x^N - 1): its gcd with the ring modulus has degree {gcd_degree}"
    )]
    NonInvertibleElement { gcd_degree: usize },
    /// A parameter or key polynomial violates the NTRU preconditions.
    #[error("invalid ntru parameters: {0}")]
    InvalidParameters(#[from] ParameterError),
    /// Encryption was attempted without a public key.
    #[error("public key is not set")]
    PublicKeyNotSet,
    /// An operation requiring the private key was attempted on an encryption-only instance.
    #[error("private key is not set")]
    PrivateKeyNotSet,
    /// Polynomial arithmetic failed, e.g. the inverse of `f` has a denominator sharing a factor
    /// with `p` or `q`.
    #[error(transparent)]
    Math(#[from] MathError),
}

// PARAMETER ERROR
// ================================================================================================

/// Violations of the NTRU parameter and key-shape preconditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    /// The ring degree is not prime.
    #[error("ring degree N = {0} is not prime")]
    NotPrime(usize),
    /// The named pair of parameters shares a factor.
    #[error("gcd({0}) must be 1")]
    NotCoprime(&'static str),
    /// `q` does not exceed `(6d + 1)p`. A bound too large to represent is reported as `u128::MAX`.
    #[error("q = {q} must be greater than (6d + 1)p = {bound}")]
    ModulusTooSmall { q: u64, bound: u128 },
    /// A key polynomial has a coefficient outside `{-1, 0, 1}`.
    #[error("{name} has coefficient {coefficient}, expected one of -1, 0, 1")]
    NotTernary { name: &'static str, coefficient: BigInt },
    /// A key polynomial has the wrong number of ones or minus ones.
    #[error(
        "{name} must have {expected_ones} ones and {expected_neg_ones} minus ones, found {ones} and {neg_ones}"
    )]
    WrongWeight {
        name: &'static str,
        expected_ones: usize,
        expected_neg_ones: usize,
        ones: usize,
        neg_ones: usize,
    },
    /// A key polynomial does not fit in `N` coefficients.
    #[error("{name} has degree {degree} but must be below N = {n}")]
    DegreeTooLarge { name: &'static str, degree: usize, n: usize },
    /// More non-zero coefficients were requested than `N` allows. A count that overflows `usize`
    /// is reported as `usize::MAX`.
    #[error("cannot place {ones} ones and {neg_ones} minus ones in {n} coefficients")]
    WeightTooLarge { ones: usize, neg_ones: usize, n: usize },
}

// TESTS
// ================================================================================================
