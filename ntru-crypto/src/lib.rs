#![no_std]

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod math;
pub mod ntru;

// RE-EXPORTS
// ================================================================================================

pub use math::{IntPolynomial, MathError, Polynomial, RationalPolynomial};
pub use ntru::{
    Config, Ntru, NtruError, NtruParams, ParameterError, PrivateKey, PublicKey, ValidationPolicy,
};

// CONSTANTS
// ================================================================================================

/// The toy parameter set `(N, p, q) = (7, 29, 491531)` used throughout the documentation and
/// tests. It satisfies `q > (6d + 1)p` for every `d` that fits in `N = 7`.
pub const DEMO_PARAMS: NtruParams = NtruParams::new(7, 29, 491531);
