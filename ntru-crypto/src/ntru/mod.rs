//! The NTRU public-key cryptosystem over the ring `Z[x]/(x^N - 1)`.
//!
//! ## Keys
//!
//! A key holder picks ternary polynomials `f` and `g`, inverts `f` modulo `x^N - 1` over the
//! rationals and reduces the inverse modulo `p` and `q` to obtain `f_p` and `f_q`. The public key
//! is `h = f_q * g mod (x^N - 1, q)`.
//!
//! ## Encryption and decryption
//!
//! A message `m` with coefficients in `[0, p)` is encrypted under a fresh small blinding
//! polynomial `r` as `e = p * r * h + m mod (x^N - 1, q)`.
//!
//! Decryption computes `a = f * e mod (x^N - 1, q)`, which equals `p * r * g + f * m` modulo `q`.
//! When every coefficient of `p * r * g + f * m` lies in `(-q/2, q/2]`, center-lifting `a`
//! recovers that polynomial exactly over the integers; reducing it modulo `p` removes the
//! `p * r * g` term and multiplying by `f_p` leaves `m`. The condition `q > (6d + 1)p` checked by
//! [`NtruParams::validate`] is what keeps the coefficients in range.
//!
//! Each [`Ntru`] instance owns its key material. Parties that only encrypt hold an instance with
//! just a [`PublicKey`] set through [`Ntru::set_public_key`].

use num::BigInt;
use rand::Rng;

use crate::math::{
    IntPolynomial, RationalPolynomial, center_lift, extended_euclid, mod_polynomial,
    reduce_modulo,
};

mod config;
pub use config::{Config, ValidationPolicy};

mod error;
pub use error::{NtruError, ParameterError};

mod keys;
pub use keys::{PrivateKey, PublicKey, sample_ternary};

mod params;
pub use params::NtruParams;


// NTRU
// ================================================================================================

/// An NTRU instance for a fixed parameter set `(N, p, q)`.
///
/// The ring modulus `x^N - 1` is derived once at construction. Key material is set either by
/// [`Ntru::generate_public_key`] (key holder) or [`Ntru::set_public_key`] (encryption only).
#[derive(Debug, Clone)]
pub struct Ntru {
    params: NtruParams,
    config: Config,
    ring_modulus: IntPolynomial,
    p: BigInt,
    q: BigInt,
    private_key: Option<PrivateKey>,
    public_key: Option<PublicKey>,
}

impl Ntru {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Creates an instance with no key material and the default [`Config`].
    pub fn new(params: NtruParams) -> Self {
        Self::with_config(params, Config::default())
    }

    /// Creates an instance with no key material and the given configuration.
    pub fn with_config(params: NtruParams, config: Config) -> Self {
        Self {
            params,
            config,
            ring_modulus: params.ring_modulus(),
            p: BigInt::from(params.p()),
            q: BigInt::from(params.q()),
            private_key: None,
            public_key: None,
        }
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the parameter set of this instance.
    pub fn params(&self) -> &NtruParams {
        &self.params
    }

    /// Returns the configuration of this instance.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the ring modulus `x^N - 1`.
    pub fn ring_modulus(&self) -> &IntPolynomial {
        &self.ring_modulus
    }

    /// Returns the public key, if one has been generated or set.
    pub fn public_key(&self) -> Option<&PublicKey> {
        self.public_key.as_ref()
    }

    /// Returns the private key, if this instance generated one.
    pub fn private_key(&self) -> Option<&PrivateKey> {
        self.private_key.as_ref()
    }

    /// Sets the public key used by [`Ntru::encrypt`].
    ///
    /// This is how an encrypting party obtains the key holder's `h`. Setting a public key on an
    /// instance that holds a private key replaces `h` without touching the private key.
    pub fn set_public_key(&mut self, public_key: PublicKey) {
        self.public_key = Some(public_key);
    }

    // KEY GENERATION
    // --------------------------------------------------------------------------------------------

    /// Derives the key pair from the private polynomials `f` and `g` with weight parameter `d`.
    ///
    /// On success the instance holds `f`, `g`, `f_p`, `f_q` and `h`. On failure the instance is
    /// left exactly as it was.
    ///
    /// Under [`ValidationPolicy::Advisory`] (the default) `d` is not inspected here, and parameters
    /// violating `q > (6d + 1)p` or mis-shaped `f`, `g` are accepted without error; they surface
    /// later as incorrect decryptions. Callers must invoke [`Ntru::validate_parameters`] (or
    /// [`NtruParams::validate`] beforehand) to rule that out.
    ///
    /// # Errors
    /// - [`NtruError::InvalidParameters`] under [`ValidationPolicy::Mandatory`] if validation fails.
    /// - [`NtruError::NonInvertibleElement`] if `f` shares a factor with `x^N - 1`.
    /// - [`NtruError::Math`] if the rational inverse of `f` cannot be reduced modulo `p` or `q`,
    ///   i.e. `f` is invertible over the rationals but not modulo one of the moduli.
    pub fn generate_public_key(
        &mut self,
        f: &IntPolynomial,
        g: &IntPolynomial,
        d: usize,
    ) -> Result<(), NtruError> {
        match self.config.validation() {
            ValidationPolicy::Mandatory => self.params.validate(d, f, g)?,
            ValidationPolicy::Advisory => {
                log::debug!("skipping parameter validation for d = {d} (advisory policy)")
            },
        }

        let bezout = extended_euclid(
            &RationalPolynomial::from(f),
            &RationalPolynomial::from(&self.ring_modulus),
        )?;
        let Some(inverse) = bezout.inverse() else {
            let gcd_degree = bezout.gcd.degree();
            log::debug!(
                "f is not invertible: gcd with x^{} - 1 has degree {gcd_degree}",
                self.params.n()
            );
            return Err(NtruError::NonInvertibleElement { gcd_degree });
        };

        let f_p = mod_polynomial(inverse, &self.p)?;
        let f_q = mod_polynomial(inverse, &self.q)?;
        let h = reduce_modulo(&(&f_q * g), &self.ring_modulus, &self.q)?;

        self.private_key = Some(PrivateKey::new(f.clone(), g.clone(), f_p, f_q));
        self.public_key = Some(PublicKey::new(h));
        log::debug!("generated ntru key pair for N = {}", self.params.n());

        Ok(())
    }

    /// Samples `f` with `d + 1` ones and `d` minus ones and `g` with `d` of each, then derives the
    /// key pair from them.
    ///
    /// This is a single attempt. If the sampled `f` turns out not to be invertible the error is
    /// returned as is, and the caller decides whether to try again.
    ///
    /// # Errors
    /// - [`NtruError::InvalidParameters`] if `2d + 1` exceeds `N`.
    /// - Any error of [`Ntru::generate_public_key`].
    pub fn generate_keys_with_rng<R: Rng + ?Sized>(
        &mut self,
        d: usize,
        rng: &mut R,
    ) -> Result<(), NtruError> {
        let n = self.params.n();
        let f_ones = d.checked_add(1).ok_or(ParameterError::WeightTooLarge {
            ones: usize::MAX,
            neg_ones: d,
            n,
        })?;
        let f = sample_ternary(n, f_ones, d, rng)?;
        let g = sample_ternary(n, d, d, rng)?;
        self.generate_public_key(&f, &g, d)
    }

    /// Same as [`Ntru::generate_keys_with_rng`], using OS-provided randomness.
    #[cfg(feature = "std")]
    pub fn generate_keys(&mut self, d: usize) -> Result<(), NtruError> {
        let mut rng = rand::rng();
        self.generate_keys_with_rng(d, &mut rng)
    }

    // VALIDATION
    // --------------------------------------------------------------------------------------------

    /// Checks the parameter set and the stored private polynomials against weight parameter `d`.
    ///
    /// See [`NtruParams::validate`] for the list of conditions.
    ///
    /// # Errors
    /// - [`NtruError::PrivateKeyNotSet`] if no key pair has been generated.
    /// - [`NtruError::InvalidParameters`] if any condition is violated.
    pub fn validate_parameters(&self, d: usize) -> Result<(), NtruError> {
        let key = self.private_key.as_ref().ok_or(NtruError::PrivateKeyNotSet)?;
        self.params.validate(d, key.f(), key.g())?;
        Ok(())
    }

    // ENCRYPTION
    // --------------------------------------------------------------------------------------------

    /// Encrypts `message` with the blinding polynomial `r`.
    ///
    /// `message` should have coefficients in `[0, p)` and `r` should be a small ternary polynomial
    /// drawn fresh for every call (see [`sample_ternary`]). The computation is deterministic in
    /// its inputs.
    ///
    /// # Errors
    /// Returns [`NtruError::PublicKeyNotSet`] if no public key is available.
    pub fn encrypt(
        &self,
        message: &IntPolynomial,
        r: &IntPolynomial,
    ) -> Result<IntPolynomial, NtruError> {
        let h = self.public_key.as_ref().ok_or(NtruError::PublicKeyNotSet)?;
        let blinded = &(r * h.as_polynomial()) * self.p.clone();
        let ciphertext = reduce_modulo(&(&blinded + message), &self.ring_modulus, &self.q)?;
        Ok(ciphertext)
    }

    // DECRYPTION
    // --------------------------------------------------------------------------------------------

    /// Decrypts `ciphertext` with the private key, returning the message with coefficients in
    /// `[0, p)`.
    ///
    /// # Errors
    /// Returns [`NtruError::PrivateKeyNotSet`] on an instance without a private key.
    pub fn decrypt(&self, ciphertext: &IntPolynomial) -> Result<IntPolynomial, NtruError> {
        let key = self.private_key.as_ref().ok_or(NtruError::PrivateKeyNotSet)?;

        let a = reduce_modulo(&(key.f() * ciphertext), &self.ring_modulus, &self.q)?;
        // the lift must happen before reducing mod p, otherwise q-aliases of negative
        // coefficients leak into the result
        let a = center_lift(&a, &self.q)?;
        let message = reduce_modulo(&(key.f_p() * &a), &self.ring_modulus, &self.p)?;

        Ok(message)
    }
}
