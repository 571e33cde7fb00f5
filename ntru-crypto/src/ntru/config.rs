//! Configuration of an NTRU instance.

// VALIDATION POLICY
// ================================================================================================

/// Whether key generation checks the NTRU parameter preconditions itself.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ValidationPolicy {
    /// Key generation does not validate anything; callers are expected to invoke
    /// [`Ntru::validate_parameters`](super::Ntru::validate_parameters) themselves.
    ///
    /// Skipping that call is the caller's responsibility: a parameter set with
    /// `q <= (6d + 1)p` or mis-shaped keys is accepted silently and only shows up as wrong
    /// decryption output.
    #[default]
    Advisory,
    /// Key generation validates the parameters and key shapes first and fails with
    /// [`NtruError::InvalidParameters`](super::NtruError::InvalidParameters) before computing
    /// anything.
    Mandatory,
}

// CONFIG
// ================================================================================================

/// The configuration for an NTRU instance's behavior.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    validation: ValidationPolicy,
}

/// This block contains the accessors for the configuration options.
impl Config {
    /// The validation policy applied by key generation.
    ///
    /// Defaults to [`ValidationPolicy::Advisory`].
    pub fn validation(&self) -> ValidationPolicy {
        self.validation
    }
}

// BUILDERS
// ================================================================================================

/// This impl block contains the builder functions for the configuration options.
impl Config {
    /// Sets the validation policy applied by key generation.
    pub fn with_validation(mut self, validation: ValidationPolicy) -> Self {
        self.validation = validation;
        self
    }
}
