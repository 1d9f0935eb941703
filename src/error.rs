use thiserror::Error;

/// Failure of an operation whose arguments fall outside its valid domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Raised when constructing a nonzero complex number from a value
    /// whose real and imaginary parts are both zero.
    #[error("real or imaginary part must be nonzero")]
    ZeroValue,

    /// Raised when taking the logarithm of a value with zero modulus.
    #[error("logarithm is undefined for zero modulus")]
    ZeroModulus,
}
