use num_complex::Complex64;
use num_traits::{AsPrimitive, Zero};
use std::fmt;

use crate::complex::Complex;
use crate::error::DomainError;
use crate::traits::Scalar;

/// A complex number whose real or imaginary part is nonzero.
///
/// The invariant is established once, at construction, and cannot be
/// broken afterwards: the inner value is private and immutable. Base-type
/// operations apply through [`NonZeroComplex::get`] or the `From`
/// conversion into [`Complex`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonZeroComplex<T: Scalar>(Complex<T>);

impl<T: Scalar> NonZeroComplex<T> {
    /// Builds a nonzero complex number from its components.
    ///
    /// Fails with [`DomainError::ZeroValue`] when both parts are zero.
    pub fn new(real: T, imaginary: T) -> Result<Self, DomainError> {
        Self::try_from(Complex::new(real, imaginary))
    }

    /// Returns the inner general complex value.
    pub fn get(&self) -> Complex<T> {
        self.0
    }

    pub fn modulus(&self) -> f64 {
        self.0.modulus()
    }

    /// Conjugation negates the imaginary part only, so the nonzero
    /// invariant survives it.
    pub fn conjugate(&self) -> Self {
        Self(self.0.conjugate())
    }

    /// Returns the multiplicative inverse `z̄ / |z|²`.
    ///
    /// The components are floating-point quotients even for integer input.
    pub fn inverse(&self) -> NonZeroComplex<f64> {
        let den = self.0.norm_sqr();
        let re: f64 = self.0.real.as_();
        let im: f64 = self.0.imaginary.as_();
        NonZeroComplex(Complex::new(re / den, -im / den))
    }

    /// Decomposes the value into polar form `(r, theta)`, with
    /// `r = modulus()` and `theta = atan2(im, re)` in `(-π, π]`.
    pub fn to_polar(&self) -> (f64, f64) {
        let r = self.modulus();
        let theta = self.0.imaginary.as_().atan2(self.0.real.as_());
        log::trace!("polar: r={}, theta={}", r, theta);
        (r, theta)
    }

    /// Returns the principal logarithm `ln r + theta i`, with the angle
    /// restricted to `(-π, π]`.
    ///
    /// The result is a general complex value: a unit-modulus input has
    /// `ln r == 0`. Fails with [`DomainError::ZeroModulus`] if `r` is zero,
    /// which no value built through the public constructors can reach.
    pub fn ln(&self) -> Result<Complex<f64>, DomainError> {
        let (r, theta) = self.to_polar();
        if r == 0.0 {
            return Err(DomainError::ZeroModulus);
        }
        Ok(Complex::new(r.ln(), theta))
    }
}

impl<T: Scalar> TryFrom<Complex<T>> for NonZeroComplex<T> {
    type Error = DomainError;

    fn try_from(z: Complex<T>) -> Result<Self, Self::Error> {
        if z.real.is_zero() && z.imaginary.is_zero() {
            Err(DomainError::ZeroValue)
        } else {
            Ok(Self(z))
        }
    }
}

impl<T: Scalar> From<NonZeroComplex<T>> for Complex<T> {
    fn from(z: NonZeroComplex<T>) -> Self {
        z.0
    }
}

impl<T: Scalar> From<NonZeroComplex<T>> for Complex64 {
    fn from(z: NonZeroComplex<T>) -> Self {
        z.0.into()
    }
}

impl<T: Scalar> fmt::Display for NonZeroComplex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
