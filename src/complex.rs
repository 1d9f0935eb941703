use num_complex::Complex64;
use num_traits::AsPrimitive;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::traits::Scalar;

/// A complex number with real and imaginary components of type `T`.
///
/// Plain `Copy` value type. Every operation returns a new value; equality
/// is componentwise with the exact semantics of `T` (no epsilon).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex<T: Scalar> {
    pub real: T,
    pub imaginary: T,
}

impl<T: Scalar> Complex<T> {
    pub const fn new(real: T, imaginary: T) -> Self {
        Self { real, imaginary }
    }

    /// Returns `re² + im²` without taking the square root.
    pub fn norm_sqr(&self) -> f64 {
        let re: f64 = self.real.as_();
        let im: f64 = self.imaginary.as_();
        re * re + im * im
    }

    /// Returns the modulus `sqrt(re² + im²)`.
    pub fn modulus(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Returns the complex conjugate `re - im i`.
    pub fn conjugate(&self) -> Self {
        Self::new(self.real, -self.imaginary)
    }
}

impl Complex<f64> {
    /// Builds the rectangular form of the value with modulus `r` and
    /// angle `theta` in radians.
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }
}

/// The display format is a compatibility contract: `3 + 2 i` for a
/// non-negative imaginary part, `3 -2 i` otherwise (the imaginary part
/// carries its own sign). Components render with their type's default
/// `Display`.
impl<T: Scalar> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imaginary >= T::zero() {
            write!(f, "{} + {} i", self.real, self.imaginary)
        } else {
            write!(f, "{} {} i", self.real, self.imaginary)
        }
    }
}

impl<T: Scalar> Add for Complex<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.real + rhs.real, self.imaginary + rhs.imaginary)
    }
}

impl<T: Scalar> Sub for Complex<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.real - rhs.real, self.imaginary - rhs.imaginary)
    }
}

impl<T: Scalar> Neg for Complex<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.real, -self.imaginary)
    }
}

impl<T: Scalar> Mul for Complex<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.real * rhs.real - self.imaginary * rhs.imaginary,
            self.real * rhs.imaginary + self.imaginary * rhs.real,
        )
    }
}

impl<T: Scalar> From<Complex<T>> for Complex64 {
    fn from(z: Complex<T>) -> Self {
        Complex64::new(z.real.as_(), z.imaginary.as_())
    }
}

impl From<Complex64> for Complex<f64> {
    fn from(z: Complex64) -> Self {
        Self::new(z.re, z.im)
    }
}
