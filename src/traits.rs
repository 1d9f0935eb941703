use num_traits::{AsPrimitive, Num};
use std::fmt::Display;
use std::ops::Neg;

/// Component type of a complex value.
///
/// Satisfied by `f64`, `f32` and the signed integer primitives.
/// `AsPrimitive<f64>` carries components into the floating-point domain
/// where the modulus, polar and logarithmic operations live.
pub trait Scalar:
    Num + Copy + PartialOrd + Neg<Output = Self> + Display + AsPrimitive<f64>
{
}

impl<T> Scalar for T where
    T: Num + Copy + PartialOrd + Neg<Output = T> + Display + AsPrimitive<f64>
{
}
