use pretty_dtoa::{dtoa, FmtFloatConfig};
use std::f64::consts::PI;

use crate::complex::Complex;
use crate::nonzero::NonZeroComplex;

const FLOAT_CONFIG: FmtFloatConfig = FmtFloatConfig::default()
    .add_point_zero(false)
    .max_significant_digits(9);

/// Formats a value in rectangular form: `3+j4`.
pub fn format_rect(z: &Complex<f64>) -> String {
    format!(
        "{}{}j{}",
        dtoa(z.real, FLOAT_CONFIG),
        if z.imaginary.signum() < 0.0 { "-" } else { "+" },
        dtoa(z.imaginary.abs(), FLOAT_CONFIG)
    )
}

pub fn format_rect_vec(v: &[Complex<f64>]) -> String {
    let a: Vec<String> = v.iter().map(|z| format_rect(z)).collect();
    format!("[{}]", a.join(", "))
}

/// Formats a value in polar form with the angle in degrees: `5∠53.1°`.
pub fn format_polar(z: &NonZeroComplex<f64>) -> String {
    let (r, theta) = z.to_polar();
    format!(
        "{}\u{2220}{}\u{00B0}",
        dtoa(r, FLOAT_CONFIG),
        dtoa(theta * 180.0 / PI, FLOAT_CONFIG)
    )
}

pub fn format_polar_vec(v: &[NonZeroComplex<f64>]) -> String {
    let a: Vec<String> = v.iter().map(|z| format_polar(z)).collect();
    format!("[{}]", a.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rect() {
        assert_eq!(format_rect(&Complex::new(3.0, -4.0)), "3-j4");
        assert_eq!(format_rect(&Complex::new(3.0, 4.0)), "3+j4");
        assert_eq!(
            format_rect_vec(&[Complex::new(1.0, 2.0), Complex::new(3.0, -4.0)]),
            "[1+j2, 3-j4]"
        );
    }

    #[test]
    fn test_format_polar() {
        let z = NonZeroComplex::new(2.0, 0.0).unwrap();
        assert_eq!(format_polar(&z), "2\u{2220}0\u{00B0}");
        assert_eq!(format_polar_vec(&[z]), "[2\u{2220}0\u{00B0}]");
    }
}
