use crate::complex::Complex;

pub const J: Complex<f64> = Complex {
    real: 0.0,
    imaginary: 1.0,
};

#[macro_export]
macro_rules! cmplx {
    () => {
        $crate::Complex::new(0.0, 0.0)
    };
    ($arg1:expr) => {
        $crate::Complex::new($arg1, 0.0)
    };
    ($arg1:expr, $arg2:expr) => {
        $crate::Complex::new($arg1, $arg2)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_j_squares_to_minus_one() {
        assert_eq!(J * J, crate::cmplx!(-1.0));
    }

    #[test]
    fn test_cmplx() {
        assert_eq!(crate::cmplx!(), Complex::new(0.0, 0.0));
        assert_eq!(crate::cmplx!(2.5), Complex::new(2.5, 0.0));
        assert_eq!(crate::cmplx!(2.5, -1.5), Complex::new(2.5, -1.5));
    }
}
