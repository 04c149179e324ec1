use nalgebra::Complex;

/// Renders `z` as a plain real literal when its imaginary part is exactly
/// zero, and as a parenthesised complex literal otherwise.
///
/// NaN and infinities are not intercepted: they go through the default
/// `f64` formatting like any other value.
pub fn representative(z: Complex<f64>) -> String {
    if z.im == 0.0 {
        format!("{}", z.re)
    } else {
        format!("({})", z)
    }
}

pub fn real(x: f64) -> Complex<f64> {
    Complex::new(x, 0.0)
}

pub fn neg_infinity() -> Complex<f64> {
    real(f64::NEG_INFINITY)
}

pub fn infinity() -> Complex<f64> {
    real(f64::INFINITY)
}

pub fn nan() -> Complex<f64> {
    real(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_values_drop_the_imaginary_part() {
        assert_eq!(representative(real(-1.5)), "-1.5");
        assert_eq!(representative(real(4.0)), "4");
        assert_eq!(representative(real(-0.8)), "-0.8");
    }

    #[test]
    fn non_finite_values_render_as_plain_reals() {
        assert_eq!(representative(nan()), "NaN");
        assert_eq!(representative(infinity()), "inf");
        assert_eq!(representative(neg_infinity()), "-inf");
    }

    #[test]
    fn complex_values_keep_both_parts() {
        assert_eq!(representative(Complex::new(1.0, 2.0)), "(1+2i)");
        assert_eq!(representative(Complex::new(-0.5, -0.25)), "(-0.5-0.25i)");
    }
}
