//! Double-double expansions of the usual mathematical constants, named
//! after their `std::f64::consts` counterparts. The upper component is
//! the nearest native float and the lower component carries the next
//! 53 bits.

use crate::double_double::DoubleDouble;

/// √2
pub const SQRT_2: DoubleDouble =
    DoubleDouble::from_parts(1.4142135623730951, -9.667293313452913e-17);

/// 1/√2
pub const FRAC_1_SQRT_2: DoubleDouble =
    DoubleDouble::from_parts(0.7071067811865476, -4.833646656726457e-17);

/// Euler's number e
pub const E: DoubleDouble =
    DoubleDouble::from_parts(2.7182818284590452, 1.44564689172925013472e-16);

/// ln 2
pub const LN_2: DoubleDouble =
    DoubleDouble::from_parts(0.6931471805599453, 2.3190468138462996e-17);

/// π
pub const PI: DoubleDouble =
    DoubleDouble::from_parts(3.1415926535897932, 1.22464679914735317636e-16);

/// π/2
pub const FRAC_PI_2: DoubleDouble =
    DoubleDouble::from_parts(1.5707963267948966, 6.123233995736766e-17);

/// 1/π
pub const FRAC_1_PI: DoubleDouble =
    DoubleDouble::from_parts(0.3183098861837907, -1.9678676675182486e-17);

/// 1/√π
pub const FRAC_1_SQRT_PI: DoubleDouble =
    DoubleDouble::from_parts(0.5641895835477563, 7.66772980658294e-18);

/// 2/√π
pub const FRAC_2_SQRT_PI: DoubleDouble =
    DoubleDouble::from_parts(1.1283791670955126, 1.533545961316588e-17);

/// √(π/2)
pub const SQRT_FRAC_PI_2: DoubleDouble =
    DoubleDouble::from_parts(1.2533141373155003, -9.164289990229583e-17);

/// √(2/π)
pub const SQRT_FRAC_2_PI: DoubleDouble =
    DoubleDouble::from_parts(0.7978845608028654, -4.98465440455546e-17);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float::Float;
    use crate::math::Sqrt;

    fn rel_err(a: DoubleDouble, b: DoubleDouble) -> Float {
        Float::from((a - b) / b).abs()
    }

    #[test]
    fn constants_are_consistent() {
        let one = DoubleDouble::from_val(1.0);
        assert!(rel_err(SQRT_2 * SQRT_2, DoubleDouble::from_val(2.0)) < 1e-31);
        assert!(rel_err(SQRT_2 * FRAC_1_SQRT_2, one) < 1e-31);
        assert!(rel_err(PI * FRAC_1_PI, one) < 1e-31);
        assert!(rel_err(FRAC_PI_2 * DoubleDouble::from_val(2.0), PI) < 1e-31);
        assert!(rel_err(FRAC_2_SQRT_PI, FRAC_1_SQRT_PI * DoubleDouble::from_val(2.0)) < 1e-31);
        assert!(rel_err(SQRT_FRAC_PI_2 * SQRT_FRAC_2_PI, one) < 1e-31);
        assert!(rel_err(SQRT_FRAC_PI_2, FRAC_PI_2.sqrt()) < 1e-31);
    }

    #[test]
    fn upper_components_match_native_constants() {
        assert_eq!(SQRT_2.upper(), std::f64::consts::SQRT_2);
        assert_eq!(E.upper(), std::f64::consts::E);
        assert_eq!(PI.upper(), std::f64::consts::PI);
        assert_eq!(LN_2.upper(), std::f64::consts::LN_2);
        assert_eq!(FRAC_PI_2.upper(), std::f64::consts::FRAC_PI_2);
    }
}
