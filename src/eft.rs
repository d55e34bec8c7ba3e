//! Error-free transformations: each returns the rounded result of a
//! native operation together with its exact rounding error, so the pair
//! sums to the mathematical result.

use crate::double_double::DoubleDouble;
use crate::float::{fma, Float};

/// Fast two-sum. Exact only under the precondition |x| ≥ |y|; with the
/// ordering violated the error term may be inexact.
#[inline]
pub fn two_sum_quick(x: Float, y: Float) -> DoubleDouble {
    let r = x + y;
    let e = y - (r - x);
    DoubleDouble::new(r, e)
}

/// Knuth's branch-free two-sum, exact for any finite x, y.
#[inline]
pub fn two_sum(x: Float, y: Float) -> DoubleDouble {
    let r = x + y;
    let t = r - x;
    let e = (x - (r - t)) + (y - t);
    DoubleDouble::new(r, e)
}

/// Exact transform of x − y, the subtraction analogue of [`two_sum`].
#[inline]
pub fn two_difference(x: Float, y: Float) -> DoubleDouble {
    let r = x - y;
    let t = r - x;
    let e = (x - (r - t)) - (y + t);
    DoubleDouble::new(r, e)
}

/// Exact product; the error term relies on a correctly rounded fma.
#[inline]
pub fn two_product(x: Float, y: Float) -> DoubleDouble {
    let r = x * y;
    let e = fma(x, y, -r);
    DoubleDouble::new(r, e)
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::{two_difference, two_product, two_sum, two_sum_quick};
    use crate::float::Float;

    // Independent exact-product oracle: Veltkamp splitting plus Dekker's
    // product, which needs no fma.
    fn dekker_product(x: Float, y: Float) -> (Float, Float) {
        const SPLIT: Float = 134217729.0; // 2^27 + 1
        let cx = SPLIT * x;
        let hx = cx - (cx - x);
        let tx = x - hx;
        let cy = SPLIT * y;
        let hy = cy - (cy - y);
        let ty = y - hy;
        let r = x * y;
        let e = ((hx * hy - r) + hx * ty + tx * hy) + tx * ty;
        (r, e)
    }

    #[test]
    fn two_sum_known_decomposition() {
        // 2^-60 is far below the ulp of 1.0, so the rounded sum is 1.0
        // and the error term is the small addend, exactly.
        let tiny = (2.0 as Float).powi(-60);
        let s = two_sum(1.0, tiny);
        assert_eq!(s.upper(), 1.0);
        assert_eq!(s.lower(), tiny);
    }

    #[test]
    fn two_sum_matches_ordered_quick_sum() {
        // With the operands ordered by magnitude both algorithms are
        // exact, so they must agree bit for bit.
        let mut rng = rand::thread_rng();
        for _ in 0..10000 {
            let x: Float = rng.gen_range(-1e12..1e12);
            let y: Float = rng.gen_range(-1.0..1.0);
            let (big, small) = if x.abs() >= y.abs() { (x, y) } else { (y, x) };
            let a = two_sum(x, y);
            let b = two_sum_quick(big, small);
            assert_eq!(a.upper(), b.upper());
            assert_eq!(a.lower(), b.lower());
            assert_eq!(a.upper(), x + y);
        }
    }

    #[test]
    fn two_difference_matches_negated_sum() {
        let mut rng = rand::thread_rng();
        for _ in 0..10000 {
            let x: Float = rng.gen_range(-1e6..1e6);
            let y: Float = rng.gen_range(-1e6..1e6);
            let d = two_difference(x, y);
            let s = two_sum(x, -y);
            assert_eq!(d.upper(), s.upper());
            assert_eq!(d.lower(), s.lower());
        }
    }

    #[test]
    fn two_product_known_decomposition() {
        // (2^27 + 1)^2 rounds its trailing 1 away; the error term
        // recovers exactly that bit.
        let a: Float = 134217729.0;
        let p = two_product(a, a);
        assert_eq!(p.upper(), 18014398777917440.0);
        assert_eq!(p.lower(), 1.0);
    }

    #[test]
    fn two_product_matches_dekker_split() {
        let mut rng = rand::thread_rng();
        for _ in 0..10000 {
            let x: Float = rng.gen_range(-1e3..1e3);
            let y: Float = rng.gen_range(-1e3..1e3);
            let p = two_product(x, y);
            let (r, e) = dekker_product(x, y);
            assert_eq!(p.upper(), r);
            assert_eq!(p.lower(), e);
        }
    }
}
