use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

use auto_ops::{impl_op_ex, impl_op_ex_commutative};
use log::trace;

use crate::eft::{two_difference, two_product, two_sum, two_sum_quick};
use crate::float::Float;
use crate::is_nan::IsNan;
use crate::math::{Abs, Sqrt};

const SQRT_MAX_ITERATIONS: usize = 30;
const SQRT_TOLERANCE: Float = 1e-16;

/// A number stored as the unevaluated sum `upper + lower` of two floats,
/// carrying roughly twice the precision of a single [`Float`]
/// (about 32 decimal digits).
///
/// Finite values are kept normalized: |lower| is at most half an ulp of
/// upper, re-established after every operation. Non-finite values take a
/// canonical form — a NaN in either component makes both components NaN,
/// and an infinite upper forces lower to zero. Combining opposite
/// infinities has no meaningful value and collapses to the NaN form.
///
/// Every operation is a pure function of its operands; the compound
/// assignment operators overwrite only their own receiver.
#[derive(Debug, Copy, Clone, Default)]
pub struct DoubleDouble {
    upper: Float,
    lower: Float,
}

impl DoubleDouble {
    pub const ZERO: DoubleDouble = DoubleDouble {
        upper: 0.0,
        lower: 0.0,
    };

    /// Builds a value from two floats, normalizing with an exact two-sum
    /// and collapsing non-finite inputs to their canonical forms.
    pub fn new(x: Float, y: Float) -> DoubleDouble {
        if x.is_nan() || y.is_nan() {
            return DoubleDouble {
                upper: Float::NAN,
                lower: Float::NAN,
            };
        }
        match (x.is_infinite(), y.is_infinite()) {
            (true, true) => {
                if x != y {
                    DoubleDouble {
                        upper: Float::NAN,
                        lower: Float::NAN,
                    }
                } else {
                    DoubleDouble { upper: x, lower: 0.0 }
                }
            }
            (true, false) => DoubleDouble { upper: x, lower: 0.0 },
            (false, true) => DoubleDouble { upper: y, lower: 0.0 },
            (false, false) => {
                // Knuth's two-sum, written out here rather than calling
                // the eft module, which routes its results back through
                // this constructor.
                let r = x + y;
                let t = r - x;
                let e = (x - (r - t)) + (y - t);
                DoubleDouble { upper: r, lower: e }
            }
        }
    }

    /// Widens a single float; the error component starts at zero.
    pub fn from_val(v: Float) -> DoubleDouble {
        let lower = if v.is_nan() { Float::NAN } else { 0.0 };
        DoubleDouble { upper: v, lower }
    }

    /// Raw constructor for precomputed constants. The caller supplies a
    /// pair that is already normalized.
    pub const fn from_parts(upper: Float, lower: Float) -> DoubleDouble {
        DoubleDouble { upper, lower }
    }

    pub fn upper(&self) -> Float {
        self.upper
    }

    pub fn lower(&self) -> Float {
        self.lower
    }

    /// Square root by bounded Newton-Raphson iteration over the residual
    /// x² − self, entirely in double-double arithmetic. Slower than the
    /// single-correction [`Sqrt::sqrt`] but independent of it, which
    /// makes the two usable as cross-checks.
    ///
    /// A negative value is a domain error and yields the canonical NaN
    /// pair. Hitting the iteration cap is not reported: the final
    /// iterate is returned as the best available approximation, with
    /// only a trace-level log line to tell the cases apart.
    pub fn sqrt_newton(&self) -> DoubleDouble {
        if self.upper == 0.0 && self.lower == 0.0 {
            return DoubleDouble::ZERO;
        }
        if self.upper < 0.0 {
            return DoubleDouble::new(Float::NAN, Float::NAN);
        }
        let mut x = if self.upper > 1.0 {
            DoubleDouble::from_val(self.upper / 2.0)
        } else if self.upper < 1.0 {
            DoubleDouble::from_val(self.upper * 2.0)
        } else {
            DoubleDouble::from_val(1.0)
        };
        for _ in 0..SQRT_MAX_ITERATIONS {
            let delta = (x * x - self) / (x * 2.0);
            x -= delta;
            let delta = delta.abs();
            if delta.upper < SQRT_TOLERANCE && delta.lower.abs() < SQRT_TOLERANCE {
                return x;
            }
        }
        trace!(
            "newton square root of {} stopped at the iteration cap",
            self.upper
        );
        x
    }
}

impl Sqrt for DoubleDouble {
    /// Square root from the native estimate plus one exact residual
    /// correction. The estimate is already within an ulp, so a single
    /// pass recovers full double-double precision. A negative value
    /// inherits the NaN of the native square root.
    fn sqrt(self) -> DoubleDouble {
        if self.upper == 0.0 && self.lower == 0.0 {
            return DoubleDouble::ZERO;
        }
        let r = Float::sqrt(self.upper);
        let sf = two_product(r, r);
        let e = (self.upper - sf.upper - sf.lower + self.lower) * 0.5 / r;
        two_sum_quick(r, e)
    }
}

impl Abs for DoubleDouble {
    fn abs(self) -> DoubleDouble {
        // For a normalized pair the sign lives in the upper component.
        if self.upper < 0.0 {
            -self
        } else {
            self
        }
    }
}

impl IsNan for DoubleDouble {
    fn is_nan(self) -> bool {
        self.upper.is_nan() || self.lower.is_nan()
    }
}

impl From<Float> for DoubleDouble {
    fn from(v: Float) -> Self {
        Self::from_val(v)
    }
}

// Collapses to native precision. Under the normalization invariant the
// sum rounds back to the upper component for finite values.
impl From<DoubleDouble> for Float {
    fn from(value: DoubleDouble) -> Self {
        value.upper + value.lower
    }
}

impl fmt::Display for DoubleDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.17}, {:.17e})", self.upper, self.lower)
    }
}

impl Neg for DoubleDouble {
    type Output = DoubleDouble;

    fn neg(self) -> DoubleDouble {
        DoubleDouble {
            upper: -self.upper,
            lower: -self.lower,
        }
    }
}

impl Neg for &DoubleDouble {
    type Output = DoubleDouble;

    fn neg(self) -> DoubleDouble {
        DoubleDouble {
            upper: -self.upper,
            lower: -self.lower,
        }
    }
}

// Each binary operation follows the same shape: an exact transform of
// the upper components, plain accumulation of the lower-order terms, and
// one fast-two-sum renormalization of the result.

impl_op_ex_commutative!(+|a: &DoubleDouble, f: &Float| -> DoubleDouble {
    let re = two_sum(a.upper, *f);
    two_sum_quick(re.upper, re.lower + a.lower)
});

impl_op_ex!(+|a: &DoubleDouble, b: &DoubleDouble| -> DoubleDouble {
    let re = two_sum(a.upper, b.upper);
    two_sum_quick(re.upper, re.lower + (a.lower + b.lower))
});

impl_op_ex!(+=|a: &mut DoubleDouble, f: &Float| {
    *a = *a + f;
});

impl_op_ex!(+=|a: &mut DoubleDouble, b: &DoubleDouble| {
    *a = *a + b;
});

impl_op_ex!(-|a: &DoubleDouble, f: &Float| -> DoubleDouble {
    let re = two_difference(a.upper, *f);
    two_sum_quick(re.upper, re.lower + a.lower)
});

impl_op_ex!(-|f: &Float, a: &DoubleDouble| -> DoubleDouble { -a + f });

impl_op_ex!(-|a: &DoubleDouble, b: &DoubleDouble| -> DoubleDouble {
    let re = two_difference(a.upper, b.upper);
    two_sum_quick(re.upper, re.lower + (a.lower - b.lower))
});

impl_op_ex!(-=|a: &mut DoubleDouble, f: &Float| {
    *a = *a - f;
});

impl_op_ex!(-=|a: &mut DoubleDouble, b: &DoubleDouble| {
    *a = *a - b;
});

impl_op_ex_commutative!(*|a: &DoubleDouble, f: &Float| -> DoubleDouble {
    let re = two_product(a.upper, *f);
    two_sum_quick(re.upper, re.lower + a.lower * f)
});

impl_op_ex!(*|a: &DoubleDouble, b: &DoubleDouble| -> DoubleDouble {
    // The lower-times-lower cross term falls below working precision.
    let re = two_product(a.upper, b.upper);
    two_sum_quick(re.upper, re.lower + (a.upper * b.lower + a.lower * b.upper))
});

impl_op_ex!(*=|a: &mut DoubleDouble, f: &Float| {
    *a = *a * f;
});

impl_op_ex!(*=|a: &mut DoubleDouble, b: &DoubleDouble| {
    *a = *a * b;
});

// Division has no exact transform; the native quotient is corrected by
// its exact residual instead (one quasi-Newton step).

impl_op_ex!(/|a: &DoubleDouble, f: &Float| -> DoubleDouble {
    let r = a.upper / f;
    let sf = two_product(r, *f);
    let e = (a.upper - sf.upper - sf.lower + a.lower) / f;
    two_sum_quick(r, e)
});

impl_op_ex!(/|f: &Float, a: &DoubleDouble| -> DoubleDouble {
    DoubleDouble::from_val(*f) / a
});

impl_op_ex!(/|a: &DoubleDouble, b: &DoubleDouble| -> DoubleDouble {
    let r = a.upper / b.upper;
    let sf = two_product(r, b.upper);
    let e = (a.upper - sf.upper - sf.lower + a.lower - r * b.lower) / b.upper;
    two_sum_quick(r, e)
});

impl_op_ex!(/=|a: &mut DoubleDouble, f: &Float| {
    *a = *a / f;
});

impl_op_ex!(/=|a: &mut DoubleDouble, b: &DoubleDouble| {
    *a = *a / b;
});

// Ordering is lexicographic on (upper, lower); a bare scalar compares as
// the pair (x, 0.0). NaN components follow native float semantics: every
// ordering or equality test involving one is false, inequality is true.

impl PartialEq for DoubleDouble {
    fn eq(&self, other: &DoubleDouble) -> bool {
        self.upper == other.upper && self.lower == other.lower
    }
}

impl PartialOrd for DoubleDouble {
    fn partial_cmp(&self, other: &DoubleDouble) -> Option<Ordering> {
        match self.upper.partial_cmp(&other.upper) {
            Some(Ordering::Equal) => self.lower.partial_cmp(&other.lower),
            ord => ord,
        }
    }
}

impl PartialEq<Float> for DoubleDouble {
    fn eq(&self, other: &Float) -> bool {
        self.upper == *other && self.lower == 0.0
    }
}

impl PartialOrd<Float> for DoubleDouble {
    fn partial_cmp(&self, other: &Float) -> Option<Ordering> {
        match self.upper.partial_cmp(other) {
            Some(Ordering::Equal) => self.lower.partial_cmp(&0.0),
            ord => ord,
        }
    }
}

impl PartialEq<DoubleDouble> for Float {
    fn eq(&self, other: &DoubleDouble) -> bool {
        other == self
    }
}

impl PartialOrd<DoubleDouble> for Float {
    fn partial_cmp(&self, other: &DoubleDouble) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}
