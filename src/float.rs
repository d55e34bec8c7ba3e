/// The error-free transforms are proven for IEEE-754 binary64 with
/// round-to-nearest, so the crate is fixed to `f64` rather than being
/// generic over float width.
pub type Float = f64;

/// Fused multiply-add: x·y + z with a single rounding.
///
/// `two_product` is only an error-free transform when this is a true
/// fused operation. The `fma_is_fused` test checks the capability on the
/// build target; a target that emulates fma with two roundings would need
/// a Dekker-split product instead.
#[inline]
pub fn fma(x: Float, y: Float, z: Float) -> Float {
    Float::mul_add(x, y, z)
}
