pub mod constants;
mod double_double;
mod eft;
mod float;
mod is_nan;
mod math;

// For convenience, re-export.
pub use double_double::DoubleDouble;
pub use eft::{two_difference, two_product, two_sum, two_sum_quick};
pub use float::{fma, Float};
pub use is_nan::IsNan;
pub use math::{Abs, Sqrt};
