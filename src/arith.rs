//! Arithmetic helpers. Not used by the report.

use std::ops::Mul;

/// Return `x * x * x`.
///
/// Works for any copyable type with `Mul`, so both `f64` and the integer
/// types are accepted. Integer overflow follows the usual `Mul` rules.
pub fn cube<T>(x: T) -> T
where
    T: Copy + Mul<Output = T>,
{
    x * x * x
}
