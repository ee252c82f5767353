// src/math/extensions.rs

use num::Float;

/// Ten, built from `one()` so it is exact for every `Float`.
#[inline]
#[must_use]
pub(crate) fn _ten<T: Float>() -> T {
  let two = T::one() + T::one();
  two * two * two + two
}

/// One half, exact for every `Float`.
#[inline]
#[must_use]
pub(crate) fn _half<T: Float>() -> T {
  (T::one() + T::one()).recip()
}

/// Power of ten as a float.
///
/// Negative exponents give the reciprocal (`_pow10(-2) == 0.01`). Exponents
/// beyond the type's range overflow to infinity or underflow to zero, the same
/// way the floating-point power does.
#[inline]
#[must_use]
pub(crate) fn _pow10<T: Float>(exp: i32) -> T {
  _ten::<T>().powi(exp)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ten_and_half() {
    assert_eq!(_ten::<f64>(), 10.0, "f64 ten");
    assert_eq!(_ten::<f32>(), 10.0_f32, "f32 ten");
    assert_eq!(_half::<f64>(), 0.5, "f64 half");
    assert_eq!(_half::<f32>(), 0.5_f32, "f32 half");
  }

  #[test]
  fn test_pow10() {
    assert_eq!(_pow10::<f64>(0), 1.0, "10^0");
    assert_eq!(_pow10::<f64>(1), 10.0, "10^1");
    assert_eq!(_pow10::<f64>(3), 1000.0, "10^3");
    assert_eq!(_pow10::<f64>(15), 1e15, "10^15");

    // Negative exponents land on the nearest double of the decimal fraction.
    assert_eq!(_pow10::<f64>(-1), 0.1, "10^-1");
    assert_eq!(_pow10::<f64>(-2), 0.01, "10^-2");

    assert!(_pow10::<f64>(400).is_infinite(), "10^400 overflows");
    assert_eq!(_pow10::<f64>(-400), 0.0, "10^-400 underflows");
  }
}
