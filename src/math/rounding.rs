// src/math/rounding.rs

//! Round-half-up rounding to a number of decimal places.
//!
//! Every value goes through `floor(value * 10^decimals + 0.5) / 10^decimals`.
//! The standard `round` is never used: it rounds halves away from zero, so
//! `-2.5` would become `-3.0` instead of `-2.0`.

use crate::math::extensions::{_half, _pow10};
use num::Float;

/// Rounds `value` to `decimals` decimal places, taking exact halves up.
///
/// `decimals` may be negative to round to tens, hundreds and so on. Halves
/// always move toward positive infinity, so `2.5` becomes `3.0` and `-2.5`
/// becomes `-2.0`.
///
/// NaN stays NaN and infinities pass through unchanged.
///
/// # Arguments
///
/// * `value` - The number to round.
/// * `decimals` - Decimal places to keep; use [`DEFAULT_DECIMALS`](crate::constants::DEFAULT_DECIMALS) for integers.
///
/// # Examples
///
/// ```
/// use ytree_util::fround;
///
/// assert_eq!(fround(2.5, 0), 3.0);
/// assert_eq!(fround(-2.5, 0), -2.0);
/// assert_eq!(fround(1.2345, 2), 1.23);
/// assert_eq!(fround(1234.0, -2), 1200.0);
/// ```
#[inline]
#[must_use]
pub fn fround<T: Float>(value: T, decimals: i32) -> T {
  let fac = _pow10::<T>(decimals);
  (value * fac + _half()).floor() / fac
}

/// Rounds every element of `values`, returning a new vector of the same length.
#[must_use]
pub fn fround_slice<T: Float>(values: &[T], decimals: i32) -> Vec<T> {
  values.iter().map(|&v| fround(v, decimals)).collect()
}

/// Rounds every element of `values` where it lies.
pub fn fround_in_place<T: Float>(values: &mut [T], decimals: i32) {
  for v in values.iter_mut() {
    *v = fround(*v, decimals);
  }
}

/// Shape-preserving rounding: scalars give scalars, arrays give arrays.
///
/// ```
/// use ytree_util::Fround;
///
/// assert_eq!(2.5_f64.fround(0), 3.0);
/// assert_eq!([0.5_f64, 1.5, 2.5].fround(0), [1.0, 2.0, 3.0]);
/// assert_eq!(vec![0.125_f32].fround(2), vec![0.13_f32]);
/// ```
pub trait Fround {
  /// The rounded value, same shape as `Self`.
  type Output;

  /// Rounds `self` to `decimals` decimal places; see [`fround`].
  fn fround(&self, decimals: i32) -> Self::Output;
}

macro_rules! impl_fround_scalar {
  ($($t:ty),*) => {
    $(
      impl Fround for $t {
        type Output = $t;

        #[inline]
        fn fround(&self, decimals: i32) -> $t {
          fround(*self, decimals)
        }
      }
    )*
  };
}

impl_fround_scalar!(f32, f64);

impl<T: Float, const N: usize> Fround for [T; N] {
  type Output = [T; N];

  fn fround(&self, decimals: i32) -> [T; N] {
    self.map(|v| fround(v, decimals))
  }
}

impl<T: Float> Fround for [T] {
  type Output = Vec<T>;

  fn fround(&self, decimals: i32) -> Vec<T> {
    fround_slice(self, decimals)
  }
}

impl<T: Float> Fround for Vec<T> {
  type Output = Vec<T>;

  fn fround(&self, decimals: i32) -> Vec<T> {
    fround_slice(self, decimals)
  }
}
