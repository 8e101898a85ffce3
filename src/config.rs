use num_traits::NumCast;

use crate::matrix::matrix::Scalar;

pub const DEFAULT_ZERO_THRESHOLD: f64 = 0.00001;
pub const DEFAULT_VIEWING_DECIMAL: usize = 2;

/// Numeric tuning carried by every [`Matrix`](crate::Matrix).
///
/// Matrices derived from another one (transpose, minor, adjoint, inverse,
/// product) inherit the config of their source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixConfig<T> {
    /// Magnitudes strictly below this are snapped to exact zero.
    pub zero_threshold: T,
    /// Digits after the decimal point used by `Display`.
    pub viewing_decimal: usize,
}

impl<T: Scalar> MatrixConfig<T> {
    pub fn new(zero_threshold: T, viewing_decimal: usize) -> Self {
        MatrixConfig {
            zero_threshold: zero_threshold.abs(),
            viewing_decimal,
        }
    }

    pub fn with_zero_threshold(self, zero_threshold: T) -> Self {
        MatrixConfig::new(zero_threshold, self.viewing_decimal)
    }

    pub fn with_viewing_decimal(self, viewing_decimal: usize) -> Self {
        MatrixConfig::new(self.zero_threshold, viewing_decimal)
    }

    #[inline(always)]
    pub fn is_zero(&self, value: T) -> bool {
        value.abs() < self.zero_threshold
    }

    /// Replace a value below the threshold with exact zero.
    #[inline(always)]
    pub fn snap(&self, value: T) -> T {
        if self.is_zero(value) {
            T::zero()
        } else {
            value
        }
    }
}

impl<T: Scalar> Default for MatrixConfig<T> {
    fn default() -> Self {
        MatrixConfig {
            zero_threshold: <T as NumCast>::from(DEFAULT_ZERO_THRESHOLD).unwrap_or_else(T::epsilon),
            viewing_decimal: DEFAULT_VIEWING_DECIMAL,
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
