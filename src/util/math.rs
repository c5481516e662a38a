//! Small numeric helpers shared by the fitting code.

/// Returns `value * value`.
#[inline]
pub(crate) fn pow2(value: f64) -> f64 {
    value * value
}

/// Returns `value * value * value`.
#[inline]
pub(crate) fn pow3(value: f64) -> f64 {
    value * value * value
}

/// Returns `true` when `|value| < epsilon`; NaN counts as zero.
#[inline]
pub(crate) fn is_close_to_zero(value: f64, epsilon: f64) -> bool {
    value.is_nan() || value.abs() < epsilon
}

/// Returns `true` when `lo <= value <= hi`; false for NaN.
#[inline]
pub(crate) fn within(value: f64, lo: f64, hi: f64) -> bool {
    lo <= value && value <= hi
}

#[cfg(test)]
mod tests {
    use super::{is_close_to_zero, pow2, pow3, within};

    #[test]
    fn powers_match_multiplication() {
        assert_eq!(pow2(-3.0), 9.0);
        assert_eq!(pow3(-2.0), -8.0);
    }

    #[test]
    fn close_to_zero_uses_strict_bound() {
        assert!(is_close_to_zero(1e-36, 1e-35));
        assert!(!is_close_to_zero(1e-35, 1e-35));
        assert!(is_close_to_zero(f64::NAN, 1e-35));
    }

    #[test]
    fn within_is_inclusive_and_rejects_nan() {
        assert!(within(1.0, 1.0, 2.0));
        assert!(within(2.0, 1.0, 2.0));
        assert!(!within(f64::NAN, 0.0, 1.0));
        assert!(!within(0.5, 1.0, 0.0));
    }
}
