//! Arithmetic over optional floats, where `None` means "no value".

const EPSILON: f32 = 0.0001;

pub fn add(a: Option<f32>, b: Option<f32>) -> Option<f32> {
    Some(a? + b?)
}

/// The larger of two values; a defined value beats an undefined one.
pub fn max(a: Option<f32>, b: Option<f32>) -> Option<f32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// NaN-aware comparison used for computed layout values.
pub fn approx_eq(a: f32, b: f32) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    (a - b).abs() < EPSILON
}

/// Exact comparison where two undefined values count as equal. Used for
/// cached measurements, which must match bit for bit to be reused.
pub fn same(a: f32, b: f32) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

pub fn approx_eq_slice(a: &[f32], b: &[f32]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| approx_eq(*a, *b))
}

pub fn approx_eq_opt(a: Option<f32>, b: Option<f32>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => approx_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_propagates_through_add() {
        assert_eq!(add(Some(1.0), Some(2.0)), Some(3.0));
        assert_eq!(add(Some(1.0), None), None);
    }

    #[test]
    fn max_prefers_defined() {
        assert_eq!(max(None, Some(0.0)), Some(0.0));
        assert_eq!(max(Some(-3.0), Some(0.0)), Some(0.0));
        assert_eq!(max(None, None), None);
    }

    #[test]
    fn nan_equals_nan() {
        assert!(approx_eq(f32::NAN, f32::NAN));
        assert!(!approx_eq(f32::NAN, 0.0));
        assert!(approx_eq(1.0, 1.00001));
    }

    #[test]
    fn same_is_exact_but_nan_aware() {
        assert!(same(f32::NAN, f32::NAN));
        assert!(same(2.5, 2.5));
        assert!(!same(1.0, 1.00001));
    }
}
