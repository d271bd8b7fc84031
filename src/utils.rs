//! Utility functions for the NegaMax search
//!
//! Move values are sums of logarithmic terms, so two lines that are equally
//! good on paper can differ in the last bits. These comparisons absorb that
//! noise while keeping infinite values exact.

/// Default tolerance for value comparisons
pub const DEFAULT_EPSILON: f64 = 1e-14;

/// Returns true if `a` is greater than `b` by at least `epsilon`
///
/// Exactly equal values are never greater, which also covers two equal
/// infinities.
pub fn greater_than(a: f64, b: f64, epsilon: f64) -> bool {
    if a == b {
        return false;
    }
    a - b >= epsilon
}

/// Returns true if `a` is greater than `b` or within `epsilon` below it
///
/// Exactly equal values, including two equal infinities, always qualify.
pub fn greater_or_equal(a: f64, b: f64, epsilon: f64) -> bool {
    if a == b {
        return true;
    }
    a - b > -epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = DEFAULT_EPSILON;

    #[test]
    fn test_greater_than_ignores_noise() {
        assert!(greater_than(1.0, 0.5, EPS));
        assert!(!greater_than(0.5, 1.0, EPS));
        assert!(!greater_than(0.3, 0.1 + 0.2, EPS));
        assert!(!greater_than(0.1 + 0.2, 0.3, EPS));
    }

    #[test]
    fn test_greater_than_infinities() {
        assert!(!greater_than(f64::NEG_INFINITY, f64::NEG_INFINITY, EPS));
        assert!(!greater_than(f64::INFINITY, f64::INFINITY, EPS));
        assert!(greater_than(f64::INFINITY, f64::NEG_INFINITY, EPS));
        assert!(greater_than(0.0, f64::NEG_INFINITY, EPS));
        assert!(!greater_than(f64::NEG_INFINITY, 0.0, EPS));
    }

    #[test]
    fn test_greater_or_equal() {
        assert!(greater_or_equal(f64::INFINITY, f64::INFINITY, EPS));
        assert!(greater_or_equal(0.1 + 0.2, 0.3, EPS));
        assert!(greater_or_equal(0.3, 0.1 + 0.2, EPS));
        assert!(!greater_or_equal(0.2, 0.3, EPS));
        assert!(!greater_or_equal(f64::NEG_INFINITY, f64::INFINITY, EPS));
    }
}
