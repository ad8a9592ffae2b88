/// Linear blend between `low` and `high`. `balance <= 0` returns `low` and `balance >= 1` returns
/// `high` exactly, so sample points never pick up rounding noise.
#[must_use]
pub fn lerp(low: f64, high: f64, balance: f64) -> f64 {
    if balance <= 0.0 {
        return low;
    }
    if balance >= 1.0 {
        return high;
    }
    let delta = high - low;
    if delta.is_infinite() {
        // `high - low` overflowed; weight each end separately instead.
        return low * (1.0 - balance) + high * balance;
    }
    low + delta * balance
}

/// Fractional position of `point` between `low_key` and `high_key`: 0.0 at `low_key`, 1.0 at
/// `high_key`. Returns 0.0 when the two keys coincide.
///
/// Keys near `±f64::MAX` are measured at half scale so the span between them cannot overflow.
#[must_use]
pub fn balance_ratio(low_key: f64, high_key: f64, point: f64) -> f64 {
    let span = high_key - low_key;
    #[allow(clippy::float_cmp)]
    if span == 0.0 {
        return 0.0;
    }
    if span.is_infinite() {
        return (point / 2.0 - low_key / 2.0) / (high_key / 2.0 - low_key / 2.0);
    }
    (point - low_key) / span
}

#[cfg(test)]
mod test {
    use statrs::assert_almost_eq;

    use super::{balance_ratio, lerp};

    #[test]
    fn test_lerp_simple() {
        assert_almost_eq!(lerp(3.0, 6.0, 0.25), 3.75, 1e-12);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_lerp_clamps_balance() {
        assert_eq!(lerp(3.0, 6.0, -0.5), 3.0);
        assert_eq!(lerp(3.0, 6.0, 0.0), 3.0);
        assert_eq!(lerp(3.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(3.0, 6.0, 2.5), 6.0);
    }

    #[test]
    fn test_lerp_decreasing() {
        assert_almost_eq!(lerp(10.0, 0.0, 0.3), 7.0, 1e-12);
    }

    #[test]
    fn test_balance_ratio_simple() {
        assert_almost_eq!(balance_ratio(100.0, 200.0, 150.0), 0.5, 1e-12);
        assert_almost_eq!(balance_ratio(200.0, 500.0, 350.0), 0.5, 1e-12);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_balance_ratio_endpoints() {
        assert_eq!(balance_ratio(1.0, 2.0, 1.0), 0.0);
        assert_eq!(balance_ratio(1.0, 2.0, 2.0), 1.0);
    }

    #[test]
    fn test_balance_ratio_extreme_keys() {
        let ratio = balance_ratio(-1.7e308, 1.7e308, 1e308);
        assert!(ratio.is_finite());
        assert_almost_eq!(ratio, 2.7 / 3.4, 1e-12);
        assert_almost_eq!(balance_ratio(-f64::MAX, f64::MAX, 0.0), 0.5, 1e-12);
    }

    #[test]
    fn test_lerp_extreme_values() {
        let mid = lerp(-1.7e308, 1.7e308, 0.5);
        assert!(mid.is_finite());
        assert_almost_eq!(mid, 0.0, 1e-12);
        assert_almost_eq!(lerp(-f64::MAX, f64::MAX, 0.75) / f64::MAX, 0.5, 1e-12);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_balance_ratio_same_key() {
        assert_eq!(balance_ratio(1.0, 1.0, 1.0), 0.0);
    }
}
