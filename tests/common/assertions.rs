//! Assertion utilities for testing.
//!
//! Floating-point comparisons for aggregate temperature values.

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that `min <= avg <= max` for a `{TMIN, TAVG, TMAX}` JSON object.
///
/// # Panics
///
/// Panics if any field is missing or null, or the ordering does not hold.
pub fn assert_ordered_stats(stats: &serde_json::Value) {
    let field = |name: &str| {
        stats[name]
            .as_f64()
            .unwrap_or_else(|| panic!("{} is not a number in {}", name, stats))
    };
    let (tmin, tavg, tmax) = (field("TMIN"), field("TAVG"), field("TMAX"));

    assert!(
        tmin <= tavg && tavg <= tmax,
        "Stats not ordered: TMIN = {}, TAVG = {}, TMAX = {}",
        tmin,
        tavg,
        tmax
    );
}

/// Assert that every field of a `{TMIN, TAVG, TMAX}` JSON object is null.
pub fn assert_null_stats(stats: &serde_json::Value) {
    for name in ["TMIN", "TAVG", "TMAX"] {
        assert!(stats[name].is_null(), "{} should be null in {}", name, stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(70.0, 70.0000000001, None);
        assert_approx_eq(1.0, 1.001, Some(0.01));
    }

    #[test]
    fn test_stats_assertions() {
        assert_ordered_stats(&serde_json::json!({"TMIN": 60.0, "TAVG": 65.0, "TMAX": 70.0}));
        assert_null_stats(&serde_json::json!({"TMIN": null, "TAVG": null, "TMAX": null}));
    }
}
