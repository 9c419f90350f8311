/// Returns `part` as a percentage of `whole`, rounded to two decimal places.
///
/// The caller is responsible for ensuring `whole` is non-zero; a zero
/// denominator propagates as a non-finite result.
///
/// # Examples
///
/// ```
/// use caissa_stats::percent::percent_of;
///
/// assert_eq!(percent_of(1.0, 3.0), 33.33);
/// assert_eq!(percent_of(0.0, 7.0), 0.0);
/// ```
#[must_use]
pub fn percent_of(part: f64, whole: f64) -> f64 {
    round2(part / whole * 100.0)
}

/// Rounds a value to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(12.344), 12.34);
        assert_eq!(round2(12.346), 12.35);
        assert_eq!(round2(50.0), 50.0);
    }

    #[test]
    fn full_share_is_one_hundred() {
        assert_eq!(percent_of(8.0, 8.0), 100.0);
    }

    #[test]
    fn zero_whole_is_not_finite() {
        assert!(!percent_of(1.0, 0.0).is_finite());
    }
}
