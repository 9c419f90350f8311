use std::fmt;

/// A least-squares line `y = slope * x + intercept` fitted to a set of points.
///
/// This is the trend line drawn through the per-opening win counts on the
/// charts: one `(x, y)` pair per opening, fitted in closed form.
///
/// # Examples
///
/// ```
/// use caissa_stats::linear_fit::LinearFit;
///
/// let points = [(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)];
/// let fit = LinearFit::from_points(&points).unwrap();
/// assert!((fit.predict(4.0) - 8.0).abs() < 1e-9);
/// assert_eq!(fit.to_string(), "2.00 * x + 0.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Slope of the fitted line.
    pub slope: f64,
    /// Intercept of the fitted line.
    pub intercept: f64,
}

impl LinearFit {
    /// Fits a line through `points` by ordinary least squares.
    ///
    /// # Returns
    ///
    /// * `Some(LinearFit)` - for two or more points with at least two
    ///   distinct x values
    /// * `None` - for fewer than two points, or when every point shares the
    ///   same x (a vertical line has no finite slope)
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_points(points: &[(f64, f64)]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }

        let n = points.len() as f64;
        let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

        let spread_xx = points
            .iter()
            .map(|(x, _)| (x - mean_x).powi(2))
            .sum::<f64>();
        if spread_xx == 0.0 {
            return None;
        }
        let spread_xy = points
            .iter()
            .map(|(x, y)| (x - mean_x) * (y - mean_y))
            .sum::<f64>();

        let slope = spread_xy / spread_xx;
        let intercept = mean_y - slope * mean_x;
        Some(Self { slope, intercept })
    }

    /// Evaluates the fitted line at `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

impl fmt::Display for LinearFit {
    /// Formats the fit as a legend label, e.g. `0.87 * x + 1.43`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} * x + {:.2}", self.slope, self.intercept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_collinear_points() {
        let points = [(0.0, 1.0), (1.0, 1.5), (2.0, 2.0), (3.0, 2.5)];
        let fit = LinearFit::from_points(&points).unwrap();
        assert!((fit.slope - 0.5).abs() < 1e-9);
        assert!((fit.intercept - 1.0).abs() < 1e-9);
    }

    #[test]
    fn averages_scattered_points() {
        // Symmetric residuals around y = x: the fit passes between them.
        let points = [(0.0, 1.0), (0.0, -1.0), (2.0, 3.0), (2.0, 1.0)];
        let fit = LinearFit::from_points(&points).unwrap();
        assert!((fit.slope - 1.0).abs() < 1e-9);
        assert!((fit.intercept - 0.0).abs() < 1e-9);
    }

    #[test]
    fn too_few_points() {
        assert!(LinearFit::from_points(&[]).is_none());
        assert!(LinearFit::from_points(&[(1.0, 1.0)]).is_none());
    }

    #[test]
    fn vertical_line_has_no_fit() {
        let points = [(2.0, 1.0), (2.0, 5.0), (2.0, 9.0)];
        assert!(LinearFit::from_points(&points).is_none());
    }

    #[test]
    fn display_rounds_to_two_decimals() {
        let fit = LinearFit {
            slope: 0.8765,
            intercept: -1.234,
        };
        assert_eq!(fit.to_string(), "0.88 * x + -1.23");
    }
}
