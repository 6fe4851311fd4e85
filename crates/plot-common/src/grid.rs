//! Cobb-Douglas surface grid evaluation.

/// Lower bound of the sampled domain on both axes.
pub const DOMAIN_MIN: f64 = 0.0;
/// Upper bound of the sampled domain on both axes.
pub const DOMAIN_MAX: f64 = 10.0;

/// `n` evenly spaced samples over `[start, end]`, inclusive of both
/// endpoints. The last sample is exactly `end`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + i as f64 * step })
                .collect()
        }
    }
}

/// An evaluated Cobb-Douglas surface `z = x^alpha * y^beta` over the fixed
/// `[0, 10] x [0, 10]` domain.
///
/// Meshgrid semantics: X varies along columns, Y along rows. Values are
/// stored row-major with `num_points * num_points` cells and are never
/// mutated after evaluation, except for the explicit
/// [`cap_last_row_to_max`](SurfaceGrid::cap_last_row_to_max) override used
/// by the surface renderer.
#[derive(Debug, Clone)]
pub struct SurfaceGrid {
    /// Samples per axis.
    pub num_points: usize,
    /// Column (X) coordinates.
    pub xs: Vec<f64>,
    /// Row (Y) coordinates.
    pub ys: Vec<f64>,
    /// Row-major surface values.
    pub z: Vec<f64>,
}

impl SurfaceGrid {
    /// Evaluate the surface at `num_points` samples per axis.
    ///
    /// Exponents are unrestricted: `0^negative` at the domain boundary
    /// follows IEEE-754 (`inf`, or `NaN` from `inf * 0`) and the resulting
    /// values flow into the plot as gaps rather than errors.
    pub fn evaluate(alpha: f64, beta: f64, num_points: usize) -> Self {
        let xs = linspace(DOMAIN_MIN, DOMAIN_MAX, num_points);
        let ys = linspace(DOMAIN_MIN, DOMAIN_MAX, num_points);

        let mut z = Vec::with_capacity(num_points * num_points);
        for &y in &ys {
            let y_term = y.powf(beta);
            for &x in &xs {
                z.push(x.powf(alpha) * y_term);
            }
        }

        Self {
            num_points,
            xs,
            ys,
            z,
        }
    }

    /// X coordinate of cell `(row, col)`.
    pub fn x_at(&self, _row: usize, col: usize) -> f64 {
        self.xs[col]
    }

    /// Y coordinate of cell `(row, col)`.
    pub fn y_at(&self, row: usize, _col: usize) -> f64 {
        self.ys[row]
    }

    /// Surface value at cell `(row, col)`.
    pub fn z_at(&self, row: usize, col: usize) -> f64 {
        self.z[row * self.num_points + col]
    }

    /// Total number of grid cells.
    pub fn len(&self) -> usize {
        self.z.len()
    }

    /// Whether the grid holds no cells.
    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }

    /// Smallest surface value, ignoring NaN cells.
    pub fn z_min(&self) -> f64 {
        self.z.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest surface value, ignoring NaN cells.
    pub fn z_max(&self) -> f64 {
        self.z.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Overwrite the last row (y = 10) with the grid's own maximum, so a
    /// contour plane drawn at the far edge sits flush with the surface
    /// peak.
    pub fn cap_last_row_to_max(&mut self) {
        if self.z.is_empty() {
            return;
        }
        let max = self.z_max();
        let start = (self.num_points - 1) * self.num_points;
        for v in &mut self.z[start..] {
            *v = max;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let xs = linspace(0.0, 10.0, 100);
        assert_eq!(xs.len(), 100);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[99], 10.0);

        // monotonically increasing, roughly even spacing
        for w in xs.windows(2) {
            assert!(w[1] > w[0]);
            assert!((w[1] - w[0] - 10.0 / 99.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
        assert_eq!(linspace(2.0, 4.0, 2), vec![2.0, 4.0]);
    }

    #[test]
    fn test_evaluate_shape() {
        let grid = SurfaceGrid::evaluate(0.3, 0.4, 50);
        assert_eq!(grid.num_points, 50);
        assert_eq!(grid.xs.len(), 50);
        assert_eq!(grid.ys.len(), 50);
        assert_eq!(grid.len(), 2500);
    }

    #[test]
    fn test_evaluate_values_recompute() {
        let (alpha, beta) = (0.3, 0.4);
        let grid = SurfaceGrid::evaluate(alpha, beta, 20);
        for i in 0..20 {
            for j in 0..20 {
                let expected = grid.x_at(i, j).powf(alpha) * grid.y_at(i, j).powf(beta);
                let got = grid.z_at(i, j);
                assert!(
                    (got - expected).abs() < 1e-12 || (got == expected),
                    "mismatch at ({i}, {j}): {got} vs {expected}"
                );
            }
        }
    }

    #[test]
    fn test_evaluate_corners() {
        let grid = SurfaceGrid::evaluate(0.3, 0.4, 100);
        let n = grid.num_points - 1;

        assert_eq!(grid.x_at(0, 0), 0.0);
        assert_eq!(grid.y_at(0, 0), 0.0);
        assert_eq!(grid.z_at(0, 0), 0.0);

        assert_eq!(grid.x_at(n, n), 10.0);
        assert_eq!(grid.y_at(n, n), 10.0);
        // 10^0.3 * 10^0.4 = 10^0.7
        assert!((grid.z_at(n, n) - 10f64.powf(0.7)).abs() < 1e-9);
        assert!((grid.z_at(n, n) - 5.0119).abs() < 1e-3);
    }

    #[test]
    fn test_negative_exponent_boundary() {
        let grid = SurfaceGrid::evaluate(-1.0, 0.4, 10);
        // x = 0 with a negative exponent is infinite away from the y = 0 row
        assert!(grid.z_at(5, 0).is_infinite());
        // interior cells stay finite
        assert!(grid.z_at(5, 5).is_finite());
    }

    #[test]
    fn test_cap_last_row_to_max() {
        let mut grid = SurfaceGrid::evaluate(0.3, 0.5, 40);
        let unmodified_max = grid.z_max();
        grid.cap_last_row_to_max();

        let n = grid.num_points;
        for j in 0..n {
            assert_eq!(grid.z_at(n - 1, j), unmodified_max);
        }
        // earlier rows are untouched
        let fresh = SurfaceGrid::evaluate(0.3, 0.5, 40);
        for j in 0..n {
            assert_eq!(grid.z_at(n - 2, j), fresh.z_at(n - 2, j));
        }
    }
}
