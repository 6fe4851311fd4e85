//! Color primitives and the viridis colormap.

/// Color value in RGBA format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation between two colors, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let t_inv = 1.0 - t;
        Color::new(
            (self.r as f64 * t_inv + other.r as f64 * t) as u8,
            (self.g as f64 * t_inv + other.g as f64 * t) as u8,
            (self.b as f64 * t_inv + other.b as f64 * t) as u8,
            (self.a as f64 * t_inv + other.a as f64 * t) as u8,
        )
    }
}

/// A piecewise-linear color ramp over `[0, 1]`.
#[derive(Debug, Clone)]
pub struct Colormap {
    stops: Vec<(f64, Color)>,
}

impl Colormap {
    /// Build a colormap from position/color stops. Stops are sorted by
    /// position; an empty stop list yields a transparent map.
    pub fn new(mut stops: Vec<(f64, Color)>) -> Self {
        stops.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        Self { stops }
    }

    /// The perceptually uniform viridis map used by both plot variants.
    pub fn viridis() -> Self {
        Self::new(vec![
            (0.000, Color::opaque(68, 1, 84)),
            (0.125, Color::opaque(71, 44, 122)),
            (0.250, Color::opaque(59, 81, 139)),
            (0.375, Color::opaque(44, 113, 142)),
            (0.500, Color::opaque(33, 144, 141)),
            (0.625, Color::opaque(39, 173, 129)),
            (0.750, Color::opaque(92, 200, 99)),
            (0.875, Color::opaque(170, 220, 50)),
            (1.000, Color::opaque(253, 231, 37)),
        ])
    }

    /// Sample the ramp at `t`. Input is clamped to `[0, 1]`; non-finite
    /// input maps to the low end.
    pub fn sample(&self, t: f64) -> Color {
        let Some(&(first_pos, first_color)) = self.stops.first() else {
            return Color::new(0, 0, 0, 0);
        };
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };

        if t <= first_pos {
            return first_color;
        }
        for w in self.stops.windows(2) {
            let (lo_pos, lo_color) = w[0];
            let (hi_pos, hi_color) = w[1];
            if t <= hi_pos {
                let span = hi_pos - lo_pos;
                let frac = if span.abs() < f64::EPSILON {
                    0.0
                } else {
                    (t - lo_pos) / span
                };
                return lo_color.lerp(hi_color, frac);
            }
        }
        self.stops.last().map(|&(_, c)| c).unwrap_or(first_color)
    }
}
