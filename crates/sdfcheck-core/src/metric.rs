//! Difference metric and pass/fail verdict.

/// Count of differing pixels out of a square comparison raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiffMetric {
    /// Pixels the comparator reported as different.
    pub pixels: u64,
    /// Total pixels in the comparison raster (`render_size²`).
    pub total: u64,
}

impl DiffMetric {
    /// Metric for `pixels` differing pixels on a `render_size × render_size` raster.
    pub const fn new(pixels: u64, render_size: u32) -> Self {
        let side = render_size as u64;
        Self {
            pixels,
            total: side * side,
        }
    }

    /// Metric for identical images.
    pub const fn identical(render_size: u32) -> Self {
        Self::new(0, render_size)
    }

    /// Percentage of differing pixels, always within `[0, 100]`.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        // Scale before dividing so the single rounding step lands on the
        // nearest f64, e.g. 6 of 10_000 compares equal to a 0.06 threshold.
        let pixels = self.pixels.min(self.total);
        (pixels as f64 * 100.0) / self.total as f64
    }

    /// Judge this metric against `threshold` (a percentage).
    ///
    /// The threshold is an inclusive upper bound and identical images always pass.
    pub fn verdict(&self, threshold: f64) -> Verdict {
        if self.pixels == 0 || self.percentage() <= threshold {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

/// Outcome of judging a metric against the failure threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Within tolerance
    Pass,
    /// Above tolerance
    Fail,
}

impl Verdict {
    /// Returns true for [`Verdict::Pass`].
    #[inline]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}
