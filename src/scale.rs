//! Scale functions for data-to-pixel mappings.
//!
//! The value axis uses a [`LinearScale`]; the categorical axis uses a
//! [`CategoryScale`] that maps ordinal positions (category units) to pixels.

use crate::error::{Error, Result};

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

/// Linear scale for continuous-to-continuous mapping.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain_min: f32,
    domain_max: f32,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// # Errors
    ///
    /// Returns an error if domain_min equals domain_max.
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Result<Self> {
        if (domain.0 - domain.1).abs() < f32::EPSILON {
            return Err(Error::InvalidParameter(
                "scale domain min and max cannot be equal".to_string(),
            ));
        }

        Ok(Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        })
    }

    /// Invert the scale (range to domain).
    #[must_use]
    pub fn invert(&self, value: f32) -> f32 {
        let t = (value - self.range_min) / (self.range_max - self.range_min);
        self.domain_min + t * (self.domain_max - self.domain_min)
    }

    /// Pixels per domain unit (absolute).
    #[must_use]
    pub fn pixels_per_unit(&self) -> f32 {
        ((self.range_max - self.range_min) / (self.domain_max - self.domain_min)).abs()
    }

    /// Round tick positions covering the domain, roughly `count` of them.
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<f32> {
        let (lo, hi) = if self.domain_min <= self.domain_max {
            (self.domain_min, self.domain_max)
        } else {
            (self.domain_max, self.domain_min)
        };
        let step = nice_step((hi - lo) / count.max(1) as f32);
        if !step.is_finite() || step <= 0.0 {
            return vec![lo];
        }
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f32 * step).collect()
    }
}

fn nice_step(raw: f32) -> f32 {
    let magnitude = 10f32.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual < 1.5 {
        1.0
    } else if residual < 3.0 {
        2.0
    } else if residual < 7.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

impl Scale<f32, f32> for LinearScale {
    fn scale(&self, value: f32) -> f32 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    fn domain(&self) -> (f32, f32) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f32, f32) {
        (self.range_min, self.range_max)
    }
}

/// Ordinal scale: category `i` occupies the band `[i - 0.5, i + 0.5]`.
#[derive(Debug, Clone, Copy)]
pub struct CategoryScale {
    inner: LinearScale,
    n: usize,
}

impl CategoryScale {
    /// Create a scale for `n` categories spread over `range` pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is zero.
    pub fn new(n: usize, range: (f32, f32)) -> Result<Self> {
        if n == 0 {
            return Err(Error::EmptyData);
        }
        let inner = LinearScale::new((-0.5, n as f32 - 0.5), range)?;
        Ok(Self { inner, n })
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the scale has no categories (never true once built).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Width of one category band in pixels.
    #[must_use]
    pub fn band_width(&self) -> f32 {
        self.inner.pixels_per_unit()
    }
}

impl Scale<f32, f32> for CategoryScale {
    fn scale(&self, value: f32) -> f32 {
        self.inner.scale(value)
    }

    fn domain(&self) -> (f32, f32) {
        self.inner.domain()
    }

    fn range(&self) -> (f32, f32) {
        self.inner.range()
    }
}
