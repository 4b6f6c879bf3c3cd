//! Band and linear scales.
//!
//! Both follow the conventions of d3-scale so that the rendered grid lines
//! up pixel-for-pixel with a d3 rendition of the same chart: band scales have
//! no padding and a centred alignment, and an inverted band range hands the
//! first domain value the band adjacent to the range start.

use std::collections::HashMap;
use std::hash::Hash;

/// Discrete domain -> contiguous, equally sized pixel bands.
#[derive(Debug, Clone)]
pub struct BandScale<T> {
    domain: Vec<T>,
    index: HashMap<T, usize>,
    range: (f64, f64),
    step: f64,
}

impl<T: Clone + Eq + Hash> BandScale<T> {
    /// Build a band scale; repeated domain values collapse onto their first
    /// occurrence.
    #[must_use]
    pub fn new(domain: impl IntoIterator<Item = T>, range: (f64, f64)) -> Self {
        let mut values = Vec::new();
        let mut index = HashMap::new();
        for value in domain {
            if !index.contains_key(&value) {
                index.insert(value.clone(), values.len());
                values.push(value);
            }
        }

        let step = if values.is_empty() {
            0.0
        } else {
            (range.1 - range.0).abs() / values.len() as f64
        };

        Self {
            domain: values,
            index,
            range,
            step,
        }
    }

    /// Distinct domain values in band order.
    #[must_use]
    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    /// The `(start, end)` range as given.
    #[must_use]
    pub const fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Width of every band.
    #[must_use]
    pub const fn bandwidth(&self) -> f64 {
        self.step
    }

    /// Distance between the starts of adjacent bands.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Whether the range runs from a larger to a smaller pixel value.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.range.1 < self.range.0
    }

    /// Lower pixel edge of the band for `value`, or `None` if it is not in
    /// the domain.
    #[must_use]
    pub fn position(&self, value: &T) -> Option<f64> {
        let i = *self.index.get(value)?;
        let lo = self.range.0.min(self.range.1);
        let slot = if self.is_inverted() {
            self.domain.len() - 1 - i
        } else {
            i
        };
        Some((slot as f64).mul_add(self.step, lo))
    }

    /// Centre of the band for `value`.
    #[must_use]
    pub fn center(&self, value: &T) -> Option<f64> {
        self.position(value).map(|p| p + self.step / 2.0)
    }

    /// Every band as `(value, lower edge, upper edge)`, in domain order.
    pub fn bands(&self) -> impl Iterator<Item = (&T, f64, f64)> + '_ {
        self.domain.iter().filter_map(move |v| {
            let start = self.position(v)?;
            Some((v, start, start + self.step))
        })
    }
}

/// Continuous linear mapping from a numeric domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Default tick count target, as in d3.
    pub const DEFAULT_TICKS: usize = 10;

    /// Create a linear scale.
    #[must_use]
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Domain endpoints.
    #[must_use]
    pub const fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Range endpoints.
    #[must_use]
    pub const fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value to the range; values outside the domain
    /// extrapolate.
    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 == d0 { 0.5 } else { (value - d0) / (d1 - d0) };
        t.mul_add(r1 - r0, r0)
    }

    /// Map a range value back to the domain.
    #[must_use]
    pub fn invert(&self, pixel: f64) -> f64 {
        Self::new(self.range, self.domain).map(pixel)
    }

    /// Round tick values inside the domain, spaced 1, 2 or 5 times a power
    /// of ten so that roughly `count` of them fit.
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut start, mut stop) = self.domain;
        if count == 0 || !start.is_finite() || !stop.is_finite() {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }
        let reverse = stop < start;
        if reverse {
            std::mem::swap(&mut start, &mut stop);
        }

        let Some((i1, i2, inc)) = tick_spec(start, stop, count as f64) else {
            return Vec::new();
        };
        let mut ticks: Vec<f64> = (i1..=i2)
            .map(|i| {
                let i = i as f64;
                if inc < 0.0 {
                    i / -inc
                } else {
                    i * inc
                }
            })
            .collect();
        if reverse {
            ticks.reverse();
        }
        ticks
    }
}

/// d3-array's tick specification: first and last tick multipliers plus the
/// increment (negative increments mean "divide by").
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let e10 = 50f64.sqrt();
    let e5 = 10f64.sqrt();
    let e2 = 2f64.sqrt();

    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= e10 {
        10.0
    } else if error >= e5 {
        5.0
    } else if error >= e2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let scale = 10f64.powf(-power) / factor;
        i1 = (start * scale).round();
        i2 = (stop * scale).round();
        if i1 / scale < start {
            i1 += 1.0;
        }
        if i2 / scale > stop {
            i2 -= 1.0;
        }
        inc = -scale;
    } else {
        let scale = 10f64.powf(power) * factor;
        i1 = (start / scale).round();
        i2 = (stop / scale).round();
        if i1 * scale < start {
            i1 += 1.0;
        }
        if i2 * scale > stop {
            i2 -= 1.0;
        }
        inc = scale;
    }

    if i2 < i1 {
        if (0.5..2.0).contains(&count) {
            return tick_spec(start, stop, count * 2.0);
        }
        return None;
    }
    Some((i1 as i64, i2 as i64, inc))
}
