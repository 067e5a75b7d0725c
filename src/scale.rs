//! Positional scales: categorical bands and a continuous linear scale.

use serde::Serialize;

/// Partitions `[r0, r1]` into equal padded bands, one per category.
///
/// `padding` is used for both the inner gaps and the outer margins, and the
/// bands are centered in the range.
#[derive(Debug, Clone, Serialize)]
pub struct BandScale {
    domain: Vec<String>,
    range: [f64; 2],
    padding: f64,
    step: f64,
    bandwidth: f64,
    start: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: [f64; 2], padding: f64) -> Self {
        let n = domain.len() as f64;
        let [r0, r1] = range;
        let step = (r1 - r0) / f64::max(1.0, n - padding + padding * 2.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
        Self {
            domain,
            range,
            padding,
            step,
            bandwidth: step * (1.0 - padding),
            start,
        }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Start offset of the band for `key`, or `None` if it is not in the domain.
    pub fn position(&self, key: &str) -> Option<f64> {
        self.domain
            .iter()
            .position(|d| d == key)
            .map(|i| self.start + self.step * i as f64)
    }

    /// Center of the band for `key`; this is where axis ticks go.
    pub fn center(&self, key: &str) -> Option<f64> {
        self.position(key).map(|p| p + self.bandwidth / 2.0)
    }
}

/// Continuous linear mapping from `domain` to `range`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    pub fn scale(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let t = if d1 == d0 { 0.5 } else { (value - d0) / (d1 - d0) };
        r0 + t * (r1 - r0)
    }

    /// "Nice" tick values covering the domain, roughly `count` of them.
    /// Steps are 1, 2 or 5 times a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let [mut start, mut stop] = self.domain;
        if count == 0 || !start.is_finite() || !stop.is_finite() {
            return vec![];
        }
        if start == stop {
            return vec![start];
        }
        let reverse = stop < start;
        if reverse {
            std::mem::swap(&mut start, &mut stop);
        }

        let Some((i1, i2, inc)) = tick_spec(start, stop, count) else {
            return vec![];
        };
        if i2 < i1 {
            return vec![];
        }

        let mut ticks: Vec<f64> = (i1..=i2)
            .map(|i| {
                if inc < 0.0 {
                    i as f64 / -inc
                } else {
                    i as f64 * inc
                }
            })
            .collect();
        if reverse {
            ticks.reverse();
        }
        ticks
    }

    /// Distance between consecutive ticks for `count`.
    pub fn tick_step(&self, count: usize) -> f64 {
        let [a, b] = self.domain;
        let (start, stop) = if a <= b { (a, b) } else { (b, a) };
        match tick_spec(start, stop, count) {
            Some((_, _, inc)) if inc < 0.0 => 1.0 / -inc,
            Some((_, _, inc)) => inc,
            None => 0.0,
        }
    }

    /// Format a tick label with just enough decimals for the tick step.
    pub fn tick_format(&self, count: usize, value: f64) -> String {
        let step = self.tick_step(count).abs();
        let decimals = if step > 0.0 && step.is_finite() {
            (-step.log10().floor()).max(0.0) as usize
        } else {
            0
        };
        format!("{:.*}", decimals, value)
    }
}

/// Returns `(i1, i2, inc)`; a negative `inc` means ticks are `i / -inc`.
fn tick_spec(start: f64, stop: f64, count: usize) -> Option<(i64, i64, f64)> {
    let step = (stop - start) / count as f64;
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round();
        let mut i2 = (stop * inc).round();
        if i1 / inc < start {
            i1 += 1.0;
        }
        if i2 / inc > stop {
            i2 -= 1.0;
        }
        Some((i1 as i64, i2 as i64, -inc))
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round();
        let mut i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
        Some((i1 as i64, i2 as i64, inc))
    }
}
