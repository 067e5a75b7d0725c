//! Sequential color scales over [0, 1].
//!
//! Palettes are piecewise-linear ramps through eleven evenly spaced control
//! points sampled from the matplotlib perceptually uniform colormaps.
//! Between control points a channel can differ by one unit from the full
//! 256-entry tables (viridis at 0.05 gives `#461365`, the table `#471365`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Relative luminance (sRGB weights, no gamma correction).
    pub fn luminance(&self) -> f64 {
        0.2126 * self.r as f64 + 0.7152 * self.g as f64 + 0.0722 * self.b as f64
    }

    fn lerp(&self, other: &Color, t: f64) -> Color {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Built-in sequential palettes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    #[default]
    Viridis,
    Plasma,
    Magma,
    Inferno,
}

// Linear approximation of the 256-entry ramp; within one unit per channel.
const VIRIDIS: [Color; 11] = [
    Color::rgb(0x44, 0x01, 0x54),
    Color::rgb(0x48, 0x24, 0x75),
    Color::rgb(0x41, 0x44, 0x87),
    Color::rgb(0x35, 0x5f, 0x8d),
    Color::rgb(0x2a, 0x78, 0x8e),
    Color::rgb(0x21, 0x91, 0x8c),
    Color::rgb(0x22, 0xa8, 0x84),
    Color::rgb(0x44, 0xbf, 0x70),
    Color::rgb(0x7a, 0xd1, 0x51),
    Color::rgb(0xbd, 0xdf, 0x26),
    Color::rgb(0xfd, 0xe7, 0x25),
];

const PLASMA: [Color; 11] = [
    Color::rgb(0x0d, 0x08, 0x87),
    Color::rgb(0x41, 0x04, 0x9d),
    Color::rgb(0x6a, 0x00, 0xa8),
    Color::rgb(0x8f, 0x0d, 0xa4),
    Color::rgb(0xb1, 0x2a, 0x90),
    Color::rgb(0xcc, 0x47, 0x78),
    Color::rgb(0xe1, 0x64, 0x62),
    Color::rgb(0xf2, 0x84, 0x4b),
    Color::rgb(0xfc, 0xa6, 0x36),
    Color::rgb(0xfc, 0xce, 0x25),
    Color::rgb(0xf0, 0xf9, 0x21),
];

const MAGMA: [Color; 11] = [
    Color::rgb(0x00, 0x00, 0x04),
    Color::rgb(0x14, 0x0e, 0x36),
    Color::rgb(0x3b, 0x0f, 0x70),
    Color::rgb(0x64, 0x1a, 0x80),
    Color::rgb(0x8c, 0x29, 0x81),
    Color::rgb(0xb7, 0x37, 0x79),
    Color::rgb(0xde, 0x49, 0x68),
    Color::rgb(0xf7, 0x70, 0x5c),
    Color::rgb(0xfe, 0x9f, 0x6d),
    Color::rgb(0xfe, 0xcf, 0x92),
    Color::rgb(0xfc, 0xfd, 0xbf),
];

const INFERNO: [Color; 11] = [
    Color::rgb(0x00, 0x00, 0x04),
    Color::rgb(0x16, 0x0b, 0x39),
    Color::rgb(0x42, 0x0a, 0x68),
    Color::rgb(0x6a, 0x17, 0x6e),
    Color::rgb(0x93, 0x26, 0x67),
    Color::rgb(0xbc, 0x37, 0x54),
    Color::rgb(0xdd, 0x51, 0x3a),
    Color::rgb(0xf3, 0x78, 0x19),
    Color::rgb(0xfc, 0xa5, 0x0a),
    Color::rgb(0xf6, 0xd7, 0x46),
    Color::rgb(0xfc, 0xff, 0xa4),
];

impl Palette {
    pub fn name(&self) -> &'static str {
        match self {
            Palette::Viridis => "viridis",
            Palette::Plasma => "plasma",
            Palette::Magma => "magma",
            Palette::Inferno => "inferno",
        }
    }

    fn control_points(&self) -> &'static [Color] {
        match self {
            Palette::Viridis => &VIRIDIS,
            Palette::Plasma => &PLASMA,
            Palette::Magma => &MAGMA,
            Palette::Inferno => &INFERNO,
        }
    }

    /// Evaluate the ramp at `t`, clamped to [0, 1]. NaN maps to the low end.
    pub fn interpolate(&self, t: f64) -> Color {
        let points = self.control_points();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let segments = (points.len() - 1) as f64;
        let scaled = t * segments;
        let i = (scaled.floor() as usize).min(points.len() - 2);
        points[i].lerp(&points[i + 1], scaled - i as f64)
    }
}

/// Sequential color scale with a fixed [0, 1] domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorScale {
    palette: Palette,
}

impl ColorScale {
    pub const DOMAIN: [f64; 2] = [0.0, 1.0];

    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn domain(&self) -> [f64; 2] {
        Self::DOMAIN
    }

    /// Map a value in the domain to a color.
    pub fn color(&self, value: f64) -> Color {
        let [lo, hi] = Self::DOMAIN;
        self.palette.interpolate((value - lo) / (hi - lo))
    }

    /// `n` colors sampled evenly across the domain, endpoints included.
    pub fn samples(&self, n: usize) -> Vec<(f64, Color)> {
        match n {
            0 => vec![],
            1 => vec![(0.0, self.color(0.0))],
            _ => (0..n)
                .map(|i| {
                    let t = i as f64 / (n - 1) as f64;
                    (t, self.color(t))
                })
                .collect(),
        }
    }
}
