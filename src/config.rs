//! Chart configuration: canvas size, margins, legend and palette.
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use crate::color::Palette;
use crate::diagnostics;
use crate::Result;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 50.0,
            right: 100.0,
            bottom: 100.0,
            left: 200.0,
        }
    }
}

/// Colorbar strip and axis settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub width: f64,
    pub height: f64,
    /// Number of gradient stops sampled across the color domain.
    pub stops: usize,
    /// Approximate tick count for the legend axis.
    pub ticks: usize,
    /// Gap between the plot area and the strip.
    pub offset: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            width: 20.0,
            height: 300.0,
            stops: 100,
            ticks: 6,
            offset: 40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub legend: LegendConfig,
    pub palette: Palette,
    /// The single column label on the horizontal axis.
    pub column_label: String,
    /// Band padding, applied to both axes.
    pub padding: f64,
    pub title: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin: Margin::default(),
            legend: LegendConfig::default(),
            palette: Palette::default(),
            column_label: "Approved".to_string(),
            padding: 0.05,
            title: "Course Approval Rates".to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),

    #[error("plot area is {width}x{height} after margins; both must be positive")]
    EmptyPlotArea { width: f64, height: f64 },

    #[error("legend needs at least 2 gradient stops, got {0}")]
    TooFewStops(usize),

    #[error("legend size {width}x{height} must be positive")]
    EmptyLegend { width: f64, height: f64 },

    #[error("band padding {0} must be in [0, 1)")]
    BadPadding(f64),
}

impl ChartConfig {
    /// Load a config file. Missing fields keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).with_context(|| {
            diagnostics::error_message(format!("read config file {}", path.display()))
        })?;
        let cfg: ChartConfig = serde_json::from_str(&text).with_context(|| {
            diagnostics::error_message(format!("parse config file {}", path.display()))
        })?;
        Ok(cfg)
    }

    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let dimensions = [
            ("width", self.width),
            ("height", self.height),
            ("margin.top", self.margin.top),
            ("margin.right", self.margin.right),
            ("margin.bottom", self.margin.bottom),
            ("margin.left", self.margin.left),
            ("legend.width", self.legend.width),
            ("legend.height", self.legend.height),
            ("legend.offset", self.legend.offset),
            ("padding", self.padding),
        ];
        if let Some((name, _)) = dimensions.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite(*name));
        }

        let (w, h) = (self.inner_width(), self.inner_height());
        if !(w > 0.0 && h > 0.0) {
            return Err(ConfigError::EmptyPlotArea {
                width: w,
                height: h,
            });
        }
        if self.legend.stops < 2 {
            return Err(ConfigError::TooFewStops(self.legend.stops));
        }
        if !(self.legend.width > 0.0 && self.legend.height > 0.0) {
            return Err(ConfigError::EmptyLegend {
                width: self.legend.width,
                height: self.legend.height,
            });
        }
        if !(0.0..1.0).contains(&self.padding) {
            return Err(ConfigError::BadPadding(self.padding));
        }
        Ok(())
    }
}
