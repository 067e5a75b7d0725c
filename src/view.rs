//! Chart model: scales, axes, cells and legend computed from the records.
//!
//! Everything the renderers draw is resolved here into plain numbers and
//! strings, so output formats never recompute geometry.

use crate::color::ColorScale;
use crate::config::{ChartConfig, Margin};
use crate::data::{CategoryDomain, Record};
use crate::diagnostics;
use crate::scale::{BandScale, LinearScale};
use crate::tooltip::{TooltipContent, TooltipOffset, TOOLTIP_OFFSET};
use crate::Result;

use anyhow::Context;
use serde::Serialize;

pub const GRADIENT_ID: &str = "color-gradient";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrient {
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickView {
    /// Offset along the axis, relative to the axis origin.
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisView {
    pub orient: AxisOrient,
    /// Translation of the axis origin inside its parent group.
    pub x: f64,
    pub y: f64,
    /// Extent of the domain line.
    pub range: [f64; 2],
    pub ticks: Vec<TickView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellView {
    pub index: usize,
    pub course: String,
    pub approved_rate: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub tooltip: TooltipContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    /// Percentage from 0 to 100.
    pub offset: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendView {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub gradient_id: String,
    pub stops: Vec<GradientStop>,
    pub axis: AxisView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalsView {
    pub records: usize,
    pub courses: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapView {
    pub title: String,
    pub palette: String,
    pub canvas: Size,
    pub margin: Margin,
    pub inner: Size,
    pub courses: Vec<String>,
    pub x_axis: AxisView,
    pub y_axis: AxisView,
    pub cells: Vec<CellView>,
    pub legend: LegendView,
    pub tooltip_offset: TooltipOffset,
    pub totals: TotalsView,
}

/// Build the chart model for `records`.
///
/// The result depends only on the inputs, so repeated calls produce equal
/// views. An empty record list yields axes and legend with no cells.
pub fn build_heatmap(records: &[Record], config: &ChartConfig) -> Result<HeatmapView> {
    config
        .validate()
        .with_context(|| diagnostics::error_message("invalid chart configuration"))?;

    let inner = Size {
        width: config.inner_width(),
        height: config.inner_height(),
    };

    let domain = CategoryDomain::from_records(records);
    let x_scale = BandScale::new(
        vec![config.column_label.clone()],
        [0.0, inner.width],
        config.padding,
    );
    let y_scale = BandScale::new(domain.labels().to_vec(), [0.0, inner.height], config.padding);
    let color = ColorScale::new(config.palette);

    let x_axis = AxisView {
        orient: AxisOrient::Bottom,
        x: 0.0,
        y: inner.height,
        range: x_scale.range(),
        ticks: band_ticks(&x_scale),
    };
    let y_axis = AxisView {
        orient: AxisOrient::Left,
        x: 0.0,
        y: 0.0,
        range: y_scale.range(),
        ticks: band_ticks(&y_scale),
    };

    let x = x_scale.position(&config.column_label).unwrap_or(0.0);
    let mut cells = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let Some(y) = y_scale.position(&record.course) else {
            continue;
        };
        cells.push(CellView {
            index,
            course: record.course.clone(),
            approved_rate: record.approved_rate,
            x,
            y,
            width: x_scale.bandwidth(),
            height: y_scale.bandwidth(),
            fill: color.color(record.approved_rate).to_hex(),
            tooltip: TooltipContent::new(&record.course, record.approved_rate),
        });
    }

    let legend = build_legend(config, &color, inner);

    Ok(HeatmapView {
        title: config.title.clone(),
        palette: config.palette.name().to_string(),
        canvas: Size {
            width: config.width,
            height: config.height,
        },
        margin: config.margin,
        inner,
        totals: TotalsView {
            records: cells.len(),
            courses: domain.len(),
        },
        courses: domain.into_labels(),
        x_axis,
        y_axis,
        cells,
        legend,
        tooltip_offset: TOOLTIP_OFFSET,
    })
}

fn band_ticks(scale: &BandScale) -> Vec<TickView> {
    scale
        .domain()
        .iter()
        .filter_map(|label| {
            scale.center(label).map(|position| TickView {
                position,
                label: label.clone(),
            })
        })
        .collect()
}

fn build_legend(config: &ChartConfig, color: &ColorScale, inner: Size) -> LegendView {
    let legend = &config.legend;
    let stops = color
        .samples(legend.stops)
        .into_iter()
        .map(|(t, c)| GradientStop {
            offset: t * 100.0,
            color: c.to_hex(),
        })
        .collect();

    let scale = LinearScale::new(color.domain(), [0.0, legend.height]);
    let ticks = scale
        .ticks(legend.ticks)
        .into_iter()
        .map(|v| TickView {
            position: scale.scale(v),
            label: scale.tick_format(legend.ticks, v),
        })
        .collect();

    LegendView {
        x: inner.width + legend.offset,
        y: (inner.height - legend.height) / 2.0,
        width: legend.width,
        height: legend.height,
        gradient_id: GRADIENT_ID.to_string(),
        stops,
        axis: AxisView {
            orient: AxisOrient::Right,
            x: legend.width,
            y: 0.0,
            range: scale.range(),
            ticks,
        },
    }
}
