//! Course approval-rate heatmap report generator.
//!
//! Reads a JSON array of `{"Course": .., "approved_rate": ..}` records and
//! renders a one-column heatmap (one row per course) with a colorbar legend
//! and hover tooltips.
//!
//! Pipeline: [`data::load_dataset`] → [`view::build_heatmap`] →
//! [`render::render`].

pub mod color;
pub mod config;
pub mod data;
pub mod diagnostics;
pub mod render;
pub mod scale;
pub mod tooltip;
pub mod view;

pub type Result<T> = anyhow::Result<T>;

use std::path::Path;

pub use config::ChartConfig;
pub use data::Record;
pub use render::OutputFormat;
pub use view::HeatmapView;

/// Load `data_path` and render it. Nothing is returned unless the whole
/// pipeline succeeds.
pub fn generate_report(
    data_path: impl AsRef<Path>,
    config: &ChartConfig,
    format: OutputFormat,
) -> Result<String> {
    let dataset = data::load_dataset(&data_path)?;
    diagnostics::info(format!(
        "Loaded {} records from {} ({} skipped)",
        dataset.records.len(),
        data_path.as_ref().display(),
        dataset.skipped
    ));

    let view = view::build_heatmap(&dataset.records, config)?;
    render::render(&view, format)
}
