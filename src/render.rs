//! Report rendering (HTML page, standalone SVG, or the chart model as JSON).

mod html;
mod svg;

use crate::view::HeatmapView;
use crate::Result;

pub use html::render_html;
pub use svg::render_svg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Self-contained page with inline SVG and hover tooltips.
    #[default]
    Html,
    /// Standalone SVG; tooltips fall back to `<title>` elements.
    Svg,
    /// The computed chart model.
    Json,
}

/// Render `view` in the requested format. Every call builds a new document
/// from scratch.
pub fn render(view: &HeatmapView, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Html => render_html(view),
        OutputFormat::Svg => render_svg(view),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
    }
}

/// Escape text for HTML/SVG content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
