use super::escape;
use crate::view::{AxisOrient, AxisView, CellView, HeatmapView, LegendView};
use crate::Result;

use std::fmt::Write;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

/// Render the chart as a standalone SVG document.
pub fn render_svg(view: &HeatmapView) -> Result<String> {
    let mut out = String::new();
    let (w, h) = (view.canvas.width, view.canvas.height);

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#
    )?;
    writeln!(out, "<title>{}</title>", escape(&view.title))?;
    write_gradient(&mut out, &view.legend)?;

    writeln!(
        out,
        r#"<g transform="translate({},{})">"#,
        view.margin.left, view.margin.top
    )?;
    write_axis(&mut out, &view.x_axis, "axis axis-x")?;
    write_axis(&mut out, &view.y_axis, "axis axis-y")?;

    writeln!(out, r#"<g class="cells">"#)?;
    for (i, cell) in view.cells.iter().enumerate() {
        write_cell(&mut out, i, cell)?;
    }
    writeln!(out, "</g>")?;

    write_legend(&mut out, &view.legend)?;
    writeln!(out, "</g>")?;
    writeln!(out, "</svg>")?;
    Ok(out)
}

fn write_gradient(out: &mut String, legend: &LegendView) -> Result<()> {
    writeln!(out, "<defs>")?;
    writeln!(
        out,
        r#"<linearGradient id="{}" x1="0%" x2="0%" y1="0%" y2="100%">"#,
        escape(&legend.gradient_id)
    )?;
    for stop in &legend.stops {
        writeln!(
            out,
            r#"<stop offset="{}%" stop-color="{}"/>"#,
            stop.offset, stop.color
        )?;
    }
    writeln!(out, "</linearGradient>")?;
    writeln!(out, "</defs>")?;
    Ok(())
}

fn write_cell(out: &mut String, i: usize, cell: &CellView) -> Result<()> {
    writeln!(
        out,
        r#"<rect class="cell" data-cell="{}" x="{}" y="{}" width="{}" height="{}" fill="{}"><title>{}</title></rect>"#,
        i,
        cell.x,
        cell.y,
        cell.width,
        cell.height,
        cell.fill,
        escape(&cell.tooltip.text)
    )?;
    Ok(())
}

fn write_legend(out: &mut String, legend: &LegendView) -> Result<()> {
    writeln!(
        out,
        r#"<g class="legend" transform="translate({},{})">"#,
        legend.x, legend.y
    )?;
    writeln!(
        out,
        r#"<rect width="{}" height="{}" style="fill: url(#{})"/>"#,
        legend.width,
        legend.height,
        escape(&legend.gradient_id)
    )?;
    write_axis(out, &legend.axis, "axis axis-legend")?;
    writeln!(out, "</g>")?;
    Ok(())
}

/// Domain line plus one tick mark and label per tick, in the layout of the
/// axis orientation.
fn write_axis(out: &mut String, axis: &AxisView, class: &str) -> Result<()> {
    let [r0, r1] = axis.range;
    let k = TICK_SIZE;
    let domain = match axis.orient {
        AxisOrient::Bottom => format!("M{r0},{k}V0H{r1}V{k}"),
        AxisOrient::Left => format!("M-{k},{r0}H0V{r1}H-{k}"),
        AxisOrient::Right => format!("M{k},{r0}H0V{r1}H{k}"),
    };

    writeln!(
        out,
        r#"<g class="{}" transform="translate({},{})" fill="none" font-size="10">"#,
        class, axis.x, axis.y
    )?;
    writeln!(
        out,
        r#"<path class="domain" stroke="currentColor" d="{}"/>"#,
        domain
    )?;

    let label_at = TICK_SIZE + TICK_PADDING;
    for tick in &axis.ticks {
        let label = escape(&tick.label);
        let p = tick.position;
        match axis.orient {
            AxisOrient::Bottom => writeln!(
                out,
                r#"<g class="tick" transform="translate({p},0)"><line stroke="currentColor" y2="{k}"/><text fill="currentColor" y="{label_at}" dy="0.71em" text-anchor="middle">{label}</text></g>"#
            )?,
            AxisOrient::Left => writeln!(
                out,
                r#"<g class="tick" transform="translate(0,{p})"><line stroke="currentColor" x2="-{k}"/><text fill="currentColor" x="-{label_at}" dy="0.32em" text-anchor="end">{label}</text></g>"#
            )?,
            AxisOrient::Right => writeln!(
                out,
                r#"<g class="tick" transform="translate(0,{p})"><line stroke="currentColor" x2="{k}"/><text fill="currentColor" x="{label_at}" dy="0.32em" text-anchor="start">{label}</text></g>"#
            )?,
        }
    }
    writeln!(out, "</g>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;
    use crate::data::Record;
    use crate::view::build_heatmap;

    fn svg_for(records: &[Record]) -> String {
        let view = build_heatmap(records, &ChartConfig::default()).unwrap();
        render_svg(&view).unwrap()
    }

    #[test]
    fn one_rect_per_record() {
        let svg = svg_for(&[Record::new("CS101", 0.2), Record::new("CS102", 0.9)]);
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches(r#"<rect class="cell""#).count(), 2);
        assert!(svg.contains(r##"fill="#414487""##));
        assert!(svg.contains("Course: CS102\nApproved Rate: 0.9"));
    }

    #[test]
    fn empty_chart_still_has_axes() {
        let svg = svg_for(&[]);
        assert_eq!(svg.matches(r#"<rect class="cell""#).count(), 0);
        assert!(svg.contains(r#"class="axis axis-x""#));
        assert!(svg.contains(r#"class="axis axis-y""#));
        assert!(svg.contains(r#"d="M-6,0H0V450H-6""#));
        assert!(svg.contains(">Approved</text>"));
    }

    #[test]
    fn gradient_has_configured_stop_count() {
        let svg = svg_for(&[]);
        assert_eq!(svg.matches("<stop ").count(), 100);
        assert!(svg.contains(r##"<stop offset="0%" stop-color="#440154"/>"##));
        assert!(svg.contains(r##"<stop offset="100%" stop-color="#fde725"/>"##));
        assert!(svg.contains("url(#color-gradient)"));
    }

    #[test]
    fn course_names_are_escaped() {
        let svg = svg_for(&[Record::new("R&D <lab>", 0.5)]);
        assert!(svg.contains("R&amp;D &lt;lab&gt;"));
        assert!(!svg.contains("<lab>"));
    }
}
