use super::{escape, render_svg};
use crate::view::HeatmapView;
use crate::Result;

/// Render a self-contained HTML page: inline SVG, a hidden tooltip element,
/// and the chart model embedded as JSON for the hover handlers.
///
/// The template is filled by placeholder substitution rather than `format!()`
/// because the CSS and JS bodies are full of `{}`.
pub fn render_html(view: &HeatmapView) -> Result<String> {
    // `<` is escaped so course names can never close the script element.
    let json = serde_json::to_string(view)?.replace('<', "\\u003c");
    let svg = render_svg(view)?;
    let title = escape(&view.title);

    Ok(fill_template(
        TEMPLATE,
        &[("__TITLE__", &title), ("__SVG__", &svg), ("__DATA__", &json)],
    ))
}

/// Single left-to-right pass, so substituted text is never rescanned.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    loop {
        let next = values
            .iter()
            .filter_map(|(key, value)| rest.find(key).map(|at| (at, *key, *value)))
            .min_by_key(|(at, _, _)| *at);
        match next {
            Some((at, key, value)) => {
                out.push_str(&rest[..at]);
                out.push_str(value);
                rest = &rest[at + key.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>__TITLE__</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; }
  header { padding: 12px 16px; border-bottom: 1px solid #ddd; }
  h1 { font-size: 18px; margin: 0; }
  .chart { padding: 12px 16px; }
  .cell { cursor: pointer; }
  .cell:hover { stroke: #111; stroke-width: 1; }
  .tooltip {
    position: absolute;
    display: none;
    pointer-events: none;
    padding: 6px 8px;
    background: #fff;
    border: 1px solid #ccc;
    border-radius: 4px;
    font-size: 12px;
    box-shadow: 0 1px 4px rgba(0, 0, 0, 0.15);
  }
</style>
</head>
<body>
<header>
  <h1>__TITLE__</h1>
</header>

<div class="chart">
__SVG__
</div>
<div class="tooltip"></div>

<script>
// Embedded chart model (JSON object literal)
const CHART = __DATA__;

const tooltip = document.querySelector(".tooltip");

for (const el of document.querySelectorAll("rect.cell")) {
  const cell = CHART.cells[Number(el.dataset.cell)];
  if (!cell) continue;

  // The SVG <title> would show a second, native tooltip.
  const native = el.querySelector("title");
  if (native) native.remove();

  el.addEventListener("mouseover", (event) => {
    tooltip.style.display = "block";
    tooltip.innerHTML = cell.tooltip.html;
    tooltip.style.left = (event.pageX + CHART.tooltip_offset.dx) + "px";
    tooltip.style.top = (event.pageY + CHART.tooltip_offset.dy) + "px";
  });

  el.addEventListener("mouseout", () => {
    tooltip.style.display = "none";
  });
}
</script>
</body>
</html>
"#;
