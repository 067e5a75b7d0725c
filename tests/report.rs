use course_heatmap::data::{load_dataset, LoadError};
use course_heatmap::{generate_report, ChartConfig, OutputFormat};

use std::io::Write;
use tempfile::NamedTempFile;

fn dataset(json: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(json.as_bytes()).unwrap();
    f
}

#[test]
fn renders_html_report_from_file() {
    let f = dataset(
        r#"[{"Course":"CS101","approved_rate":0.2},{"Course":"CS102","approved_rate":0.9}]"#,
    );
    let html = generate_report(f.path(), &ChartConfig::default(), OutputFormat::Html).unwrap();
    assert_eq!(html.matches(r#"<rect class="cell""#).count(), 2);
    assert!(html.contains("mouseover"));
    assert!(html.contains("mouseout"));
    assert!(html.contains("Course: CS101\nApproved Rate: 0.2"));
    assert!(html.contains(r#"Course:\u003c/strong> CS102"#));
}

#[test]
fn malformed_rows_are_skipped_not_fatal() {
    let f = dataset(
        r#"[{"Course":"CS101","approved_rate":"n/a"},{"Course":"CS102","approved_rate":0.9}]"#,
    );
    let svg = generate_report(f.path(), &ChartConfig::default(), OutputFormat::Svg).unwrap();
    assert_eq!(svg.matches(r#"<rect class="cell""#).count(), 1);
    assert!(!svg.contains(">CS101</text>"));
    assert!(svg.contains(">CS102</text>"));
}

#[test]
fn overflowing_rate_skips_only_that_row() {
    let f = dataset(
        r#"[{"Course":"CS101","approved_rate":1e400},{"Course":"CS102","approved_rate":0.9}]"#,
    );
    let ds = load_dataset(f.path()).unwrap();
    assert_eq!(ds.skipped, 1);
    assert_eq!(ds.records.len(), 1);
    assert_eq!(ds.records[0].course, "CS102");
}

#[test]
fn empty_dataset_renders_axes_only() {
    let f = dataset("[]");
    let json = generate_report(f.path(), &ChartConfig::default(), OutputFormat::Json).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["cells"].as_array().unwrap().len(), 0);
    assert_eq!(v["courses"].as_array().unwrap().len(), 0);
    assert_eq!(v["x_axis"]["ticks"][0]["label"], "Approved");
    assert_eq!(v["y_axis"]["orient"], "left");
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let err = generate_report(&missing, &ChartConfig::default(), OutputFormat::Html).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LoadError>(),
        Some(LoadError::Read { .. })
    ));
}

#[test]
fn garbage_file_is_an_error() {
    let f = dataset("this is not json");
    let err = load_dataset(f.path()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LoadError>(),
        Some(LoadError::Parse { .. })
    ));
}

#[test]
fn rendering_twice_is_identical() {
    let f = dataset(
        r#"[{"Course":"A","approved_rate":0.1},{"Course":"B","approved_rate":0.5},{"Course":"A","approved_rate":0.7}]"#,
    );
    let cfg = ChartConfig::default();
    for format in [OutputFormat::Html, OutputFormat::Svg, OutputFormat::Json] {
        let first = generate_report(f.path(), &cfg, format).unwrap();
        let second = generate_report(f.path(), &cfg, format).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn config_file_overrides_defaults() {
    let mut cfg_file = NamedTempFile::new().unwrap();
    cfg_file
        .write_all(br#"{"legend": {"stops": 50}, "palette": "inferno", "title": "Spring term"}"#)
        .unwrap();
    let cfg = ChartConfig::from_file(cfg_file.path()).unwrap();

    let f = dataset(r#"[{"Course":"CS101","approved_rate":0.0}]"#);
    let svg = generate_report(f.path(), &cfg, OutputFormat::Svg).unwrap();
    assert_eq!(svg.matches("<stop ").count(), 50);
    assert!(svg.contains("<title>Spring term</title>"));
    assert!(svg.contains(r##"fill="#000004""##));
}

#[test]
fn bad_config_aborts_rendering() {
    let cfg = ChartConfig {
        height: 100.0,
        ..Default::default()
    };
    let f = dataset(r#"[{"Course":"CS101","approved_rate":0.5}]"#);
    assert!(generate_report(f.path(), &cfg, OutputFormat::Html).is_err());
}
