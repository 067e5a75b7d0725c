use course_heatmap::color::{ColorScale, Palette};
use course_heatmap::data::Record;
use course_heatmap::view::build_heatmap;
use course_heatmap::ChartConfig;

use proptest::prelude::*;
use std::collections::HashSet;

fn records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(("[A-Z]{2}[0-9]{1,2}", 0.0f64..=1.0), 0..40)
        .prop_map(|rows| rows.into_iter().map(|(c, r)| Record::new(c, r)).collect())
}

proptest! {
    #[test]
    fn domain_size_is_distinct_course_count(rows in records()) {
        let view = build_heatmap(&rows, &ChartConfig::default()).unwrap();
        let distinct: HashSet<&str> = rows.iter().map(|r| r.course.as_str()).collect();
        prop_assert_eq!(view.courses.len(), distinct.len());
        prop_assert_eq!(view.cells.len(), rows.len());
        prop_assert_eq!(view.y_axis.ticks.len(), distinct.len());
    }

    #[test]
    fn fill_depends_only_on_rate(rows in records()) {
        let view = build_heatmap(&rows, &ChartConfig::default()).unwrap();
        let scale = ColorScale::new(Palette::Viridis);
        for cell in &view.cells {
            prop_assert_eq!(&cell.fill, &scale.color(cell.approved_rate).to_hex());
        }
    }

    #[test]
    fn same_rate_same_color_across_courses(rate in 0.0f64..=1.0, a in "[a-z]{3}", b in "[a-z]{3}") {
        let rows = vec![Record::new(a, rate), Record::new(b, rate)];
        let view = build_heatmap(&rows, &ChartConfig::default()).unwrap();
        prop_assert_eq!(&view.cells[0].fill, &view.cells[1].fill);
    }

    #[test]
    fn legend_stops_are_ordered_and_match_scale(stops in 2usize..300) {
        let mut cfg = ChartConfig::default();
        cfg.legend.stops = stops;
        let view = build_heatmap(&[], &cfg).unwrap();
        let scale = ColorScale::new(cfg.palette);

        let legend = &view.legend.stops;
        prop_assert_eq!(legend.len(), stops);
        prop_assert_eq!(legend[0].offset, 0.0);
        prop_assert_eq!(legend[stops - 1].offset, 100.0);
        for pair in legend.windows(2) {
            prop_assert!(pair[0].offset < pair[1].offset);
        }
        for (i, stop) in legend.iter().enumerate() {
            let t = i as f64 / (stops - 1) as f64;
            prop_assert_eq!(&stop.color, &scale.color(t).to_hex());
        }
    }

    #[test]
    fn cells_stay_inside_plot_area(rows in records()) {
        let cfg = ChartConfig::default();
        let view = build_heatmap(&rows, &cfg).unwrap();
        for cell in &view.cells {
            prop_assert!(cell.x >= 0.0 && cell.x + cell.width <= cfg.inner_width() + 1e-9);
            prop_assert!(cell.y >= 0.0 && cell.y + cell.height <= cfg.inner_height() + 1e-9);
        }
    }
}
