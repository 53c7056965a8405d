// File: crates/scatter-core/tests/render_contract.rs
// Purpose: The rendered DOM exposes the ids, classes and data attributes external checks rely on,
//          and every dot lines up with the axis scales.

use chrono::DateTime;
use scatter_core::chart::MAX_RACE_SECONDS;
use scatter_core::legend::legend_size;
use scatter_core::scale::{race_time, year_start};
use scatter_core::{ChartRenderer, Element, Record, RenderError, RenderOptions, RenderedChart};

fn scenario() -> Vec<Record> {
    vec![
        Record::with_time(1994, "36:55").unwrap().named("Rider A", "ITA"),
        Record::with_time(1995, "35:10").unwrap().named("Rider B", "USA").with_allegation("Admitted"),
    ]
}

/// A season-style dataset spanning two decades with a mix of categories.
fn season() -> Vec<Record> {
    (0..35)
        .map(|i| {
            let year = 1994 + (i % 22);
            let secs = 36 * 60 + 50 + (i as u32 * 7) % 180;
            let r = Record::new(year, secs).named(format!("Rider {i}"), "FRA");
            if i % 3 == 0 { r.with_allegation("Alleged") } else { r }
        })
        .collect()
}

fn render(records: &[Record]) -> RenderedChart {
    ChartRenderer::new(RenderOptions::default())
        .render_detached(records)
        .expect("render should succeed")
}

fn num(el: &Element, attr: &str) -> f64 {
    el.get_attr(attr).unwrap().parse().unwrap()
}

#[test]
fn scenario_domains_marks_and_legend() {
    let chart = render(&scenario());
    let s = chart.scales();
    assert_eq!(s.x.domain(), (year_start(1993).unwrap(), year_start(1996).unwrap()));
    assert_eq!(s.y.domain(), (race_time(35 * 60), race_time(37 * 60)));
    assert_eq!(chart.root().find_all_by_class("dot").len(), 2);
    let legend = chart.root().find_by_id("legend").expect("legend");
    let items = legend.find_all_by_class("legend-item");
    assert_eq!(items.len(), 2);
    for item in items {
        assert!(!item.text_content().trim().is_empty());
        assert_eq!(item.find_all_by_tag("rect").len(), 1);
    }
}

#[test]
fn required_ids_exist() {
    let chart = render(&scenario());
    for id in ["title", "x-axis", "y-axis", "legend", "tooltip"] {
        assert!(chart.root().find_by_id(id).is_some(), "missing #{id}");
    }
    let title = chart.root().find_by_id("title").unwrap();
    assert_eq!(title.text_content(), "Doping in Professional Bicycle Racing");
}

#[test]
fn one_dot_per_record() {
    let records = season();
    let chart = render(&records);
    assert_eq!(chart.root().find_all_by_class("dot").len(), records.len());
    assert_eq!(chart.marks().len(), records.len());
}

#[test]
fn dots_align_with_scales() {
    let chart = render(&season());
    let s = chart.scales();
    for dot in chart.root().find_all_by_class("dot") {
        let year: i32 = dot.get_attr("data-xvalue").unwrap().parse().unwrap();
        assert_eq!(s.x_px(year).unwrap(), num(dot, "cx"));

        let y = DateTime::parse_from_rfc3339(dot.get_attr("data-yvalue").unwrap())
            .expect("data-yvalue is a timestamp")
            .naive_utc();
        assert_eq!(s.y.to_px(y), num(dot, "cy"));
    }
}

#[test]
fn x_ticks_within_padded_years() {
    let records = season();
    let chart = render(&records);
    let lo = records.iter().map(|r| r.year).min().unwrap() - 1;
    let hi = records.iter().map(|r| r.year).max().unwrap() + 1;
    let axis = chart.root().find_by_id("x-axis").unwrap();
    let labels: Vec<i32> = axis
        .find_all_by_class("tick")
        .iter()
        .map(|t| t.text_content().parse().unwrap())
        .collect();
    assert!(labels.len() >= 2);
    assert!(labels.iter().all(|y| (lo..=hi).contains(y)));
}

#[test]
fn y_ticks_within_rounded_minutes() {
    let records = season();
    let chart = render(&records);
    let lo = records.iter().map(|r| r.time_seconds).min().unwrap() / 60 * 60;
    let hi = (records.iter().map(|r| r.time_seconds).max().unwrap() / 60 + 1) * 60;
    let axis = chart.root().find_by_id("y-axis").unwrap();
    let ticks = axis.find_all_by_class("tick");
    assert!(ticks.len() >= 2);
    for t in ticks {
        let label = t.text_content();
        let (m, s) = label.split_once(':').unwrap();
        assert_eq!((m.len(), s.len()), (2, 2), "label {label}");
        let secs = m.parse::<u32>().unwrap() * 60 + s.parse::<u32>().unwrap();
        assert!((lo..=hi).contains(&secs), "{label} outside domain");
    }
}

#[test]
fn tick_positions_match_dot_positions() {
    let chart = render(&scenario());
    // Tick "1995" and the 1995 dot share the same x pixel.
    let tick = chart
        .x_axis()
        .ticks
        .iter()
        .find(|t| t.label == "1995")
        .expect("1995 tick");
    let dot = &chart.marks()[1];
    assert_eq!(tick.offset, dot.cx);
}

#[test]
fn categories_have_distinct_encodings() {
    let chart = render(&scenario());
    let dots = chart.root().find_all_by_class("dot");
    assert_ne!(dots[0].get_attr("r"), dots[1].get_attr("r"));
    assert_ne!(dots[0].get_attr("fill"), dots[1].get_attr("fill"));
}

#[test]
fn single_category_legend_has_one_entry() {
    let chart = render(&[Record::new(2001, 2300), Record::new(2002, 2310)]);
    assert_eq!(chart.legend().len(), 1);
    assert_eq!(chart.root().find_all_by_class("legend-item").len(), 1);
}

#[test]
fn legend_does_not_overlap_y_axis_labels() {
    let chart = render(&season());
    let legend = chart.root().find_by_id("legend").unwrap();
    let transform = legend.get_attr("transform").unwrap();
    let x: f64 = transform
        .trim_start_matches("translate(")
        .split(',')
        .next()
        .unwrap()
        .parse()
        .unwrap();
    assert!(x > 0.0, "legend starts left of the plot at {x}");
}

#[test]
fn empty_input_fails_closed() {
    let renderer = ChartRenderer::new(RenderOptions::default());
    match renderer.render_detached(&[]) {
        Err(RenderError::InvalidInput(_)) => {}
        other => panic!("expected InvalidInput, got {:?}", other.map(|c| c.marks().len())),
    }
}

#[test]
fn out_of_range_year_fails_closed() {
    let renderer = ChartRenderer::new(RenderOptions::default());
    let err = renderer.render_detached(&[Record::new(i32::MAX, 2200)]).err();
    assert!(matches!(err, Some(RenderError::InvalidInput(_))));
}

#[test]
fn race_time_past_the_day_fails_closed() {
    let renderer = ChartRenderer::new(RenderOptions::default());
    let err = renderer
        .render_detached(&[Record::new(2000, 2200), Record::new(2001, MAX_RACE_SECONDS + 1)])
        .err();
    assert!(matches!(err, Some(RenderError::InvalidInput(_))));
    assert!(renderer.render_detached(&[Record::new(2001, MAX_RACE_SECONDS)]).is_ok());
}

#[test]
fn hour_plus_times_keep_counting_minutes() {
    let chart = render(&[
        Record::with_time(2000, "59:30").unwrap(),
        Record::with_time(2001, "60:30").unwrap(),
    ]);
    let labels: Vec<String> = chart.y_axis().ticks.iter().map(|t| t.label.clone()).collect();
    assert_eq!(labels.first().map(String::as_str), Some("59:00"));
    assert_eq!(labels.last().map(String::as_str), Some("61:00"));
    for label in &labels {
        let (m, s) = label.split_once(':').unwrap();
        let secs = m.parse::<u32>().unwrap() * 60 + s.parse::<u32>().unwrap();
        assert!((59 * 60..=61 * 60).contains(&secs), "{label} outside domain");
    }
}

#[test]
fn legend_moves_off_a_mark_under_it() {
    // The 1995 dot lands at the top centre of the plot.
    let records: Vec<Record> = (1990..=2000)
        .map(|y| if y == 1995 { Record::with_time(y, "35:00") } else { Record::with_time(y, "40:00") })
        .map(Option::unwrap)
        .collect();
    let chart = render(&records);
    let legend = chart.root().find_by_id("legend").unwrap();
    let transform = legend.get_attr("transform").unwrap();
    let (x, y) = transform
        .trim_start_matches("translate(")
        .trim_end_matches(')')
        .split_once(',')
        .unwrap();
    let (x, y): (f64, f64) = (x.parse().unwrap(), y.parse().unwrap());
    let (w, h) = legend_size(chart.legend());
    for m in chart.marks() {
        let dx = m.cx - m.cx.clamp(x, x + w);
        let dy = m.cy - m.cy.clamp(y, y + h);
        assert!(dx * dx + dy * dy > m.r * m.r, "legend covers mark {}", m.index);
    }
}

#[test]
fn render_is_idempotent() {
    let a = render(&season()).to_svg_markup();
    let b = render(&season()).to_svg_markup();
    assert_eq!(a, b);
}

#[test]
fn tooltip_starts_hidden_and_chart_scoped() {
    let chart = render(&scenario());
    let tip = chart.root().find_by_id("tooltip").unwrap();
    assert!(tip.get_attr("style").unwrap().contains("opacity: 0;"));
    assert!(tip.get_attr("data-year").is_none());
    assert!(!chart.tooltip().is_visible());
    // Two charts each carry their own tooltip.
    let other = render(&season());
    assert_eq!(other.root().find_all_by_tag("div").len(), 1);
}

#[test]
fn html_page_wraps_mount() {
    let page = render(&scenario()).to_html_page();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>Doping in Professional Bicycle Racing</title>"));
    assert!(page.contains("id=\"svg-canvas\""));
    assert!(page.contains("id=\"tooltip\""));
}
