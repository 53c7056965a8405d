// File: crates/scatter-core/tests/ticks.rs
// Purpose: Tick placement stays inside the domain and uses the expected steps/labels.

use scatter_core::scale::{race_time, seconds_of, year_start, TimeScale};
use scatter_core::ticks::{tick_step, time_interval, time_ticks, year_ticks};

fn years(a: i32, b: i32) -> TimeScale {
    TimeScale::new((year_start(a).unwrap(), year_start(b).unwrap()), (0.0, 700.0))
}

fn minutes(a: u32, b: u32) -> TimeScale {
    TimeScale::new((race_time(a * 60), race_time(b * 60)), (0.0, 500.0))
}

#[test]
fn nice_steps() {
    assert_eq!(tick_step(0.0, 10.0, 10), 1.0);
    assert_eq!(tick_step(1993.0, 2016.0, 10), 2.0);
    assert_eq!(tick_step(0.0, 100.0, 10), 10.0);
    assert_eq!(tick_step(0.0, 45.0, 10), 5.0);
}

#[test]
fn short_year_span_ticks_every_year() {
    let ticks = year_ticks(&years(1993, 1996), 10);
    let labels: Vec<_> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["1993", "1994", "1995", "1996"]);
    assert_eq!(ticks[0].offset, 0.0);
    assert_eq!(ticks[3].offset, 700.0);
}

#[test]
fn long_year_span_uses_even_years_within_domain() {
    let ticks = year_ticks(&years(1993, 2016), 10);
    assert!(ticks.len() >= 2);
    for t in &ticks {
        let y: i32 = t.label.parse().unwrap();
        assert_eq!(y % 2, 0);
        assert!((1993..=2016).contains(&y));
    }
    assert_eq!(ticks.first().unwrap().label, "1994");
    assert_eq!(ticks.last().unwrap().label, "2016");
}

#[test]
fn time_interval_picks_nearest_ratio() {
    assert_eq!(time_interval(120, 10), 15);
    assert_eq!(time_interval(240, 10), 30);
    assert_eq!(time_interval(60, 10), 5);
    assert_eq!(time_interval(600, 10), 60);
}

#[test]
fn time_ticks_are_mm_ss_and_bounded() {
    let scale = minutes(35, 37);
    let ticks = time_ticks(&scale, 10);
    assert_eq!(ticks.len(), 9);
    assert_eq!(ticks.first().unwrap().label, "35:00");
    assert_eq!(ticks[1].label, "35:15");
    assert_eq!(ticks.last().unwrap().label, "37:00");
    for t in &ticks {
        assert!(scale.contains(t.value));
        let (m, s) = t.label.split_once(':').unwrap();
        assert_eq!((m.len(), s.len()), (2, 2));
        assert_eq!(t.offset, scale.to_px(t.value));
    }
}

#[test]
fn time_ticks_align_to_interval() {
    let scale = minutes(36, 40);
    for t in time_ticks(&scale, 10) {
        assert_eq!(seconds_of(t.value) % 30, 0);
    }
}

#[test]
fn one_minute_domain_has_several_ticks() {
    let ticks = time_ticks(&minutes(36, 37), 10);
    assert!(ticks.len() >= 2);
    assert_eq!(ticks[1].label, "36:05");
}
