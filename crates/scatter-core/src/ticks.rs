// File: crates/scatter-core/src/ticks.rs
// Summary: Tick placement for year and race-time axes.

use chrono::{Datelike, NaiveDateTime};

use crate::scale::{min_sec_label, race_time, seconds_of, year_start, TimeScale};

/// Default number of ticks an axis aims for.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// One tick: domain value, pixel offset along the axis, and label text.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: NaiveDateTime,
    pub offset: f64,
    pub label: String,
}

/// Candidate intervals for race-time ticks, in seconds.
const TIME_INTERVALS: [i64; 12] = [
    1, 5, 15, 30,
    60, 5 * 60, 15 * 60, 30 * 60,
    3600, 3 * 3600, 6 * 3600, 12 * 3600,
];

/// Nice step (1, 2 or 5 times a power of ten) that splits `[start, stop]`
/// into roughly `count` pieces.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let e10 = 50f64.sqrt();
    let e5 = 10f64.sqrt();
    let e2 = 2f64.sqrt();
    let step0 = (stop - start).abs() / count.max(1) as f64;
    if step0 <= 0.0 || !step0.is_finite() {
        return 1.0;
    }
    let mut step1 = 10f64.powf(step0.log10().floor());
    let error = step0 / step1;
    if error >= e10 {
        step1 *= 10.0;
    } else if error >= e5 {
        step1 *= 5.0;
    } else if error >= e2 {
        step1 *= 2.0;
    }
    if stop < start { -step1 } else { step1 }
}

/// Year ticks at Jan 1 of every `step`-th year inside the domain.
pub fn year_ticks(scale: &TimeScale, count: usize) -> Vec<Tick> {
    let (d0, d1) = ordered(scale.domain());
    let first_year = if year_start(d0.year()) == Some(d0) { d0.year() } else { d0.year() + 1 };
    let last_year = d1.year();
    let step = tick_step(f64::from(first_year), f64::from(last_year), count)
        .abs()
        .round()
        .max(1.0) as i32;

    let mut out = Vec::new();
    let mut year = first_year.div_euclid(step) * step;
    if year < first_year {
        year += step;
    }
    while year <= last_year {
        if let Some(t) = year_start(year) {
            if scale.contains(t) {
                out.push(Tick { value: t, offset: scale.to_px(t), label: year.to_string() });
            }
        }
        year += step;
    }
    out
}

/// Interval in seconds for race-time ticks over a span of `span` seconds.
pub fn time_interval(span: i64, count: usize) -> i64 {
    let target = span.abs() as f64 / count.max(1) as f64;
    let i = TIME_INTERVALS.partition_point(|&d| (d as f64) <= target);
    if i == TIME_INTERVALS.len() {
        let hours = tick_step(0.0, span.abs() as f64 / 3600.0, count).max(1.0);
        return hours.round() as i64 * 3600;
    }
    if i == 0 {
        return TIME_INTERVALS[0];
    }
    let (lo, hi) = (TIME_INTERVALS[i - 1], TIME_INTERVALS[i]);
    if target / (lo as f64) < (hi as f64) / target { lo } else { hi }
}

/// Race-time ticks at multiples of the chosen interval, labelled `MM:SS`.
pub fn time_ticks(scale: &TimeScale, count: usize) -> Vec<Tick> {
    let (d0, d1) = ordered(scale.domain());
    let (s0, s1) = (seconds_of(d0), seconds_of(d1));
    let step = time_interval(s1 - s0, count);

    let mut out = Vec::new();
    let mut s = s0.div_euclid(step) * step;
    if s < s0 {
        s += step;
    }
    while s <= s1 {
        if let Ok(secs) = u32::try_from(s) {
            let t = race_time(secs);
            out.push(Tick { value: t, offset: scale.to_px(t), label: min_sec_label(t) });
        }
        s += step;
    }
    out
}

fn ordered((a, b): (NaiveDateTime, NaiveDateTime)) -> (NaiveDateTime, NaiveDateTime) {
    if a <= b { (a, b) } else { (b, a) }
}
