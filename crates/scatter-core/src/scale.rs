// File: crates/scatter-core/src/scale.rs
// Summary: Time scales mapping calendar years and race times to plot pixels.

use chrono::{Duration, NaiveDate, NaiveDateTime, SecondsFormat};

use crate::error::RenderError;
use crate::record::Record;

/// Continuous mapping from a datetime domain to a pixel range.
///
/// Interpolates on millisecond timestamps, so a domain spanning leap years is
/// not uniform per calendar year.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    d0: NaiveDateTime,
    d1: NaiveDateTime,
    r0: f64,
    r1: f64,
}

impl TimeScale {
    /// Contract: `d0 != d1`.
    pub fn new(domain: (NaiveDateTime, NaiveDateTime), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    pub fn domain(&self) -> (NaiveDateTime, NaiveDateTime) { (self.d0, self.d1) }
    pub fn range(&self) -> (f64, f64) { (self.r0, self.r1) }

    #[inline]
    pub fn to_px(&self, t: NaiveDateTime) -> f64 {
        let a = millis(self.d0);
        let span = (millis(self.d1) - a).max(1.0);
        self.r0 + (millis(t) - a) / span * (self.r1 - self.r0)
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> NaiveDateTime {
        let a = millis(self.d0);
        let span = millis(self.d1) - a;
        let frac = if self.r1 == self.r0 { 0.0 } else { (px - self.r0) / (self.r1 - self.r0) };
        self.d0 + Duration::milliseconds((frac * span).round() as i64)
    }

    /// True when `t` lies within the domain, endpoints included.
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        let (lo, hi) = if self.d0 <= self.d1 { (self.d0, self.d1) } else { (self.d1, self.d0) };
        t >= lo && t <= hi
    }
}

#[inline]
fn millis(t: NaiveDateTime) -> f64 {
    t.and_utc().timestamp_millis() as f64
}

/// Reference date that race times are anchored to (a bare `%M:%S` parse).
pub fn time_origin() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1900, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Jan 1, 00:00 of `year`, if representable.
pub fn year_start(year: i32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Race time as a datetime on the reference date.
pub fn race_time(seconds: u32) -> NaiveDateTime {
    time_origin() + Duration::seconds(i64::from(seconds))
}

/// Whole seconds between the reference date and `t`.
pub fn seconds_of(t: NaiveDateTime) -> i64 {
    (t - time_origin()).num_seconds()
}

/// Value written to a mark's `data-yvalue`: RFC 3339 text of the race time.
pub fn race_time_attr(seconds: u32) -> String {
    race_time(seconds).and_utc().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// `MM:SS` label counted in total minutes from the origin, so `60:30` stays `60:30`.
pub fn min_sec_label(t: NaiveDateTime) -> String {
    let secs = seconds_of(t);
    format!("{:02}:{:02}", secs.div_euclid(60), secs.rem_euclid(60))
}

/// X domain: one year of padding on each side of the data.
pub fn x_domain(records: &[Record]) -> Result<(NaiveDateTime, NaiveDateTime), RenderError> {
    let (lo, hi) = records
        .iter()
        .fold(None, |acc: Option<(i32, i32)>, r| match acc {
            None => Some((r.year, r.year)),
            Some((lo, hi)) => Some((lo.min(r.year), hi.max(r.year))),
        })
        .ok_or_else(|| RenderError::InvalidInput("no records to render".into()))?;
    let start = lo
        .checked_sub(1)
        .and_then(year_start)
        .ok_or_else(|| RenderError::InvalidInput(format!("year {lo} is out of range")))?;
    let end = hi
        .checked_add(1)
        .and_then(year_start)
        .ok_or_else(|| RenderError::InvalidInput(format!("year {hi} is out of range")))?;
    Ok((start, end))
}

/// Y domain: minimum time floored to the minute, maximum floored plus one minute.
pub fn y_domain(records: &[Record]) -> Result<(NaiveDateTime, NaiveDateTime), RenderError> {
    let (lo, hi) = records
        .iter()
        .fold(None, |acc: Option<(u32, u32)>, r| match acc {
            None => Some((r.time_seconds, r.time_seconds)),
            Some((lo, hi)) => Some((lo.min(r.time_seconds), hi.max(r.time_seconds))),
        })
        .ok_or_else(|| RenderError::InvalidInput("no records to render".into()))?;
    let start = lo / 60 * 60;
    let end = (hi / 60 + 1) * 60;
    Ok((race_time(start), race_time(end)))
}

/// The scale pair shared by axes, marks and hover handling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScales {
    pub x: TimeScale,
    pub y: TimeScale,
}

impl ChartScales {
    /// Compute both scales for a plot of `width` x `height` pixels.
    ///
    /// The y range runs from 0 at the top to `height`: the fastest time sits
    /// nearest the title, not the x axis.
    pub fn compute(records: &[Record], width: f64, height: f64) -> Result<Self, RenderError> {
        let x = TimeScale::new(x_domain(records)?, (0.0, width));
        let y = TimeScale::new(y_domain(records)?, (0.0, height));
        Ok(Self { x, y })
    }

    /// Horizontal pixel of a year (Jan 1).
    pub fn x_px(&self, year: i32) -> Option<f64> {
        year_start(year).map(|t| self.x.to_px(t))
    }

    /// Vertical pixel of a race time.
    pub fn y_px(&self, seconds: u32) -> f64 {
        self.y.to_px(race_time(seconds))
    }
}
