// File: crates/scatter-core/src/record.rs
// Summary: Race record model, finishing place, and the clean/flagged category.

use std::fmt;

use serde::Deserialize;

/// Finishing rank; the dataset usually carries a number but a label is tolerated.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Place {
    Rank(u32),
    Label(String),
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Place::Rank(n) => write!(f, "{n}"),
            Place::Label(s) => f.write_str(s),
        }
    }
}

impl Default for Place {
    fn default() -> Self { Place::Label(String::new()) }
}

/// One plotted data point.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub year: i32,
    /// Elapsed race time in whole seconds.
    pub time_seconds: u32,
    pub name: String,
    pub nationality: String,
    pub place: Place,
    /// Empty when there is no allegation.
    pub doping_allegation: String,
    pub url: Option<String>,
}

impl Record {
    /// Minimal record with only the plotted fields set.
    pub fn new(year: i32, time_seconds: u32) -> Self {
        Self {
            year,
            time_seconds,
            name: String::new(),
            nationality: String::new(),
            place: Place::default(),
            doping_allegation: String::new(),
            url: None,
        }
    }

    /// Build a record from an `MM:SS` time string.
    pub fn with_time(year: i32, time: &str) -> Option<Self> {
        parse_race_time(time).map(|s| Self::new(year, s))
    }

    pub fn named(mut self, name: impl Into<String>, nationality: impl Into<String>) -> Self {
        self.name = name.into();
        self.nationality = nationality.into();
        self
    }

    pub fn placed(mut self, place: Place) -> Self {
        self.place = place;
        self
    }

    pub fn with_allegation(mut self, text: impl Into<String>) -> Self {
        self.doping_allegation = text.into();
        self
    }

    pub fn category(&self) -> ColorCategory {
        if self.doping_allegation.is_empty() { ColorCategory::Clean } else { ColorCategory::Flagged }
    }

    /// Race time as zero-padded `MM:SS`.
    pub fn time_label(&self) -> String {
        format!("{:02}:{:02}", self.time_seconds / 60, self.time_seconds % 60)
    }
}

/// Two-valued grouping used for mark colour, radius and the legend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorCategory {
    Flagged,
    Clean,
}

impl ColorCategory {
    /// Legend order: flagged riders first.
    pub const ALL: [ColorCategory; 2] = [ColorCategory::Flagged, ColorCategory::Clean];

    pub fn label(self) -> &'static str {
        match self {
            ColorCategory::Flagged => "Riders with doping allegations",
            ColorCategory::Clean => "No doping allegations",
        }
    }
}

/// Parse `MM:SS` into whole seconds. Seconds must be below 60.
pub fn parse_race_time(s: &str) -> Option<u32> {
    let (m, sec) = s.trim().split_once(':')?;
    if m.is_empty() || sec.len() != 2 {
        return None;
    }
    let m: u32 = m.parse().ok()?;
    let sec: u32 = sec.parse().ok()?;
    if sec >= 60 {
        return None;
    }
    m.checked_mul(60)?.checked_add(sec)
}
