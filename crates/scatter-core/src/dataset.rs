// File: crates/scatter-core/src/dataset.rs
// Summary: Loads race records from the published JSON dataset or an equivalent CSV.
// Notes:
// - Columns/keys: Time, Place, Seconds, Name, Year, Nationality, Doping, URL.
// - `Time` (MM:SS) is authoritative; `Seconds` is a fallback and a consistency check.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::DatasetError;
use crate::record::{parse_race_time, Place, Record};

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Time")]
    time: Option<String>,
    #[serde(rename = "Place")]
    place: Option<Place>,
    #[serde(rename = "Seconds")]
    seconds: Option<u32>,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Year")]
    year: Option<i32>,
    #[serde(rename = "Nationality", default)]
    nationality: String,
    #[serde(rename = "Doping", default)]
    doping: String,
    #[serde(rename = "URL")]
    url: Option<String>,
}

impl RawRecord {
    fn into_record(self, index: usize) -> Result<Record, DatasetError> {
        let year = self.year.ok_or(DatasetError::MissingField { index, field: "Year" })?;
        let time_seconds = match (self.time, self.seconds) {
            (Some(t), seconds) => {
                let parsed = parse_race_time(&t).ok_or(DatasetError::BadTime { index, value: t })?;
                if let Some(s) = seconds.filter(|&s| s != parsed) {
                    warn!(index, time = parsed, seconds = s, "Time and Seconds disagree; using Time");
                }
                parsed
            }
            (None, Some(s)) => s,
            (None, None) => return Err(DatasetError::MissingField { index, field: "Time" }),
        };
        Ok(Record {
            year,
            time_seconds,
            name: self.name,
            nationality: self.nationality,
            place: self.place.unwrap_or_default(),
            doping_allegation: self.doping.trim().to_string(),
            url: self.url.filter(|u| !u.is_empty()),
        })
    }
}

fn convert(raw: Vec<RawRecord>) -> Result<Vec<Record>, DatasetError> {
    let records = raw
        .into_iter()
        .enumerate()
        .map(|(i, r)| r.into_record(i))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = records.len(), "dataset parsed");
    Ok(records)
}

/// Parse the JSON array form of the dataset.
pub fn parse_json(text: &str) -> Result<Vec<Record>, DatasetError> {
    let raw: Vec<RawRecord> = serde_json::from_str(text)?;
    convert(raw)
}

/// Parse a CSV with a header row using the same column names as the JSON keys.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Record>, DatasetError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);
    let raw = rdr.deserialize().collect::<Result<Vec<RawRecord>, _>>()?;
    convert(raw)
}

/// Load a dataset file, choosing the format from its extension.
pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<Record>, DatasetError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "json" => parse_json(&std::fs::read_to_string(path)?),
        "csv" => parse_csv(std::fs::File::open(path)?),
        _ => Err(DatasetError::UnsupportedFormat(ext)),
    }
}
