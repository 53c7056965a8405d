// File: crates/demo/src/input.rs
// Summary: Resolve the INPUT argument to parsed records.

use std::path::Path;

use anyhow::{Context, Result};
use scatter_core::{dataset, Record};
use tracing::info;

use crate::fetch::{is_remote_url, HttpClient};

/// Load records from a local file, or fetch them with `client` when `input` is an http(s) URL.
/// Remote bodies are CSV when the URL path ends in `.csv` and JSON otherwise.
pub fn load_records(input: &str, client: &dyn HttpClient) -> Result<Vec<Record>> {
    if is_remote_url(input) {
        info!(url = input, "fetching dataset");
        let body = client.get(input)?;
        let path = input.split(['?', '#']).next().unwrap_or(input);
        let records = if path.to_ascii_lowercase().ends_with(".csv") {
            dataset::parse_csv(body.as_bytes())
        } else {
            dataset::parse_json(&body)
        };
        return records.with_context(|| format!("parsing dataset from {input}"));
    }
    let path = Path::new(input);
    info!(path = %path.display(), "loading dataset");
    dataset::load_path(path).with_context(|| format!("loading dataset '{}'", path.display()))
}
