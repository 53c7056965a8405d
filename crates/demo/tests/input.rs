// File: crates/demo/tests/input.rs
// Purpose: Dataset resolution for file paths and URLs, with the HTTP client stubbed out.

use std::cell::RefCell;

use peloton_demo::fetch::{is_remote_url, FetchError, HttpClient};
use peloton_demo::input::load_records;

struct StubClient {
    body: Result<String, u16>,
    requested: RefCell<Vec<String>>,
}

impl StubClient {
    fn ok(body: &str) -> Self {
        Self { body: Ok(body.to_string()), requested: RefCell::new(Vec::new()) }
    }

    fn status(code: u16) -> Self {
        Self { body: Err(code), requested: RefCell::new(Vec::new()) }
    }
}

impl HttpClient for StubClient {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        self.requested.borrow_mut().push(url.to_string());
        match &self.body {
            Ok(b) => Ok(b.clone()),
            Err(status) => Err(FetchError::Status { url: url.to_string(), status: *status }),
        }
    }
}

const JSON: &str = r#"[
  {"Time":"36:50","Place":1,"Seconds":2210,"Name":"Marco Pantani","Year":1995,"Nationality":"ITA","Doping":"Alleged drug use during 1995 due to high hematocrit levels","URL":"https://en.wikipedia.org/wiki/Marco_Pantani#Alleged_drug_use"}
]"#;

#[test]
fn recognises_remote_urls() {
    assert!(is_remote_url("https://example.com/data.json"));
    assert!(is_remote_url("http://example.com/data.json"));
    assert!(!is_remote_url("data/cyclist-data.json"));
    assert!(!is_remote_url("ftp://example.com/data.json"));
}

#[test]
fn url_input_goes_through_client() {
    let client = StubClient::ok(JSON);
    let records = load_records("https://example.com/cyclist-data.json", &client).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].year, 1995);
    assert_eq!(client.requested.borrow().as_slice(), ["https://example.com/cyclist-data.json"]);
}

#[test]
fn csv_url_is_parsed_as_csv() {
    let csv = "Time,Place,Seconds,Name,Year,Nationality,Doping,URL\n39:45,3,2385,Some Rider,2004,FRA,,\n";
    let records = load_records("https://example.com/riders.csv?raw=1", &StubClient::ok(csv)).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].time_seconds, 2385);
    assert!(records[0].doping_allegation.is_empty());
}

#[test]
fn http_failure_surfaces_fetch_error() {
    let err = load_records("https://example.com/missing.json", &StubClient::status(404)).unwrap_err();
    let fetch = err.downcast_ref::<FetchError>().expect("fetch error");
    assert!(matches!(fetch, FetchError::Status { status: 404, .. }));
}

#[test]
fn local_path_skips_client() {
    let client = StubClient::ok("unused");
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/cyclist-data.json");
    let records = load_records(path, &client).unwrap();
    assert!(!records.is_empty());
    assert!(client.requested.borrow().is_empty());
}
