//! Upload Loop Integration Tests
//!
//! Exercises the sequential upload loop against in-memory mutation
//! sinks: row cap, short runs, fail-fast on parse and request errors.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;
use std::sync::{Arc, Mutex};

use prost::Message;
use tempfile::NamedTempFile;
use tonic::Code;

use taq_upload::{MAX_LINES, MutationSink, Quote, RequestError, UploadError, Uploader};

/// Sink that records every write.
#[derive(Default, Clone)]
struct RecordingSink {
    rows: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
}

#[async_trait::async_trait]
impl MutationSink for RecordingSink {
    async fn write_quote(&mut self, row_key: String, payload: Vec<u8>) -> Result<(), RequestError> {
        self.rows.lock().unwrap().push((row_key, payload));
        Ok(())
    }
}

/// Sink that fails the `fail_at`-th call (1-based).
#[derive(Clone)]
struct FailingSink {
    calls: Arc<Mutex<usize>>,
    fail_at: usize,
}

impl FailingSink {
    fn new(fail_at: usize) -> Self {
        Self {
            calls: Arc::new(Mutex::new(0)),
            fail_at,
        }
    }

    fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl MutationSink for FailingSink {
    async fn write_quote(&mut self, _row_key: String, _payload: Vec<u8>) -> Result<(), RequestError> {
        let mut calls = self.calls.lock().unwrap();
        *calls += 1;
        if *calls == self.fail_at {
            return Err(RequestError {
                code: Code::Unavailable,
                message: "connection reset".to_string(),
                details: String::new(),
            });
        }
        Ok(())
    }
}

fn quote_line(i: usize) -> String {
    format!("093015{i:09}|N|IBM|100.25|500|100.30|300")
}

fn input_file(data_lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Time|Exchange|Symbol|Bid_Price|Bid_Size|Offer_Price|Offer_Size").unwrap();
    for line in data_lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn short_file_uploads_every_row_and_reports_actual_count() {
    let lines: Vec<String> = (0..7).map(quote_line).collect();
    let file = input_file(&lines);

    let sink = RecordingSink::default();
    let uploaded = Uploader::new(sink.clone()).run(file.path()).await.unwrap();

    assert_eq!(uploaded, 7);

    let rows = sink.rows.lock().unwrap();
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0].0, "093015000000000/IBM");
    assert_eq!(rows[6].0, "093015000000006/IBM");
}

#[tokio::test]
async fn payload_is_the_serialized_quote() {
    let file = input_file(&[quote_line(0)]);

    let sink = RecordingSink::default();
    Uploader::new(sink.clone()).run(file.path()).await.unwrap();

    let rows = sink.rows.lock().unwrap();
    let quote = Quote::decode(rows[0].1.as_slice()).unwrap();
    assert_eq!(quote.bid_px, 100.25);
    assert_eq!(quote.bid_qty, 500);
    assert_eq!(quote.offer_px, 100.30);
    assert_eq!(quote.offer_qty, 300);
}

#[tokio::test]
async fn row_cap_stops_after_max_lines() {
    let lines: Vec<String> = (0..MAX_LINES + 200).map(quote_line).collect();
    let file = input_file(&lines);

    let sink = RecordingSink::default();
    let uploaded = Uploader::new(sink.clone()).run(file.path()).await.unwrap();

    assert_eq!(uploaded, MAX_LINES);
    assert_eq!(sink.rows.lock().unwrap().len(), MAX_LINES);
}

#[tokio::test]
async fn parse_failure_aborts_without_further_writes() {
    let lines = vec![
        quote_line(0),
        quote_line(1),
        "093015000000002|N|IBM|not-a-price|500|100.30|300".to_string(),
        quote_line(3),
    ];
    let file = input_file(&lines);

    let sink = RecordingSink::default();
    let err = Uploader::new(sink.clone()).run(file.path()).await.unwrap_err();

    // Only the two rows before the bad line were sent.
    assert_eq!(sink.rows.lock().unwrap().len(), 2);

    match err {
        UploadError::Parse(parse) => {
            assert_eq!(parse.line_number, 3);
            assert!(parse.to_string().contains("not-a-price"));
        }
        other => panic!("expected parse error, got: {other}"),
    }
}

#[tokio::test]
async fn kth_request_failure_issues_exactly_k_requests() {
    let lines: Vec<String> = (0..10).map(quote_line).collect();
    let file = input_file(&lines);

    let sink = FailingSink::new(5);
    let err = Uploader::new(sink.clone()).run(file.path()).await.unwrap_err();

    assert_eq!(sink.calls(), 5);
    assert!(matches!(err, UploadError::Request(_)));
}

#[tokio::test]
async fn header_only_file_is_a_successful_empty_run() {
    let file = input_file(&[]);

    let sink = RecordingSink::default();
    let uploaded = Uploader::new(sink.clone()).run(file.path()).await.unwrap();

    assert_eq!(uploaded, 0);
    assert!(sink.rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn empty_file_is_a_successful_empty_run() {
    let file = NamedTempFile::new().unwrap();

    let sink = RecordingSink::default();
    let uploaded = Uploader::new(sink.clone()).run(file.path()).await.unwrap();

    assert_eq!(uploaded, 0);
}

#[tokio::test]
async fn missing_file_is_an_io_error() {
    let sink = RecordingSink::default();
    let err = Uploader::new(sink)
        .run(std::path::Path::new("/nonexistent/quotes.txt"))
        .await
        .unwrap_err();

    assert!(matches!(err, UploadError::Io { .. }));
}
