//! Raw track data must not leak through logs, `Debug`, or serialization.
//!
//! Log output is captured with an in-memory writer at TRACE level so every
//! event emitted while decoding and clearing is inspected.

use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use magstripe::domain::foundation::RawData;
use magstripe::domain::service_code::ServiceCode;

const MARKER: &str = "TRACKSECRET";

#[derive(Clone, Default)]
struct CaptureWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    fn contents(&self) -> String {
        String::from_utf8(self.buf.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let writer = CaptureWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer.clone())
        .with_max_level(tracing::Level::TRACE)
        .json()
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    writer.contents()
}

#[test]
fn decoding_and_clearing_never_log_raw_data() {
    let logs = capture(|| {
        let mut code = ServiceCode::new(format!("201{MARKER}"));
        assert_eq!(code.service_code(), "201");
        code.clear_raw_data();
    });

    assert!(logs.contains("Decoded service code"), "logs: {logs}");
    assert!(logs.contains("Clearing raw service code data"), "logs: {logs}");
    assert!(!logs.contains(MARKER), "raw data leaked into logs: {logs}");
}

#[test]
fn decode_event_reports_lengths() {
    let logs = capture(|| {
        let _ = ServiceCode::new(" 1a8b3c ");
    });

    let event: serde_json::Value = logs
        .lines()
        .filter_map(|line| serde_json::from_str(line).ok())
        .find(|event: &serde_json::Value| event["fields"]["message"] == "Decoded service code")
        .expect("decode event should be logged");

    assert_eq!(event["fields"]["raw_len"], 6);
    assert_eq!(event["fields"]["digit_count"], 3);
    assert_eq!(event["fields"]["has_service_code"], false);
}

#[test]
fn clearing_absent_data_logs_nothing() {
    let mut code = ServiceCode::unknown();
    let logs = capture(|| code.clear_raw_data());
    assert!(logs.is_empty(), "unexpected logs: {logs}");
}

#[test]
fn debug_and_serialized_forms_never_contain_raw_data() {
    let code = ServiceCode::new(format!("{MARKER}101"));

    let debug = format!("{code:?}");
    let json = serde_json::to_string(&code).unwrap();
    let summary = serde_json::to_string(&code.summary()).unwrap();

    assert!(!debug.contains(MARKER));
    assert!(!json.contains(MARKER));
    assert!(!summary.contains(MARKER));
    assert_eq!(json, "\"101\"");
    assert_eq!(code.raw_data(), Some(format!("{MARKER}101").as_str()));
}
