//! Magstripe command-line decoder.
//!
//! Decodes each service code given as an argument, or each line of stdin
//! when no arguments are given, and prints one JSON summary per code.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use magstripe::config::{AppConfig, DecoderConfig};
use magstripe::domain::foundation::RawData;
use magstripe::domain::service_code::ServiceCode;
use magstripe::telemetry;

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::from(2);
        }
    };

    if let Err(e) = telemetry::init(&config.logging) {
        eprintln!("{e}");
        return ExitCode::from(2);
    }

    tracing::debug!(strict = config.decoder.strict, "magstripe decoder starting");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs: Box<dyn Iterator<Item = io::Result<String>>> = if args.is_empty() {
        Box::new(io::stdin().lock().lines())
    } else {
        Box::new(args.into_iter().map(Ok::<String, io::Error>))
    };

    let mut stdout = io::stdout().lock();
    let mut failed = false;

    for (index, input) in inputs.enumerate() {
        let raw = match input {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("Failed to read input: {e}");
                return ExitCode::from(2);
            }
        };

        match decode(raw, &config.decoder) {
            Ok(line) => {
                if let Err(e) = writeln!(stdout, "{line}") {
                    tracing::error!("Failed to write output: {e}");
                    return ExitCode::from(2);
                }
            }
            Err(e) => {
                tracing::warn!(input = index + 1, "Rejected service code: {e}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

/// Decode one code and render its summary as a JSON line.
///
/// The raw value is checked before it is cleared, since the length policy
/// is measured on it.
fn decode(raw: String, config: &DecoderConfig) -> Result<String, String> {
    let mut code = ServiceCode::new(raw);
    let checked = if config.strict {
        code.validate().map_err(|e| e.to_string())
    } else {
        Ok(())
    };
    let summary = code.summary();
    code.clear_raw_data();

    checked?;
    serde_json::to_string(&summary).map_err(|e| e.to_string())
}
