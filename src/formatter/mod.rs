pub mod calls;

use anyhow::{Context, Result};
use std::{fs, path::Path};
use tracing::info;

use crate::formatter::calls::{CallFormatter, CallParser};
use crate::models::common::{FormattedSequence, ParsedSequence};
use crate::models::datasets::calls::{CallRecord, ParsedCallData};

pub fn read_call_sequence<P: AsRef<Path>>(path: P) -> Result<Vec<CallRecord>> {
    let path = path.as_ref();

    // Read the whole file before any processing starts
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read call sequence file {}", path.display()))?;

    // The top-level value must be a JSON array of call records
    let records: Vec<CallRecord> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse call sequence JSON {}", path.display()))?;

    Ok(records)
}

pub fn parse_data(records: Vec<CallRecord>) -> Result<ParsedSequence> {
    let calls = <CallRecord as CallParser>::parse_calls(records)?;

    Ok(ParsedSequence { calls })
}

pub fn transform_data(parsed: ParsedSequence) -> Result<FormattedSequence> {
    let calls = <ParsedCallData as CallFormatter>::format_calls(parsed.calls)?;

    Ok(FormattedSequence { calls })
}

pub fn render(formatted: &FormattedSequence) -> String {
    formatted
        .calls
        .iter()
        .map(|call| call.line.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn process_sequence<P: AsRef<Path>>(path: P) -> Result<String> {
    let records = read_call_sequence(path)?;
    info!("Loaded {} call records", records.len());

    let parsed = parse_data(records)?;
    let formatted = transform_data(parsed)?;
    info!("Formatted {} calls", formatted.calls.len());

    Ok(render(&formatted))
}
