use anyhow::Result;

use crate::models::datasets::calls::{CallRecord, FormattedCallData, ParsedCallData};

pub trait CallParser {
    fn parse_calls(records: Vec<CallRecord>) -> Result<Vec<ParsedCallData>>;
}

impl CallParser for CallRecord {
    fn parse_calls(records: Vec<CallRecord>) -> Result<Vec<ParsedCallData>> {
        Ok(records.into_iter().filter_map(parse_call).collect())
    }
}

// Yields None when any level of the nested lookup is missing, when the
// signature is empty, or when the record carries no input values. Such
// records contribute no output line.
fn parse_call(record: CallRecord) -> Option<ParsedCallData> {
    let abi_values = record.call?.data_abi_values?;

    let method_signature = abi_values.method_signature?;
    let input_values = abi_values.input_values?;

    if method_signature.is_empty() || input_values.is_empty() {
        return None;
    }

    Some(ParsedCallData {
        method_signature,
        input_values,
    })
}

pub trait CallFormatter {
    fn format_calls(calls: Vec<ParsedCallData>) -> Result<Vec<FormattedCallData>>;
}

impl CallFormatter for ParsedCallData {
    fn format_calls(calls: Vec<ParsedCallData>) -> Result<Vec<FormattedCallData>> {
        Ok(calls
            .into_iter()
            .map(|call| {
                // Everything before the first parenthesis is the method name.
                // A signature without a parameter list is used as-is.
                let method_name = match call.method_signature.split_once('(') {
                    Some((name, _)) => name,
                    None => call.method_signature.as_str(),
                };

                FormattedCallData {
                    line: format!(
                        "try f.{}({}) {{}} catch {{}}",
                        method_name,
                        call.input_values.join(", ")
                    ),
                }
            })
            .collect())
    }
}
