use serde::Deserialize;

////////////////////////////////////// Raw Data ////////////////////////////////////////
// One element of the fuzzer's call sequence array. Every level of the nested
// lookup is optional: a record missing any part of the chain is skipped during
// parsing, never rejected. The fuzzer emits many more fields per record than
// the formatter reads; unknown fields are ignored.

#[derive(Debug, Clone, Deserialize)]
pub struct CallRecord {
    #[serde(default)]
    pub call: Option<CallData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallData {
    #[serde(rename = "dataAbiValues", default)]
    pub data_abi_values: Option<AbiValuesData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbiValuesData {
    #[serde(rename = "methodSignature", default)]
    pub method_signature: Option<String>,
    #[serde(rename = "inputValues", default)]
    pub input_values: Option<Vec<String>>,
}

///////////////////////////////////// Parsed Data //////////////////////////////////////
// A record that passed the presence checks: the signature and the argument
// list are both guaranteed non-empty here.

#[derive(Debug, Clone)]
pub struct ParsedCallData {
    pub method_signature: String,
    pub input_values: Vec<String>,
}

/////////////////////////////////// Formatted Data /////////////////////////////////////

#[derive(Debug, Clone, PartialEq)]
pub struct FormattedCallData {
    pub line: String,
}
