use serde::{Deserialize, Serialize};

use crate::models::datasets::calls::{FormattedCallData, ParsedCallData};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub input_path: String,
}

#[derive(Debug, Clone)]
pub struct ParsedSequence {
    pub calls: Vec<ParsedCallData>,
}

#[derive(Debug)]
pub struct FormattedSequence {
    pub calls: Vec<FormattedCallData>,
}
