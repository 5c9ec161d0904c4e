//! Wire format of the two remote endpoints and of the mirror value.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    domain::{Identifier, Item},
    error::PayloadError,
};

/// Decodes the available-items endpoint body: `[{"value": .., "text": ..}, ..]`.
pub fn decode_catalog(body: &str) -> Result<Vec<Item>, PayloadError> {
    decode_array(body, "item")
}

/// Decodes the selected-items endpoint body: `["t1", 2, ..]`.
pub fn decode_selection(body: &str) -> Result<Vec<Identifier>, PayloadError> {
    decode_array(body, "identifier")
}

/// Mirror value published to the surrounding form.
pub fn encode_selection(ids: &[Identifier]) -> String {
    Value::Array(ids.iter().map(Identifier::to_json).collect()).to_string()
}

fn decode_array<T: DeserializeOwned>(
    body: &str,
    expected: &'static str,
) -> Result<Vec<T>, PayloadError> {
    let value: Value = serde_json::from_str(body).map_err(PayloadError::Malformed)?;
    let Value::Array(entries) = value else {
        return Err(PayloadError::NotAnArray {
            expected,
            actual: json_kind(&value),
        });
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value(entry).map_err(|source| PayloadError::InvalidEntry {
                index,
                expected,
                source,
            })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
