use core::fmt;

use json::JsonValue;

pub mod champion;
pub mod item;

#[derive(Debug)]
pub enum ParsingError {
    InvalidType(String),
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParsingError::InvalidType(field) => write!(f, "Invalid type for field: {}", field),
        }
    }
}

/// Data Dragon wraps the records as `{"type": "<kind>", "data": {...}}`; plain record
/// objects are returned as they are.
fn records(json: &JsonValue) -> &JsonValue {
    if let JsonValue::Object(obj) = json {
        let typed = obj.get("type").is_some_and(JsonValue::is_string);
        if let (true, Some(data @ JsonValue::Object(_))) = (typed, obj.get("data")) {
            return data;
        }
    }
    json
}
