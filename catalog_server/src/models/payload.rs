//! Request bodies for director and genre writes.
//!
//! Bodies must be JSON objects. Creation accepts only `id` and `name` and
//! rejects any other key; a full replace reads those two keys and ignores
//! the rest. A value of the wrong type is rejected either way, before the
//! database is touched.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{StoreError, StoreResult};

const FIELDS: [&str; 2] = ["id", "name"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityPayload {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
}

impl EntityPayload {
    /// Body of a create. Unknown keys are refused.
    pub fn parse(body: &[u8]) -> StoreResult<Self> {
        let object = json_object(body)?;
        Ok(serde_json::from_value(Value::Object(object))?)
    }

    /// Body of a full replace. Keys other than `id` and `name` are ignored.
    pub fn parse_replace(body: &[u8]) -> StoreResult<Self> {
        let mut object = json_object(body)?;
        object.retain(|key, _| FIELDS.contains(&key.as_str()));
        Ok(serde_json::from_value(Value::Object(object))?)
    }

    /// Name for a new record. Creation without one is refused.
    pub fn require_name(self) -> StoreResult<String> {
        self.name
            .ok_or_else(|| StoreError::Persistence("missing required field `name`".to_string()))
    }
}

fn json_object(body: &[u8]) -> StoreResult<Map<String, Value>> {
    match serde_json::from_slice(body)? {
        Value::Object(object) => Ok(object),
        other => Err(StoreError::Persistence(format!(
            "request body must be a JSON object, got {}",
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
