//! Shallow, last-write-wins merging of partial payloads.
//!
//! A partial is a JSON object holding any subset of an entity's wire fields.
//! A key that is missing from a partial is absent and never overwrites;
//! `null` is a present value and does. Nested objects are replaced whole.

use crate::error::{ModelError, ModelResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Caller-supplied subset of an entity's fields, keyed by wire name.
pub type Partial = Map<String, Value>;

/// Copies every present key of each source onto `target`, left to right.
pub fn merge_objects<I>(target: &mut Partial, sources: I)
where
    I: IntoIterator<Item = Partial>,
{
    for source in sources {
        for (key, value) in source {
            target.insert(key, value);
        }
    }
}

/// Overlays `sources` onto `target` and returns the fully-populated result.
///
/// Fields absent from every source keep the value they had on `target`
/// (normally the platform default). A supplied value whose shape does not
/// fit the typed field yields [`ModelError::Decode`].
pub fn merge<T, I>(target: T, sources: I) -> ModelResult<T>
where
    T: Serialize + DeserializeOwned,
    I: IntoIterator<Item = Partial>,
{
    let mut object = into_partial(serde_json::to_value(target)?)?;
    merge_objects(&mut object, sources);
    Ok(serde_json::from_value(Value::Object(object))?)
}

/// Converts raw data into a partial. `null` counts as an empty partial.
pub fn into_partial(value: Value) -> ModelResult<Partial> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Partial::new()),
        other => Err(ModelError::NotAnObject(json_type(&other))),
    }
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
