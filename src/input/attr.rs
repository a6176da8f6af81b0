use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::model::education::Attr;

/// Folds whatever shape the extractor produced into an [`Attr`]. Strings are
/// kept, numbers and booleans are stringified, everything else is dropped.
pub fn attr_from_json(value: &Value) -> Attr {
    match value {
        Value::Array(items) => Attr::from_list(items.iter().filter_map(scalar_text)),
        other => scalar_text(other).map(Attr::single).unwrap_or_else(Attr::absent),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl<'de> Deserialize<'de> for Attr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(attr_from_json(&value))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/attr.rs"]
mod tests;
