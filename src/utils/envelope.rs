//! Response envelope for JSON output

use serde::Serialize;
use serde_json::{Value, json};

use crate::error::Result;
use crate::utils::date_utils::now_rfc3339;

/// Wrap a payload as `{ "success": true, "data": ... }`
///
/// Object payloads are stamped with `generatedAt`; arrays are passed through.
pub fn success_envelope<T: Serialize + ?Sized>(payload: &T) -> Result<Value> {
    let mut data = serde_json::to_value(payload)?;
    if let Value::Object(map) = &mut data {
        map.insert("generatedAt".to_string(), Value::String(now_rfc3339()));
    }
    Ok(json!({ "success": true, "data": data }))
}
