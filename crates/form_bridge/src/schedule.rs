use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::BridgeError;

pub const INITIAL_SCHEDULE_KEY: &str = "initial_schedule";
pub const OPTIMIZED_SCHEDULE_KEY: &str = "optimized_schedule";

/// The two strings the treatment endpoint sends back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedules {
    pub initial_schedule: String,
    pub optimized_schedule: String,
}

impl Schedules {
    /// Parse a response body. Only the two schedule keys are read; anything
    /// else in the object is ignored.
    pub fn from_body(body: &str) -> Result<Self, BridgeError> {
        let value: JsonValue =
            serde_json::from_str(body).map_err(|e| BridgeError::InvalidJson(e.to_string()))?;
        let JsonValue::Object(map) = value else {
            return Err(BridgeError::NotAnObject);
        };
        Ok(Self {
            initial_schedule: field_text(map.get(INITIAL_SCHEDULE_KEY), INITIAL_SCHEDULE_KEY),
            optimized_schedule: field_text(map.get(OPTIMIZED_SCHEDULE_KEY), OPTIMIZED_SCHEDULE_KEY),
        })
    }
}

fn field_text(value: Option<&JsonValue>, key: &str) -> String {
    match value {
        Some(JsonValue::String(s)) => s.clone(),
        None | Some(JsonValue::Null) => {
            tracing::warn!(field = key, "schedule field missing; rendering blank");
            String::new()
        }
        Some(other) => {
            tracing::warn!(field = key, "schedule field is not a string; rendering json text");
            other.to_string()
        }
    }
}
