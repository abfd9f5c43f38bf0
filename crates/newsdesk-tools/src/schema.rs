//! JSON Schema fragments for tool input declarations
//!
//! ```
//! use newsdesk_tools::schema::{integer, object, string, with_default};
//!
//! let schema = object(
//!     [
//!         ("company_ticker", string("Stock ticker symbol")),
//!         ("days", with_default(integer("Lookback window in days"), 7)),
//!     ],
//!     &["company_ticker"],
//! );
//! assert_eq!(schema["required"][0], "company_ticker");
//! assert_eq!(schema["properties"]["days"]["default"], 7);
//! ```

use serde_json::{Map, Value, json};

/// Object schema from `(name, schema)` pairs
pub fn object<'a>(
    properties: impl IntoIterator<Item = (&'a str, Value)>,
    required: &[&str],
) -> Value {
    let properties: Map<String, Value> = properties
        .into_iter()
        .map(|(name, schema)| (name.to_string(), schema))
        .collect();
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

pub fn string(description: &str) -> Value {
    json!({ "type": "string", "description": description })
}

pub fn integer(description: &str) -> Value {
    json!({ "type": "integer", "description": description })
}

/// Add a `default` value to a property schema
pub fn with_default(mut schema: Value, default: impl Into<Value>) -> Value {
    schema["default"] = default.into();
    schema
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookback_property() {
        let days = with_default(integer("Number of days"), 30);
        assert_eq!(
            days,
            json!({
                "type": "integer",
                "description": "Number of days",
                "default": 30,
            })
        );
    }

    #[test]
    fn test_ticker_object() {
        let schema = object(
            [
                ("company_ticker", string("Ticker")),
                ("days", integer("Days")),
            ],
            &["company_ticker"],
        );
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["company_ticker"]["type"], "string");
        assert_eq!(schema["properties"]["days"]["type"], "integer");
        assert_eq!(schema["required"], json!(["company_ticker"]));
    }

    #[test]
    fn test_all_optional_object() {
        let schema = object([("limit", integer("Max entries"))], &[]);
        assert_eq!(schema["required"], json!([]));
    }
}
