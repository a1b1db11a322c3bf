//! JSON export: the stored response, pretty-printed with two-space indent.

use serde_json::Value;
use wasm_bindgen::JsValue;

use super::download;
use crate::constants::JSON_FILENAME;

/// Serialize the stored plan for download.  Re-serializing the same value
/// always yields the same bytes.
pub fn to_export_string(raw: &Value) -> serde_json::Result<String> {
    serde_json::to_string_pretty(raw)
}

pub fn download(contents: &str) -> Result<(), JsValue> {
    download::save_text(contents, "application/json", JSON_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn uses_two_space_indent() {
        let out = to_export_string(&json!({"semesters": [{"semester": 1}]})).unwrap();
        assert_eq!(
            out,
            "{\n  \"semesters\": [\n    {\n      \"semester\": 1\n    }\n  ]\n}"
        );
    }

    fn json_strategy() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i32>().prop_map(|n| json!(n)),
            "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::vec(("[a-z_]{1,8}", inner), 0..4)
                    .prop_map(|kv| Value::Object(kv.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn export_round_trips_exactly(value in json_strategy()) {
            let first = to_export_string(&value).unwrap();
            let reparsed: Value = serde_json::from_str(&first).unwrap();
            prop_assert_eq!(&reparsed, &value);
            prop_assert_eq!(to_export_string(&reparsed).unwrap(), first);
        }
    }
}
