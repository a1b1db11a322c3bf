//! Schema check for plans received from the backend – compiled into WASM.
//!
//! Violations are advisory: the typed model tolerates missing optional
//! fields, so a failing check only produces console warnings.

use jsonschema::JSONSchema;
use lazy_static::lazy_static;
use serde_json::Value;

lazy_static! {
    static ref PLAN_SCHEMA: Option<JSONSchema> = {
        // At compile-time embed the schema JSON string.
        let raw = include_str!("schema/plan_schema.json");
        let compiled = serde_json::from_str::<Value>(raw)
            .map_err(|e| e.to_string())
            .and_then(|parsed| JSONSchema::compile(&parsed).map_err(|e| e.to_string()));
        match compiled {
            Ok(schema) => Some(schema),
            Err(e) => {
                crate::logging::error(&format!("Plan schema failed to compile: {}", e));
                None
            }
        }
    };
}

/// Human-readable schema violations for `value`; empty when it conforms.
pub fn plan_warnings(value: &Value) -> Vec<String> {
    let Some(schema) = PLAN_SCHEMA.as_ref() else {
        return Vec::new();
    };
    match schema.validate(value) {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .map(|e| format!("{} (at '{}')", e, e.instance_path))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn schema_compiles() {
        assert!(PLAN_SCHEMA.is_some());
    }

    #[test]
    fn conforming_plans_have_no_warnings() {
        let semesters = json!({
            "program_title": "P",
            "semesters": [{"semester": 1, "courses": [{"title": "Intro", "topics": ["a", {"name": "b"}]}]}]
        });
        let roadmap = json!({
            "roadmap": [{"phase": "One", "milestones": [{"title": "M", "certification": {"name": "C"}}]}]
        });
        assert!(plan_warnings(&semesters).is_empty());
        assert!(plan_warnings(&roadmap).is_empty());
    }

    #[test]
    fn structural_problems_are_reported() {
        let missing_title = json!({"semesters": [{"semester": 1, "courses": [{"skills": ["x"]}]}]});
        assert!(!plan_warnings(&missing_title).is_empty());

        let neither = json!({"detail": "Internal error"});
        assert!(!plan_warnings(&neither).is_empty());
    }
}
