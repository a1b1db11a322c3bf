//! Error type shared by the network, export and DOM layers.
//!
//! DOM glue keeps returning `Result<_, JsValue>` like the rest of the
//! frontend; the conversions below let `?` cross between the two.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error! status: {status}")]
    Http { status: u16, body: String },

    #[error("network request failed: {0}")]
    Network(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("PDF library not loaded")]
    PdfLibraryMissing,

    #[error("{0}")]
    Js(String),
}

impl ClientError {
    /// Body text of a non-OK response, when the backend sent one.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            ClientError::Http { body, .. } if !body.trim().is_empty() => Some(body.as_str()),
            _ => None,
        }
    }
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        ClientError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_exposes_non_empty_body() {
        let err = ClientError::Http {
            status: 400,
            body: "{\"detail\":\"Both fields are required\"}".to_string(),
        };
        assert_eq!(err.response_body(), Some("{\"detail\":\"Both fields are required\"}"));
        assert_eq!(err.to_string(), "HTTP error! status: 400");
    }

    #[test]
    fn blank_body_is_treated_as_missing() {
        let err = ClientError::Http { status: 500, body: "  \n".to_string() };
        assert_eq!(err.response_body(), None);
        assert_eq!(ClientError::PdfLibraryMissing.response_body(), None);
    }

    #[test]
    fn missing_element_names_the_id() {
        let err = ClientError::MissingElement("result".into());
        assert_eq!(err.to_string(), "element #result not found");
    }

    #[test]
    fn json_errors_become_decode_errors() {
        let err: ClientError = serde_json::from_str::<serde_json::Value>("{nope")
            .unwrap_err()
            .into();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
