use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, Headers, Request, RequestInit, RequestMode, Response};

use crate::constants::{EXPORT_PDF_PATH, GENERATE_PATH, REFINE_PATH};
use crate::error::ClientError;
use crate::models::{PdfExportRequest, PlanRequest, RefineRequest};

// REST client for the planner backend
pub struct ApiClient;

impl ApiClient {
    fn url(path: &str) -> String {
        super::current_config().url(path)
    }

    /// Run the agent pipeline for a planner form submission.
    pub async fn generate(request: &PlanRequest) -> Result<Value, ClientError> {
        let resp = Self::post_json(&Self::url(GENERATE_PATH), request).await?;
        Self::read_json(resp).await
    }

    /// Ask the backend to revise `current_plan` according to `instruction`.
    pub async fn refine_plan(instruction: &str, current_plan: &Value) -> Result<Value, ClientError> {
        let body = RefineRequest {
            instruction,
            current_plan,
        };
        let resp = Self::post_json(&Self::url(REFINE_PATH), &body).await?;
        Self::read_json(resp).await
    }

    /// Server-side PDF rendering; returns the PDF blob.
    pub async fn export_pdf(curriculum: &Value) -> Result<Blob, ClientError> {
        let body = PdfExportRequest { curriculum };
        let resp = Self::post_json(&Self::url(EXPORT_PDF_PATH), &body).await?;
        let blob = JsFuture::from(resp.blob()?).await?;
        blob.dyn_into::<Blob>()
            .map_err(|_| ClientError::Decode("response body is not a blob".to_string()))
    }

    // POST a JSON body and return the response, failing on non-2xx status
    // with the response text attached.
    async fn post_json<T: Serialize + ?Sized>(url: &str, payload: &T) -> Result<Response, ClientError> {
        let body = serde_json::to_string(payload)?;
        crate::debug_log!("POST {} ({} bytes)", url, body.len());

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new()?;
        headers.append("Content-Type", "application/json")?;
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window = web_sys::window().ok_or_else(|| ClientError::Js("no global window".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ClientError::Network(e.as_string().unwrap_or_else(|| format!("{:?}", e))))?;
        let resp: Response = resp_value.dyn_into()?;

        if !resp.ok() {
            let status = resp.status();
            let body = match resp.text() {
                Ok(promise) => JsFuture::from(promise)
                    .await
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_default(),
                Err(_) => String::new(),
            };
            crate::logging::warn(&format!("POST {} failed: {} {}", url, status, body));
            return Err(ClientError::Http { status, body });
        }

        Ok(resp)
    }

    // Read the body as text and decode with serde_json so key order survives
    // (`preserve_order`).
    async fn read_json(resp: Response) -> Result<Value, ClientError> {
        let text = JsFuture::from(resp.text()?).await?;
        let text = text.as_string().unwrap_or_default();
        Ok(serde_json::from_str(&text)?)
    }
}
