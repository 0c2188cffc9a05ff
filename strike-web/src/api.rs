//! `fetch`-based client for the hosted booking endpoint.
use strike_core::{ApiError, BookingApi, BookingRequest, Confirmation, LookupResponse};
use wasm_bindgen::JsValue;

use crate::{config, dom};

/// Booking endpoint reached with `window.fetch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchBookingApi {
    base_url: String,
}

impl FetchBookingApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Client for the endpoint configured at build time.
    #[must_use]
    pub fn from_config() -> Self {
        Self::new(config::api_base())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
    async fn call(&self, method: &str, body: Option<&str>) -> Result<JsValue, ApiError> {
        let request = dom::json_request(method, &self.base_url, body).map_err(network_error)?;
        let response = dom::fetch_response(&request)
            .await
            .map_err(network_error)?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        dom::response_json(&response)
            .await
            .map_err(|e| ApiError::Decode(dom::js_error_message(&e)))
    }
}

fn network_error(value: JsValue) -> ApiError {
    ApiError::Network(dom::js_error_message(&value))
}

fn decode_error(err: &serde_wasm_bindgen::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

impl BookingApi for FetchBookingApi {
    async fn submit(&self, request: &BookingRequest) -> Result<Confirmation, ApiError> {
        let body = serde_json::to_string(request)?;
        let value = self.call("POST", Some(&body)).await?;
        serde_wasm_bindgen::from_value(value).map_err(|e| decode_error(&e))
    }

    async fn fetch_existing(&self) -> Result<Option<Confirmation>, ApiError> {
        let value = self.call("GET", None).await?;
        serde_wasm_bindgen::from_value::<LookupResponse>(value)
            .map(LookupResponse::into_option)
            .map_err(|e| decode_error(&e))
    }
}
