use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = request
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;
        log::debug!("{} {}", request.method(), request.url());
        if let Some(mocked) = mocked_response(&request) {
            return mocked;
        }
        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(|e| {
                ApiError::unknown(format!("Failed to parse response: {}", e))
                    .with_status(status.as_u16())
            })
        } else {
            Err(Self::error_from(response).await)
        }
    }

    pub(crate) async fn expect_success(response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    async fn error_from(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.bytes().await.unwrap_or_default();
        ApiError::from_response(status, &body)
    }
}

/// Encodes a business key so it stays a single path segment.
pub(crate) fn path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
fn mocked_response(_request: &Request) -> Option<Result<Response, ApiError>> {
    None
}

#[cfg(all(test, not(target_arch = "wasm32")))]
fn mocked_response(request: &Request) -> Option<Result<Response, ApiError>> {
    let responder = mock_registry::lookup(request.url().as_str())?;
    Some(responder.respond(request).map(MockResponse::into_response))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_registry::{register_mock, MockResponse, TestResponder};
