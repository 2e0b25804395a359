//! HTTP plumbing between the form controller and the REST API.
//!
//! The controller only ever sees [`ApiRequest`] (what to send) and
//! [`ApiResponse`] (status + raw body). [`send`] is the one place that talks to
//! the browser through `gloo-net`.

use contracts::shared::error::ApiErrorBody;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::shared::api_utils::api_url;

/// Flash text used when a failure carries no readable message
pub const GENERIC_ERROR_MESSAGE: &str = "Server error!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A request the controller wants issued
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path plus query, relative to the API base (`/shopcarts?name=milk`)
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Delete,
            path: path.into(),
            body: None,
        }
    }

    /// `PUT` without a body (`/shopcarts/{id}/clear`)
    pub fn put_empty(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Put,
            path: path.into(),
            body: None,
        }
    }

    /// Request with a JSON body
    pub fn with_json<T: Serialize>(
        method: HttpMethod,
        path: impl Into<String>,
        body: &T,
    ) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?;
        Ok(Self {
            method,
            path: path.into(),
            body: Some(body),
        })
    }
}

/// Status and raw body of a completed exchange
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode a 2xx body, or turn a non-2xx response into [`ApiError::Status`]
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        self.ensure_success()?;
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Accept any 2xx regardless of body
    pub fn ensure_success(&self) -> Result<(), ApiError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: self.status,
                message: ApiErrorBody::message_from(&self.body),
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("HTTP error: {status}")]
    Status { status: u16, message: Option<String> },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for the flash area: the server's message verbatim, else the generic string
    pub fn flash_message(&self) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Issue `request` against `base` and collect the status and body
///
/// Non-2xx statuses are returned as a normal [`ApiResponse`]; only transport
/// failures become errors here.
pub async fn send(base: &str, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
    let url = api_url(base, &request.path);

    let builder = match request.method {
        HttpMethod::Get => Request::get(&url),
        HttpMethod::Post => Request::post(&url),
        HttpMethod::Put => Request::put(&url),
        HttpMethod::Delete => Request::delete(&url),
    }
    .header("Accept", "application/json");

    let response = match &request.body {
        Some(body) => builder
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await,
        None => builder.header("Content-Type", "application/json").send().await,
    }
    .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status();
    // 204 and friends have no body; an unreadable body is treated as empty
    let body = response.text().await.unwrap_or_default();

    Ok(ApiResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_shopcart::aggregate::ShopcartDto;

    #[test]
    fn test_json_success() {
        let resp = ApiResponse {
            status: 201,
            body: r#"{"id": 7, "name": "Groceries", "items": []}"#.to_string(),
        };
        let cart: ShopcartDto = resp.json().unwrap();
        assert_eq!(cart.name.to_string(), "Groceries");
    }

    #[test]
    fn test_json_status_error_keeps_server_message() {
        let resp = ApiResponse {
            status: 404,
            body: r#"{
                "status": 404,
                "error": "Not Found",
                "message": "Shopcart with id '9' could not be found."
            }"#
            .to_string(),
        };
        let err = resp.json::<ShopcartDto>().unwrap_err();
        assert_eq!(err.flash_message(), "Shopcart with id '9' could not be found.");
    }

    #[test]
    fn test_generic_message_without_parseable_body() {
        let resp = ApiResponse {
            status: 502,
            body: "<html>Bad Gateway</html>".to_string(),
        };
        assert_eq!(resp.ensure_success().unwrap_err().flash_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(
            ApiError::Transport("offline".into()).flash_message(),
            GENERIC_ERROR_MESSAGE
        );
    }

    #[test]
    fn test_malformed_success_body_is_decode_error() {
        let resp = ApiResponse {
            status: 200,
            body: "[1, 2".to_string(),
        };
        let err = resp.json::<ShopcartDto>().unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(err.flash_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_delete_accepts_empty_body() {
        let resp = ApiResponse {
            status: 204,
            body: String::new(),
        };
        assert!(resp.ensure_success().is_ok());
    }
}
