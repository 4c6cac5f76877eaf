use crate::application::error::{ApplicationError, ApplicationResult};
use reqwest::Response;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// Error body of the backend: `detail` is a string for handled errors and a
/// list of field errors for rejected parameters.
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    detail: Value,
}

impl BackendErrorBody {
    fn message(self) -> String {
        match self.detail {
            Value::String(message) => message,
            other => other.to_string(),
        }
    }
}

pub fn map_reqwest(err: reqwest::Error, timeout: Duration) -> ApplicationError {
    if err.is_timeout() {
        return ApplicationError::Timeout(timeout);
    }
    if err.is_decode() {
        return ApplicationError::decode(err.to_string());
    }
    if err.is_connect() {
        return ApplicationError::transport(format!("connection failed: {err}"));
    }
    if let Some(status) = err.status() {
        return ApplicationError::upstream(status.as_u16(), err.to_string());
    }
    ApplicationError::transport(err.to_string())
}

pub async fn ensure_success(response: Response) -> ApplicationResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<BackendErrorBody>().await {
        Ok(body) => body.message(),
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string(),
    };
    Err(ApplicationError::upstream(status.as_u16(), message))
}
