use crate::error::{ApiError, Error, RequestDetails};
use async_trait::async_trait;
use reqwest::{header::CONTENT_LENGTH, Request, Response, StatusCode, Url};
use reqwest_middleware::{Middleware, Next};
use serde_json::Value;
use task_local_extensions::Extensions;

/// Reqwest middleware which unwraps the IoPay response envelope and translates
/// error responses into [`Error::ApiError`](crate::error::Error)s.
///
/// - `{ "success": T }` responses are rewritten so that their body is just `T`.
/// - `{ "error": E }` responses are errors even when the HTTP status is a success.
/// - Any other successful response is passed through untouched.
///
/// Failures where no response was received at all are not touched, and surface as
/// [`Error::HttpError`](crate::error::Error).
pub struct ErrorHandlingMiddleware {
    base_url: Url,
}

impl ErrorHandlingMiddleware {
    /// `base_url` is reported in errors, and request URLs are made relative to it.
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    fn request_details(&self, req: &Request) -> RequestDetails {
        let url = req.url().as_str();

        RequestDetails {
            base_url: self.base_url.to_string(),
            method: req.method().to_string(),
            url: url
                .strip_prefix(self.base_url.as_str())
                .unwrap_or(url)
                .to_string(),
            data: req.body().and_then(|body| body.as_bytes()).map(json_or_text),
        }
    }
}

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // The request is consumed by the rest of the chain
        let request = self.request_details(&req);

        // Capture the response
        let response = next.run(req, extensions).await?;

        let status = response.status();
        let version = response.version();
        let mut headers = response.headers().clone();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            tracing::debug!("Failed HTTP request. Status code: {}", status);

            let data = if bytes.is_empty() {
                Value::Null
            } else {
                json_or_text(&bytes)
            };
            return Err(Error::ApiError(api_error(status, data, request)).into());
        }

        let body = match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(mut payload)) => {
                if let Some(success) = payload.remove("success").filter(is_truthy) {
                    serde_json::to_vec(&success).map_err(|e| Error::Other(e.into()))?
                } else if let Some(error) = payload.remove("error").filter(is_truthy) {
                    tracing::debug!("Error envelope in HTTP response. Status code: {}", status);

                    return Err(Error::ApiError(api_error(status, error, request)).into());
                } else {
                    bytes.to_vec()
                }
            }
            _ => bytes.to_vec(),
        };

        // Rebuild the response around the unwrapped body
        headers.remove(CONTENT_LENGTH);
        let mut unwrapped = http::Response::new(body);
        *unwrapped.status_mut() = status;
        *unwrapped.version_mut() = version;
        *unwrapped.headers_mut() = headers;

        Ok(Response::from(unwrapped))
    }
}

fn api_error(status: StatusCode, data: Value, request: RequestDetails) -> ApiError {
    ApiError {
        status: status.as_u16(),
        status_text: status
            .canonical_reason()
            .unwrap_or("Unknown Error")
            .to_string(),
        data,
        request,
    }
}

/// Envelope keys only count when set to something other than `null`, `false`, `0` or `""`.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Parses `bytes` as JSON, falling back to a JSON string holding the raw text.
fn json_or_text(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
