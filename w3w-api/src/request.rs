//! Request marshalling shared by every endpoint

use crate::config::Config;
use crate::dto::ErrorEnvelope;
use crate::error::{ApiError, Result};
use crate::transport::Transport;
use http::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

/// GET `path` below the versioned root and decode the JSON body as `T`
pub(crate) async fn get_json<T, X>(
    transport: &X,
    config: &Config,
    path: &str,
    query: &[(&str, String)],
) -> Result<T>
where
    T: DeserializeOwned,
    X: Transport,
{
    let mut url = config.endpoint(path)?;
    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
    }
    trace!(url = %url, "prepared request");

    let mut builder = http::Request::builder()
        .method(Method::GET)
        .uri(url.as_str());
    if let Some(headers) = builder.headers_mut() {
        headers.extend(config.headers().clone());
    }
    let request = builder.body(())?;

    let response = transport.send(request).await?;
    let status = response.status();
    debug!(path, status = status.as_u16(), "received response");

    let body = response.into_body();
    if status.is_success() {
        return Ok(serde_json::from_slice(&body)?);
    }

    warn!(path, status = status.as_u16(), "request failed");
    Err(error_from_body(status.as_u16(), &body))
}

/// Map a non-success body to the most specific error available
fn error_from_body(status: u16, body: &[u8]) -> ApiError {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope {
            error: Some(error),
        }) => ApiError::Remote(error),
        _ => ApiError::Status {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        },
    }
}
