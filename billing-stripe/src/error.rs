//! Decoding of Stripe error responses.

use serde::Deserialize;

use billing_types::ProviderError;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorObject,
}

#[derive(Debug, Deserialize)]
struct ErrorObject {
    #[serde(default)]
    message: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

/// Builds a `ProviderError` from a non-2xx response body.
///
/// Stripe answers with `{"error": {"message", "type", "code"}}`; anything
/// else (proxies, load balancers) falls back to the raw body text.
pub(crate) fn api_error(status: u16, body: &str) -> ProviderError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error }) => ProviderError::Api {
            status,
            message: error
                .message
                .unwrap_or_else(|| fallback_message(status, "")),
            kind: error.kind,
            code: error.code,
        },
        Err(_) => ProviderError::api(status, fallback_message(status, body)),
    }
}

fn fallback_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("Stripe API error (HTTP {})", status)
    } else {
        body.to_string()
    }
}

pub(crate) fn transport(err: reqwest::Error) -> ProviderError {
    ProviderError::Transport(err.to_string())
}
