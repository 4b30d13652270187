//! Error mapping helpers for the HTTP review gateway.

use http::StatusCode;

use crate::api::error::ReviewError;

/// Longest slice of a raw error body quoted back in an error message.
const MAX_BODY_EXCERPT_CHARS: usize = 160;

/// Maps a transport failure from `reqwest`.
pub(super) fn map_transport_error(operation: &str, error: &reqwest::Error) -> ReviewError {
    if error.is_decode() {
        return ReviewError::Decode {
            message: format!("{operation} failed: {error}"),
        };
    }

    ReviewError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

/// Maps a non-success HTTP status, quoting the server's explanation when the
/// body carries one.
pub(super) fn map_http_error(operation: &str, status: StatusCode, body: &str) -> ReviewError {
    let detail = extract_server_message(body)
        .or_else(|| excerpt(body))
        .unwrap_or_else(|| "no response body".to_owned());
    ReviewError::Api {
        message: format!("{operation} failed with status {status}: {detail}"),
    }
}

/// Pulls `message` or `error` out of a JSON error body.
fn extract_server_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(ToOwned::to_owned)
}

fn excerpt(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut output: String = trimmed.chars().take(MAX_BODY_EXCERPT_CHARS).collect();
    if trimmed.chars().nth(MAX_BODY_EXCERPT_CHARS).is_some() {
        output.push_str("...");
    }
    Some(output)
}
