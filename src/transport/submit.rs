use crate::core::{FeedbackPayload, SubmissionResult};
use crate::error::{FeedbackError, Result};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

pub const DEFAULT_ENDPOINT: &str = "https://pullreque.st/api/feedback";

/// Shown when the endpoint rejects a submission without saying why.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to submit feedback";

#[derive(Debug, Deserialize)]
struct RemoteErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    details: Option<Value>,
}

/// An empty endpoint counts as "not configured".
#[must_use]
pub fn resolve_endpoint(endpoint: Option<&str>) -> &str {
    endpoint
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .unwrap_or(DEFAULT_ENDPOINT)
}

/// POST one feedback payload and return the endpoint's acknowledgement.
///
/// A single attempt: no retries, no backoff. The three failure shapes stay
/// distinguishable for callers:
/// - no response at all → [`FeedbackError::TransportFailed`]
/// - non-2xx → [`FeedbackError::RemoteRejected`] with the server's `error`
///   string, or [`GENERIC_FAILURE_MESSAGE`] when the body is missing or not JSON
/// - 2xx that is not a `{id, status: "received"}` body →
///   [`FeedbackError::InvalidResponse`]
pub async fn submit_feedback(
    http: &Client,
    endpoint: Option<&str>,
    payload: &FeedbackPayload,
) -> Result<SubmissionResult> {
    let endpoint = resolve_endpoint(endpoint);
    debug!(
        endpoint,
        project_key = %payload.project_key,
        assets = payload.options.assets.as_ref().map_or(0, Vec::len),
        "submitting feedback"
    );

    let response = http
        .post(endpoint)
        .header(CONTENT_TYPE, "application/json")
        .json(payload)
        .send()
        .await
        .map_err(FeedbackError::TransportFailed)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let err = remote_rejection(status.as_u16(), &body);
        warn!(status = status.as_u16(), error = %err, "feedback endpoint rejected submission");
        return Err(err);
    }

    let body = response
        .text()
        .await
        .map_err(FeedbackError::TransportFailed)?;
    let result: SubmissionResult =
        serde_json::from_str(&body).map_err(|e| FeedbackError::InvalidResponse(e.to_string()))?;
    debug!(id = %result.id, "feedback received");
    Ok(result)
}

fn remote_rejection(status: u16, body: &str) -> FeedbackError {
    let parsed = serde_json::from_str::<RemoteErrorBody>(body).ok();
    let (message, details) = match parsed {
        Some(RemoteErrorBody { error, details }) => (
            error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            details,
        ),
        None => (GENERIC_FAILURE_MESSAGE.to_string(), None),
    };
    FeedbackError::RemoteRejected {
        status,
        message,
        details,
    }
}
