use reqwest::Client;
use std::time::Duration;

/// Shared client for feedback submissions.
///
/// Only connection setup is bounded. Once the request is on the wire the
/// endpoint gets as long as it needs; a slow acknowledgement is still an
/// acknowledgement.
pub fn build_feedback_client() -> Client {
    build_feedback_client_with_timeout(None)
}

/// Same as [`build_feedback_client`], with an opt-in ceiling on the whole
/// request.
pub fn build_feedback_client_with_timeout(timeout_secs: Option<u64>) -> Client {
    let mut builder = Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60));
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build().unwrap_or_else(|_| Client::new())
}
