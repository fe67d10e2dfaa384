pub mod http_client;
pub mod submit;

pub use http_client::{build_feedback_client, build_feedback_client_with_timeout};
pub use submit::{DEFAULT_ENDPOINT, GENERIC_FAILURE_MESSAGE, resolve_endpoint, submit_feedback};
