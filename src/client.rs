use crate::core::{FeedbackPayload, NoLocation, PageLocator, SubmissionResult, SubmitOptions};
use crate::error::Result;
use crate::transport::{self, build_feedback_client};
use reqwest::Client;
use std::sync::Arc;

/// A project key and endpoint bound to the transport function.
///
/// Cheap to clone; clones share the HTTP connection pool.
#[derive(Debug, Clone)]
pub struct FeedbackClient {
    project_key: String,
    endpoint: String,
    http: Client,
    locator: Arc<dyn PageLocator>,
}

impl FeedbackClient {
    pub fn new(project_key: impl Into<String>, endpoint: Option<&str>) -> Self {
        Self {
            project_key: project_key.into(),
            endpoint: transport::resolve_endpoint(endpoint).to_string(),
            http: build_feedback_client(),
            locator: Arc::new(NoLocation),
        }
    }

    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn with_locator(mut self, locator: Arc<dyn PageLocator>) -> Self {
        self.locator = locator;
        self
    }

    pub fn project_key(&self) -> &str {
        &self.project_key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn current_page_url(&self) -> Option<String> {
        self.locator.current_url()
    }

    /// Merge the bound project key into caller options, without touching
    /// `pageUrl`.
    pub fn payload(&self, options: SubmitOptions) -> FeedbackPayload {
        FeedbackPayload::new(self.project_key.clone(), options)
    }

    /// Submit with `pageUrl` filled from the locator when the caller left it
    /// out.
    pub async fn submit(&self, mut options: SubmitOptions) -> Result<SubmissionResult> {
        if options.page_url.is_none() {
            options.page_url = self.current_page_url();
        }
        self.send(&self.payload(options)).await
    }

    /// Send an already-assembled payload as-is.
    pub async fn send(&self, payload: &FeedbackPayload) -> Result<SubmissionResult> {
        transport::submit_feedback(&self.http, Some(&self.endpoint), payload).await
    }
}

pub fn create_feedback_client(project_key: impl Into<String>, endpoint: Option<&str>) -> FeedbackClient {
    FeedbackClient::new(project_key, endpoint)
}
