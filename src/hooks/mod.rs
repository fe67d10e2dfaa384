//! Component-framework bindings: a context carrying the bound client and a
//! hook that hands each call site its own state machine.

use crate::client::FeedbackClient;
use crate::config::Config;
use crate::core::PageLocator;
use crate::error::{ConfigError, FeedbackError};
use crate::submission::{Submission, SubmissionOptions};
use std::sync::Arc;

pub type UseFeedbackOptions = SubmissionOptions;

/// Shared client for a subtree of components.
#[derive(Debug, Clone)]
pub struct FeedbackContext {
    client: FeedbackClient,
}

impl FeedbackContext {
    pub fn new(project_key: impl Into<String>, endpoint: Option<&str>) -> crate::error::Result<Self> {
        let project_key = project_key.into();
        if project_key.trim().is_empty() {
            return Err(FeedbackError::Config(ConfigError::Validation(
                "Project key is required".into(),
            )));
        }
        Ok(Self {
            client: FeedbackClient::new(project_key, endpoint),
        })
    }

    pub fn from_config(config: &Config) -> crate::error::Result<Self> {
        Ok(Self {
            client: config.feedback_client()?,
        })
    }

    pub fn with_locator(mut self, locator: Arc<dyn PageLocator>) -> Self {
        self.client = self.client.with_locator(locator);
        self
    }

    pub fn client(&self) -> &FeedbackClient {
        &self.client
    }
}

/// A fresh submission machine bound to the context's client.
///
/// Two call sites never share state, even under the same context.
pub fn use_feedback(ctx: &FeedbackContext, options: UseFeedbackOptions) -> Submission {
    Submission::new(ctx.client.clone(), options)
}
