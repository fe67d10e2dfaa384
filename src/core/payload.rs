use crate::error::{FeedbackError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What the user wants to tell the project about.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FeedbackCategory {
    LovingIt,
    ReportBug,
    MissingSomething,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
    Video,
}

/// A media attachment riding along with the feedback.
///
/// `url` is usually a `data:` URL; `size` is the byte length of the original
/// file, not of the encoded string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub kind: AssetKind,
    pub url: String,
    pub size: u64,
}

/// Everything a caller supplies for one submission, minus the project key and
/// endpoint that the client binds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOptions {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captcha_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<FeedbackCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<Asset>>,
}

impl SubmitOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_page_url(mut self, page_url: impl Into<String>) -> Self {
        self.page_url = Some(page_url.into());
        self
    }

    pub fn with_user_email(mut self, email: impl Into<String>) -> Self {
        self.user_email = Some(email.into());
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_captcha_token(mut self, token: impl Into<String>) -> Self {
        self.captcha_token = Some(token.into());
        self
    }

    pub fn with_category(mut self, category: FeedbackCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_asset(mut self, asset: Asset) -> Self {
        self.assets.get_or_insert_with(Vec::new).push(asset);
        self
    }

    /// True when the message is empty after trimming.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.message.trim().is_empty()
    }
}

/// The JSON body POSTed to the feedback endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPayload {
    pub project_key: String,
    #[serde(flatten)]
    pub options: SubmitOptions,
}

impl FeedbackPayload {
    pub fn new(project_key: impl Into<String>, options: SubmitOptions) -> Self {
        Self {
            project_key: project_key.into(),
            options,
        }
    }

    /// Checks the payload invariants: a non-empty project key and a message
    /// that is not blank.
    pub fn validate(&self) -> Result<()> {
        if self.project_key.trim().is_empty() {
            return Err(FeedbackError::Validation("Project key is required".into()));
        }
        if self.options.is_blank() {
            return Err(FeedbackError::Validation("Please enter a message".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Received,
}

/// The endpoint's acknowledgement of a stored submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub id: String,
    pub status: SubmissionStatus,
}

impl SubmissionResult {
    pub fn received(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: SubmissionStatus::Received,
        }
    }
}
