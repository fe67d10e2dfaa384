use super::super::{AttachmentConfig, LoggingConfig, WidgetConfig};
use crate::client::FeedbackClient;
use crate::error::ConfigError;
use crate::transport::build_feedback_client_with_timeout;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,
    /// Project key issued by Pullreque.st (prj_pk_...)
    pub project_key: Option<String>,
    /// Feedback endpoint (default: https://pullreque.st/api/feedback)
    pub endpoint: Option<String>,
    /// Optional ceiling on a whole request, in seconds. Unset by default:
    /// only the connect phase is bounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[serde(default)]
    pub widget: WidgetConfig,

    #[serde(default)]
    pub attachments: AttachmentConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            project_key: None,
            endpoint: None,
            timeout_secs: None,
            widget: WidgetConfig::default(),
            attachments: AttachmentConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// The configured endpoint, or the public default.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        crate::transport::resolve_endpoint(self.endpoint.as_deref())
    }

    pub fn project_key(&self) -> Result<&str, ConfigError> {
        self.project_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                ConfigError::Validation(
                    "project key is not set (config.toml `project_key` or PULLREQUEST_PROJECT_KEY)"
                        .into(),
                )
            })
    }

    /// A client bound to the configured project, honoring any timeout.
    pub fn feedback_client(&self) -> Result<FeedbackClient, ConfigError> {
        let project_key = self.project_key()?;
        Ok(FeedbackClient::new(project_key, Some(self.endpoint()))
            .with_http_client(build_feedback_client_with_timeout(self.timeout_secs)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(endpoint) = self.endpoint.as_deref().filter(|e| !e.trim().is_empty()) {
            let parsed = url::Url::parse(endpoint.trim())
                .map_err(|e| ConfigError::Validation(format!("endpoint `{endpoint}`: {e}")))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::Validation(format!(
                    "endpoint `{endpoint}` must use http or https"
                )));
            }
        }
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "timeout_secs must be greater than zero".into(),
            ));
        }
        if self.attachments.max_image_mb == 0 {
            return Err(ConfigError::Validation(
                "attachments.max_image_mb must be greater than zero".into(),
            ));
        }
        if !crate::widget::options::is_hex_color(&self.widget.primary_color) {
            return Err(ConfigError::Validation(format!(
                "widget.primary_color `{}` must be a hex color like #000000",
                self.widget.primary_color
            )));
        }
        Ok(())
    }
}
