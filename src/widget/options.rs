use crate::config::{Config, WidgetConfig};
use crate::error::ConfigError;
use crate::media::MAX_IMAGE_BYTES;
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum WidgetPosition {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

/// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`. Anything else could escape the
/// generated stylesheet.
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    value.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
    })
}

/// Construction options for [`super::FeedbackWidget`].
#[derive(Debug, Clone)]
pub struct WidgetOptions {
    pub project_key: String,
    pub endpoint: Option<String>,
    pub position: WidgetPosition,
    pub button_text: String,
    pub primary_color: String,
    pub dialog_title: String,
    pub placeholder: String,
    /// Attachment ceiling in bytes (default: 3 MB).
    pub max_image_bytes: u64,
}

impl WidgetOptions {
    pub fn new(project_key: impl Into<String>) -> Self {
        Self::from_widget_config(project_key.into(), None, &WidgetConfig::default())
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let mut options = Self::from_widget_config(
            config.project_key()?.to_string(),
            config.endpoint.clone(),
            &config.widget,
        );
        options.max_image_bytes = config.attachments.max_image_bytes();
        Ok(options)
    }

    fn from_widget_config(project_key: String, endpoint: Option<String>, widget: &WidgetConfig) -> Self {
        Self {
            project_key,
            endpoint,
            position: widget.position,
            button_text: widget.button_text.clone(),
            primary_color: widget.primary_color.clone(),
            dialog_title: widget.dialog_title.clone(),
            placeholder: widget.placeholder.clone(),
            max_image_bytes: MAX_IMAGE_BYTES,
        }
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn position(mut self, position: WidgetPosition) -> Self {
        self.position = position;
        self
    }

    pub fn button_text(mut self, text: impl Into<String>) -> Self {
        self.button_text = text.into();
        self
    }

    pub fn primary_color(mut self, color: impl Into<String>) -> Self {
        self.primary_color = color.into();
        self
    }
}
