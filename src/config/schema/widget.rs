use crate::widget::WidgetPosition;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Corner the floating button sits in (default: bottom-right)
    #[serde(default)]
    pub position: WidgetPosition,
    /// Floating button label (default: "Feedback")
    #[serde(default = "default_button_text")]
    pub button_text: String,
    /// Accent color for the button and focus rings (default: #000000)
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default = "default_dialog_title")]
    pub dialog_title: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

pub(crate) fn default_button_text() -> String {
    "Feedback".into()
}

pub(crate) fn default_primary_color() -> String {
    "#000000".into()
}

pub(crate) fn default_dialog_title() -> String {
    "Send Feedback".into()
}

pub(crate) fn default_placeholder() -> String {
    "Tell us what's on your mind...".into()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            position: WidgetPosition::default(),
            button_text: default_button_text(),
            primary_color: default_primary_color(),
            dialog_title: default_dialog_title(),
            placeholder: default_placeholder(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_table_fills_defaults() {
        let config: WidgetConfig = toml::from_str("position = \"top-left\"").unwrap();
        assert_eq!(config.position, WidgetPosition::TopLeft);
        assert_eq!(config.button_text, "Feedback");
        assert_eq!(config.primary_color, "#000000");
    }
}
